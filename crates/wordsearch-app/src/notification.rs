use std::time::{Duration, Instant};

use wordsearch_core::Word;

/// A message shown under the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    /// `None` keeps the message until it is replaced.
    pub expires_at: Option<Instant>,
}

impl Notification {
    #[must_use]
    pub fn word_found(word: &Word, now: Instant, duration: Duration) -> Self {
        Self {
            message: format!("You found {word}!"),
            expires_at: Some(now.checked_add(duration).unwrap_or(now)),
        }
    }

    #[must_use]
    pub fn puzzle_completed(total: usize) -> Self {
        Self {
            message: format!(
                "Congratulations! You found all {total} words. Type `new` to play again."
            ),
            expires_at: None,
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}
