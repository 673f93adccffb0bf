//! Words hidden in a puzzle.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::Letter;

/// A non-empty sequence of letters.
///
/// Words are parsed case-insensitively and always displayed in uppercase.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Word, WordParseError};
///
/// let word: Word = "Puzzle".parse().unwrap();
/// assert_eq!(word.to_string(), "PUZZLE");
/// assert_eq!(word.len(), 6);
///
/// assert_eq!("".parse::<Word>(), Err(WordParseError::Empty));
/// assert!("well-known".parse::<Word>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    letters: Vec<Letter>,
}

impl Word {
    /// Shortest word that can be found by tracing it.
    ///
    /// A trace covers at least two cells, so a one-letter word can be hidden
    /// but never found.
    pub const MIN_PLAYABLE_LEN: usize = 2;

    /// Creates a word from a sequence of letters.
    ///
    /// Returns `None` if `letters` is empty.
    #[must_use]
    pub fn from_letters(letters: Vec<Letter>) -> Option<Self> {
        (!letters.is_empty()).then_some(Self { letters })
    }

    /// Returns the letters of this word in order.
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Returns the number of letters in this word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns `true` if this word is long enough to be found by tracing it.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.len() >= Self::MIN_PLAYABLE_LEN
    }

    /// Always returns `false`; words contain at least one letter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            Display::fmt(letter, f)?;
        }
        Ok(())
    }
}

/// Errors that can occur while parsing a [`Word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordParseError {
    /// The input contained no characters.
    #[display("word is empty")]
    Empty,
    /// The input contained a character outside A-Z / a-z.
    #[display("invalid character {ch:?} at offset {offset}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Character offset of `ch` within the input.
        offset: usize,
    },
}

impl FromStr for Word {
    type Err = WordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters = s
            .chars()
            .enumerate()
            .map(|(offset, ch)| {
                Letter::from_char(ch).ok_or(WordParseError::InvalidCharacter { ch, offset })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_letters(letters).ok_or(WordParseError::Empty)
    }
}
