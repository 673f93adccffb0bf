use wordsearch_core::Word;

use crate::default_word_pool;

/// Parameters for puzzle generation.
///
/// The word pool is deduplicated on construction, keeping the first
/// occurrence of each word, so a puzzle never hides the same word twice.
/// Words shorter than [`Word::MIN_PLAYABLE_LEN`] are dropped, since a hidden
/// word that cannot be traced would make the puzzle impossible to complete.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Word;
/// use wordsearch_generator::PuzzleConfig;
///
/// let words: Vec<Word> = ["cat", "dog", "CAT", "a"].iter().map(|w| w.parse().unwrap()).collect();
/// let config = PuzzleConfig::default()
///     .with_grid_size(5)
///     .with_words_to_place(3)
///     .with_word_pool(words);
///
/// assert_eq!(config.grid_size(), 5);
/// assert_eq!(config.word_pool().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleConfig {
    grid_size: u8,
    words_to_place: usize,
    word_pool: Vec<Word>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_GRID_SIZE,
            Self::DEFAULT_WORDS_TO_PLACE,
            default_word_pool(),
        )
    }
}

impl PuzzleConfig {
    /// Default side length of the grid.
    pub const DEFAULT_GRID_SIZE: u8 = 12;
    /// Default number of words drawn from the pool.
    pub const DEFAULT_WORDS_TO_PLACE: usize = 10;

    /// Creates a configuration from explicit values.
    #[must_use]
    pub fn new(
        grid_size: u8,
        words_to_place: usize,
        word_pool: impl IntoIterator<Item = Word>,
    ) -> Self {
        Self {
            grid_size,
            words_to_place,
            word_pool: playable_pool(word_pool),
        }
    }

    /// Sets the side length of the grid.
    #[must_use]
    pub fn with_grid_size(mut self, grid_size: u8) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Sets how many words are drawn from the pool.
    #[must_use]
    pub fn with_words_to_place(mut self, words_to_place: usize) -> Self {
        self.words_to_place = words_to_place;
        self
    }

    /// Replaces the word pool.
    #[must_use]
    pub fn with_word_pool(mut self, word_pool: impl IntoIterator<Item = Word>) -> Self {
        self.word_pool = playable_pool(word_pool);
        self
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub fn grid_size(&self) -> u8 {
        self.grid_size
    }

    /// Returns how many words are drawn from the pool.
    #[must_use]
    pub fn words_to_place(&self) -> usize {
        self.words_to_place
    }

    /// Returns the deduplicated pool of playable words.
    #[must_use]
    pub fn word_pool(&self) -> &[Word] {
        &self.word_pool
    }
}

fn playable_pool(words: impl IntoIterator<Item = Word>) -> Vec<Word> {
    let mut pool: Vec<Word> = Vec::new();
    for word in words {
        if !word.is_playable() {
            log::warn!("dropped {word} from the word pool: too short to trace");
            continue;
        }
        if !pool.contains(&word) {
            pool.push(word);
        }
    }
    pool
}
