use wordsearch_core::Word;

/// The built-in word list used when no pool is configured.
pub const DEFAULT_WORDS: [&str; 20] = [
    "REACT",
    "MATERIAL",
    "JAVASCRIPT",
    "COMPONENT",
    "HOOK",
    "STATE",
    "FUNCTION",
    "INTERFACE",
    "RESPONSIVE",
    "DESIGN",
    "APPLICATION",
    "DEVELOPMENT",
    "PUZZLE",
    "SEARCH",
    "GRID",
    "ANIMATION",
    "PERFORMANCE",
    "STYLE",
    "ELEMENT",
    "THEME",
];

/// Returns [`DEFAULT_WORDS`] as parsed [`Word`]s.
#[must_use]
pub fn default_word_pool() -> Vec<Word> {
    DEFAULT_WORDS
        .iter()
        .filter_map(|word| word.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pool_parses_every_word() {
        let pool = default_word_pool();
        assert_eq!(pool.len(), DEFAULT_WORDS.len());
        for (word, text) in pool.iter().zip(DEFAULT_WORDS) {
            assert_eq!(word.to_string(), text);
        }
    }

    #[test]
    fn test_default_pool_fits_default_grid() {
        assert!(default_word_pool().iter().all(|word| word.len() <= 12));
    }
}
