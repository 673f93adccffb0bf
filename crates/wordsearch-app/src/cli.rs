use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use clap::Parser;
use wordsearch_core::{Word, WordParseError};
use wordsearch_game::GameSettings;
use wordsearch_generator::{PuzzleConfig, PuzzleSeed};

use crate::AppError;

#[expect(clippy::cast_possible_truncation)]
const DEFAULT_CLEAR_DELAY_MS: u64 = GameSettings::DEFAULT_CLEAR_DELAY.as_millis() as u64;

/// Play a word search puzzle in the terminal.
///
/// Select letters one at a time by typing their column and row. A trace that
/// spells a hidden word from its first letter to its last reveals it.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Side length of the grid.
    #[arg(long, value_name = "SIZE", default_value_t = PuzzleConfig::DEFAULT_GRID_SIZE)]
    pub size: u8,

    /// Number of words to hide.
    #[arg(long, value_name = "COUNT", default_value_t = PuzzleConfig::DEFAULT_WORDS_TO_PLACE)]
    pub words: usize,

    /// Word to include in the pool instead of the built-in list. Repeatable.
    #[arg(short = 'w', long = "word", value_name = "WORD")]
    pub pool: Vec<Word>,

    /// File with one pool word per line. Blank lines and `#` comments are skipped.
    #[arg(long, value_name = "PATH")]
    pub word_file: Option<PathBuf>,

    /// Seed of the first puzzle (64 hex digits).
    #[arg(long, value_name = "HEX", conflicts_with = "seed_phrase")]
    pub seed: Option<PuzzleSeed>,

    /// Derive the seed of the first puzzle from a phrase.
    #[arg(long, value_name = "PHRASE")]
    pub seed_phrase: Option<String>,

    /// Milliseconds a found word stays selected before the selection is cleared.
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_CLEAR_DELAY_MS)]
    pub clear_delay_ms: u64,
}

impl Args {
    /// Builds the puzzle configuration, reading `--word-file` if given.
    ///
    /// Words from `--word` and `--word-file` are combined. The built-in pool
    /// is used when neither supplies a word.
    pub fn puzzle_config(&self) -> Result<PuzzleConfig, AppError> {
        let mut pool = self.pool.clone();
        if let Some(path) = &self.word_file {
            pool.extend(read_word_file(path)?);
        }

        let mut config = PuzzleConfig::default()
            .with_grid_size(self.size)
            .with_words_to_place(self.words);
        if !pool.is_empty() {
            config = config.with_word_pool(pool);
        }
        Ok(config)
    }

    /// Returns the seed of the first puzzle, if one was requested.
    #[must_use]
    pub fn seed(&self) -> Option<PuzzleSeed> {
        self.seed
            .or_else(|| self.seed_phrase.as_deref().map(PuzzleSeed::from_phrase))
    }

    #[must_use]
    pub fn game_settings(&self) -> GameSettings {
        GameSettings::default().clear_delay(Duration::from_millis(self.clear_delay_ms))
    }
}

fn read_word_file(path: &Path) -> Result<Vec<Word>, AppError> {
    let contents = fs::read_to_string(path).map_err(|source| AppError::ReadWordFile {
        path: path.to_owned(),
        source,
    })?;
    let words = parse_word_list(&contents).map_err(|(line, word, source)| {
        AppError::InvalidWord {
            path: path.to_owned(),
            line,
            word,
            source,
        }
    })?;
    log::debug!("read {} words from {}", words.len(), path.display());
    Ok(words)
}

type WordListError = (usize, String, WordParseError);

fn parse_word_list(contents: &str) -> Result<Vec<Word>, WordListError> {
    contents
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_number, line)| {
            line.parse()
                .map_err(|source| (line_number, line.to_owned(), source))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("wordsearch").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        let config = args.puzzle_config().unwrap();
        assert_eq!(config, PuzzleConfig::default());
        assert_eq!(args.seed(), None);
        assert_eq!(args.game_settings(), GameSettings::default());
    }

    #[test]
    fn test_custom_pool_and_size() {
        let args = parse(&["--size", "6", "--words", "2", "-w", "cat", "--word", "Dog"]);
        let config = args.puzzle_config().unwrap();
        assert_eq!(config.grid_size(), 6);
        assert_eq!(config.words_to_place(), 2);
        let pool: Vec<String> = config.word_pool().iter().map(ToString::to_string).collect();
        assert_eq!(pool, ["CAT", "DOG"]);
    }

    #[test]
    fn test_invalid_word_is_rejected() {
        assert!(Args::try_parse_from(["wordsearch", "--word", "two words"]).is_err());
    }

    #[test]
    fn test_single_letter_words_are_left_out_of_the_pool() {
        let args = parse(&["-w", "a", "-w", "cat"]);
        let config = args.puzzle_config().unwrap();
        let pool: Vec<String> = config.word_pool().iter().map(ToString::to_string).collect();
        assert_eq!(pool, ["CAT"]);
    }

    #[test]
    fn test_seed_options() {
        let hex = "00".repeat(32);
        assert_eq!(
            parse(&["--seed", &hex]).seed(),
            Some(PuzzleSeed::from_bytes([0; 32]))
        );
        assert_eq!(
            parse(&["--seed-phrase", "hello"]).seed(),
            Some(PuzzleSeed::from_phrase("hello"))
        );
        assert!(
            Args::try_parse_from(["wordsearch", "--seed", &hex, "--seed-phrase", "x"]).is_err()
        );
    }

    #[test]
    fn test_clear_delay() {
        let settings = parse(&["--clear-delay-ms", "250"]).game_settings();
        assert_eq!(settings.clear_delay, Duration::from_millis(250));
        assert_eq!(
            settings.notification_duration,
            GameSettings::DEFAULT_NOTIFICATION_DURATION
        );
    }

    #[test]
    fn test_parse_word_list() {
        let words = parse_word_list("# animals\ncat\n\n  Dog  \n").unwrap();
        let words: Vec<String> = words.iter().map(ToString::to_string).collect();
        assert_eq!(words, ["CAT", "DOG"]);

        let (line, word, source) = parse_word_list("cat\nre-act\n").unwrap_err();
        assert_eq!(line, 2);
        assert_eq!(word, "re-act");
        assert!(matches!(source, WordParseError::InvalidCharacter { ch: '-', .. }));
    }

    #[test]
    fn test_missing_word_file() {
        let args = parse(&["--word-file", "/nonexistent/wordsearch-words.txt"]);
        assert!(matches!(
            args.puzzle_config(),
            Err(AppError::ReadWordFile { .. })
        ));
    }
}
