//! Word search puzzle generation.
//!
//! [`PuzzleGenerator`] builds a square letter grid, hides a random sample of
//! words from a pool along straight lines in any of the eight directions, and
//! fills the remaining cells with random letters.
//!
//! Generation is best-effort: each word gets a bounded number of placement
//! attempts ([`MAX_PLACEMENT_ATTEMPTS`]) and is silently dropped if none of
//! them fit. Generation therefore always terminates, and a puzzle may hide
//! fewer words than requested.
//!
//! Every puzzle records the [`PuzzleSeed`] it was generated from, and
//! [`PuzzleGenerator::generate_with_seed`] reproduces it exactly.
//!
//! # Examples
//!
//! ```
//! use wordsearch_generator::{PuzzleConfig, PuzzleGenerator};
//!
//! let config = PuzzleConfig::default();
//! let generator = PuzzleGenerator::new(&config);
//! let puzzle = generator.generate();
//!
//! assert_eq!(puzzle.grid.size(), 12);
//! assert!(puzzle.grid.is_complete());
//! assert!(puzzle.placed_words.len() <= 10);
//! for placed in &puzzle.placed_words {
//!     assert!(placed.is_spelled_on(&puzzle.grid));
//! }
//!
//! // The same seed reproduces the same puzzle.
//! let again = generator.generate_with_seed(puzzle.seed);
//! assert_eq!(again, puzzle);
//! ```

pub use self::{
    config::PuzzleConfig,
    generator::{GeneratedPuzzle, MAX_PLACEMENT_ATTEMPTS, PuzzleGenerator},
    seed::{PuzzleSeed, SeedParseError},
    word_pool::{DEFAULT_WORDS, default_word_pool},
};

mod config;
mod generator;
mod seed;
mod word_pool;
