//! Core data structures for word search puzzles.
//!
//! This crate provides the value types shared by puzzle generation and game
//! management. Everything here is plain data with cheap copies where possible;
//! randomness and game state live in the `wordsearch-generator` and
//! `wordsearch-game` crates.
//!
//! # Overview
//!
//! - [`letter`]: Type-safe representation of the uppercase letters A-Z
//! - [`word`]: Non-empty sequences of letters, parsed case-insensitively
//! - [`cell`]: Grid coordinate `(x, y)` type
//! - [`direction`]: The eight straight-line directions a word can run in
//! - [`grid`]: Square letter grid whose cells may be unfilled during construction
//! - [`placed_word`]: A word together with the exact cells it occupies
//!
//! # Examples
//!
//! ```
//! use wordsearch_core::{Cell, Direction, LetterGrid, PlacedWord, Word};
//!
//! let word: Word = "cat".parse().unwrap();
//! let placed = PlacedWord::new(word, Cell::new(0, 0), Direction::East, 5).unwrap();
//!
//! let mut grid = LetterGrid::new(5);
//! grid.write(&placed);
//!
//! assert!(placed.is_spelled_on(&grid));
//! assert_eq!(placed.coordinates(), &[Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]);
//! ```

pub mod cell;
pub mod direction;
pub mod grid;
pub mod letter;
pub mod placed_word;
pub mod word;

// Re-export commonly used types
pub use self::{
    cell::Cell,
    direction::Direction,
    grid::{GridParseError, LetterGrid},
    letter::Letter,
    placed_word::PlacedWord,
    word::{Word, WordParseError},
};
