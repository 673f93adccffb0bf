//! Words placed on a grid.

use crate::{Cell, Direction, LetterGrid, Word};

/// A word together with the cells it occupies.
///
/// `coordinates()[i]` is `start` moved `i` steps in `direction`, so the
/// coordinates are always in placement order: reading them off a grid the
/// word was written to spells the word forwards.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Cell, Direction, PlacedWord};
///
/// let placed = PlacedWord::new("HOOK".parse().unwrap(), Cell::new(3, 3), Direction::NorthWest, 4)
///     .unwrap();
/// assert_eq!(placed.coordinates().last(), Some(&Cell::new(0, 0)));
///
/// // Does not fit: would run off the top edge.
/// assert!(PlacedWord::new("HOOK".parse().unwrap(), Cell::new(3, 2), Direction::North, 4).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlacedWord {
    word: Word,
    start: Cell,
    direction: Direction,
    coordinates: Vec<Cell>,
}

impl PlacedWord {
    /// Lays `word` out from `start` in `direction` on a `size` × `size` grid.
    ///
    /// Returns `None` if any letter would fall outside the grid.
    #[must_use]
    pub fn new(word: Word, start: Cell, direction: Direction, size: u8) -> Option<Self> {
        let coordinates = start.line(direction, word.len(), size)?;
        Some(Self {
            word,
            start,
            direction,
            coordinates,
        })
    }

    /// Returns the placed word.
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Returns the cell holding the first letter.
    #[must_use]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Returns the direction the word runs in.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the occupied cells in placement order.
    #[must_use]
    pub fn coordinates(&self) -> &[Cell] {
        &self.coordinates
    }

    /// Returns `true` if the word occupies `cell`.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.coordinates.contains(&cell)
    }

    /// Returns `true` if `trace` visits exactly this word's cells in placement order.
    ///
    /// Tracing the word backwards does not match.
    #[must_use]
    pub fn is_traced_by(&self, trace: &[Cell]) -> bool {
        self.coordinates == trace
    }

    /// Returns `true` if reading the coordinates off `grid` spells the word.
    #[must_use]
    pub fn is_spelled_on(&self, grid: &LetterGrid) -> bool {
        grid.read(&self.coordinates)
            .is_some_and(|letters| letters == self.word.letters())
    }
}
