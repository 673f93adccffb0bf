//! Grid coordinates.

use std::fmt::{self, Display};

use crate::Direction;

/// A cell coordinate on a square grid.
///
/// `x` is the column (0 = leftmost) and `y` is the row (0 = topmost).
/// Bounds are relative to a grid size, which the cell itself does not carry.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Cell, Direction};
///
/// let cell = Cell::new(2, 3);
/// assert_eq!(cell.offset(Direction::NorthWest, 2, 5), Some(Cell::new(0, 1)));
/// assert_eq!(cell.offset(Direction::East, 3, 5), None); // x = 5 is out of bounds
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    /// Column index.
    pub x: u8,
    /// Row index.
    pub y: u8,
}

impl Cell {
    /// Creates a new cell.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Returns `true` if this cell lies inside a `size` × `size` grid.
    #[must_use]
    pub const fn is_within(self, size: u8) -> bool {
        self.x < size && self.y < size
    }

    /// Returns the cell `steps` units away in `direction`, if it lies inside a
    /// `size` × `size` grid.
    #[must_use]
    pub fn offset(self, direction: Direction, steps: usize, size: u8) -> Option<Self> {
        let steps = i64::try_from(steps).ok()?;
        let x = i64::from(self.x) + steps * i64::from(direction.dx());
        let y = i64::from(self.y) + steps * i64::from(direction.dy());
        let cell = Self::new(u8::try_from(x).ok()?, u8::try_from(y).ok()?);
        cell.is_within(size).then_some(cell)
    }

    /// Returns the `len` cells starting at this cell and stepping in
    /// `direction`, or `None` if any of them falls outside the grid.
    #[must_use]
    pub fn line(self, direction: Direction, len: usize, size: u8) -> Option<Vec<Self>> {
        (0..len)
            .map(|i| self.offset(direction, i, size))
            .collect()
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_within_bounds() {
        let origin = Cell::new(0, 0);
        assert_eq!(origin.offset(Direction::East, 0, 3), Some(origin));
        assert_eq!(origin.offset(Direction::SouthEast, 2, 3), Some(Cell::new(2, 2)));
        assert_eq!(origin.offset(Direction::South, 1, 3), Some(Cell::new(0, 1)));
    }

    #[test]
    fn test_offset_out_of_bounds() {
        let origin = Cell::new(0, 0);
        assert_eq!(origin.offset(Direction::West, 1, 3), None);
        assert_eq!(origin.offset(Direction::North, 1, 3), None);
        assert_eq!(origin.offset(Direction::SouthEast, 3, 3), None);
        assert_eq!(Cell::new(254, 254).offset(Direction::SouthEast, 2, 255), None);
    }

    #[test]
    fn test_line_collects_collinear_cells() {
        let line = Cell::new(4, 0).line(Direction::SouthWest, 3, 5).unwrap();
        assert_eq!(line, vec![Cell::new(4, 0), Cell::new(3, 1), Cell::new(2, 2)]);
        assert_eq!(Cell::new(1, 0).line(Direction::West, 3, 5), None);
        assert_eq!(Cell::new(1, 0).line(Direction::West, 0, 5), Some(Vec::new()));
    }

    #[test]
    fn test_is_within_and_display() {
        assert!(Cell::new(4, 4).is_within(5));
        assert!(!Cell::new(5, 0).is_within(5));
        assert!(!Cell::new(0, 0).is_within(0));
        assert_eq!(Cell::new(3, 7).to_string(), "(3, 7)");
    }
}
