//! Square letter grid.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Cell, Letter, PlacedWord};

/// A `size` × `size` grid of letters.
///
/// Cells start out unfilled and are assigned letters while a puzzle is built.
/// A finished puzzle grid has every cell filled (see [`LetterGrid::is_complete`]).
///
/// # Text format
///
/// [`Display`] and [`FromStr`] use one line per row with letters separated by
/// spaces and `.` for unfilled cells. Parsing ignores whitespace inside rows
/// and blank lines, and accepts `_` as well as `.` for unfilled cells.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Cell, Letter, LetterGrid};
///
/// let grid: LetterGrid = "
///     C A T
///     . . .
///     D O G
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(grid.size(), 3);
/// assert_eq!(grid[Cell::new(1, 0)], Letter::from_char('A'));
/// assert_eq!(grid[Cell::new(1, 1)], None);
/// assert!(!grid.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterGrid {
    size: u8,
    cells: Vec<Option<Letter>>,
}

impl LetterGrid {
    /// Creates a grid with every cell unfilled.
    #[must_use]
    pub fn new(size: u8) -> Self {
        let len = usize::from(size) * usize::from(size);
        Self {
            size,
            cells: vec![None; len],
        }
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns `true` if `cell` lies inside the grid.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.is_within(self.size)
    }

    fn offset_of(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| usize::from(cell.y) * usize::from(self.size) + usize::from(cell.x))
    }

    /// Returns the letter at `cell`, or `None` if it is unfilled or out of bounds.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Letter> {
        self.offset_of(cell).and_then(|i| self.cells[i])
    }

    /// Assigns a letter to `cell`, overwriting any previous letter.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the grid.
    pub fn set(&mut self, cell: Cell, letter: Letter) {
        let size = self.size;
        let i = self
            .offset_of(cell)
            .unwrap_or_else(|| panic!("cell {cell} is outside a {size}x{size} grid"));
        self.cells[i] = Some(letter);
    }

    /// Writes the letters of a placed word onto its coordinates.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate of `placed` is outside the grid.
    pub fn write(&mut self, placed: &PlacedWord) {
        for (&cell, &letter) in placed.coordinates().iter().zip(placed.word().letters()) {
            self.set(cell, letter);
        }
    }

    /// Returns `true` if every cell holds a letter.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns all cells of the grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Cell::new(x, y)))
    }

    /// Returns the cells that have not been assigned a letter, in row-major order.
    pub fn unfilled_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(|&cell| self.get(cell).is_none())
    }

    /// Reads the letters along `cells` in order.
    ///
    /// Returns `None` if any cell is unfilled or out of bounds.
    #[must_use]
    pub fn read(&self, cells: &[Cell]) -> Option<Vec<Letter>> {
        cells.iter().map(|&cell| self.get(cell)).collect()
    }
}

impl Index<Cell> for LetterGrid {
    type Output = Option<Letter>;

    fn index(&self, cell: Cell) -> &Self::Output {
        match self.offset_of(cell) {
            Some(i) => &self.cells[i],
            None => &None,
        }
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.size {
                if x > 0 {
                    write!(f, " ")?;
                }
                match self.get(Cell::new(x, y)) {
                    Some(letter) => Display::fmt(&letter, f)?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

/// Errors that can occur while parsing a [`LetterGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// A row's length differs from the number of rows.
    #[display("row {row} has {len} cells but the grid has {size} rows")]
    NotSquare {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found in the row.
        len: usize,
        /// Number of rows in the input.
        size: usize,
    },
    /// The grid is larger than 255 × 255.
    #[display("grid size {size} exceeds the maximum of 255")]
    TooLarge {
        /// Number of rows in the input.
        size: usize,
    },
    /// A cell contained something other than a letter, `.` or `_`.
    #[display("invalid character {ch:?} at row {row}, column {column}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
    },
}

impl FromStr for LetterGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|ch| !ch.is_whitespace())
                    .collect::<Vec<_>>()
            })
            .filter(|row| !row.is_empty())
            .collect::<Vec<_>>();

        let size = u8::try_from(rows.len())
            .map_err(|_| GridParseError::TooLarge { size: rows.len() })?;
        let mut grid = Self::new(size);
        for (row, (y, chars)) in (0..size).zip(&rows).enumerate() {
            if chars.len() != rows.len() {
                return Err(GridParseError::NotSquare {
                    row,
                    len: chars.len(),
                    size: rows.len(),
                });
            }
            for (column, (x, &ch)) in (0..size).zip(chars).enumerate() {
                match ch {
                    '.' | '_' => {}
                    _ => {
                        let letter = Letter::from_char(ch)
                            .ok_or(GridParseError::InvalidCharacter { ch, row, column })?;
                        grid.set(Cell::new(x, y), letter);
                    }
                }
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, Word};

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    #[test]
    fn test_new_grid_is_unfilled() {
        let grid = LetterGrid::new(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.cells().count(), 16);
        assert_eq!(grid.unfilled_cells().count(), 16);
        assert!(!grid.is_complete());
        assert!(LetterGrid::new(0).is_complete());
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = LetterGrid::new(3);
        grid.set(Cell::new(2, 1), letter('K'));
        assert_eq!(grid.get(Cell::new(2, 1)), Some(letter('K')));
        assert_eq!(grid[Cell::new(2, 1)], Some(letter('K')));
        assert_eq!(grid.get(Cell::new(1, 2)), None);
        assert_eq!(grid.get(Cell::new(3, 0)), None);
        assert_eq!(grid[Cell::new(0, 3)], None);
        assert_eq!(grid.unfilled_cells().count(), 8);
    }

    #[test]
    #[should_panic(expected = "outside a 3x3 grid")]
    fn test_set_out_of_bounds_panics() {
        let mut grid = LetterGrid::new(3);
        grid.set(Cell::new(3, 0), letter('A'));
    }

    #[test]
    fn test_cells_are_row_major() {
        let grid = LetterGrid::new(2);
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(0, 1),
                Cell::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_write_and_read_placed_word() {
        let word: Word = "DOG".parse().unwrap();
        let placed = PlacedWord::new(word.clone(), Cell::new(2, 2), Direction::North, 3).unwrap();
        let mut grid = LetterGrid::new(3);
        grid.write(&placed);

        assert_eq!(grid.read(placed.coordinates()).unwrap(), word.letters());
        assert_eq!(grid.read(&[Cell::new(0, 0)]), None);
    }

    #[test]
    fn test_display_and_parse() {
        let mut grid = LetterGrid::new(2);
        grid.set(Cell::new(0, 0), letter('A'));
        grid.set(Cell::new(1, 1), letter('B'));
        assert_eq!(grid.to_string(), "A .\n. B");
        assert_eq!(grid.to_string().parse::<LetterGrid>().unwrap(), grid);
        assert_eq!("a_\n_b".parse::<LetterGrid>().unwrap(), grid);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "AB\nC".parse::<LetterGrid>(),
            Err(GridParseError::NotSquare {
                row: 1,
                len: 1,
                size: 2
            })
        );
        assert_eq!(
            "A1\nCD".parse::<LetterGrid>(),
            Err(GridParseError::InvalidCharacter {
                ch: '1',
                row: 0,
                column: 1
            })
        );
        let huge = vec!["A"; 256].join("\n");
        assert_eq!(
            huge.parse::<LetterGrid>(),
            Err(GridParseError::TooLarge { size: 256 })
        );
    }
}
