use std::fmt::{self, Display};

use wordsearch_core::Cell;
use wordsearch_game::{CellHighlight, Game};

/// Text rendering of the letter grid.
///
/// Selected cells are shown as `[A]` and cells of found words as `(A)`.
/// Columns and rows are labelled with the coordinates accepted at the prompt.
#[derive(Debug, Clone, Copy)]
pub struct Board<'a> {
    game: &'a Game,
}

impl<'a> Board<'a> {
    #[must_use]
    pub fn new(game: &'a Game) -> Self {
        Self { game }
    }
}

impl Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.game.grid();
        let size = grid.size();

        write!(f, "    ")?;
        for x in 0..size {
            write!(f, "{x:^3}")?;
        }
        writeln!(f)?;

        for y in 0..size {
            write!(f, "{y:>3} ")?;
            for x in 0..size {
                let cell = Cell::new(x, y);
                let letter = grid.get(cell).map_or('.', char::from);
                match self.game.cell_highlight(cell) {
                    CellHighlight::Found => write!(f, "({letter})")?,
                    CellHighlight::Selected => write!(f, "[{letter}]")?,
                    CellHighlight::None => write!(f, " {letter} ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// One-line summary of the found words, e.g. `Found 2/10: GRID, HOOK`.
#[derive(Debug, Clone, Copy)]
pub struct FoundWords<'a> {
    game: &'a Game,
}

impl<'a> FoundWords<'a> {
    #[must_use]
    pub fn new(game: &'a Game) -> Self {
        Self { game }
    }
}

impl Display for FoundWords<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Found {}", self.game.progress())?;
        for (i, word) in self.game.found_words().iter().enumerate() {
            let separator = if i == 0 { ": " } else { ", " };
            write!(f, "{separator}{word}")?;
        }
        Ok(())
    }
}
