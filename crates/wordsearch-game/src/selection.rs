use wordsearch_core::Cell;

/// The user's in-progress trace: an ordered list of selected cells.
///
/// Cells are only ever appended or truncated, never reordered, and a cell
/// appears at most once.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Cell;
/// use wordsearch_game::{Selection, ToggleOutcome};
///
/// let [a, b, c, d] = [Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0), Cell::new(3, 0)];
/// let mut selection = Selection::new();
/// for cell in [a, b, c, d] {
///     selection.toggle(cell);
/// }
///
/// // Re-toggling an earlier cell removes it and everything after it.
/// assert_eq!(selection.toggle(b), ToggleOutcome::Truncated { removed: 3 });
/// assert_eq!(selection.cells(), &[a]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    cells: Vec<Cell>,
}

/// The effect of [`Selection::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ToggleOutcome {
    /// The cell was not selected and has been appended.
    Appended,
    /// The cell was selected; it and every later cell were removed.
    Truncated {
        /// Number of cells removed, including the toggled one.
        removed: usize,
    },
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected cells in selection order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the number of selected cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cell is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `cell` is selected.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Selects or deselects `cell`.
    ///
    /// An unselected cell is appended to the end. A selected cell is removed
    /// together with every cell selected after it, which lets a trace be
    /// backtracked by clicking an earlier cell.
    pub fn toggle(&mut self, cell: Cell) -> ToggleOutcome {
        if let Some(index) = self.cells.iter().position(|&selected| selected == cell) {
            let removed = self.cells.len() - index;
            self.cells.truncate(index);
            ToggleOutcome::Truncated { removed }
        } else {
            self.cells.push(cell);
            ToggleOutcome::Appended
        }
    }

    /// Deselects every cell.
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}
