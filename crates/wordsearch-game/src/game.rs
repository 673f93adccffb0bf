use std::{
    fmt::{self, Display},
    time::Instant,
};

use wordsearch_core::{Cell, LetterGrid, PlacedWord, Word};
use wordsearch_generator::{GeneratedPuzzle, PuzzleSeed};

use crate::{GameSettings, Selection, matcher};

/// Something the front end should react to.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameEvent {
    /// The current trace revealed a word for the first time.
    WordFound(Word),
    /// Every hidden word has been found. Emitted once per puzzle.
    PuzzleCompleted,
}

/// Phase of the selection matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MatcherState {
    /// Nothing is selected.
    Idle,
    /// One or more cells are selected and no clear is pending.
    Tracing,
    /// A word was just found; the selection is cleared once the delay elapses.
    Matched,
}

/// How a cell should be highlighted.
///
/// Cells of found words take precedence over selected cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellHighlight {
    /// Not part of a found word and not selected.
    None,
    /// Part of the current trace.
    Selected,
    /// Part of a found word.
    Found,
}

/// Number of found words out of the words hidden in the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Words found so far.
    pub found: usize,
    /// Words hidden in the puzzle.
    pub total: usize,
}

impl Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.found, self.total)
    }
}

/// A word search game session.
///
/// Owns the current puzzle, the user's selection trace, and the words found
/// so far. The selection is evaluated explicitly after every change: call
/// [`Game::select_cell`] (or [`Game::toggle_cell`] followed by
/// [`Game::evaluate`]) for each click, and [`Game::tick`] periodically so a
/// matched trace is cleared once [`GameSettings::clear_delay`] has elapsed.
///
/// Time is passed in by the caller rather than read from the clock, so the
/// timed transitions are deterministic under test.
///
/// # Example
///
/// ```
/// use std::time::{Duration, Instant};
///
/// use wordsearch_core::Word;
/// use wordsearch_game::{Game, GameEvent, GameSettings, MatcherState};
/// use wordsearch_generator::{PuzzleConfig, PuzzleGenerator};
///
/// let config = PuzzleConfig::new(5, 1, ["CAT".parse::<Word>().unwrap()]);
/// let puzzle = PuzzleGenerator::new(&config).generate();
/// let cat = puzzle.placed_words[0].clone();
/// let mut game = Game::new(puzzle, GameSettings::default());
///
/// let now = Instant::now();
/// let mut events = Vec::new();
/// for &cell in cat.coordinates() {
///     events.extend(game.select_cell(cell, now));
/// }
/// assert_eq!(
///     events,
///     [GameEvent::WordFound(cat.word().clone()), GameEvent::PuzzleCompleted]
/// );
/// assert_eq!(game.matcher_state(), MatcherState::Matched);
///
/// assert!(game.tick(now + Duration::from_secs(1)));
/// assert!(game.selection().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    grid: LetterGrid,
    placed_words: Vec<PlacedWord>,
    seed: PuzzleSeed,
    selection: Selection,
    found_words: Vec<Word>,
    pending_clear: Option<Instant>,
    completion_reported: bool,
    settings: GameSettings,
}

impl Game {
    /// Creates a new game session for a generated puzzle.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle, settings: GameSettings) -> Self {
        let GeneratedPuzzle {
            grid,
            placed_words,
            seed,
        } = puzzle;
        Self {
            grid,
            placed_words,
            seed,
            selection: Selection::new(),
            found_words: Vec::new(),
            pending_clear: None,
            completion_reported: false,
            settings,
        }
    }

    /// Replaces the puzzle, keeping the settings.
    ///
    /// Any pending selection clear is cancelled, and the selection and found
    /// words start out empty.
    pub fn start_new_puzzle(&mut self, puzzle: GeneratedPuzzle) {
        if let Some(deadline) = self.pending_clear.take() {
            log::debug!("cancelled selection clear scheduled for {deadline:?}");
        }
        *self = Self::new(puzzle, self.settings);
        log::info!(
            "started puzzle {} with {} hidden words",
            self.seed,
            self.placed_words.len()
        );
    }

    /// Returns the letter grid.
    #[must_use]
    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Returns the hidden words.
    #[must_use]
    pub fn placed_words(&self) -> &[PlacedWord] {
        &self.placed_words
    }

    /// Returns the seed the puzzle was generated from.
    #[must_use]
    pub fn seed(&self) -> PuzzleSeed {
        self.seed
    }

    /// Returns the session settings.
    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Returns the current selection trace.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the found words in the order they were found.
    #[must_use]
    pub fn found_words(&self) -> &[Word] {
        &self.found_words
    }

    /// Returns `true` if `word` has been found.
    #[must_use]
    pub fn is_found(&self, word: &Word) -> bool {
        self.found_words.contains(word)
    }

    /// Returns how many of the hidden words have been found.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            found: self.found_words.len(),
            total: self.placed_words.len(),
        }
    }

    /// Returns `true` if the puzzle hides at least one word and all of them
    /// have been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.placed_words.is_empty() && self.found_words.len() == self.placed_words.len()
    }

    /// Returns the current matcher phase.
    #[must_use]
    pub fn matcher_state(&self) -> MatcherState {
        if self.pending_clear.is_some() {
            MatcherState::Matched
        } else if self.selection.is_empty() {
            MatcherState::Idle
        } else {
            MatcherState::Tracing
        }
    }

    /// Returns when the pending selection clear fires, if one is scheduled.
    #[must_use]
    pub fn pending_clear_deadline(&self) -> Option<Instant> {
        self.pending_clear
    }

    /// Toggles `cell` in the selection without evaluating it.
    ///
    /// See [`Selection::toggle`] for the append/truncate rule.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `cell` is outside the grid.
    pub fn toggle_cell(&mut self, cell: Cell) -> &Selection {
        debug_assert!(
            self.grid.contains(cell),
            "cell {cell} is outside the {0}x{0} grid",
            self.grid.size()
        );
        let outcome = self.selection.toggle(cell);
        log::trace!("toggled {cell}: {outcome:?}");
        &self.selection
    }

    /// Compares the selection against the hidden words.
    ///
    /// On a newly found word, records it, schedules the selection to be
    /// cleared at `now + clear_delay`, and returns [`GameEvent::WordFound`],
    /// followed by [`GameEvent::PuzzleCompleted`] if it was the last word.
    /// Returns no events otherwise.
    pub fn evaluate(&mut self, now: Instant) -> Vec<GameEvent> {
        let Some(placed) =
            matcher::evaluate(self.selection.cells(), &self.placed_words, &self.found_words)
        else {
            return Vec::new();
        };

        let word = placed.word().clone();
        self.found_words.push(word.clone());
        self.pending_clear = Some(now.checked_add(self.settings.clear_delay).unwrap_or(now));
        log::info!("found {word} ({})", self.progress());

        let mut events = vec![GameEvent::WordFound(word)];
        if self.is_complete() && !self.completion_reported {
            self.completion_reported = true;
            log::info!("puzzle {} completed", self.seed);
            events.push(GameEvent::PuzzleCompleted);
        }
        events
    }

    /// Toggles `cell` and evaluates the resulting selection.
    pub fn select_cell(&mut self, cell: Cell, now: Instant) -> Vec<GameEvent> {
        self.toggle_cell(cell);
        self.evaluate(now)
    }

    /// Clears the selection and cancels any pending clear.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.pending_clear = None;
    }

    /// Fires the pending selection clear if its deadline has passed.
    ///
    /// Returns `true` if the selection was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending_clear {
            Some(deadline) if deadline <= now => {
                self.pending_clear = None;
                self.selection.clear();
                log::trace!("cleared matched selection");
                true
            }
            _ => false,
        }
    }

    /// Returns `true` if `cell` belongs to a found word.
    #[must_use]
    pub fn is_cell_in_found_word(&self, cell: Cell) -> bool {
        self.placed_words
            .iter()
            .any(|placed| placed.contains(cell) && self.is_found(placed.word()))
    }

    /// Returns `true` if `cell` is part of the current selection.
    #[must_use]
    pub fn is_cell_selected(&self, cell: Cell) -> bool {
        self.selection.contains(cell)
    }

    /// Returns how `cell` should be highlighted.
    #[must_use]
    pub fn cell_highlight(&self, cell: Cell) -> CellHighlight {
        if self.is_cell_in_found_word(cell) {
            CellHighlight::Found
        } else if self.is_cell_selected(cell) {
            CellHighlight::Selected
        } else {
            CellHighlight::None
        }
    }
}
