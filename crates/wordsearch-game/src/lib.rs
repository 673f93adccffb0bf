//! Game session management for word search puzzles.
//!
//! [`Game`] owns a generated puzzle together with the player's progress: the
//! in-progress [`Selection`] trace and the words found so far. After every
//! selection change the trace is compared against the hidden words by
//! [`matcher`]; a trace that spells a word exactly, from its first letter to
//! its last, marks the word found.
//!
//! A matched trace stays on screen for [`GameSettings::clear_delay`] before it
//! is cleared. The game never reads the clock itself: callers pass the current
//! [`Instant`](std::time::Instant) to [`Game::evaluate`] and [`Game::tick`].

pub use self::{
    game::{CellHighlight, Game, GameEvent, MatcherState, Progress},
    selection::{Selection, ToggleOutcome},
    settings::GameSettings,
};

mod game;
pub mod matcher;
mod selection;
mod settings;
