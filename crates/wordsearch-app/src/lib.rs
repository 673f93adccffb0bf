//! Terminal front end for word search puzzles.
//!
//! The `wordsearch` binary prints the letter grid, reads one command per line
//! from stdin and drives a [`wordsearch_game::Game`] session.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::{
    action::{Action, ActionParseError},
    app::{ActionOutcome, WordsearchApp},
    cli::Args,
    error::AppError,
};

pub mod action;
pub mod app;
pub mod cli;
mod error;
pub mod notification;
pub mod render;
