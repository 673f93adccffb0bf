use std::{io, path::PathBuf};

use wordsearch_core::WordParseError;

/// Errors reported by the `wordsearch` binary.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    #[display("I/O error: {_0}")]
    Io(#[from] io::Error),
    #[display("failed to read word file {}: {source}", path.display())]
    ReadWordFile { path: PathBuf, source: io::Error },
    #[display("invalid word {word:?} at {}:{line}: {source}", path.display())]
    InvalidWord {
        path: PathBuf,
        line: usize,
        word: String,
        source: WordParseError,
    },
}
