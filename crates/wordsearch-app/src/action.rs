use std::{num::ParseIntError, str::FromStr};

use wordsearch_core::Cell;

/// A command typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Action {
    /// Toggle a cell in the selection. Typed as `x y` or `x,y`.
    SelectCell(Cell),
    /// Drop the current selection.
    ClearSelection,
    /// Start a new random puzzle.
    NewGame,
    /// List the words found so far.
    ShowFoundWords,
    /// Redraw the board. Typed as an empty line.
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ActionParseError {
    #[display("unknown command `{command}`")]
    UnknownCommand { command: String },
    #[display("invalid coordinate `{text}`: {source}")]
    InvalidCoordinate { text: String, source: ParseIntError },
    #[display("expected two coordinates, found {count}")]
    CoordinateCount { count: usize },
}

pub const HELP: &str = "\
Commands:
  X Y      toggle the cell at column X, row Y (also `X,Y`)
  clear    clear the selection (c)
  new      start a new puzzle (n)
  words    list the words found so far (w)
  help     show this help (h, ?)
  quit     exit (q)
An empty line redraws the board.";

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::Refresh);
        }
        if s.starts_with(|ch: char| ch.is_ascii_digit()) {
            return parse_cell(s).map(Self::SelectCell);
        }

        let action = match s.to_ascii_lowercase().as_str() {
            "c" | "clear" => Self::ClearSelection,
            "n" | "new" => Self::NewGame,
            "w" | "words" | "found" => Self::ShowFoundWords,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => {
                return Err(ActionParseError::UnknownCommand {
                    command: s.to_owned(),
                });
            }
        };
        Ok(action)
    }
}

fn parse_cell(s: &str) -> Result<Cell, ActionParseError> {
    let parts = s
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>();
    let [x, y] = parts[..] else {
        return Err(ActionParseError::CoordinateCount { count: parts.len() });
    };
    Ok(Cell::new(parse_coordinate(x)?, parse_coordinate(y)?))
}

fn parse_coordinate(text: &str) -> Result<u8, ActionParseError> {
    text.parse()
        .map_err(|source| ActionParseError::InvalidCoordinate {
            text: text.to_owned(),
            source,
        })
}
