//! Matching selection traces against hidden words.
//!
//! These are pure functions of the selection, the placed words and the words
//! found so far; [`Game`](crate::Game) calls them after every selection change.

use wordsearch_core::{Cell, PlacedWord, Word};

/// Minimum trace length that is compared against the hidden words.
pub const MIN_TRACE_LEN: usize = Word::MIN_PLAYABLE_LEN;

/// Returns the placed word whose coordinates equal `trace`, in order.
///
/// Traces shorter than [`MIN_TRACE_LEN`] never match. Reversed traces do not
/// match either: the trace must start on the word's first letter.
#[must_use]
pub fn find_traced_word<'a>(trace: &[Cell], placed_words: &'a [PlacedWord]) -> Option<&'a PlacedWord> {
    if trace.len() < MIN_TRACE_LEN {
        return None;
    }
    placed_words.iter().find(|placed| placed.is_traced_by(trace))
}

/// Returns the placed word that `trace` newly finds.
///
/// This is [`find_traced_word`] restricted to words not already in `found_words`.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Cell, Direction, PlacedWord};
/// use wordsearch_game::matcher;
///
/// let cat = PlacedWord::new("CAT".parse().unwrap(), Cell::new(0, 0), Direction::East, 5).unwrap();
/// let placed = [cat.clone()];
///
/// let found = matcher::evaluate(cat.coordinates(), &placed, &[]);
/// assert_eq!(found, Some(&cat));
///
/// // Already found words are not reported again.
/// assert_eq!(matcher::evaluate(cat.coordinates(), &placed, &[cat.word().clone()]), None);
/// ```
#[must_use]
pub fn evaluate<'a>(
    trace: &[Cell],
    placed_words: &'a [PlacedWord],
    found_words: &[Word],
) -> Option<&'a PlacedWord> {
    find_traced_word(trace, placed_words).filter(|placed| !found_words.contains(placed.word()))
}
