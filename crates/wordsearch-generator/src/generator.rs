use rand::{Rng, RngExt as _, seq::SliceRandom as _};
use wordsearch_core::{Cell, Direction, Letter, LetterGrid, PlacedWord, Word};

use crate::{PuzzleConfig, PuzzleSeed};

/// Number of random positions tried for each word before it is skipped.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// A generated puzzle with its grid, hidden words and seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The fully filled letter grid.
    pub grid: LetterGrid,
    /// The words that were successfully hidden, in placement order.
    pub placed_words: Vec<PlacedWord>,
    /// The seed used to generate this puzzle.
    pub seed: PuzzleSeed,
}

/// Word search puzzle generator.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Word;
/// use wordsearch_generator::{PuzzleConfig, PuzzleGenerator};
///
/// let config = PuzzleConfig::new(5, 1, ["CAT".parse::<Word>().unwrap()]);
/// let puzzle = PuzzleGenerator::new(&config).generate();
///
/// assert_eq!(puzzle.placed_words.len(), 1);
/// assert_eq!(puzzle.placed_words[0].word().to_string(), "CAT");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator<'a> {
    config: &'a PuzzleConfig,
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a generator for the given configuration.
    #[must_use]
    pub fn new(config: &'a PuzzleConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this generator uses.
    #[must_use]
    pub fn config(&self) -> &'a PuzzleConfig {
        self.config
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let (grid, placed_words) = self.generate_with_rng(&mut rng);
        log::info!(
            "generated {size}x{size} puzzle with {placed}/{requested} words, seed={seed}",
            size = grid.size(),
            placed = placed_words.len(),
            requested = self.config.words_to_place(),
        );
        GeneratedPuzzle {
            grid,
            placed_words,
            seed,
        }
    }

    /// Builds a grid and its hidden words using an arbitrary random source.
    ///
    /// The pool is shuffled and the first `words_to_place` words are tried in
    /// that order. Each word gets up to [`MAX_PLACEMENT_ATTEMPTS`] random
    /// direction/start pairs; a word fits when every letter lands inside the
    /// grid on a cell that is unfilled or already holds the same letter.
    /// Words that never fit are skipped. Unfilled cells are then filled with
    /// uniformly random letters.
    pub fn generate_with_rng<R>(&self, rng: &mut R) -> (LetterGrid, Vec<PlacedWord>)
    where
        R: Rng + ?Sized,
    {
        let size = self.config.grid_size();
        let mut grid = LetterGrid::new(size);

        let mut candidates: Vec<&Word> = self.config.word_pool().iter().collect();
        candidates.shuffle(rng);
        candidates.truncate(self.config.words_to_place());

        let mut placed_words = Vec::with_capacity(candidates.len());
        for word in candidates {
            if let Some(placed) = place_word(&mut grid, word, rng) {
                log::debug!(
                    "placed {word} at {start} heading {direction:?}",
                    start = placed.start(),
                    direction = placed.direction(),
                );
                placed_words.push(placed);
            } else {
                log::debug!("skipped {word}: no fit after {MAX_PLACEMENT_ATTEMPTS} attempts");
            }
        }

        fill_unfilled(&mut grid, rng);
        (grid, placed_words)
    }
}

fn place_word<R>(grid: &mut LetterGrid, word: &Word, rng: &mut R) -> Option<PlacedWord>
where
    R: Rng + ?Sized,
{
    let size = grid.size();
    if size == 0 {
        return None;
    }

    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        let start = Cell::new(rng.random_range(0..size), rng.random_range(0..size));
        if !fits(grid, word, start, direction) {
            continue;
        }
        let Some(placed) = PlacedWord::new(word.clone(), start, direction, size) else {
            continue;
        };
        grid.write(&placed);
        return Some(placed);
    }
    None
}

fn fits(grid: &LetterGrid, word: &Word, start: Cell, direction: Direction) -> bool {
    word.letters().iter().enumerate().all(|(i, &letter)| {
        start
            .offset(direction, i, grid.size())
            .is_some_and(|cell| grid.get(cell).is_none_or(|existing| existing == letter))
    })
}

fn fill_unfilled<R>(grid: &mut LetterGrid, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let unfilled: Vec<Cell> = grid.unfilled_cells().collect();
    for cell in unfilled {
        #[expect(clippy::cast_possible_truncation)]
        let index = rng.random_range(0..Letter::COUNT) as u8;
        grid.set(cell, Letter::from_index(index));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| w.parse().unwrap()).collect()
    }

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    #[test]
    fn test_single_word_scenario() {
        let config = PuzzleConfig::new(5, 1, words(&["CAT"]));
        let generator = PuzzleGenerator::new(&config);

        for n in 0..50 {
            let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase(&n.to_string()));
            assert_eq!(puzzle.placed_words.len(), 1);

            let placed = &puzzle.placed_words[0];
            assert_eq!(placed.word().to_string(), "CAT");
            assert_eq!(placed.coordinates().len(), 3);
            let (dx, dy) = placed.direction().delta();
            for pair in placed.coordinates().windows(2) {
                assert!(pair[1].x < 5 && pair[1].y < 5);
                assert_eq!(
                    (
                        i16::from(pair[1].x) - i16::from(pair[0].x),
                        i16::from(pair[1].y) - i16::from(pair[0].y)
                    ),
                    (i16::from(dx), i16::from(dy))
                );
            }
            assert!(placed.is_spelled_on(&puzzle.grid));
            assert!(puzzle.grid.is_complete());
        }
    }

    #[test]
    fn test_generator_uses_its_config() {
        let config = PuzzleConfig::new(7, 3, words(&["grid", "hook"]));
        let generator = PuzzleGenerator::new(&config);
        assert_eq!(generator.config(), &config);

        let puzzle = generator.generate_with_seed(PuzzleSeed::from_bytes([3; 32]));
        assert_eq!(puzzle.grid.size(), generator.config().grid_size());
        assert!(puzzle.placed_words.len() <= generator.config().word_pool().len());
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let config = PuzzleConfig::default();
        let generator = PuzzleGenerator::new(&config);
        let seed = PuzzleSeed::from_phrase("determinism");
        assert_eq!(
            generator.generate_with_seed(seed),
            generator.generate_with_seed(seed)
        );
    }

    #[test]
    fn test_pool_smaller_than_request_places_whole_pool() {
        let config = PuzzleConfig::new(12, 10, words(&["HOOK", "GRID", "THEME"]));
        let puzzle = PuzzleGenerator::new(&config).generate_with_seed(PuzzleSeed::from_phrase("x"));
        let placed: HashSet<_> = puzzle
            .placed_words
            .iter()
            .map(|p| p.word().to_string())
            .collect();
        assert_eq!(placed, HashSet::from(["HOOK".into(), "GRID".into(), "THEME".into()]));
    }

    #[test]
    fn test_word_longer_than_grid_is_dropped() {
        let config = PuzzleConfig::new(4, 2, words(&["DEVELOPMENT", "HOOK"]));
        let puzzle = PuzzleGenerator::new(&config).generate_with_seed(PuzzleSeed::from_phrase("y"));
        assert_eq!(puzzle.placed_words.len(), 1);
        assert_eq!(puzzle.placed_words[0].word().to_string(), "HOOK");
        assert!(puzzle.grid.is_complete());
    }

    #[test]
    fn test_zero_sized_grid_and_zero_words() {
        let config = PuzzleConfig::new(0, 3, words(&["AB"]));
        let puzzle = PuzzleGenerator::new(&config).generate();
        assert_eq!(puzzle.grid.size(), 0);
        assert!(puzzle.placed_words.is_empty());

        let config = PuzzleConfig::new(6, 0, words(&["CAT"]));
        let puzzle = PuzzleGenerator::new(&config).generate();
        assert!(puzzle.placed_words.is_empty());
        assert!(puzzle.grid.is_complete());
    }

    #[test]
    fn test_fits_allows_shared_letters_only() {
        let grid: LetterGrid = "
            C . .
            . . .
            . . .
        "
        .parse()
        .unwrap();
        let cat: Word = "CAT".parse().unwrap();
        let dog: Word = "DOG".parse().unwrap();

        assert!(fits(&grid, &cat, Cell::new(0, 0), Direction::East));
        assert!(fits(&grid, &cat, Cell::new(0, 0), Direction::SouthEast));
        assert!(!fits(&grid, &dog, Cell::new(0, 0), Direction::East));
        assert!(fits(&grid, &dog, Cell::new(0, 1), Direction::East));
        assert!(!fits(&grid, &cat, Cell::new(1, 0), Direction::East));
        assert!(!fits(&grid, &cat, Cell::new(2, 2), Direction::South));
    }

    #[test]
    fn test_later_word_conforms_to_earlier_letters() {
        // The fixed letters leave a single placement for "TAB": along the top
        // row, reusing the existing "T".
        let template: LetterGrid = "
            T . .
            X X X
            X X X
        "
        .parse()
        .unwrap();
        let tab: Word = "TAB".parse().unwrap();

        let mut successes = 0;
        for n in 0..20 {
            let mut grid = template.clone();
            let mut rng = Pcg64::seed_from_u64(n);
            let Some(placed) = place_word(&mut grid, &tab, &mut rng) else {
                assert_eq!(grid, template);
                continue;
            };
            successes += 1;
            assert_eq!(placed.start(), Cell::new(0, 0));
            assert_eq!(placed.direction(), Direction::East);
            assert_eq!(grid.get(Cell::new(0, 0)), Some(letter('T')));
            assert_eq!(grid.get(Cell::new(1, 0)), Some(letter('A')));
            assert_eq!(grid.get(Cell::new(2, 0)), Some(letter('B')));
        }
        assert!(successes > 0);
    }

    #[test]
    fn test_unplaceable_word_leaves_grid_untouched() {
        let mut grid: LetterGrid = "
            X X
            X X
        "
        .parse()
        .unwrap();
        let before = grid.clone();
        let hi: Word = "HI".parse().unwrap();
        let mut rng = Pcg64::seed_from_u64(1);
        assert!(place_word(&mut grid, &hi, &mut rng).is_none());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_distinct_placed_words_have_distinct_traces() {
        let config = PuzzleConfig::default();
        let generator = PuzzleGenerator::new(&config);
        for n in 0..20 {
            let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase(&format!("t{n}")));
            for (i, a) in puzzle.placed_words.iter().enumerate() {
                for b in &puzzle.placed_words[i + 1..] {
                    assert_ne!(a.word(), b.word());
                    assert!(!a.is_traced_by(b.coordinates()));
                }
            }
        }
    }

    proptest! {
        #[test]
        fn prop_placed_words_spell_on_grid(
            seed in any::<[u8; 32]>(),
            size in 1u8..16,
            words_to_place in 0usize..25,
        ) {
            let config = PuzzleConfig::default()
                .with_grid_size(size)
                .with_words_to_place(words_to_place);
            let puzzle = PuzzleGenerator::new(&config)
                .generate_with_seed(PuzzleSeed::from_bytes(seed));

            prop_assert!(puzzle.grid.is_complete());
            prop_assert!(puzzle.placed_words.len() <= words_to_place);
            prop_assert!(puzzle.placed_words.len() <= config.word_pool().len());
            for placed in &puzzle.placed_words {
                prop_assert!(placed.is_spelled_on(&puzzle.grid));
                prop_assert!(placed.coordinates().iter().all(|cell| puzzle.grid.contains(*cell)));
            }
        }
    }
}
