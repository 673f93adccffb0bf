//! Example demonstrating word search puzzle generation.
//!
//! This example shows how to:
//! - Configure a `PuzzleGenerator`
//! - Generate a random or seeded puzzle
//! - Display the grid, the hidden words, and the seed
//! - Sample many puzzles and keep the one that hides the most words
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Reproduce a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Crowded grids often drop words. Sample up to 1000 puzzles and keep the
//! fullest one:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 8 --words 15 --max-tries 1000
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use wordsearch_core::Word;
use wordsearch_generator::{GeneratedPuzzle, PuzzleConfig, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Side length of the grid.
    #[arg(long, value_name = "SIZE", default_value_t = PuzzleConfig::DEFAULT_GRID_SIZE)]
    size: u8,

    /// Number of words to hide.
    #[arg(long, value_name = "COUNT", default_value_t = PuzzleConfig::DEFAULT_WORDS_TO_PLACE)]
    words: usize,

    /// Word to include in the pool instead of the built-in list. Repeatable.
    #[arg(short = 'w', long = "word", value_name = "WORD")]
    pool: Vec<Word>,

    /// Seed to reproduce (64 hex digits).
    #[arg(long, value_name = "HEX", conflicts_with = "max_tries")]
    seed: Option<PuzzleSeed>,

    /// Number of puzzles to sample, keeping the one with the most placed words.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    max_tries: usize,
}

fn main() {
    let args = Args::parse();
    let mut config = PuzzleConfig::default()
        .with_grid_size(args.size)
        .with_words_to_place(args.words);
    if !args.pool.is_empty() {
        config = config.with_word_pool(args.pool);
    }
    let generator = PuzzleGenerator::new(&config);

    if let Some(seed) = args.seed {
        print_puzzle(&generator, &generator.generate_with_seed(seed), None);
        return;
    }

    if args.max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let best = (0..args.max_tries)
        .into_par_iter()
        .map(|_| generator.generate())
        .max_by_key(|puzzle| puzzle.placed_words.len());

    if let Some(puzzle) = best {
        print_puzzle(&generator, &puzzle, (args.max_tries > 1).then_some(args.max_tries));
        return;
    }

    eprintln!("No puzzle was generated.");
    process::exit(1);
}

fn print_puzzle(generator: &PuzzleGenerator<'_>, puzzle: &GeneratedPuzzle, max_tries: Option<usize>) {
    let config = generator.config();
    println!("Config:");
    println!("  Grid size: {}", config.grid_size());
    println!("  Words to place: {}", config.words_to_place());
    println!("  Pool size: {}", config.word_pool().len());
    println!();

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    if let Some(max_tries) = max_tries {
        println!("Selection:");
        println!("  Max tries: {max_tries}");
        println!();
    }

    println!("Grid:");
    for line in puzzle.grid.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Words:");
    for placed in &puzzle.placed_words {
        println!(
            "  {}: {} {:?}",
            placed.word(),
            placed.start(),
            placed.direction()
        );
    }
    println!("  total: {}", puzzle.placed_words.len());
}
