//! Wordsearch terminal application.
//!
//! Set `RUST_LOG=debug` to see puzzle generation and matching logs on stderr.

use std::{io, process};

use clap::Parser as _;
use wordsearch_app::{AppError, Args, WordsearchApp};

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let config = args.puzzle_config()?;
    log::info!(
        "starting wordsearch, size={}, words={}, pool={}",
        config.grid_size(),
        config.words_to_place(),
        config.word_pool().len()
    );
    let mut app = WordsearchApp::new(config, args.game_settings(), args.seed());
    app.run(io::stdin().lock(), io::stdout().lock())
}
