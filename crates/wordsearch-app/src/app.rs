use std::{
    io::{BufRead, Write},
    thread,
    time::Instant,
};

use wordsearch_game::{Game, GameEvent, GameSettings};
use wordsearch_generator::{PuzzleConfig, PuzzleGenerator, PuzzleSeed};

use crate::{
    AppError,
    action::{Action, HELP},
    notification::Notification,
    render::{Board, FoundWords},
};

/// What the terminal loop should do after an action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum ActionOutcome {
    /// The board changed and should be drawn again.
    Redraw,
    /// Print a message without redrawing.
    Message(String),
    Quit,
}

/// Terminal word search session.
#[derive(Debug)]
pub struct WordsearchApp {
    config: PuzzleConfig,
    game: Game,
    notification: Option<Notification>,
}

impl WordsearchApp {
    /// Creates a session whose first puzzle uses `seed`, or a random seed.
    #[must_use]
    pub fn new(config: PuzzleConfig, settings: GameSettings, seed: Option<PuzzleSeed>) -> Self {
        let generator = PuzzleGenerator::new(&config);
        let puzzle = match seed {
            Some(seed) => generator.generate_with_seed(seed),
            None => generator.generate(),
        };
        let game = Game::new(puzzle, settings);
        Self {
            config,
            game,
            notification: None,
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the notification to show at `now`, if any.
    #[must_use]
    pub fn notification(&self, now: Instant) -> Option<&Notification> {
        self.notification
            .as_ref()
            .filter(|notification| !notification.is_expired(now))
    }

    /// Applies an action at time `now`.
    pub fn handle(&mut self, action: Action, now: Instant) -> ActionOutcome {
        log::debug!("handling {action:?}");
        match action {
            Action::SelectCell(cell) => {
                let grid = self.game.grid();
                if !grid.contains(cell) {
                    return ActionOutcome::Message(format!(
                        "{cell} is outside the {0}x{0} grid",
                        grid.size()
                    ));
                }
                let events = self.game.select_cell(cell, now);
                self.apply_events(&events, now);
                ActionOutcome::Redraw
            }
            Action::ClearSelection => {
                self.game.clear_selection();
                ActionOutcome::Redraw
            }
            Action::NewGame => {
                let puzzle = PuzzleGenerator::new(&self.config).generate();
                self.game.start_new_puzzle(puzzle);
                self.notification = None;
                ActionOutcome::Redraw
            }
            Action::ShowFoundWords => {
                ActionOutcome::Message(FoundWords::new(&self.game).to_string())
            }
            Action::Refresh => ActionOutcome::Redraw,
            Action::Help => ActionOutcome::Message(HELP.to_owned()),
            Action::Quit => ActionOutcome::Quit,
        }
    }

    fn apply_events(&mut self, events: &[GameEvent], now: Instant) {
        for event in events {
            self.notification = Some(match event {
                GameEvent::WordFound(word) => Notification::word_found(
                    word,
                    now,
                    self.game.settings().notification_duration,
                ),
                GameEvent::PuzzleCompleted => {
                    Notification::puzzle_completed(self.game.placed_words().len())
                }
            });
        }
    }

    /// Fires a due selection clear and drops an expired notification.
    ///
    /// Returns `true` if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let cleared = self.game.tick(now);
        let expired = self
            .notification
            .take_if(|notification| notification.is_expired(now))
            .is_some();
        cleared || expired
    }

    /// Renders the full screen: seed, board, progress and notification.
    #[must_use]
    pub fn render(&self, now: Instant) -> String {
        let mut screen = format!(
            "Seed: {}\n\n{}\n{}\n",
            self.game.seed(),
            Board::new(&self.game),
            FoundWords::new(&self.game)
        );
        if let Some(notification) = self.notification(now) {
            screen.push_str(&notification.message);
            screen.push('\n');
        }
        screen
    }

    /// Reads actions from `input` until it ends or `quit` is entered.
    ///
    /// After a word is found the board is shown with the matched trace, and
    /// redrawn once the selection has been cleared.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<(), AppError> {
        writeln!(output, "{}", self.render(Instant::now()))?;
        writeln!(output, "Type `help` for commands.")?;
        prompt(&mut output)?;

        for line in input.lines() {
            let line = line?;
            let now = Instant::now();
            self.tick(now);

            let outcome = match line.parse::<Action>() {
                Ok(action) => self.handle(action, now),
                Err(err) => ActionOutcome::Message(format!("{err}. Type `help` for commands.")),
            };
            match outcome {
                ActionOutcome::Quit => return Ok(()),
                ActionOutcome::Message(message) => writeln!(output, "{message}")?,
                ActionOutcome::Redraw => {
                    writeln!(output, "{}", self.render(now))?;
                    if let Some(deadline) = self.game.pending_clear_deadline() {
                        output.flush()?;
                        thread::sleep(deadline.saturating_duration_since(Instant::now()));
                        let now = Instant::now();
                        self.tick(now);
                        writeln!(output, "{}", self.render(now))?;
                    }
                }
            }
            prompt(&mut output)?;
        }
        Ok(())
    }
}

fn prompt(output: &mut impl Write) -> Result<(), AppError> {
    write!(output, "> ")?;
    output.flush()?;
    Ok(())
}
