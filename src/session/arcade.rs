//! Menu loop offering the three games.

use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::{debug, info, instrument};

use crate::core::{GameRng, PlayerId, Result};
use crate::games::{ConnectFour, GameKind, Sticks, TicTacToe};
use crate::minimax::SearchConfig;
use crate::rules::{GameResult, GameState};

use super::config::SessionConfig;
use super::driver::Session;

/// Menu entry that ends the loop.
const QUIT_NUMBER: usize = GameKind::ALL.len() + 1;

/// Interactive front-end: pick a game, play it, repeat.
pub struct Arcade<R, W> {
    config: SessionConfig,
    rng: GameRng,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Arcade<R, W> {
    /// Create an arcade, validating `config`.
    pub fn new(config: SessionConfig, input: R, output: W) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(seed = rng.seed(), "arcade ready");

        Ok(Self {
            config,
            rng,
            input,
            output,
        })
    }

    /// Show the menu until the user quits or input ends.
    ///
    /// Returns every finished game in the order played.
    pub fn run(&mut self) -> Result<Vec<(GameKind, GameResult)>> {
        let mut played = Vec::new();

        loop {
            self.show_menu()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            let choice = line.trim().parse::<usize>().ok();
            if choice == Some(QUIT_NUMBER) {
                writeln!(self.output, "Quitting game.")?;
                break;
            }
            let Some(kind) = choice.and_then(GameKind::from_menu_number) else {
                writeln!(self.output, "Invalid choice.")?;
                continue;
            };

            let result = self.play(kind)?;
            played.push((kind, result));
        }

        Ok(played)
    }

    /// Play one game of `kind` and return its outcome.
    #[instrument(skip(self))]
    pub fn play(&mut self, kind: GameKind) -> Result<GameResult> {
        let first = self
            .config
            .first_player
            .unwrap_or_else(|| self.rng.first_player());
        let search = self.config.search_config(kind);
        info!(%kind, ?first, max_depth = ?search.max_depth, "starting game");

        writeln!(self.output, "Welcome to the game!")?;
        match first {
            PlayerId::Human => writeln!(self.output, "You start.")?,
            PlayerId::Computer => writeln!(self.output, "Computer starts.")?,
        }

        match kind {
            GameKind::TicTacToe => self.play_game(TicTacToe::new(first), search),
            GameKind::ConnectFour => self.play_game(ConnectFour::new(first), search),
            GameKind::Sticks => {
                let sticks = Sticks::with_sticks(self.config.initial_sticks, first);
                self.play_game(sticks, search)
            }
        }
    }

    fn play_game<G: GameState + Display>(&mut self, game: G, search: SearchConfig) -> Result<GameResult> {
        Session::new(game, search, &mut self.input, &mut self.output).run()
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output, "Choose a game:")?;
        for (i, kind) in GameKind::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, kind)?;
        }
        writeln!(self.output, "{}. Quit", QUIT_NUMBER)?;
        self.output.flush()?;
        Ok(())
    }

    /// The configuration in use.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Consume the arcade, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
