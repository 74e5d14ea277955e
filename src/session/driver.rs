//! One game between the console user and the engine.
//!
//! The session owns the game state and hands it to the search for the
//! length of each computer turn. Human turns read one line at a time and
//! re-prompt until the game accepts the move.

use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::core::{Error, Move, PlayerId, Result};
use crate::minimax::{MinimaxSearch, SearchConfig};
use crate::rules::{GameResult, GameState};

/// A single human-versus-computer game over line-based I/O.
pub struct Session<'io, G, R, W> {
    game: G,
    search: MinimaxSearch,
    input: &'io mut R,
    output: &'io mut W,
}

impl<'io, G, R, W> Session<'io, G, R, W>
where
    G: GameState + Display,
    R: BufRead,
    W: Write,
{
    /// Create a session; `search` carries the cutoff for this game.
    pub fn new(game: G, search: SearchConfig, input: &'io mut R, output: &'io mut W) -> Self {
        Self {
            game,
            search: MinimaxSearch::new(search),
            input,
            output,
        }
    }

    /// Play until the game ends and report the outcome.
    pub fn run(&mut self) -> Result<GameResult> {
        info!(first = ?self.game.current_player(), "game started");

        while !self.game.is_terminal() {
            write!(self.output, "{}", self.game)?;
            writeln!(self.output)?;

            match self.game.current_player() {
                PlayerId::Human => {
                    let mv = self.read_human_move()?;
                    self.game.apply(mv);
                }
                PlayerId::Computer => {
                    let Some(mv) = self.search.best_move(&mut self.game) else {
                        break;
                    };
                    info!(mv, nodes = self.search.stats().nodes_visited, "computer moved");
                    writeln!(self.output, "Computer plays {}", mv + self.game.input_offset())?;
                    self.game.apply(mv);
                }
            }
        }

        write!(self.output, "{}", self.game)?;
        writeln!(self.output)?;

        let result = match self.game.winner() {
            Some(player) => GameResult::Winner(player),
            None => GameResult::Draw,
        };
        let message = match result {
            GameResult::Winner(PlayerId::Human) => "You win!",
            GameResult::Winner(PlayerId::Computer) => "Computer wins!",
            GameResult::Draw => "It's a draw!",
        };
        writeln!(self.output, "{}\n", message)?;
        info!(?result, "game over");

        Ok(result)
    }

    /// Prompt until a legal move is typed.
    fn read_human_move(&mut self) -> Result<Move> {
        loop {
            write!(self.output, "{}", self.game.prompt())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }

            match self.game.parse_input(&line) {
                Ok(mv) => return Ok(mv),
                Err(err) => {
                    debug!(%err, "rejected move");
                    writeln!(self.output, "Invalid move, try again.")?;
                }
            }
        }
    }

    /// The game in its current state.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Search context used for computer turns.
    pub fn search(&self) -> &MinimaxSearch {
        &self.search
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{Sticks, TicTacToe};

    fn play<G>(game: G, script: &str) -> (Result<GameResult>, String, G)
    where
        G: GameState + Display + Clone,
    {
        let mut input = script.as_bytes();
        let mut output = Vec::new();
        let mut session = Session::new(game, SearchConfig::unbounded(), &mut input, &mut output);
        let result = session.run();
        let game = session.game().clone();
        (result, String::from_utf8(output).unwrap(), game)
    }

    #[test]
    fn test_sticks_human_loses_from_five() {
        // 5 -> human takes 1 -> computer takes 3 -> human must take the last.
        let (result, output, game) = play(Sticks::with_sticks(5, PlayerId::Human), "1\n1\n");

        assert_eq!(result.unwrap(), GameResult::Winner(PlayerId::Computer));
        assert_eq!(game.remaining(), 0);
        assert!(output.contains("Computer plays 3"));
        assert!(output.contains("Computer wins!"));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let (result, output, _) = play(Sticks::with_sticks(5, PlayerId::Human), "abc\n9\n1\n1\n");

        assert!(result.is_ok());
        assert_eq!(output.matches("Invalid move, try again.").count(), 2);
    }

    #[test]
    fn test_input_closed() {
        let (result, _, game) = play(Sticks::with_sticks(5, PlayerId::Human), "");

        assert!(matches!(result, Err(Error::InputClosed)));
        assert_eq!(game.remaining(), 5);
    }

    #[test]
    fn test_tictactoe_human_never_wins() {
        // The human cycles through 1..=9; occupied cells are rejected.
        let script: String = (1..=9).cycle().take(81).map(|n| format!("{}\n", n)).collect();
        let (result, output, game) = play(TicTacToe::new(PlayerId::Human), &script);

        let result = result.unwrap();
        assert_ne!(result, GameResult::Winner(PlayerId::Human));
        assert!(game.is_terminal());
        assert!(output.contains("Enter your cell (1-9): "));
    }
}
