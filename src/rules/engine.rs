//! Game state trait for game implementations.
//!
//! Games implement `GameState` to define their rules:
//! - Whose turn it is and what moves are legal
//! - How moves modify (and un-modify) the position
//! - Win/loss conditions and static evaluation
//! - How a human's typed input maps to a move

use crate::core::{Error, Move, MoveList, PlayerId, Result, Score, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Score of this outcome from the computer's point of view.
    #[must_use]
    pub fn score(&self) -> Score {
        match self {
            GameResult::Winner(PlayerId::Computer) => WIN_SCORE,
            GameResult::Winner(PlayerId::Human) => LOSS_SCORE,
            GameResult::Draw => DRAW_SCORE,
        }
    }
}

/// Capability set every game exposes to the search engine.
///
/// ## Implementation Notes
///
/// - `legal_moves`: fixed ascending order, empty iff the position is exhausted
/// - `apply`: changes one unit of position and hands the turn to the opponent
/// - `undo`: exact inverse of the most recent `apply` with the same move,
///   including whose turn it is. The search relies on strict LIFO pairing;
///   a broken inverse yields wrong scores, not panics
/// - `evaluate`: static score of the current position only, no lookahead
pub trait GameState {
    /// The identity to move.
    fn current_player(&self) -> PlayerId;

    /// All moves applicable in the current position.
    fn legal_moves(&self) -> MoveList;

    /// Play `mv` for the current player.
    ///
    /// Only called with moves from `legal_moves()`. Games may ignore
    /// anything else.
    fn apply(&mut self, mv: Move);

    /// Take back `mv`, the most recently applied move.
    fn undo(&mut self, mv: Move);

    /// The decided winner, if any, regardless of whose turn it is.
    fn winner(&self) -> Option<PlayerId>;

    /// Static score: `WIN_SCORE` if the computer has won, `LOSS_SCORE` if
    /// the human has, `DRAW_SCORE` otherwise.
    fn evaluate(&self) -> Score {
        match self.winner() {
            Some(PlayerId::Computer) => WIN_SCORE,
            Some(PlayerId::Human) => LOSS_SCORE,
            None => DRAW_SCORE,
        }
    }

    /// Check if the game is over: decided winner or nothing left to play.
    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.legal_moves().is_empty()
    }

    /// Outcome once terminal, `None` while the game continues.
    fn result(&self) -> Option<GameResult> {
        if !self.is_terminal() {
            return None;
        }
        Some(match self.winner() {
            Some(player) => GameResult::Winner(player),
            None => GameResult::Draw,
        })
    }

    // === Player-facing hooks ===

    /// Whether a human-entered move is acceptable right now.
    fn check_input(&self, mv: Move) -> bool {
        self.legal_moves().contains(&mv)
    }

    /// Prompt shown before reading a human move.
    fn prompt(&self) -> String;

    /// Offset subtracted from typed numbers (1 for 1-based prompts).
    fn input_offset(&self) -> usize {
        0
    }

    /// Turn a line of console input into a legal move.
    ///
    /// Default implementation parses an integer, applies `input_offset`,
    /// and validates with `check_input`.
    fn parse_input(&self, raw: &str) -> Result<Move> {
        let trimmed = raw.trim();
        let typed: usize = trimmed
            .parse()
            .map_err(|_| Error::invalid_input(trimmed, "expected a non-negative number"))?;
        let mv = typed
            .checked_sub(self.input_offset())
            .ok_or_else(|| Error::invalid_input(trimmed, "out of range"))?;

        if self.check_input(mv) {
            Ok(mv)
        } else {
            Err(Error::invalid_input(trimmed, "not a legal move here"))
        }
    }
}
