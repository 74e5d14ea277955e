//! Sticks implementation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Move, MoveList, PlayerId};
use crate::rules::GameState;

/// Sticks on the table at the start of a standard game.
pub const DEFAULT_STICKS: usize = 21;

/// Most sticks one move may take.
pub const MAX_TAKE: usize = 3;

/// Largest starting count an exhaustive search answers in reasonable time.
/// The full tree grows by roughly 1.84x per extra stick.
pub const MAX_STICKS: usize = 30;

/// Sticks position. Move `n` takes `n` sticks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sticks {
    remaining: usize,
    current_player: PlayerId,
}

impl Sticks {
    /// Standard 21-stick game with `first` to move.
    #[must_use]
    pub fn new(first: PlayerId) -> Self {
        Self::with_sticks(DEFAULT_STICKS, first)
    }

    /// Game starting from `remaining` sticks with `first` to move.
    #[must_use]
    pub fn with_sticks(remaining: usize, first: PlayerId) -> Self {
        Self {
            remaining,
            current_player: first,
        }
    }

    /// Sticks still on the table.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    fn can_take(&self, count: Move) -> bool {
        (1..=MAX_TAKE).contains(&count) && count <= self.remaining
    }
}

impl Default for Sticks {
    fn default() -> Self {
        Self::new(PlayerId::Human)
    }
}

impl GameState for Sticks {
    fn current_player(&self) -> PlayerId {
        self.current_player
    }

    fn legal_moves(&self) -> MoveList {
        (1..=MAX_TAKE.min(self.remaining)).collect()
    }

    fn apply(&mut self, count: Move) {
        if self.can_take(count) {
            self.remaining -= count;
            self.current_player = self.current_player.opponent();
        }
    }

    fn undo(&mut self, count: Move) {
        if (1..=MAX_TAKE).contains(&count) {
            self.remaining += count;
            self.current_player = self.current_player.opponent();
        }
    }

    /// Whoever took the last stick lost, so once the table is empty the
    /// player to move has won.
    fn winner(&self) -> Option<PlayerId> {
        (self.remaining == 0).then_some(self.current_player)
    }

    fn is_terminal(&self) -> bool {
        self.remaining == 0
    }

    fn check_input(&self, count: Move) -> bool {
        self.can_take(count)
    }

    fn prompt(&self) -> String {
        format!(
            "Enter the number of sticks you want to pick (1-{}): ",
            MAX_TAKE.min(self.remaining)
        )
    }
}

impl fmt::Display for Sticks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Remaining sticks: {}", self.remaining)?;
        writeln!(f, "{}", "| ".repeat(self.remaining).trim_end())
    }
}
