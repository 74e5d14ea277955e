//! Concrete games playable against the engine.
//!
//! Each game implements `GameState` plus `Display` for the console.
//! `GameKind` names them for menus, the command line, and configuration.

pub mod connect_four;
pub mod sticks;
pub mod tictactoe;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use connect_four::ConnectFour;
pub use sticks::Sticks;
pub use tictactoe::TicTacToe;

/// Lookahead used for Connect Four, whose tree is too big to exhaust.
pub const CONNECT_FOUR_DEPTH: u32 = 6;

/// The games on offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum GameKind {
    TicTacToe,
    ConnectFour,
    Sticks,
}

impl GameKind {
    /// All games in menu order.
    pub const ALL: [GameKind; 3] = [GameKind::TicTacToe, GameKind::ConnectFour, GameKind::Sticks];

    /// Label shown in the menu.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            GameKind::TicTacToe => "Tic-Tac-Toe",
            GameKind::ConnectFour => "Connect 4",
            GameKind::Sticks => "Sticks game",
        }
    }

    /// Game for a 1-based menu number.
    #[must_use]
    pub fn from_menu_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Search cutoff this game needs when nothing overrides it.
    ///
    /// Tic-tac-toe and sticks are searched to the end; Connect Four is
    /// limited to `CONNECT_FOUR_DEPTH` plies below each candidate move.
    #[must_use]
    pub const fn default_max_depth(self) -> Option<u32> {
        match self {
            GameKind::TicTacToe | GameKind::Sticks => None,
            GameKind::ConnectFour => Some(CONNECT_FOUR_DEPTH),
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
