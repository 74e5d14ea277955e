//! # rust-minimax
//!
//! A game-agnostic minimax engine and three console games to play
//! against it: tic-tac-toe, Connect Four, and sticks.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The engine only sees the `GameState` trait. Moves
//!    are opaque integers it enumerates and hands back.
//!
//! 2. **In-Place Search**: One mutable state per game. Every `apply` is
//!    paired with its `undo` before the enclosing call returns, so the
//!    search never clones positions.
//!
//! 3. **Caller-Chosen Cutoff**: Depth limits are a search parameter
//!    chosen by whoever knows the game, never inferred by the engine.
//!
//! ## Modules
//!
//! - `core`: Players, moves, scores, RNG, errors
//! - `rules`: `GameState` trait for game implementations
//! - `minimax`: Minimax search and root move selection
//! - `games`: Tic-tac-toe, Connect Four, sticks
//! - `session`: Console game loop, menu, configuration

pub mod core;
pub mod rules;
pub mod minimax;
pub mod games;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Error, Result,
    GameRng, PlayerId,
    Move, MoveList, Score, WIN_SCORE, LOSS_SCORE, DRAW_SCORE,
};

pub use crate::rules::{GameResult, GameState};

pub use crate::minimax::{best_move, minimax, MinimaxSearch, SearchConfig, SearchStats};

pub use crate::games::{ConnectFour, GameKind, Sticks, TicTacToe};

pub use crate::session::{Arcade, DepthOverrides, Session, SessionConfig};
