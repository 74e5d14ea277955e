//! Minimax search for rust-minimax.
//!
//! ## Overview
//!
//! Game-agnostic, exhaustive adversarial search over the `GameState`
//! trait:
//!
//! - **In-place**: moves are applied and undone on one mutable state
//! - **Depth-limited on request**: the cutoff is a per-call parameter
//!   supplied by whoever knows which game is being searched
//! - **No pruning**: every node up to the cutoff is visited once
//! - **Computer-centric**: scores are positive when the computer is ahead
//!
//! ## Usage
//!
//! ```rust
//! use rust_minimax::core::PlayerId;
//! use rust_minimax::games::TicTacToe;
//! use rust_minimax::minimax::{MinimaxSearch, SearchConfig};
//! use rust_minimax::rules::GameState;
//!
//! let mut game = TicTacToe::new(PlayerId::Computer);
//! let mut search = MinimaxSearch::new(SearchConfig::unbounded());
//!
//! if let Some(mv) = search.best_move(&mut game) {
//!     game.apply(mv);
//! }
//! println!("searched {} nodes", search.stats().nodes_visited);
//! ```

pub mod config;
pub mod search;
pub mod selector;
pub mod stats;

// Re-export main types
pub use config::SearchConfig;
pub use search::{minimax, MinimaxSearch};
pub use selector::best_move;
pub use stats::SearchStats;
