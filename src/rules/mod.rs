//! Game state trait for game implementations.
//!
//! Games implement `GameState` to define:
//! - Legal moves for each position
//! - How moves modify and restore the position
//! - Win/loss conditions and static evaluation
//!
//! The search engine calls into `GameState` but never interprets
//! game-specific concepts directly.

pub mod engine;

pub use engine::{GameResult, GameState};
