//! Core engine types: players, moves, scores, RNG, errors.
//!
//! This module contains the fundamental building blocks shared by the
//! search engine, the games, and the session driver.

pub mod player;
pub mod action;
pub mod rng;
pub mod error;

pub use player::PlayerId;
pub use action::{Move, MoveList, Score, WIN_SCORE, LOSS_SCORE, DRAW_SCORE};
pub use rng::GameRng;
pub use error::{Error, Result};
