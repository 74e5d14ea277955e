//! The sticks game (misère take-away).
//!
//! - 21 sticks on the table
//! - On your turn take 1, 2, or 3 sticks
//! - Whoever takes the last stick loses
//!
//! Counts of the form `4k + 1` are lost for the player to move.

mod game;

pub use game::{Sticks, DEFAULT_STICKS, MAX_STICKS, MAX_TAKE};
