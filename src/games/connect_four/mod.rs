//! Connect Four on a 7×6 board.
//!
//! - Players drop discs into columns; discs fall to the lowest free row
//! - Four in a line horizontally, vertically, or diagonally wins
//! - A full board without a line is a draw
//!
//! Too large to search exhaustively; sessions pass a depth cutoff.

mod game;

pub use game::{ConnectFour, COLUMNS, ROWS};
