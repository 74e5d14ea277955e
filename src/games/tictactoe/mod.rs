//! Tic-tac-toe on a 3×3 grid.
//!
//! - Players alternate marking empty cells
//! - Three in a row, column, or diagonal wins
//! - A full board without a line is a draw
//!
//! Small enough for the engine to search exhaustively.

mod game;

pub use game::{TicTacToe, BOARD_SIZE, CELL_COUNT};
