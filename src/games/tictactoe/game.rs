//! Tic-tac-toe implementation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Move, MoveList, PlayerId};
use crate::rules::GameState;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells; moves are cell indices `0..CELL_COUNT`.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Cell triples that win: rows, columns, diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Tic-tac-toe position. Move `row * 3 + col` marks that cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToe {
    cells: [Option<PlayerId>; CELL_COUNT],
    current_player: PlayerId,
}

impl TicTacToe {
    /// Empty board with `first` to move.
    #[must_use]
    pub fn new(first: PlayerId) -> Self {
        Self {
            cells: [None; CELL_COUNT],
            current_player: first,
        }
    }

    /// Empty board with `first` to move, then `moves` played in order.
    #[must_use]
    pub fn with_moves(first: PlayerId, moves: &[Move]) -> Self {
        let mut game = Self::new(first);
        for &mv in moves {
            game.apply(mv);
        }
        game
    }

    /// Owner of cell `index`, if any.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<PlayerId> {
        self.cells.get(index).copied().flatten()
    }

    /// Number of marks on the board.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn in_bounds(index: Move) -> bool {
        index < CELL_COUNT
    }
}

impl GameState for TicTacToe {
    fn current_player(&self) -> PlayerId {
        self.current_player
    }

    fn legal_moves(&self) -> MoveList {
        (0..CELL_COUNT).filter(|&i| self.cells[i].is_none()).collect()
    }

    fn apply(&mut self, mv: Move) {
        if Self::in_bounds(mv) && self.cells[mv].is_none() {
            self.cells[mv] = Some(self.current_player);
            self.current_player = self.current_player.opponent();
        }
    }

    fn undo(&mut self, mv: Move) {
        if Self::in_bounds(mv) && self.cells[mv].is_some() {
            self.cells[mv] = None;
            self.current_player = self.current_player.opponent();
        }
    }

    fn winner(&self) -> Option<PlayerId> {
        LINES.iter().find_map(|&[a, b, c]| match self.cells[a] {
            Some(p) if self.cells[b] == Some(p) && self.cells[c] == Some(p) => Some(p),
            _ => None,
        })
    }

    fn check_input(&self, mv: Move) -> bool {
        Self::in_bounds(mv) && self.cells[mv].is_none()
    }

    fn prompt(&self) -> String {
        format!("Enter your cell (1-{}): ", CELL_COUNT)
    }

    fn input_offset(&self) -> usize {
        1
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE) {
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or('.', PlayerId::symbol).to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
