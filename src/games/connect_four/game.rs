//! Connect Four implementation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Move, MoveList, PlayerId};
use crate::rules::GameState;

/// Number of columns; moves are column indices `0..COLUMNS`.
pub const COLUMNS: usize = 7;

/// Number of rows.
pub const ROWS: usize = 6;

/// Discs in a line needed to win.
const CONNECT: usize = 4;

/// Line directions as (row step, column step): right, down, down-right, up-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Connect Four position. Row 0 is the top of the board; discs fall
/// towards row `ROWS - 1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectFour {
    board: [[Option<PlayerId>; COLUMNS]; ROWS],
    current_player: PlayerId,
}

impl ConnectFour {
    /// Empty board with `first` to move.
    #[must_use]
    pub fn new(first: PlayerId) -> Self {
        Self {
            board: [[None; COLUMNS]; ROWS],
            current_player: first,
        }
    }

    /// Empty board with `first` to move, then `columns` played in order.
    #[must_use]
    pub fn with_moves(first: PlayerId, columns: &[Move]) -> Self {
        let mut game = Self::new(first);
        for &col in columns {
            game.apply(col);
        }
        game
    }

    /// Disc at (`row`, `col`), row 0 being the top.
    #[must_use]
    pub fn disc(&self, row: usize, col: usize) -> Option<PlayerId> {
        self.board.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Number of discs in column `col`.
    #[must_use]
    pub fn column_height(&self, col: usize) -> usize {
        (0..ROWS).filter(|&row| self.disc(row, col).is_some()).count()
    }

    /// Whether every cell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.board.iter().flatten().all(Option::is_none)
    }

    fn column_open(&self, col: Move) -> bool {
        col < COLUMNS && self.board[0][col].is_none()
    }

    /// Length of the run of `player` discs starting at (`row`, `col`).
    fn run_length(&self, row: usize, col: usize, (dr, dc): (isize, isize), player: PlayerId) -> usize {
        let mut count = 1;
        for k in 1..CONNECT as isize {
            let r = row as isize + k * dr;
            let c = col as isize + k * dc;
            if r < 0 || c < 0 || self.disc(r as usize, c as usize) != Some(player) {
                break;
            }
            count += 1;
        }
        count
    }
}

impl GameState for ConnectFour {
    fn current_player(&self) -> PlayerId {
        self.current_player
    }

    fn legal_moves(&self) -> MoveList {
        (0..COLUMNS).filter(|&col| self.column_open(col)).collect()
    }

    fn apply(&mut self, col: Move) {
        if col >= COLUMNS {
            return;
        }
        if let Some(row) = (0..ROWS).rev().find(|&row| self.board[row][col].is_none()) {
            self.board[row][col] = Some(self.current_player);
            self.current_player = self.current_player.opponent();
        }
    }

    fn undo(&mut self, col: Move) {
        if col >= COLUMNS {
            return;
        }
        if let Some(row) = (0..ROWS).find(|&row| self.board[row][col].is_some()) {
            self.board[row][col] = None;
            self.current_player = self.current_player.opponent();
        }
    }

    fn winner(&self) -> Option<PlayerId> {
        for row in 0..ROWS {
            for col in 0..COLUMNS {
                let Some(player) = self.board[row][col] else {
                    continue;
                };
                if DIRECTIONS
                    .iter()
                    .any(|&dir| self.run_length(row, col, dir, player) >= CONNECT)
                {
                    return Some(player);
                }
            }
        }
        None
    }

    fn check_input(&self, col: Move) -> bool {
        self.column_open(col)
    }

    fn prompt(&self) -> String {
        format!("Enter the column number (between 1 and {}): ", COLUMNS)
    }

    fn input_offset(&self) -> usize {
        1
    }
}

impl fmt::Display for ConnectFour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.board {
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or('.', PlayerId::symbol).to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let labels: Vec<String> = (1..=COLUMNS).map(|c| c.to_string()).collect();
        writeln!(f, "{}", labels.join(" "))
    }
}
