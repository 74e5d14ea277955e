//! Moves and scores.
//!
//! A `Move` is an opaque integer that only the concrete game interprets:
//! a grid cell, a column, or a stick count. The engine enumerates moves,
//! passes them back to the game, and never looks inside.

use smallvec::SmallVec;

/// Opaque move value, meaningful only to the game that produced it.
pub type Move = usize;

/// Legal moves in enumeration order.
///
/// Inline capacity covers the widest game (nine grid cells), so move
/// generation does not allocate during search.
pub type MoveList = SmallVec<[Move; 9]>;

/// Static evaluation, positive favors the computer.
pub type Score = i32;

/// Score of a position the computer has won.
pub const WIN_SCORE: Score = 10;

/// Score of a position the human has won.
pub const LOSS_SCORE: Score = -10;

/// Score of a drawn or undecided position.
pub const DRAW_SCORE: Score = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_list_stays_inline() {
        let moves: MoveList = (0..9).collect();
        assert!(!moves.spilled());
        assert_eq!(moves.len(), 9);
    }

    #[test]
    fn test_score_symmetry() {
        assert_eq!(WIN_SCORE, -LOSS_SCORE);
        assert!(LOSS_SCORE < DRAW_SCORE && DRAW_SCORE < WIN_SCORE);
    }
}
