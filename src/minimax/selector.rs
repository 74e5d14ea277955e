//! Root move selection.
//!
//! Tries every legal move once, scores the resulting position with the
//! opponent to reply, and keeps the first move with the highest score.
//!
//! Polarity is fixed: the candidate is always scored as if the computer
//! had just moved, so the reply ply minimizes. This picks moves for the
//! computer only and must not be used to choose a move for the human.

use crate::core::{Move, Score};
use crate::rules::GameState;

use super::config::SearchConfig;
use super::search::search_node;
use super::stats::SearchStats;

/// Choose the computer's move in `state`.
///
/// `max_depth` bounds the lookahead below each root move; `None` searches
/// to the end of the game. Returns `None` when there are no legal moves.
/// Ties go to the earliest move in enumeration order.
///
/// ```
/// use rust_minimax::core::PlayerId;
/// use rust_minimax::games::Sticks;
/// use rust_minimax::minimax::best_move;
///
/// // From six sticks, taking one leaves the human on a lost five.
/// let mut game = Sticks::with_sticks(6, PlayerId::Computer);
/// assert_eq!(best_move(&mut game, None), Some(1));
/// ```
pub fn best_move<G: GameState + ?Sized>(state: &mut G, max_depth: Option<u32>) -> Option<Move> {
    let config = SearchConfig::from(max_depth);
    let mut scores = Vec::new();
    select_root(state, &config, &mut SearchStats::default(), &mut scores)
}

/// Root loop: fills `scores` with (move, score) in enumeration order and
/// returns the strictly-best move.
pub(crate) fn select_root<G: GameState + ?Sized>(
    state: &mut G,
    config: &SearchConfig,
    stats: &mut SearchStats,
    scores: &mut Vec<(Move, Score)>,
) -> Option<Move> {
    let mut best_score = Score::MIN;
    let mut best = None;

    for mv in state.legal_moves() {
        state.apply(mv);
        let score = search_node(state, 0, false, config, stats);
        state.undo(mv);

        scores.push((mv, score));
        if score > best_score {
            best_score = score;
            best = Some(mv);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimax::search::tests::TreeGame;

    #[test]
    fn test_best_move_picks_max_of_mins() {
        // Root move 0 -> min(3, 5) = 3, root move 1 -> min(2, 9) = 2.
        let mut game = TreeGame::new(2, 2, vec![3, 5, 2, 9]);
        assert_eq!(best_move(&mut game, None), Some(0));

        let mut game = TreeGame::new(2, 2, vec![1, 5, 2, 9]);
        assert_eq!(best_move(&mut game, None), Some(1));
    }

    #[test]
    fn test_ties_keep_first_move() {
        let mut game = TreeGame::new(3, 1, vec![4, 4, 4]);
        assert_eq!(best_move(&mut game, None), Some(0));

        let mut game = TreeGame::new(3, 1, vec![1, 4, 4]);
        assert_eq!(best_move(&mut game, None), Some(1));
    }

    #[test]
    fn test_no_moves_returns_none() {
        let mut game = TreeGame::new(2, 0, vec![0]);
        assert_eq!(best_move(&mut game, None), None);
    }

    #[test]
    fn test_root_scores_in_enumeration_order() {
        let mut game = TreeGame::new(3, 1, vec![7, -2, 5]);
        let mut scores = Vec::new();
        let mut stats = SearchStats::default();

        let best = select_root(&mut game, &SearchConfig::default(), &mut stats, &mut scores);

        assert_eq!(best, Some(0));
        assert_eq!(scores, vec![(0, 7), (1, -2), (2, 5)]);
        assert_eq!(stats.nodes_visited, 3);
    }

    #[test]
    fn test_depth_limit_applies_below_root_move() {
        // With a cutoff of 0, every root move is scored statically right
        // after it is played: all zero for an interior node.
        let mut game = TreeGame::new(2, 2, vec![-5, -5, 8, 8]);
        let mut scores = Vec::new();
        let mut stats = SearchStats::default();

        select_root(&mut game, &SearchConfig::default().with_max_depth(0), &mut stats, &mut scores);

        assert_eq!(scores, vec![(0, 0), (1, 0)]);
        assert_eq!(stats.cutoffs, 2);
    }
}
