//! Core minimax search algorithm.
//!
//! Exhaustive adversarial search over any `GameState`. Every move is
//! applied in place, searched, and undone before the next sibling is
//! tried, so the position is unchanged whenever a call returns. No pruning:
//! every node up to the cutoff is visited exactly once.

use std::time::Instant;

use tracing::debug;

use crate::core::{Move, Score};
use crate::rules::GameState;

use super::config::SearchConfig;
use super::selector::select_root;
use super::stats::SearchStats;

/// Score the position in `state` by minimax.
///
/// `depth` is the number of plies already below the root, `maximizing`
/// says whether the side to move picks the highest child score (the
/// computer's perspective) or the lowest. With `max_depth` set, nodes at
/// `depth >= max_depth` are scored statically.
///
/// ```
/// use rust_minimax::games::Sticks;
/// use rust_minimax::core::PlayerId;
/// use rust_minimax::minimax::minimax;
///
/// // Five sticks with the computer to move is a lost position.
/// let mut game = Sticks::with_sticks(5, PlayerId::Computer);
/// assert_eq!(minimax(&mut game, 0, true, None), -10);
/// ```
pub fn minimax<G: GameState + ?Sized>(
    state: &mut G,
    depth: u32,
    maximizing: bool,
    max_depth: Option<u32>,
) -> Score {
    let config = SearchConfig::from(max_depth);
    search_node(state, depth, maximizing, &config, &mut SearchStats::default())
}

/// Recursive step shared by `minimax`, the root selector, and `MinimaxSearch`.
pub(crate) fn search_node<G: GameState + ?Sized>(
    state: &mut G,
    depth: u32,
    maximizing: bool,
    config: &SearchConfig,
    stats: &mut SearchStats,
) -> Score {
    stats.enter(depth);

    if config.is_cutoff(depth) {
        stats.cutoffs += 1;
        stats.leaf_evaluations += 1;
        return state.evaluate();
    }
    if state.is_terminal() {
        stats.leaf_evaluations += 1;
        return state.evaluate();
    }

    let mut best = if maximizing { Score::MIN } else { Score::MAX };

    for mv in state.legal_moves() {
        state.apply(mv);
        let score = search_node(state, depth + 1, !maximizing, config, stats);
        state.undo(mv);

        best = if maximizing { best.max(score) } else { best.min(score) };
    }

    best
}

/// Minimax search context.
///
/// Owns the configuration (depth cutoff) and the statistics of the most
/// recent search. Not tied to a game type: the same context can search
/// any `GameState`.
#[derive(Clone, Debug, Default)]
pub struct MinimaxSearch {
    /// Search configuration.
    config: SearchConfig,

    /// Statistics of the last search.
    stats: SearchStats,

    /// (move, score) for every root move of the last `best_move`.
    root_scores: Vec<(Move, Score)>,
}

impl MinimaxSearch {
    /// Create a new search context.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
            root_scores: Vec::new(),
        }
    }

    /// Pick the computer's move in `state`.
    ///
    /// Returns `None` only if `state` has no legal moves. The state is
    /// left exactly as it was passed in.
    pub fn best_move<G: GameState + ?Sized>(&mut self, state: &mut G) -> Option<Move> {
        let start = Instant::now();
        self.stats.reset();
        self.root_scores.clear();

        let best = select_root(state, &self.config, &mut self.stats, &mut self.root_scores);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        for (mv, score) in &self.root_scores {
            debug!(mv, score, "root move scored");
        }
        debug!(
            best = ?best,
            nodes = self.stats.nodes_visited,
            leaves = self.stats.leaf_evaluations,
            cutoffs = self.stats.cutoffs,
            time_us = self.stats.time_us,
            "minimax search finished"
        );

        best
    }

    /// Minimax value of `state` itself, with `maximizing` telling whether
    /// the side to move is scored as the computer.
    pub fn evaluate_root<G: GameState + ?Sized>(&mut self, state: &mut G, maximizing: bool) -> Score {
        let start = Instant::now();
        self.stats.reset();
        self.root_scores.clear();

        let score = search_node(state, 0, maximizing, &self.config, &mut self.stats);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        score
    }

    /// Root move scores from the last `best_move`, in enumeration order.
    #[must_use]
    pub fn root_scores(&self) -> &[(Move, Score)] {
        &self.root_scores
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::{MoveList, PlayerId};

    /// Uniform game tree with fixed leaf scores, for checking the fold.
    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct TreeGame {
        branching: usize,
        height: usize,
        leaves: Vec<Score>,
        path: Vec<Move>,
        to_move: PlayerId,
    }

    impl TreeGame {
        pub(crate) fn new(branching: usize, height: usize, leaves: Vec<Score>) -> Self {
            assert_eq!(leaves.len(), branching.pow(height as u32));
            Self {
                branching,
                height,
                leaves,
                path: Vec::new(),
                to_move: PlayerId::Computer,
            }
        }

        fn leaf_index(&self) -> usize {
            self.path.iter().fold(0, |acc, mv| acc * self.branching + mv)
        }
    }

    impl GameState for TreeGame {
        fn current_player(&self) -> PlayerId {
            self.to_move
        }

        fn legal_moves(&self) -> MoveList {
            if self.path.len() < self.height {
                (0..self.branching).collect()
            } else {
                MoveList::new()
            }
        }

        fn apply(&mut self, mv: Move) {
            self.path.push(mv);
            self.to_move = self.to_move.opponent();
        }

        fn undo(&mut self, _mv: Move) {
            self.path.pop();
            self.to_move = self.to_move.opponent();
        }

        fn winner(&self) -> Option<PlayerId> {
            None
        }

        fn evaluate(&self) -> Score {
            if self.path.len() == self.height {
                self.leaves[self.leaf_index()]
            } else {
                0
            }
        }

        fn prompt(&self) -> String {
            String::new()
        }
    }

    #[test]
    fn test_minimax_folds_max_then_min() {
        let mut game = TreeGame::new(2, 2, vec![3, 5, 2, 9]);

        assert_eq!(minimax(&mut game, 0, true, None), 3);
        assert_eq!(minimax(&mut game, 0, false, None), 5);
    }

    #[test]
    fn test_minimax_leaves_state_unchanged() {
        let mut game = TreeGame::new(3, 3, (0..27).collect());
        let before = game.clone();

        minimax(&mut game, 0, true, None);

        assert_eq!(game, before);
    }

    #[test]
    fn test_cutoff_uses_static_evaluation() {
        let mut game = TreeGame::new(2, 2, vec![3, 5, 2, 9]);

        // Children of the root sit at the cutoff and evaluate to 0.
        assert_eq!(minimax(&mut game, 0, true, Some(1)), 0);
        // Cutoff at the root itself.
        assert_eq!(minimax(&mut game, 0, true, Some(0)), 0);
        // Starting depth counts towards the cutoff.
        assert_eq!(minimax(&mut game, 1, true, Some(2)), 0);
    }

    #[test]
    fn test_search_visits_every_node_once() {
        let mut game = TreeGame::new(3, 3, vec![0; 27]);
        let mut search = MinimaxSearch::default();

        search.evaluate_root(&mut game, true);

        // 1 + 3 + 9 + 27
        assert_eq!(search.stats().nodes_visited, 40);
        assert_eq!(search.stats().leaf_evaluations, 27);
        assert_eq!(search.stats().cutoffs, 0);
        assert_eq!(search.stats().max_depth_reached, 3);
    }

    #[test]
    fn test_search_respects_cutoff() {
        let mut game = TreeGame::new(3, 4, vec![1; 81]);
        let mut search = MinimaxSearch::new(SearchConfig::default().with_max_depth(2));

        search.evaluate_root(&mut game, true);

        assert_eq!(search.stats().max_depth_reached, 2);
        assert_eq!(search.stats().cutoffs, 9);
        assert_eq!(search.stats().nodes_visited, 13);
    }

    #[test]
    fn test_best_move_records_root_scores() {
        let mut game = TreeGame::new(2, 2, vec![3, 5, 2, 9]);
        let mut search = MinimaxSearch::default();

        let best = search.best_move(&mut game);

        assert_eq!(best, Some(0));
        assert_eq!(search.root_scores(), &[(0, 3), (1, 2)]);
        assert!(search.stats().nodes_visited > 0);
    }
}
