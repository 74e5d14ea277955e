//! Minimax search statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during a search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions entered by the recursion (every node, leaves included).
    pub nodes_visited: u64,

    /// Positions scored with the static evaluation.
    pub leaf_evaluations: u64,

    /// Leaves reached because of the depth cutoff rather than game end.
    pub cutoffs: u64,

    /// Deepest `depth` argument seen by the recursion.
    pub max_depth_reached: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record entry into a node at `depth`.
    pub(crate) fn enter(&mut self, depth: u32) {
        self.nodes_visited += 1;
        self.max_depth_reached = self.max_depth_reached.max(depth);
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes_visited, 0);
        assert_eq!(stats.leaf_evaluations, 0);
    }

    #[test]
    fn test_enter_tracks_depth() {
        let mut stats = SearchStats::new();
        stats.enter(0);
        stats.enter(3);
        stats.enter(1);

        assert_eq!(stats.nodes_visited, 3);
        assert_eq!(stats.max_depth_reached, 3);
    }

    #[test]
    fn test_nodes_per_second() {
        let mut stats = SearchStats::new();
        assert_eq!(stats.nodes_per_second(), 0.0);

        stats.nodes_visited = 1000;
        stats.time_us = 1_000_000;
        assert_eq!(stats.nodes_per_second(), 1000.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.nodes_visited = 100;
        stats.cutoffs = 5;

        stats.reset();

        assert_eq!(stats, SearchStats::default());
    }
}
