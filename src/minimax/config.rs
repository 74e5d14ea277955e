//! Minimax configuration parameters.

use serde::{Deserialize, Serialize};

/// Minimax configuration parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum plies of lookahead below each root move (`None` = search to
    /// terminal positions). At the cutoff the static evaluation is used as
    /// the leaf score.
    pub max_depth: Option<u32>,
}

impl SearchConfig {
    /// Exhaustive search to terminal positions.
    #[must_use]
    pub fn unbounded() -> Self {
        Self { max_depth: None }
    }

    /// Create a new config with custom max depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Whether a node at `depth` is at or past the cutoff.
    #[must_use]
    pub fn is_cutoff(&self, depth: u32) -> bool {
        self.max_depth.is_some_and(|limit| depth >= limit)
    }
}

impl From<Option<u32>> for SearchConfig {
    fn from(max_depth: Option<u32>) -> Self {
        Self { max_depth }
    }
}
