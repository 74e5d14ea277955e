//! Session configuration.
//!
//! Everything a console session can be told up front: the seed for the
//! starting-player coin flip, a fixed first player, the sticks count, and
//! per-game search cutoffs. Loadable from JSON; every field is optional
//! in the file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Error, PlayerId, Result};
use crate::games::sticks::{DEFAULT_STICKS, MAX_STICKS};
use crate::games::GameKind;
use crate::minimax::SearchConfig;

/// Per-game search cutoff overrides (`None` = the game's default).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepthOverrides {
    pub tic_tac_toe: Option<u32>,
    pub connect_four: Option<u32>,
    pub sticks: Option<u32>,
}

impl DepthOverrides {
    /// Override for `kind`, if any.
    #[must_use]
    pub fn get(&self, kind: GameKind) -> Option<u32> {
        match kind {
            GameKind::TicTacToe => self.tic_tac_toe,
            GameKind::ConnectFour => self.connect_four,
            GameKind::Sticks => self.sticks,
        }
    }

    /// Set the override for `kind`.
    pub fn set(&mut self, kind: GameKind, depth: Option<u32>) {
        match kind {
            GameKind::TicTacToe => self.tic_tac_toe = depth,
            GameKind::ConnectFour => self.connect_four = depth,
            GameKind::Sticks => self.sticks = depth,
        }
    }
}

/// Console session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seed for the starting-player coin flip (`None` = from the OS).
    pub seed: Option<u64>,

    /// Who opens every game (`None` = coin flip per game).
    pub first_player: Option<PlayerId>,

    /// Sticks on the table at the start of a sticks game.
    pub initial_sticks: usize,

    /// Search cutoffs replacing the per-game defaults.
    pub depth_overrides: DepthOverrides,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            first_player: None,
            initial_sticks: DEFAULT_STICKS,
            depth_overrides: DepthOverrides::default(),
        }
    }
}

impl SessionConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no game can start from.
    pub fn validate(&self) -> Result<()> {
        if self.initial_sticks == 0 {
            return Err(Error::InvalidConfiguration {
                message: "initial_sticks must be at least 1".to_string(),
            });
        }
        if self.initial_sticks > MAX_STICKS {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "initial_sticks must be at most {} (got {})",
                    MAX_STICKS, self.initial_sticks
                ),
            });
        }
        for kind in GameKind::ALL {
            if self.depth_overrides.get(kind) == Some(0) {
                return Err(Error::InvalidConfiguration {
                    message: format!("search depth for {} must be at least 1", kind),
                });
            }
        }
        Ok(())
    }

    /// Set the coin-flip seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fix who opens every game.
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = Some(player);
        self
    }

    /// Set the starting sticks count.
    pub fn with_initial_sticks(mut self, sticks: usize) -> Self {
        self.initial_sticks = sticks;
        self
    }

    /// Override the search cutoff for one game.
    pub fn with_max_depth(mut self, kind: GameKind, depth: u32) -> Self {
        self.depth_overrides.set(kind, Some(depth));
        self
    }

    /// Effective cutoff for `kind`: the override, else the game default.
    #[must_use]
    pub fn max_depth_for(&self, kind: GameKind) -> Option<u32> {
        self.depth_overrides.get(kind).or(kind.default_max_depth())
    }

    /// Search configuration for `kind`.
    #[must_use]
    pub fn search_config(&self, kind: GameKind) -> SearchConfig {
        SearchConfig::from(self.max_depth_for(kind))
    }
}
