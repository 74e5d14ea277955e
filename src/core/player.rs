//! Player identification.
//!
//! ## PlayerId
//!
//! Every session has exactly two fixed identities: the human at the
//! keyboard and the computer driven by the minimax engine. Scores are
//! always expressed from the computer's point of view.

use serde::{Deserialize, Serialize};

/// One of the two fixed player identities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerId {
    /// The player typing moves at the console.
    Human,
    /// The player whose moves come from the search engine.
    Computer,
}

impl PlayerId {
    /// Both identities, human first.
    pub const ALL: [PlayerId; 2] = [PlayerId::Human, PlayerId::Computer];

    /// The other identity.
    ///
    /// ```
    /// use rust_minimax::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::Human.opponent(), PlayerId::Computer);
    /// assert_eq!(PlayerId::Computer.opponent(), PlayerId::Human);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::Human => PlayerId::Computer,
            PlayerId::Computer => PlayerId::Human,
        }
    }

    /// Board glyph used when rendering grids.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            PlayerId::Human => 'X',
            PlayerId::Computer => 'O',
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::Human => write!(f, "You"),
            PlayerId::Computer => write!(f, "Computer"),
        }
    }
}
