//! Console sessions: the human's side of the table.
//!
//! - `Session` plays one game, alternating typed moves with engine moves
//! - `Arcade` is the menu loop around it
//! - `SessionConfig` holds seeds, the first player, and search cutoffs
//!
//! All I/O goes through `BufRead`/`Write` handles, so sessions can be
//! driven from scripted input in tests.

pub mod arcade;
pub mod config;
pub mod driver;

pub use arcade::Arcade;
pub use config::{DepthOverrides, SessionConfig};
pub use driver::Session;
