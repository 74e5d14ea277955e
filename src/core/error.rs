//! Error types for the session and CLI layers.
//!
//! The search engine itself is total and never returns errors; only the
//! parts that touch the outside world (console input, config files) do.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("input closed before the game finished")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to load config '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl Error {
    /// Rejected console input with a human-readable reason.
    pub fn invalid_input(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias using the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = Error::invalid_input("x", "not a number");
        assert_eq!(err.to_string(), "invalid input 'x': not a number");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
