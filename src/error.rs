//! Error types for the advisor.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything the advisor can fail with.
///
/// No operation mutates its inputs before failing, so a call can always be
/// retried with corrected input.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid word '{input}': expected exactly 5 ASCII letters")]
    InvalidWordFormat { input: String },

    #[error("invalid pattern '{input}': {reason}")]
    InvalidPatternFormat { input: String, reason: String },

    #[error("no known word is consistent with the guess history")]
    NoCandidates,

    #[error("unknown strategy '{0}' (expected 'entropy' or 'minimax')")]
    UnknownStrategy(String),

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("game is already over after {guesses} guesses")]
    GameOver { guesses: usize },

    #[error("ranking was cancelled before it finished")]
    Cancelled,

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("wordlist error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    pub(crate) fn invalid_pattern(input: &str, reason: impl Into<String>) -> Self {
        Error::InvalidPatternFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            message: message.into(),
        }
    }
}
