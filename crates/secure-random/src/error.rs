//! Error types for SecureRandom.
//!
//! Every failure is reported to the caller as a value. Nothing is retried,
//! padded or swallowed internally, and drawn bytes never appear in messages.

/// Error types covering all operations.
#[derive(Debug, thiserror::Error)]
pub enum RandomError {
    #[error("No random backend available: {0}")]
    EntropyUnavailable(String),

    #[error("Unexpected partial read from random backend: expected {expected} bytes, got {actual}")]
    PartialRead { expected: usize, actual: usize },

    #[error("Require a positive integer > 0, got {0}")]
    InvalidBound(i64),

    #[error("Requested length {requested} exceeds the {max} byte limit")]
    LengthTooLarge { requested: usize, max: usize },

    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, RandomError>;
