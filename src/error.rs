//! Error handling for the louds-trie library
//!
//! Absence of a key is not an error: lookups report misses as `Ok(None)`.
//! The error type covers programmer misuse (phase violations) and internal
//! invariant violations only.

use thiserror::Error;

/// Main error type for the louds-trie library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// An operation was invoked in the wrong lifecycle phase
    #[error("Invalid state: {message}")]
    InvalidState {
        /// Description of the phase violation
        message: String,
    },

    /// A rank/select argument was outside its domain
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },

    /// Structural invariant violation in the encoded trie
    #[error("Invalid data: {message}")]
    InvalidData {
        /// Error message describing the issue
        message: String,
    },
}

impl TrieError {
    /// Create an invalid state error
    pub fn invalid_state<S: Into<String>>(message: S) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create an invalid data error
    pub fn invalid_data<S: Into<String>>(message: S) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidState { .. } => "state",
            Self::OutOfBounds { .. } => "bounds",
            Self::InvalidData { .. } => "data",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TrieError>;
