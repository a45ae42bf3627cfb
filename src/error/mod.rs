//! Error types for digestrs.

use std::fmt;

/// Errors that can occur during hashing operations.
#[derive(Debug)]
pub enum HashError {
    /// An operation was called outside the legal init -> update* -> final
    /// lifecycle.
    InvalidState {
        /// The operation that was attempted.
        operation: &'static str,
        /// The precondition that was violated.
        message: &'static str,
    },

    /// An I/O error occurred while reading from the underlying byte source.
    Io(std::io::Error),

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// A serialized digest value could not be decoded.
    Parse {
        /// Description of what failed to decode.
        message: &'static str,
    },
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::InvalidState { operation, message } => {
                write!(f, "invalid state: {} {}", operation, message)
            }
            HashError::Io(e) => write!(f, "io error: {}", e),
            HashError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
            HashError::Parse { message } => {
                write!(f, "parse error: {}", message)
            }
        }
    }
}

impl std::error::Error for HashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HashError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HashError {
    fn from(e: std::io::Error) -> Self {
        HashError::Io(e)
    }
}
