//! Error types for quarry-connection

use quarry_protocol::TransportError;
use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Session-layer errors
///
/// All variants surface synchronously to the caller of the operation that
/// detected them; nothing is retried at this layer. Messages name the
/// offending key or value and enumerate the legal set where one exists.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Malformed or missing required argument
    #[error("Illegal argument: {0}")]
    IllegalArgument(String),

    /// Unknown option key, wrong option value kind, or unsupported query language
    #[error("Illegal option: {0}")]
    IllegalOption(String),

    /// Feature contractually declared but not yet available
    ///
    /// Raised explicitly; unsupported features never degrade to a silent
    /// wrong result.
    #[error("Not implemented: {0}")]
    Unimplemented(String),

    /// Operation attempted on a repository before initialization
    #[error("Repository '{0}' has not been initialized")]
    NotInitialized(String),

    /// Operation attempted on a repository after shutdown
    #[error("Repository '{0}' has already been shut down")]
    AlreadyShutDown(String),

    /// Connection used after it was closed
    #[error("Connection is closed")]
    SessionClosed,

    /// Remote call failed or returned an error payload
    #[error("Server error: {0}")]
    Server(#[from] TransportError),
}

impl StoreError {
    /// Create an illegal-argument error
    pub fn illegal_argument(msg: impl Into<String>) -> Self {
        StoreError::IllegalArgument(msg.into())
    }

    /// Create an illegal-option error
    pub fn illegal_option(msg: impl Into<String>) -> Self {
        StoreError::IllegalOption(msg.into())
    }

    /// Create a not-implemented error for a named feature
    pub fn unimplemented(feature: impl Into<String>) -> Self {
        StoreError::Unimplemented(feature.into())
    }

    /// Stable error code for diagnostics
    pub fn error_code(&self) -> &'static str {
        use quarry_vocab::errors;
        match self {
            StoreError::IllegalArgument(_) => errors::ILLEGAL_ARGUMENT,
            StoreError::IllegalOption(_) => errors::ILLEGAL_OPTION,
            StoreError::Unimplemented(_) => errors::UNIMPLEMENTED,
            StoreError::NotInitialized(_) => errors::NOT_INITIALIZED,
            StoreError::AlreadyShutDown(_) => errors::ALREADY_SHUT_DOWN,
            StoreError::SessionClosed => errors::SESSION_CLOSED,
            StoreError::Server(e) => e.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_map_to_vocab() {
        assert_eq!(
            StoreError::illegal_option("x").error_code(),
            quarry_vocab::errors::ILLEGAL_OPTION
        );
        assert_eq!(
            StoreError::Server(TransportError::remote("boom")).error_code(),
            quarry_vocab::errors::SERVER_ERROR
        );
    }
}
