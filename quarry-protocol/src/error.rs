//! Error types for quarry-protocol

use thiserror::Error;

/// Result type alias using TransportError
pub type Result<T> = std::result::Result<T, TransportError>;

/// Transport-level errors
///
/// Everything the remote store or the wire layer can report surfaces as one
/// of these; the session layer wraps them without retrying.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The remote call completed but the store returned an error payload
    #[error("Remote call failed: {0}")]
    Remote(String),

    /// The transport endpoint could not be reached
    #[error("Transport unavailable: {0}")]
    Unavailable(String),
}

impl TransportError {
    /// Create a remote-failure error
    pub fn remote(msg: impl Into<String>) -> Self {
        TransportError::Remote(msg.into())
    }

    /// Create an unavailable-endpoint error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        TransportError::Unavailable(msg.into())
    }

    /// Stable error code for diagnostics
    pub fn error_code(&self) -> &'static str {
        match self {
            TransportError::Remote(_) => quarry_vocab::errors::SERVER_ERROR,
            TransportError::Unavailable(_) => quarry_vocab::errors::UNAVAILABLE,
        }
    }
}
