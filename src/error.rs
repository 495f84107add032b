//! Error types for the signaling client

use thiserror::Error;

/// Result type alias for signaling client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the signaling client
#[derive(Debug, Error)]
pub enum Error {
    /// Signaling transport failure (connect, send, close)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Malformed or undecodable signaling message
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Description create/apply or candidate-add failure reported by the
    /// peer-connection capability
    #[error("Negotiation error: {0}")]
    Negotiation(String),

    /// Error message signaled by the remote server
    #[error("Remote error: {0}")]
    RemoteSignaled(String),

    /// Configuration validation error
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The signaling channel is closed
    #[error("Signaling channel is closed")]
    ChannelClosed,

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
