//! Application-facing event surface
//!
//! Pass-through notifications emitted after the corresponding internal state
//! transition completes. Delivered over an unbounded channel owned by the
//! application.

use crate::peer::{PeerConnectionState, RemoteTrack};

/// Classification of a reported error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Channel connect/send/close failure
    Transport,
    /// Malformed or undecodable signaling message (dropped, non-fatal)
    Protocol,
    /// Description or candidate failure reported by the peer-connection
    /// engine (fatal to the session)
    Negotiation,
    /// Error message signaled by the remote server (fatal to the session)
    RemoteSignaled,
}

/// Event delivered to the application
#[derive(Debug, Clone)]
pub enum ClientEvent {
    /// Peer connectivity state changed
    ConnectionStateChanged(PeerConnectionState),
    /// A remote media track arrived
    TrackReceived(RemoteTrack),
    /// The data channel opened
    DataChannelOpen,
    /// A data channel message arrived
    DataChannelMessage(Vec<u8>),
    /// The data channel closed
    DataChannelClose,
    /// An error occurred; fatality depends on `kind`
    Error {
        /// Error classification
        kind: ErrorKind,
        /// Human-readable description
        message: String,
    },
    /// The signaling channel terminated and sessions were torn down
    Closed,
}
