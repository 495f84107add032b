//! Peer-connection capability boundary
//!
//! The negotiation coordinator drives an opaque peer-connection engine
//! (codec negotiation, encryption, ICE internals) through the traits in this
//! module. The engine reports back through [`PeerEvent`]s tagged with the
//! session generation so that callbacks from a torn-down session can be
//! detected and dropped.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::error::Result;

/// Kind of a session description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdpKind {
    /// The initiating half of the description exchange
    Offer,
    /// The responding half of the description exchange
    Answer,
}

impl SdpKind {
    /// Wire representation of the kind (lowercase, as used in the `type` field)
    pub fn as_str(&self) -> &'static str {
        match self {
            SdpKind::Offer => "offer",
            SdpKind::Answer => "answer",
        }
    }
}

/// A local or remote session description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDescription {
    /// Offer or answer
    pub kind: SdpKind,
    /// Raw SDP payload
    pub sdp: String,
}

/// One ICE candidate proposed for peer connectivity
///
/// Immutable once constructed. Ordering among candidates is irrelevant but
/// delivery must not be dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Candidate description line
    pub candidate: String,
    /// Media line index the candidate belongs to
    pub sdp_mline_index: u16,
    /// Media stream identification tag
    pub sdp_mid: String,
}

/// Kind of a media track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackKind {
    /// Audio track
    Audio,
    /// Video track
    Video,
}

/// Descriptor for a local media track the publisher attaches
///
/// Capture and encoding are owned by the peer-connection engine; this crate
/// only registers the track on the capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalTrack {
    /// Track identifier
    pub id: String,
    /// Audio or video
    pub kind: TrackKind,
}

/// Handle to a media track received from the remote peer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTrack {
    /// Track identifier
    pub id: String,
    /// Audio or video
    pub kind: TrackKind,
}

/// Connectivity state reported by the peer-connection engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerConnectionState {
    /// Connection not yet started
    New,
    /// Connectivity checks in progress
    Connecting,
    /// Connection established
    Connected,
    /// Connectivity lost, may recover
    Disconnected,
    /// Connection failed
    Failed,
    /// Connection closed
    Closed,
}

/// Event emitted by a peer-connection capability
///
/// `generation` identifies the capability instance that produced the event;
/// the coordinator discards events whose generation no longer matches the
/// session.
#[derive(Debug, Clone)]
pub struct PeerEvent {
    /// Stream the capability belongs to
    pub stream_id: String,
    /// Capability generation assigned at creation time
    pub generation: u64,
    /// What happened
    pub kind: PeerEventKind,
}

/// Payload of a [`PeerEvent`]
#[derive(Debug, Clone)]
pub enum PeerEventKind {
    /// A local ICE candidate was gathered and should be signaled to the remote
    LocalCandidate(Candidate),
    /// Connectivity state changed
    ConnectionState(PeerConnectionState),
    /// A remote media track arrived
    TrackReceived(RemoteTrack),
    /// The data channel opened
    DataChannelOpen,
    /// A data channel message arrived
    DataChannelMessage(Vec<u8>),
    /// The data channel closed
    DataChannelClose,
}

/// Contract the negotiation coordinator drives the peer-connection engine
/// through
///
/// Creating and applying descriptions are suspending operations (the engine
/// performs codec negotiation internally); candidate and track registration
/// are immediate.
#[async_trait]
pub trait PeerConnectionApi: Send + Sync {
    /// Create a local offer or answer
    async fn create_local_description(&self, kind: SdpKind) -> Result<SessionDescription>;

    /// Apply a description as the local half of the session
    async fn set_local_description(&self, desc: SessionDescription) -> Result<()>;

    /// Apply a description received from the remote peer
    async fn set_remote_description(&self, desc: SessionDescription) -> Result<()>;

    /// Register a remote ICE candidate
    fn add_remote_candidate(&self, candidate: Candidate) -> Result<()>;

    /// Attach a local media track (publisher role)
    fn add_local_track(&self, track: LocalTrack) -> Result<()>;

    /// Create a data channel with the given label
    fn create_data_channel(&self, label: &str) -> Result<()>;

    /// Release the underlying connection
    fn close(&self);
}

/// Factory constructing peer-connection capabilities on demand
///
/// The coordinator constructs one capability per negotiation attempt and
/// hands it the event sender feeding back into the coordinator loop.
#[async_trait]
pub trait PeerConnectionFactory: Send + Sync {
    /// Construct a capability for `stream_id`
    ///
    /// # Arguments
    ///
    /// * `stream_id` - Session the capability belongs to
    /// * `generation` - Generation tag the capability must attach to every event
    /// * `ice_servers` - STUN/TURN server URLs
    /// * `events` - Sender for engine events back into the coordinator
    async fn create(
        &self,
        stream_id: &str,
        generation: u64,
        ice_servers: &[String],
        events: mpsc::UnboundedSender<PeerEvent>,
    ) -> Result<std::sync::Arc<dyn PeerConnectionApi>>;
}
