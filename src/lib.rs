//! Signaling and peer negotiation client for Ant Media style WebRTC servers
//!
//! This crate implements the control-plane half of a real-time media
//! session: a persistent WebSocket signaling connection, the JSON control
//! message codec, and the negotiation state machine that drives an opaque
//! peer-connection engine through offer/answer and ICE candidate exchange.
//!
//! # Features
//!
//! - **Publish and play roles**: the publisher announces a stream and
//!   creates the initial offer; the player requests a stream and answers
//! - **Race-safe candidate handling**: candidates arriving before the peer
//!   connection exists are buffered and flushed in order, never dropped
//! - **Atomic state transitions**: signaling events and engine callbacks are
//!   serialized through one actor loop per client
//! - **Forward-compatible codec**: unknown server commands pass through
//!   without failing the session
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │  Application                                          │
//! │  ↓ start / close            ↑ ClientEvent             │
//! │  AntMediaClient                                       │
//! │  ├─ SignalingChannel (JSON over WebSocket)            │
//! │  └─ NegotiationCoordinator (per-session state machine)│
//! │      ↓ descriptions / candidates   ↑ PeerEvent        │
//! │  PeerConnectionApi (opaque engine behind a trait)     │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use antmedia_webrtc::{AntMediaClient, ClientConfig, ClientEvent, Role};
//!
//! let config = ClientConfig {
//!     signaling_url: "wss://media.example.com/WebRTCAppEE/websocket".to_string(),
//!     stream_id: "stream1".to_string(),
//!     role: Role::Player,
//!     ..Default::default()
//! };
//!
//! let (client, mut events) = AntMediaClient::start(config, engine_factory).await?;
//! while let Some(event) = events.recv().await {
//!     match event {
//!         ClientEvent::TrackReceived(track) => println!("track: {}", track.id),
//!         ClientEvent::Closed => break,
//!         _ => {}
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules
pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod peer;
pub mod session;
pub mod signaling;

// Re-exports for public API
pub use client::AntMediaClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use events::{ClientEvent, ErrorKind};
pub use peer::{
    Candidate, LocalTrack, PeerConnectionApi, PeerConnectionFactory, PeerConnectionState,
    PeerEvent, PeerEventKind, RemoteTrack, SdpKind, SessionDescription, TrackKind,
};
pub use session::{Role, SessionState};
pub use signaling::{SignalingChannel, SignalingEvent, SignalingMessage};

/// Get the version of this crate
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
