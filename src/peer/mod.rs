//! Peer-connection capability boundary and associated types

pub mod capability;

pub use capability::{
    Candidate, LocalTrack, PeerConnectionApi, PeerConnectionFactory, PeerConnectionState,
    PeerEvent, PeerEventKind, RemoteTrack, SdpKind, SessionDescription, TrackKind,
};
