//! Signaling channel and protocol codec

pub mod channel;
pub mod protocol;

pub use channel::{SignalingChannel, SignalingEvent};
pub use protocol::{DecodeError, SignalingMessage};
