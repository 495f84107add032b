//! Session role policy
//!
//! The role decides which control message announces the session, which side
//! creates the initial offer, and whether local media tracks are attached.

use serde::{Deserialize, Serialize};

use crate::signaling::protocol::SignalingMessage;

/// Role of this client in the media session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Sends `publish`, creates the initial offer and attaches local tracks
    Publisher,
    /// Sends `play`, waits for the remote offer and receives tracks
    Player,
}

impl Role {
    /// The control message sent once the signaling channel opens
    pub fn initial_command(&self, stream_id: &str) -> SignalingMessage {
        match self {
            Role::Publisher => SignalingMessage::Publish {
                stream_id: stream_id.to_owned(),
            },
            Role::Player => SignalingMessage::Play {
                stream_id: stream_id.to_owned(),
            },
        }
    }

    /// Whether this side creates the initial offer
    pub fn initiates_offer(&self) -> bool {
        matches!(self, Role::Publisher)
    }

    /// Whether local media tracks are attached to the peer connection
    pub fn attaches_local_tracks(&self) -> bool {
        matches!(self, Role::Publisher)
    }
}
