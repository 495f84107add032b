//! Configuration types for the signaling client

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::peer::LocalTrack;
use crate::session::role::Role;

/// Main configuration for [`AntMediaClient`](crate::AntMediaClient)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// WebSocket signaling server URL (ws:// or wss://)
    pub signaling_url: String,

    /// Stream identifier; auto-generated when empty or blank
    pub stream_id: String,

    /// Publisher or player
    pub role: Role,

    /// STUN/TURN server URLs passed to the peer-connection engine
    pub ice_servers: Vec<String>,

    /// Label of the data channel created on the peer connection
    pub data_channel_label: String,

    /// Local media tracks attached when publishing
    pub local_tracks: Vec<LocalTrack>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            signaling_url: "ws://localhost:5080/WebRTCAppEE/websocket".to_owned(),
            stream_id: String::new(),
            role: Role::Publisher,
            ice_servers: vec!["stun:stun.l.google.com:19302".to_owned()],
            data_channel_label: "data-channel".to_owned(),
            local_tracks: Vec::new(),
        }
    }
}

impl ClientConfig {
    /// Validate configuration parameters
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `signaling_url` is not a ws:// or wss:// URL
    /// - `data_channel_label` is empty
    pub fn validate(&self) -> crate::Result<()> {
        use crate::Error;

        if !self.signaling_url.starts_with("ws://") && !self.signaling_url.starts_with("wss://") {
            return Err(Error::InvalidConfig(format!(
                "signaling_url must start with ws:// or wss://, got {}",
                self.signaling_url
            )));
        }

        if self.data_channel_label.is_empty() {
            return Err(Error::InvalidConfig(
                "data_channel_label cannot be empty".to_owned(),
            ));
        }

        Ok(())
    }

    /// The stream id to use for the session
    ///
    /// A blank `stream_id` is replaced by a freshly generated UUID.
    pub fn resolved_stream_id(&self) -> String {
        let trimmed = self.stream_id.trim();
        if trimmed.is_empty() {
            Uuid::new_v4().simple().to_string()
        } else {
            trimmed.to_owned()
        }
    }
}
