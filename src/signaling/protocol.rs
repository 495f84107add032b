//! Signaling message schema and encode/decode rules
//!
//! Messages are JSON objects discriminated by a `command` field. Field names
//! are wire compatible with Ant Media style servers (`streamId`, `label` for
//! the SDP media line index, `id` for the SDP mid) and must not be renamed.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Decode failure for an incoming signaling frame
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Payload is not valid JSON
    #[error("malformed payload: {0}")]
    Malformed(String),

    /// Payload has no `command` discriminator
    #[error("missing command discriminator")]
    MissingCommand,

    /// Known command with missing or mistyped fields
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

/// A control message exchanged over the signaling channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum SignalingMessage {
    /// Announce a stream to publish (outgoing)
    #[serde(rename = "publish")]
    Publish {
        /// Session identifier
        #[serde(rename = "streamId")]
        stream_id: String,
    },

    /// Request playback of a stream (outgoing)
    #[serde(rename = "play")]
    Play {
        /// Session identifier
        #[serde(rename = "streamId")]
        stream_id: String,
    },

    /// Server go-ahead to begin negotiation (incoming)
    #[serde(rename = "start")]
    Start {
        /// Session identifier
        #[serde(rename = "streamId")]
        stream_id: String,
    },

    /// Session description offer (both directions)
    #[serde(rename = "offer")]
    Offer {
        /// Session identifier
        #[serde(rename = "streamId")]
        stream_id: String,
        /// Always `"offer"` on the wire
        #[serde(rename = "type")]
        sdp_type: String,
        /// Raw SDP payload
        sdp: String,
    },

    /// Session description answer (both directions)
    #[serde(rename = "answer")]
    Answer {
        /// Session identifier
        #[serde(rename = "streamId")]
        stream_id: String,
        /// Always `"answer"` on the wire
        #[serde(rename = "type")]
        sdp_type: String,
        /// Raw SDP payload
        sdp: String,
    },

    /// ICE candidate exchange (both directions)
    #[serde(rename = "takeCandidate")]
    TakeCandidate {
        /// Session identifier
        #[serde(rename = "streamId")]
        stream_id: String,
        /// Candidate description line
        candidate: String,
        /// SDP media line index
        label: u16,
        /// SDP mid
        id: String,
    },

    /// Error signaled by the server (incoming)
    #[serde(rename = "error")]
    Error {
        /// Session identifier, absent on some server errors
        #[serde(rename = "streamId", default, skip_serializing_if = "Option::is_none")]
        stream_id: Option<String>,
        /// Human-readable error definition
        #[serde(alias = "message")]
        definition: String,
    },

    /// Unrecognized command, preserved verbatim for forward compatibility
    #[serde(skip)]
    Unknown(Value),
}

impl SignalingMessage {
    /// Build an offer message
    pub fn offer(stream_id: &str, sdp: String) -> Self {
        SignalingMessage::Offer {
            stream_id: stream_id.to_owned(),
            sdp_type: "offer".to_owned(),
            sdp,
        }
    }

    /// Build an answer message
    pub fn answer(stream_id: &str, sdp: String) -> Self {
        SignalingMessage::Answer {
            stream_id: stream_id.to_owned(),
            sdp_type: "answer".to_owned(),
            sdp,
        }
    }

    /// Command discriminator as it appears on the wire
    pub fn command(&self) -> &str {
        match self {
            SignalingMessage::Publish { .. } => "publish",
            SignalingMessage::Play { .. } => "play",
            SignalingMessage::Start { .. } => "start",
            SignalingMessage::Offer { .. } => "offer",
            SignalingMessage::Answer { .. } => "answer",
            SignalingMessage::TakeCandidate { .. } => "takeCandidate",
            SignalingMessage::Error { .. } => "error",
            SignalingMessage::Unknown(value) => value
                .get("command")
                .and_then(Value::as_str)
                .unwrap_or("unknown"),
        }
    }

    /// Stream id carried by the message, if any
    pub fn stream_id(&self) -> Option<&str> {
        match self {
            SignalingMessage::Publish { stream_id }
            | SignalingMessage::Play { stream_id }
            | SignalingMessage::Start { stream_id }
            | SignalingMessage::Offer { stream_id, .. }
            | SignalingMessage::Answer { stream_id, .. }
            | SignalingMessage::TakeCandidate { stream_id, .. } => Some(stream_id),
            SignalingMessage::Error { stream_id, .. } => stream_id.as_deref(),
            SignalingMessage::Unknown(value) => value.get("streamId").and_then(Value::as_str),
        }
    }
}

/// Serialize a message to its wire form
pub fn encode(message: &SignalingMessage) -> crate::Result<String> {
    match message {
        SignalingMessage::Unknown(value) => Ok(serde_json::to_string(value)?),
        _ => Ok(serde_json::to_string(message)?),
    }
}

/// Decode an incoming frame
///
/// Unknown commands become [`SignalingMessage::Unknown`] rather than a
/// failure so that newer servers do not break the client.
pub fn decode(raw: &str) -> Result<SignalingMessage, DecodeError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| DecodeError::Malformed(e.to_string()))?;

    let command = value
        .get("command")
        .and_then(Value::as_str)
        .ok_or(DecodeError::MissingCommand)?;

    match command {
        "publish" | "play" | "start" | "offer" | "answer" | "takeCandidate" | "error" => {
            serde_json::from_value(value).map_err(|e| DecodeError::InvalidPayload(e.to_string()))
        }
        _ => Ok(SignalingMessage::Unknown(value)),
    }
}
