//! Top-level client tying the signaling channel to the negotiation
//! coordinator

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::events::ClientEvent;
use crate::peer::PeerConnectionFactory;
use crate::session::coordinator::NegotiationCoordinator;
use crate::signaling::channel::SignalingChannel;

/// Signaling and negotiation client for one media session
///
/// Connects to the signaling server, announces the session according to the
/// configured role and drives the peer-connection engine through
/// description and candidate exchange. Application-visible notifications
/// arrive on the event receiver returned by [`AntMediaClient::start`].
pub struct AntMediaClient {
    stream_id: String,
    channel: SignalingChannel,
    coordinator: JoinHandle<()>,
}

impl AntMediaClient {
    /// Connect and start the session
    ///
    /// # Arguments
    ///
    /// * `config` - Server URL, stream id, role and engine parameters
    /// * `factory` - Constructs the peer-connection capability when
    ///   negotiation begins
    ///
    /// # Returns
    ///
    /// The client handle and the receiver for [`ClientEvent`]s.
    pub async fn start(
        config: ClientConfig,
        factory: Arc<dyn PeerConnectionFactory>,
    ) -> Result<(Self, mpsc::UnboundedReceiver<ClientEvent>)> {
        config.validate()?;
        let stream_id = config.resolved_stream_id();

        info!(
            "Starting {:?} session {} against {}",
            config.role, stream_id, config.signaling_url
        );

        let (channel, signaling_rx) = SignalingChannel::connect(&config.signaling_url).await?;

        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (outbound_tx, mut outbound_rx) = mpsc::unbounded_channel();

        let coordinator = NegotiationCoordinator::spawn(
            Arc::new(config),
            stream_id.clone(),
            factory,
            signaling_rx,
            outbound_tx,
            event_tx,
        );

        // forward coordinator output onto the wire
        let sender = channel.clone();
        tokio::spawn(async move {
            while let Some(msg) = outbound_rx.recv().await {
                match sender.send(&msg) {
                    Ok(()) => {}
                    Err(Error::ChannelClosed) => break,
                    Err(e) => warn!("Failed to send signaling message: {}", e),
                }
            }
        });

        Ok((
            Self {
                stream_id,
                channel,
                coordinator,
            },
            event_rx,
        ))
    }

    /// The resolved stream id of this session
    pub fn stream_id(&self) -> &str {
        &self.stream_id
    }

    /// URL of the signaling server this client is connected to
    pub fn signaling_url(&self) -> &str {
        self.channel.url()
    }

    /// Tear the session down
    ///
    /// Closes the signaling channel; the coordinator observes the close,
    /// releases the peer connection and emits [`ClientEvent::Closed`].
    /// Idempotent.
    pub fn close(&self) {
        self.channel.close();
    }

    /// Close and wait until the coordinator has fully stopped
    pub async fn shutdown(self) {
        self.channel.close();
        if let Err(e) = self.coordinator.await {
            warn!("Coordinator task ended abnormally: {}", e);
        }
    }
}
