//! WebSocket signaling channel
//!
//! Owns the duplex control connection: connect, message dispatch, close.
//! All lifecycle transitions are announced as [`SignalingEvent`]s consumed by
//! the negotiation coordinator; the channel itself holds no negotiation
//! logic.

use futures::{SinkExt, StreamExt};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::{debug, error, info, warn};

use super::protocol::{self, SignalingMessage};
use crate::error::{Error, Result};

type WsStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// Event emitted by the signaling channel
#[derive(Debug)]
pub enum SignalingEvent {
    /// The connection is established and ready for messages
    Opened,
    /// A decoded control message arrived
    Message(SignalingMessage),
    /// An incoming frame could not be decoded; the channel stays open
    ProtocolError(String),
    /// The transport failed
    TransportError(String),
    /// The channel terminated (emitted exactly once)
    Closed,
}

/// Handle to an open signaling connection
///
/// Cheap to clone; all clones share the underlying connection.
#[derive(Clone)]
pub struct SignalingChannel {
    url: String,
    tx: mpsc::UnboundedSender<Message>,
    closed: Arc<AtomicBool>,
    event_tx: mpsc::UnboundedSender<SignalingEvent>,
}

impl SignalingChannel {
    /// Connect to the signaling server
    ///
    /// Establishes the WebSocket connection and starts background tasks for
    /// sending and receiving frames. Returns the channel handle and the
    /// event stream; `Opened` is the first event delivered.
    pub async fn connect(url: &str) -> Result<(Self, mpsc::UnboundedReceiver<SignalingEvent>)> {
        info!("Connecting to signaling server: {}", url);

        let (ws_stream, _) = connect_async(url)
            .await
            .map_err(|e| Error::Transport(format!("Failed to connect: {}", e)))?;

        info!("Connected to signaling server");

        let (write, read) = ws_stream.split();

        let (tx, rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let closed = Arc::new(AtomicBool::new(false));

        let channel = Self {
            url: url.to_owned(),
            tx,
            closed: closed.clone(),
            event_tx: event_tx.clone(),
        };

        let _ = event_tx.send(SignalingEvent::Opened);

        tokio::spawn(Self::sender_task(write, rx));
        tokio::spawn(Self::receiver_task(read, event_tx, closed));

        Ok((channel, event_rx))
    }

    /// Sender task: forwards frames from the channel to the WebSocket
    async fn sender_task(
        mut write: futures::stream::SplitSink<WsStream, Message>,
        mut rx: mpsc::UnboundedReceiver<Message>,
    ) {
        while let Some(msg) = rx.recv().await {
            if let Err(e) = write.send(msg).await {
                error!("Failed to send WebSocket frame: {}", e);
                break;
            }
        }

        debug!("Signaling sender task terminated");
    }

    /// Receiver task: decodes incoming frames and emits events
    async fn receiver_task(
        mut read: futures::stream::SplitStream<WsStream>,
        event_tx: mpsc::UnboundedSender<SignalingEvent>,
        closed: Arc<AtomicBool>,
    ) {
        while let Some(msg_result) = read.next().await {
            match msg_result {
                Ok(Message::Text(text)) => match protocol::decode(&text) {
                    Ok(msg) => {
                        debug!("Received signaling message: {}", text);
                        let _ = event_tx.send(SignalingEvent::Message(msg));
                    }
                    Err(e) => {
                        warn!("Dropping undecodable signaling frame: {}", e);
                        let _ = event_tx.send(SignalingEvent::ProtocolError(e.to_string()));
                    }
                },
                Ok(Message::Close(_)) => {
                    info!("Signaling connection closed by remote");
                    break;
                }
                Err(e) => {
                    error!("Signaling transport error: {}", e);
                    let _ = event_tx.send(SignalingEvent::TransportError(e.to_string()));
                    break;
                }
                _ => {}
            }
        }

        // Exactly one Closed event, whether termination came from the remote,
        // a transport error, or a local close() racing with this task.
        if !closed.swap(true, Ordering::SeqCst) {
            let _ = event_tx.send(SignalingEvent::Closed);
        }

        debug!("Signaling receiver task terminated");
    }

    /// Serialize and send a control message
    ///
    /// Sending on a closed channel is reported as [`Error::ChannelClosed`]
    /// and logged; it is not fatal to the process.
    pub fn send(&self, message: &SignalingMessage) -> Result<()> {
        if self.closed.load(Ordering::SeqCst) {
            warn!(
                "Signaling channel closed, dropping outgoing {} message",
                message.command()
            );
            return Err(Error::ChannelClosed);
        }

        let json = protocol::encode(message)?;
        debug!("Sending signaling message: {}", json);

        self.tx
            .send(Message::Text(json))
            .map_err(|_| Error::ChannelClosed)
    }

    /// Gracefully terminate the channel
    ///
    /// Idempotent: closing an already-closed channel is a no-op.
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }

        info!("Closing signaling channel to {}", self.url);
        let _ = self.tx.send(Message::Close(None));
        let _ = self.event_tx.send(SignalingEvent::Closed);
    }

    /// The URL this channel is connected to
    pub fn url(&self) -> &str {
        &self.url
    }
}
