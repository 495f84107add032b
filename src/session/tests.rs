//! Negotiation scenarios driven through the coordinator with a scripted
//! peer-connection engine.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout};

use super::coordinator::NegotiationCoordinator;
use super::role::Role;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::events::{ClientEvent, ErrorKind};
use crate::peer::{
    Candidate, LocalTrack, PeerConnectionApi, PeerConnectionFactory, PeerConnectionState,
    PeerEvent, PeerEventKind, RemoteTrack, SdpKind, SessionDescription, TrackKind,
};
use crate::signaling::channel::SignalingEvent;
use crate::signaling::protocol::SignalingMessage;

const STREAM: &str = "s1";

/// Scripted peer-connection engine recording every call
struct FakePeer {
    stream_id: String,
    generation: u64,
    events: mpsc::UnboundedSender<PeerEvent>,
    local_descriptions: Mutex<Vec<SessionDescription>>,
    remote_descriptions: Mutex<Vec<SessionDescription>>,
    candidates: Mutex<Vec<Candidate>>,
    tracks: Mutex<Vec<LocalTrack>>,
    data_channels: Mutex<Vec<String>>,
    closed: AtomicBool,
    fail_local_apply: bool,
    /// When set, `create_local_description` blocks until a permit is released
    create_gate: Option<Arc<Semaphore>>,
    /// When set, `set_remote_description` blocks until a permit is released
    remote_gate: Option<Arc<Semaphore>>,
}

impl FakePeer {
    fn emit(&self, kind: PeerEventKind) {
        let _ = self.events.send(PeerEvent {
            stream_id: self.stream_id.clone(),
            generation: self.generation,
            kind,
        });
    }

    fn candidate_lines(&self) -> Vec<String> {
        self.candidates
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.candidate.clone())
            .collect()
    }
}

#[async_trait]
impl PeerConnectionApi for FakePeer {
    async fn create_local_description(&self, kind: SdpKind) -> Result<SessionDescription> {
        if let Some(gate) = &self.create_gate {
            gate.acquire()
                .await
                .map_err(|_| Error::Negotiation("gate closed".to_owned()))?
                .forget();
        }
        Ok(SessionDescription {
            kind,
            sdp: format!("v=0 {} {}", self.stream_id, kind.as_str()),
        })
    }

    async fn set_local_description(&self, desc: SessionDescription) -> Result<()> {
        if self.fail_local_apply {
            return Err(Error::Negotiation("local apply rejected".to_owned()));
        }
        self.local_descriptions.lock().unwrap().push(desc);
        Ok(())
    }

    async fn set_remote_description(&self, desc: SessionDescription) -> Result<()> {
        if let Some(gate) = &self.remote_gate {
            gate.acquire()
                .await
                .map_err(|_| Error::Negotiation("gate closed".to_owned()))?
                .forget();
        }
        self.remote_descriptions.lock().unwrap().push(desc);
        Ok(())
    }

    fn add_remote_candidate(&self, candidate: Candidate) -> Result<()> {
        self.candidates.lock().unwrap().push(candidate);
        Ok(())
    }

    fn add_local_track(&self, track: LocalTrack) -> Result<()> {
        self.tracks.lock().unwrap().push(track);
        Ok(())
    }

    fn create_data_channel(&self, label: &str) -> Result<()> {
        self.data_channels.lock().unwrap().push(label.to_owned());
        Ok(())
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

#[derive(Default)]
struct FakeFactory {
    peers: Mutex<Vec<Arc<FakePeer>>>,
    fail_local_apply: AtomicBool,
    create_gate: Mutex<Option<Arc<Semaphore>>>,
    remote_gate: Mutex<Option<Arc<Semaphore>>>,
}

impl FakeFactory {
    fn peer_count(&self) -> usize {
        self.peers.lock().unwrap().len()
    }

    fn peer(&self, index: usize) -> Arc<FakePeer> {
        self.peers.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl PeerConnectionFactory for FakeFactory {
    async fn create(
        &self,
        stream_id: &str,
        generation: u64,
        _ice_servers: &[String],
        events: mpsc::UnboundedSender<PeerEvent>,
    ) -> Result<Arc<dyn PeerConnectionApi>> {
        let peer = Arc::new(FakePeer {
            stream_id: stream_id.to_owned(),
            generation,
            events,
            local_descriptions: Mutex::new(Vec::new()),
            remote_descriptions: Mutex::new(Vec::new()),
            candidates: Mutex::new(Vec::new()),
            tracks: Mutex::new(Vec::new()),
            data_channels: Mutex::new(Vec::new()),
            closed: AtomicBool::new(false),
            fail_local_apply: self.fail_local_apply.load(Ordering::SeqCst),
            create_gate: self.create_gate.lock().unwrap().clone(),
            remote_gate: self.remote_gate.lock().unwrap().clone(),
        });
        self.peers.lock().unwrap().push(peer.clone());
        Ok(peer)
    }
}

struct Harness {
    signaling: mpsc::UnboundedSender<SignalingEvent>,
    outbound: mpsc::UnboundedReceiver<SignalingMessage>,
    events: mpsc::UnboundedReceiver<ClientEvent>,
    factory: Arc<FakeFactory>,
    _task: JoinHandle<()>,
}

/// Opt into log output with `RUST_LOG=debug cargo test`
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn harness_with(role: Role, factory: Arc<FakeFactory>) -> Harness {
    init_tracing();

    let config = ClientConfig {
        stream_id: STREAM.to_owned(),
        role,
        local_tracks: vec![LocalTrack {
            id: "video0".to_owned(),
            kind: TrackKind::Video,
        }],
        ..Default::default()
    };

    let (signaling_tx, signaling_rx) = mpsc::unbounded_channel();
    let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let task = NegotiationCoordinator::spawn(
        Arc::new(config),
        STREAM.to_owned(),
        factory.clone(),
        signaling_rx,
        outbound_tx,
        event_tx,
    );

    Harness {
        signaling: signaling_tx,
        outbound: outbound_rx,
        events: event_rx,
        factory,
        _task: task,
    }
}

fn harness(role: Role) -> Harness {
    harness_with(role, Arc::new(FakeFactory::default()))
}

impl Harness {
    fn open(&self) {
        self.signaling.send(SignalingEvent::Opened).unwrap();
    }

    fn message(&self, msg: SignalingMessage) {
        self.signaling.send(SignalingEvent::Message(msg)).unwrap();
    }

    async fn next_outbound(&mut self) -> SignalingMessage {
        timeout(Duration::from_secs(1), self.outbound.recv())
            .await
            .expect("timed out waiting for an outgoing message")
            .expect("coordinator dropped the outbound sender")
    }

    async fn next_event(&mut self) -> ClientEvent {
        timeout(Duration::from_secs(1), self.events.recv())
            .await
            .expect("timed out waiting for a client event")
            .expect("coordinator dropped the event sender")
    }

    /// Let spawned description jobs run to completion
    async fn settle(&self) {
        sleep(Duration::from_millis(50)).await;
    }
}

async fn wait_until(description: &str, condition: impl Fn() -> bool) {
    for _ in 0..100 {
        if condition() {
            return;
        }
        sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not reached: {}", description);
}

fn start_msg() -> SignalingMessage {
    SignalingMessage::Start {
        stream_id: STREAM.to_owned(),
    }
}

fn candidate_msg(n: u16) -> SignalingMessage {
    SignalingMessage::TakeCandidate {
        stream_id: STREAM.to_owned(),
        candidate: format!("candidate:{}", n),
        label: 0,
        id: "0".to_owned(),
    }
}

#[tokio::test]
async fn test_publisher_happy_path() {
    let mut h = harness(Role::Publisher);
    h.open();

    assert_eq!(
        h.next_outbound().await,
        SignalingMessage::Publish {
            stream_id: STREAM.to_owned()
        }
    );

    h.message(start_msg());

    // offer goes out only after the local description was applied
    match h.next_outbound().await {
        SignalingMessage::Offer {
            stream_id,
            sdp_type,
            ..
        } => {
            assert_eq!(stream_id, STREAM);
            assert_eq!(sdp_type, "offer");
        }
        other => panic!("expected offer, got {:?}", other),
    }

    let peer = h.factory.peer(0);
    assert_eq!(
        peer.data_channels.lock().unwrap().as_slice(),
        ["data-channel"]
    );
    assert_eq!(peer.tracks.lock().unwrap().len(), 1);
    assert_eq!(peer.local_descriptions.lock().unwrap().len(), 1);

    h.message(SignalingMessage::answer(STREAM, "v=0 remote answer".to_owned()));
    wait_until("remote answer applied", || {
        peer.remote_descriptions.lock().unwrap().len() == 1
    })
    .await;

    // a locally gathered candidate is signaled right away
    peer.emit(PeerEventKind::LocalCandidate(Candidate {
        candidate: "candidate:local".to_owned(),
        sdp_mline_index: 0,
        sdp_mid: "0".to_owned(),
    }));
    match h.next_outbound().await {
        SignalingMessage::TakeCandidate { candidate, .. } => {
            assert_eq!(candidate, "candidate:local");
        }
        other => panic!("expected takeCandidate, got {:?}", other),
    }

    // connectivity is driven by the engine, not by a signaling message
    peer.emit(PeerEventKind::ConnectionState(PeerConnectionState::Connected));
    assert!(matches!(
        h.next_event().await,
        ClientEvent::ConnectionStateChanged(PeerConnectionState::Connected)
    ));
}

#[tokio::test]
async fn test_player_happy_path() {
    let mut h = harness(Role::Player);
    h.open();

    assert_eq!(
        h.next_outbound().await,
        SignalingMessage::Play {
            stream_id: STREAM.to_owned()
        }
    );

    h.message(SignalingMessage::offer(STREAM, "v=0 remote offer".to_owned()));

    match h.next_outbound().await {
        SignalingMessage::Answer { sdp_type, .. } => assert_eq!(sdp_type, "answer"),
        other => panic!("expected answer, got {:?}", other),
    }

    let peer = h.factory.peer(0);
    assert_eq!(
        peer.remote_descriptions.lock().unwrap()[0].kind,
        SdpKind::Offer
    );
    assert_eq!(
        peer.local_descriptions.lock().unwrap()[0].kind,
        SdpKind::Answer
    );
    // the player attaches no local tracks
    assert!(peer.tracks.lock().unwrap().is_empty());

    h.message(candidate_msg(1));
    wait_until("remote candidate applied", || {
        peer.candidates.lock().unwrap().len() == 1
    })
    .await;

    peer.emit(PeerEventKind::TrackReceived(RemoteTrack {
        id: "video0".to_owned(),
        kind: TrackKind::Video,
    }));
    assert!(matches!(
        h.next_event().await,
        ClientEvent::TrackReceived(track) if track.id == "video0"
    ));

    peer.emit(PeerEventKind::DataChannelOpen);
    peer.emit(PeerEventKind::DataChannelMessage(b"hi".to_vec()));
    peer.emit(PeerEventKind::DataChannelClose);
    assert!(matches!(h.next_event().await, ClientEvent::DataChannelOpen));
    assert!(matches!(
        h.next_event().await,
        ClientEvent::DataChannelMessage(data) if data == b"hi"
    ));
    assert!(matches!(h.next_event().await, ClientEvent::DataChannelClose));
}

#[tokio::test]
async fn test_candidates_before_start_are_buffered_in_order() {
    let mut h = harness(Role::Player);
    h.open();
    h.next_outbound().await; // play

    h.message(candidate_msg(1));
    h.message(candidate_msg(2));
    h.settle().await;
    assert_eq!(h.factory.peer_count(), 0);

    h.message(start_msg());
    wait_until("peer connection created", || h.factory.peer_count() == 1).await;

    let peer = h.factory.peer(0);
    wait_until("buffered candidates flushed", || {
        peer.candidates.lock().unwrap().len() == 2
    })
    .await;
    assert_eq!(peer.candidate_lines(), ["candidate:1", "candidate:2"]);

    // a candidate arriving afterwards lands behind the buffered ones
    h.message(candidate_msg(3));
    wait_until("late candidate applied", || {
        peer.candidates.lock().unwrap().len() == 3
    })
    .await;
    assert_eq!(
        peer.candidate_lines(),
        ["candidate:1", "candidate:2", "candidate:3"]
    );
}

#[tokio::test]
async fn test_malformed_frame_reports_protocol_error_without_failing() {
    let mut h = harness(Role::Publisher);
    h.open();
    h.next_outbound().await; // publish

    h.signaling
        .send(SignalingEvent::ProtocolError(
            "missing command discriminator".to_owned(),
        ))
        .unwrap();

    assert!(matches!(
        h.next_event().await,
        ClientEvent::Error {
            kind: ErrorKind::Protocol,
            ..
        }
    ));

    // negotiation proceeds untouched
    h.message(start_msg());
    assert!(matches!(
        h.next_outbound().await,
        SignalingMessage::Offer { .. }
    ));
}

#[tokio::test]
async fn test_glare_latest_offer_wins() {
    let factory = Arc::new(FakeFactory::default());
    let gate = Arc::new(Semaphore::new(0));
    *factory.create_gate.lock().unwrap() = Some(gate.clone());

    let mut h = harness_with(Role::Player, factory);
    h.open();
    h.next_outbound().await; // play

    h.message(SignalingMessage::offer(STREAM, "first".to_owned()));
    h.message(SignalingMessage::offer(STREAM, "second".to_owned()));

    wait_until("peer connection created", || h.factory.peer_count() == 1).await;
    let peer = h.factory.peer(0);

    // the superseded offer never reaches the engine
    wait_until("winning offer applied", || {
        peer.remote_descriptions.lock().unwrap().len() == 1
    })
    .await;
    assert_eq!(peer.remote_descriptions.lock().unwrap()[0].sdp, "second");

    gate.add_permits(1);

    assert!(matches!(
        h.next_outbound().await,
        SignalingMessage::Answer { .. }
    ));
    h.settle().await;
    assert!(h.outbound.try_recv().is_err());
    assert_eq!(peer.remote_descriptions.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_glare_offer_applied_mid_flight_is_superseded() {
    let factory = Arc::new(FakeFactory::default());
    let gate = Arc::new(Semaphore::new(0));
    *factory.remote_gate.lock().unwrap() = Some(gate.clone());

    let mut h = harness_with(Role::Player, factory);
    h.open();
    h.next_outbound().await; // play

    // park the first offer's apply inside the engine, then supersede it
    h.message(SignalingMessage::offer(STREAM, "first".to_owned()));
    wait_until("peer connection created", || h.factory.peer_count() == 1).await;
    h.settle().await;
    h.message(SignalingMessage::offer(STREAM, "second".to_owned()));

    gate.add_permits(2);

    // exactly one answer, for the latest offer
    assert!(matches!(
        h.next_outbound().await,
        SignalingMessage::Answer { .. }
    ));
    h.settle().await;
    assert!(h.outbound.try_recv().is_err());

    // the winning offer is the engine's last-applied remote description
    let peer = h.factory.peer(0);
    let remotes = peer.remote_descriptions.lock().unwrap();
    assert_eq!(remotes.last().unwrap().sdp, "second");
}

#[tokio::test]
async fn test_local_apply_failure_fails_session_and_sends_nothing() {
    let factory = Arc::new(FakeFactory::default());
    factory.fail_local_apply.store(true, Ordering::SeqCst);

    let mut h = harness_with(Role::Publisher, factory);
    h.open();
    h.next_outbound().await; // publish

    h.message(start_msg());

    assert!(matches!(
        h.next_event().await,
        ClientEvent::Error {
            kind: ErrorKind::Negotiation,
            ..
        }
    ));

    h.settle().await;
    assert!(h.outbound.try_recv().is_err());

    let peer = h.factory.peer(0);
    assert!(peer.closed.load(Ordering::SeqCst));

    // the failed session ignores further candidates, inbound and outbound
    h.message(candidate_msg(1));
    peer.emit(PeerEventKind::LocalCandidate(Candidate {
        candidate: "candidate:late".to_owned(),
        sdp_mline_index: 0,
        sdp_mid: "0".to_owned(),
    }));
    h.settle().await;
    assert!(peer.candidates.lock().unwrap().is_empty());
    assert!(h.outbound.try_recv().is_err());
}

#[tokio::test]
async fn test_remote_error_fails_session() {
    let mut h = harness(Role::Publisher);
    h.open();
    h.next_outbound().await; // publish

    h.message(SignalingMessage::Error {
        stream_id: Some(STREAM.to_owned()),
        definition: "no_stream_exist".to_owned(),
    });

    assert!(matches!(
        h.next_event().await,
        ClientEvent::Error {
            kind: ErrorKind::RemoteSignaled,
            message,
        } if message == "no_stream_exist"
    ));

    // a late start must not revive the failed session
    h.message(start_msg());
    h.settle().await;
    assert_eq!(h.factory.peer_count(), 0);
}

#[tokio::test]
async fn test_stale_description_after_failure_is_discarded() {
    let factory = Arc::new(FakeFactory::default());
    let gate = Arc::new(Semaphore::new(0));
    *factory.create_gate.lock().unwrap() = Some(gate.clone());

    let mut h = harness_with(Role::Publisher, factory);
    h.open();
    h.next_outbound().await; // publish

    h.message(start_msg());
    wait_until("peer connection created", || h.factory.peer_count() == 1).await;

    // fail the session while the offer job is parked inside the engine
    h.message(SignalingMessage::Error {
        stream_id: Some(STREAM.to_owned()),
        definition: "publish_timeout".to_owned(),
    });
    assert!(matches!(
        h.next_event().await,
        ClientEvent::Error {
            kind: ErrorKind::RemoteSignaled,
            ..
        }
    ));

    // the late completion must not produce an outgoing offer
    gate.add_permits(1);
    h.settle().await;
    assert!(h.outbound.try_recv().is_err());
}

#[tokio::test]
async fn test_transport_error_mid_negotiation_fails_session() {
    let mut h = harness(Role::Publisher);
    h.open();
    h.next_outbound().await; // publish

    h.signaling
        .send(SignalingEvent::TransportError("connection reset".to_owned()))
        .unwrap();

    assert!(matches!(
        h.next_event().await,
        ClientEvent::Error {
            kind: ErrorKind::Transport,
            ..
        }
    ));

    h.message(start_msg());
    h.settle().await;
    assert_eq!(h.factory.peer_count(), 0);
}

#[tokio::test]
async fn test_channel_close_tears_down_session() {
    let mut h = harness(Role::Publisher);
    h.open();
    h.next_outbound().await; // publish
    h.message(start_msg());
    h.next_outbound().await; // offer

    h.signaling.send(SignalingEvent::Closed).unwrap();

    assert!(matches!(h.next_event().await, ClientEvent::Closed));
    assert!(h.factory.peer(0).closed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_messages_for_unknown_streams_are_ignored() {
    let mut h = harness(Role::Player);
    h.open();
    h.next_outbound().await; // play

    h.message(SignalingMessage::Start {
        stream_id: "someone-else".to_owned(),
    });
    h.settle().await;
    assert_eq!(h.factory.peer_count(), 0);
}

#[tokio::test]
async fn test_unknown_commands_are_ignored() {
    let mut h = harness(Role::Publisher);
    h.open();
    h.next_outbound().await; // publish

    h.message(SignalingMessage::Unknown(json!({
        "command": "notification",
        "streamId": STREAM,
        "definition": "bitrateMeasurement",
    })));
    h.settle().await;
    assert!(h.events.try_recv().is_err());

    // and negotiation still proceeds
    h.message(start_msg());
    assert!(matches!(
        h.next_outbound().await,
        SignalingMessage::Offer { .. }
    ));
}

#[tokio::test]
async fn test_duplicate_start_does_not_renegotiate() {
    let mut h = harness(Role::Publisher);
    h.open();
    h.next_outbound().await; // publish
    h.message(start_msg());
    h.next_outbound().await; // offer

    h.message(start_msg());
    h.settle().await;
    assert_eq!(h.factory.peer_count(), 1);
    assert!(h.outbound.try_recv().is_err());
}
