//! Negotiation coordinator
//!
//! The state machine owning the peer-session lifecycle. Signaling events,
//! peer-connection engine events and description-job completions all feed
//! into one actor loop, so every state transition is applied atomically.
//!
//! Description work (create/apply) is suspending inside the engine, so it
//! runs in spawned jobs tagged with the session generation and negotiation
//! epoch; a completion whose tags no longer match the session is stale
//! (teardown, or a newer remote offer won a glare race) and is dropped.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::role::Role;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::events::{ClientEvent, ErrorKind};
use crate::peer::{
    Candidate, PeerConnectionApi, PeerConnectionFactory, PeerConnectionState, PeerEvent,
    PeerEventKind, SdpKind, SessionDescription,
};
use crate::signaling::channel::SignalingEvent;
use crate::signaling::protocol::SignalingMessage;

/// Lifecycle state of a peer session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No negotiation started
    Idle,
    /// `play` sent, waiting for the server go-ahead or a remote offer
    AwaitingRemoteStart,
    /// Description/candidate exchange in progress
    Negotiating,
    /// Peer connectivity established
    Connected,
    /// Irrecoverable error; terminal
    Failed,
    /// Torn down; terminal
    Closed,
}

impl SessionState {
    fn is_terminal(self) -> bool {
        matches!(self, SessionState::Failed | SessionState::Closed)
    }
}

/// One negotiation lifecycle, owned exclusively by the coordinator
struct PeerSession {
    role: Role,
    state: SessionState,
    /// Identifies the capability instance; events and job completions from
    /// older generations are stale
    generation: u64,
    /// Bumped on every remote offer so an outstanding local description job
    /// for a superseded offer is discarded
    epoch: u64,
    /// Mirror of `epoch` readable from spawned description jobs
    shared_epoch: Arc<AtomicU64>,
    /// Serializes description jobs; a superseded job re-checks the epoch
    /// under this lock and must not reach the engine after its successor
    job_lock: Arc<Mutex<()>>,
    capability: Option<Arc<dyn PeerConnectionApi>>,
    /// Candidates received before the capability exists, in arrival order
    pending_candidates: Vec<Candidate>,
    local_description_set: bool,
    remote_description_set: bool,
}

impl PeerSession {
    fn new(role: Role, generation: u64) -> Self {
        Self {
            role,
            state: SessionState::Idle,
            generation,
            epoch: 0,
            shared_epoch: Arc::new(AtomicU64::new(0)),
            job_lock: Arc::new(Mutex::new(())),
            capability: None,
            pending_candidates: Vec::new(),
            local_description_set: false,
            remote_description_set: false,
        }
    }

    fn bump_epoch(&mut self) {
        self.epoch += 1;
        self.shared_epoch.store(self.epoch, Ordering::SeqCst);
    }

    /// Invalidate outstanding jobs and capability events for this session
    fn invalidate(&mut self) {
        self.generation += 1;
        self.bump_epoch();
    }
}

/// Completion of a spawned description job
enum JobOutcome {
    /// A local description was created and confirmed applied; it may now be
    /// sent to the remote
    LocalReady {
        stream_id: String,
        generation: u64,
        epoch: u64,
        desc: SessionDescription,
    },
    /// A remote description was confirmed applied
    RemoteApplied {
        stream_id: String,
        generation: u64,
        epoch: u64,
        kind: SdpKind,
    },
    /// The job failed; fatal to the session if still current
    Failed {
        stream_id: String,
        generation: u64,
        epoch: u64,
        stage: &'static str,
        message: String,
    },
}

/// The negotiation state machine actor
pub struct NegotiationCoordinator {
    config: Arc<ClientConfig>,
    stream_id: String,
    factory: Arc<dyn PeerConnectionFactory>,
    sessions: HashMap<String, PeerSession>,
    outbound: mpsc::UnboundedSender<SignalingMessage>,
    events: mpsc::UnboundedSender<ClientEvent>,
    peer_tx: mpsc::UnboundedSender<PeerEvent>,
    job_tx: mpsc::UnboundedSender<JobOutcome>,
    next_generation: u64,
}

impl NegotiationCoordinator {
    /// Spawn the coordinator actor
    ///
    /// # Arguments
    ///
    /// * `config` - Client configuration (role, ICE servers, tracks)
    /// * `stream_id` - Resolved session identifier
    /// * `factory` - Constructs peer-connection capabilities on demand
    /// * `signaling_rx` - Events from the signaling channel
    /// * `outbound` - Sink for messages to send to the remote
    /// * `events` - Application-facing event surface
    pub fn spawn(
        config: Arc<ClientConfig>,
        stream_id: String,
        factory: Arc<dyn PeerConnectionFactory>,
        signaling_rx: mpsc::UnboundedReceiver<SignalingEvent>,
        outbound: mpsc::UnboundedSender<SignalingMessage>,
        events: mpsc::UnboundedSender<ClientEvent>,
    ) -> JoinHandle<()> {
        let (peer_tx, peer_rx) = mpsc::unbounded_channel();
        let (job_tx, job_rx) = mpsc::unbounded_channel();

        let coordinator = Self {
            config,
            stream_id,
            factory,
            sessions: HashMap::new(),
            outbound,
            events,
            peer_tx,
            job_tx,
            next_generation: 0,
        };

        tokio::spawn(coordinator.run(signaling_rx, peer_rx, job_rx))
    }

    /// Actor loop: the single mutual-exclusion boundary for all transitions
    async fn run(
        mut self,
        mut signaling_rx: mpsc::UnboundedReceiver<SignalingEvent>,
        mut peer_rx: mpsc::UnboundedReceiver<PeerEvent>,
        mut job_rx: mpsc::UnboundedReceiver<JobOutcome>,
    ) {
        loop {
            tokio::select! {
                event = signaling_rx.recv() => match event {
                    Some(event) => {
                        if self.handle_signaling(event).await {
                            break;
                        }
                    }
                    None => break,
                },
                Some(event) = peer_rx.recv() => self.handle_peer_event(event),
                Some(outcome) = job_rx.recv() => self.handle_job_outcome(outcome),
            }
        }

        debug!("Negotiation coordinator stopped");
    }

    /// Returns true when the coordinator should stop
    async fn handle_signaling(&mut self, event: SignalingEvent) -> bool {
        match event {
            SignalingEvent::Opened => {
                self.on_channel_open();
                false
            }
            SignalingEvent::Message(msg) => {
                self.on_message(msg).await;
                false
            }
            SignalingEvent::ProtocolError(message) => {
                // Malformed frame: reported and dropped, negotiation continues
                self.emit(ClientEvent::Error {
                    kind: ErrorKind::Protocol,
                    message,
                });
                false
            }
            SignalingEvent::TransportError(message) => {
                self.on_transport_error(message);
                false
            }
            SignalingEvent::Closed => {
                self.on_channel_closed();
                true
            }
        }
    }

    fn on_channel_open(&mut self) {
        let role = self.config.role;
        let stream_id = self.stream_id.clone();

        info!(
            "Signaling channel open, announcing session {} as {:?}",
            stream_id, role
        );

        let generation = self.next_generation;
        self.next_generation += 1;

        // the session exists in Idle until the announce command is out
        self.sessions
            .insert(stream_id.clone(), PeerSession::new(role, generation));
        self.send(role.initial_command(&stream_id));

        if let Some(session) = self.sessions.get_mut(&stream_id) {
            session.state = if role.initiates_offer() {
                SessionState::Negotiating
            } else {
                SessionState::AwaitingRemoteStart
            };
        }
    }

    async fn on_message(&mut self, msg: SignalingMessage) {
        let stream_id = msg
            .stream_id()
            .unwrap_or(&self.stream_id)
            .to_owned();

        if !self.sessions.contains_key(&stream_id) {
            debug!(
                "Ignoring {} message for unknown stream {}",
                msg.command(),
                stream_id
            );
            return;
        }

        match msg {
            SignalingMessage::Start { .. } => self.on_start(&stream_id).await,
            SignalingMessage::Offer { sdp, .. } => self.on_offer(&stream_id, sdp).await,
            SignalingMessage::Answer { sdp, .. } => self.on_answer(&stream_id, sdp),
            SignalingMessage::TakeCandidate {
                candidate,
                label,
                id,
                ..
            } => self.on_remote_candidate(
                &stream_id,
                Candidate {
                    candidate,
                    sdp_mline_index: label,
                    sdp_mid: id,
                },
            ),
            SignalingMessage::Error { definition, .. } => {
                self.on_remote_error(&stream_id, definition)
            }
            other => debug!("Ignoring {} message", other.command()),
        }
    }

    /// Server go-ahead: construct the capability and, as initiator, create
    /// the offer
    async fn on_start(&mut self, stream_id: &str) {
        let role = match self.sessions.get(stream_id) {
            Some(session) if session.state.is_terminal() => return,
            Some(session) if session.capability.is_some() => {
                debug!("Duplicate start for stream {}, ignoring", stream_id);
                return;
            }
            Some(session) => session.role,
            None => return,
        };

        info!("Negotiation starting for stream {}", stream_id);

        if !self.ensure_capability(stream_id).await {
            return;
        }

        if let Some(session) = self.sessions.get_mut(stream_id) {
            session.state = SessionState::Negotiating;
        }

        if role.initiates_offer() {
            self.spawn_local_description(stream_id, SdpKind::Offer);
        }
    }

    /// Remote offer: apply it and answer. A second offer before our answer
    /// went out supersedes the first (last-received offer wins).
    async fn on_offer(&mut self, stream_id: &str, sdp: String) {
        {
            let Some(session) = self.sessions.get_mut(stream_id) else {
                return;
            };
            if session.state.is_terminal() {
                return;
            }
            if session.state == SessionState::Negotiating && session.local_description_set {
                debug!("Renegotiation offer for stream {}", stream_id);
            }
            // Abandon any outstanding description job for an earlier offer;
            // only the latest remote offer is answered.
            session.bump_epoch();
            session.state = SessionState::Negotiating;
        }

        info!("Received offer for stream {}", stream_id);

        if !self.ensure_capability(stream_id).await {
            return;
        }

        self.spawn_apply_offer(stream_id, sdp);
    }

    /// Remote answer to our offer (initiator path)
    fn on_answer(&mut self, stream_id: &str, sdp: String) {
        let Some(session) = self.sessions.get(stream_id) else {
            return;
        };
        if session.state.is_terminal() {
            return;
        }
        let Some(capability) = session.capability.clone() else {
            warn!(
                "Answer for stream {} before a peer connection exists, dropping",
                stream_id
            );
            return;
        };
        if !session.local_description_set {
            warn!(
                "Answer for stream {} before our offer was applied, dropping",
                stream_id
            );
            return;
        }

        info!("Received answer for stream {}", stream_id);

        let generation = session.generation;
        let epoch = session.epoch;
        let shared_epoch = session.shared_epoch.clone();
        let job_lock = session.job_lock.clone();
        let job_tx = self.job_tx.clone();
        let stream_id = stream_id.to_owned();

        tokio::spawn(async move {
            let _guard = job_lock.lock().await;
            if shared_epoch.load(Ordering::SeqCst) != epoch {
                debug!("Skipping superseded answer apply for stream {}", stream_id);
                return;
            }
            let desc = SessionDescription {
                kind: SdpKind::Answer,
                sdp,
            };
            let outcome = match capability.set_remote_description(desc).await {
                Ok(()) => JobOutcome::RemoteApplied {
                    stream_id,
                    generation,
                    epoch,
                    kind: SdpKind::Answer,
                },
                Err(e) => JobOutcome::Failed {
                    stream_id,
                    generation,
                    epoch,
                    stage: "apply remote answer",
                    message: e.to_string(),
                },
            };
            let _ = job_tx.send(outcome);
        });
    }

    /// Remote candidate: apply immediately if the capability exists,
    /// otherwise buffer until it does. Candidates are never dropped due to
    /// ordering races between start/offer arrival and candidate arrival.
    fn on_remote_candidate(&mut self, stream_id: &str, candidate: Candidate) {
        let capability = {
            let Some(session) = self.sessions.get_mut(stream_id) else {
                return;
            };
            if session.state.is_terminal() {
                return;
            }
            match session.capability.clone() {
                Some(capability) => capability,
                None => {
                    debug!(
                        "Buffering candidate for stream {} until the peer connection exists",
                        stream_id
                    );
                    session.pending_candidates.push(candidate);
                    return;
                }
            }
        };

        if let Err(e) = capability.add_remote_candidate(candidate) {
            self.fail_session(
                stream_id,
                ErrorKind::Negotiation,
                format!("Candidate rejected: {}", e),
            );
        }
    }

    fn on_remote_error(&mut self, stream_id: &str, definition: String) {
        warn!("Server error for stream {}: {}", stream_id, definition);
        self.fail_session(stream_id, ErrorKind::RemoteSignaled, definition);
    }

    /// Transport failure: fatal to sessions mid-negotiation; an established
    /// session survives the loss of the signaling channel.
    fn on_transport_error(&mut self, message: String) {
        warn!("Signaling transport error: {}", message);

        let active: Vec<String> = self
            .sessions
            .iter()
            .filter(|(_, s)| {
                matches!(
                    s.state,
                    SessionState::AwaitingRemoteStart | SessionState::Negotiating
                )
            })
            .map(|(id, _)| id.clone())
            .collect();

        self.emit(ClientEvent::Error {
            kind: ErrorKind::Transport,
            message,
        });

        for stream_id in active {
            self.mark_failed(&stream_id);
        }
    }

    /// Channel teardown: release capabilities, discard buffered candidates
    fn on_channel_closed(&mut self) {
        info!("Signaling channel closed, tearing down sessions");

        for session in self.sessions.values_mut() {
            if session.state.is_terminal() {
                continue;
            }
            session.state = SessionState::Closed;
            session.invalidate();
            session.pending_candidates.clear();
            if let Some(capability) = session.capability.take() {
                capability.close();
            }
        }

        self.emit(ClientEvent::Closed);
    }

    /// Construct the peer-connection capability if the session does not have
    /// one yet, then flush buffered candidates in arrival order.
    ///
    /// Returns false when the session is gone or was failed by a setup error.
    async fn ensure_capability(&mut self, stream_id: &str) -> bool {
        let (generation, role, exists) = match self.sessions.get(stream_id) {
            Some(session) => (session.generation, session.role, session.capability.is_some()),
            None => return false,
        };
        if exists {
            return true;
        }

        debug!("Creating peer connection for stream {}", stream_id);

        let created = self
            .factory
            .create(
                stream_id,
                generation,
                &self.config.ice_servers,
                self.peer_tx.clone(),
            )
            .await;

        let capability = match created {
            Ok(capability) => capability,
            Err(e) => {
                self.fail_session(
                    stream_id,
                    ErrorKind::Negotiation,
                    format!("Peer connection setup failed: {}", e),
                );
                return false;
            }
        };

        if let Err(e) = capability.create_data_channel(&self.config.data_channel_label) {
            self.fail_session(
                stream_id,
                ErrorKind::Negotiation,
                format!("Data channel setup failed: {}", e),
            );
            return false;
        }

        if role.attaches_local_tracks() {
            for track in &self.config.local_tracks {
                if let Err(e) = capability.add_local_track(track.clone()) {
                    self.fail_session(
                        stream_id,
                        ErrorKind::Negotiation,
                        format!("Failed to attach local track {}: {}", track.id, e),
                    );
                    return false;
                }
            }
        }

        let pending = match self.sessions.get_mut(stream_id) {
            Some(session) => {
                session.capability = Some(capability.clone());
                std::mem::take(&mut session.pending_candidates)
            }
            None => return false,
        };

        if !pending.is_empty() {
            debug!(
                "Flushing {} buffered candidates for stream {}",
                pending.len(),
                stream_id
            );
        }
        for candidate in pending {
            if let Err(e) = capability.add_remote_candidate(candidate) {
                self.fail_session(
                    stream_id,
                    ErrorKind::Negotiation,
                    format!("Buffered candidate rejected: {}", e),
                );
                return false;
            }
        }

        true
    }

    /// Create a local description, confirm it applied, then report back
    fn spawn_local_description(&self, stream_id: &str, kind: SdpKind) {
        let Some(session) = self.sessions.get(stream_id) else {
            return;
        };
        let Some(capability) = session.capability.clone() else {
            return;
        };
        let generation = session.generation;
        let epoch = session.epoch;
        let shared_epoch = session.shared_epoch.clone();
        let job_lock = session.job_lock.clone();
        let job_tx = self.job_tx.clone();
        let stream_id = stream_id.to_owned();

        tokio::spawn(async move {
            let _guard = job_lock.lock().await;
            if shared_epoch.load(Ordering::SeqCst) != epoch {
                debug!(
                    "Skipping superseded local {} for stream {}",
                    kind.as_str(),
                    stream_id
                );
                return;
            }
            let outcome =
                match Self::create_and_apply_local(capability.as_ref(), kind).await {
                    Ok(desc) => JobOutcome::LocalReady {
                        stream_id,
                        generation,
                        epoch,
                        desc,
                    },
                    Err(e) => JobOutcome::Failed {
                        stream_id,
                        generation,
                        epoch,
                        stage: "create local description",
                        message: e.to_string(),
                    },
                };
            let _ = job_tx.send(outcome);
        });
    }

    /// Apply the remote offer, then create and apply the local answer
    fn spawn_apply_offer(&self, stream_id: &str, sdp: String) {
        let Some(session) = self.sessions.get(stream_id) else {
            return;
        };
        let Some(capability) = session.capability.clone() else {
            return;
        };
        let generation = session.generation;
        let epoch = session.epoch;
        let shared_epoch = session.shared_epoch.clone();
        let job_lock = session.job_lock.clone();
        let job_tx = self.job_tx.clone();
        let stream_id = stream_id.to_owned();

        tokio::spawn(async move {
            // Serialized per session: an apply for an offer superseded before
            // this point never reaches the engine; once in flight it finishes,
            // and the winning offer's job runs strictly after it.
            let _guard = job_lock.lock().await;
            if shared_epoch.load(Ordering::SeqCst) != epoch {
                debug!("Skipping superseded offer apply for stream {}", stream_id);
                return;
            }
            let remote = SessionDescription {
                kind: SdpKind::Offer,
                sdp,
            };
            if let Err(e) = capability.set_remote_description(remote).await {
                let _ = job_tx.send(JobOutcome::Failed {
                    stream_id,
                    generation,
                    epoch,
                    stage: "apply remote offer",
                    message: e.to_string(),
                });
                return;
            }
            let _ = job_tx.send(JobOutcome::RemoteApplied {
                stream_id: stream_id.clone(),
                generation,
                epoch,
                kind: SdpKind::Offer,
            });

            let outcome =
                match Self::create_and_apply_local(capability.as_ref(), SdpKind::Answer).await {
                    Ok(desc) => JobOutcome::LocalReady {
                        stream_id,
                        generation,
                        epoch,
                        desc,
                    },
                    Err(e) => JobOutcome::Failed {
                        stream_id,
                        generation,
                        epoch,
                        stage: "create local answer",
                        message: e.to_string(),
                    },
                };
            let _ = job_tx.send(outcome);
        });
    }

    async fn create_and_apply_local(
        capability: &dyn PeerConnectionApi,
        kind: SdpKind,
    ) -> Result<SessionDescription, Error> {
        let desc = capability.create_local_description(kind).await?;
        capability.set_local_description(desc.clone()).await?;
        Ok(desc)
    }

    fn handle_job_outcome(&mut self, outcome: JobOutcome) {
        match outcome {
            JobOutcome::LocalReady {
                stream_id,
                generation,
                epoch,
                desc,
            } => {
                if !self.job_is_current(&stream_id, generation, epoch) {
                    debug!(
                        "Discarding stale local {} for stream {}",
                        desc.kind.as_str(),
                        stream_id
                    );
                    return;
                }
                if let Some(session) = self.sessions.get_mut(&stream_id) {
                    if desc.kind == SdpKind::Answer && !session.remote_description_set {
                        warn!(
                            "Answer ready before the remote offer was applied for stream {}",
                            stream_id
                        );
                    }
                    session.local_description_set = true;
                }

                debug!(
                    "Local {} applied for stream {}, sending",
                    desc.kind.as_str(),
                    stream_id
                );
                let msg = match desc.kind {
                    SdpKind::Offer => SignalingMessage::offer(&stream_id, desc.sdp),
                    SdpKind::Answer => SignalingMessage::answer(&stream_id, desc.sdp),
                };
                self.send(msg);
            }
            JobOutcome::RemoteApplied {
                stream_id,
                generation,
                epoch,
                kind,
            } => {
                if !self.job_is_current(&stream_id, generation, epoch) {
                    debug!(
                        "Discarding stale remote {} apply for stream {}",
                        kind.as_str(),
                        stream_id
                    );
                    return;
                }
                if let Some(session) = self.sessions.get_mut(&stream_id) {
                    session.remote_description_set = true;
                }
                debug!(
                    "Remote {} applied for stream {}",
                    kind.as_str(),
                    stream_id
                );
            }
            JobOutcome::Failed {
                stream_id,
                generation,
                epoch,
                stage,
                message,
            } => {
                if !self.job_is_current(&stream_id, generation, epoch) {
                    debug!(
                        "Discarding stale failure ({}) for stream {}",
                        stage, stream_id
                    );
                    return;
                }
                self.fail_session(
                    &stream_id,
                    ErrorKind::Negotiation,
                    format!("{}: {}", stage, message),
                );
            }
        }
    }

    fn job_is_current(&self, stream_id: &str, generation: u64, epoch: u64) -> bool {
        match self.sessions.get(stream_id) {
            Some(session) => {
                session.generation == generation
                    && session.epoch == epoch
                    && !session.state.is_terminal()
            }
            None => false,
        }
    }

    fn handle_peer_event(&mut self, event: PeerEvent) {
        let PeerEvent {
            stream_id,
            generation,
            kind,
        } = event;

        match self.sessions.get(&stream_id) {
            Some(session) if session.generation == generation && !session.state.is_terminal() => {}
            _ => {
                debug!("Discarding stale peer event for stream {}", stream_id);
                return;
            }
        }

        match kind {
            PeerEventKind::LocalCandidate(candidate) => {
                debug!("Gathered local candidate for stream {}", stream_id);
                self.send(SignalingMessage::TakeCandidate {
                    stream_id,
                    candidate: candidate.candidate,
                    label: candidate.sdp_mline_index,
                    id: candidate.sdp_mid,
                });
            }
            PeerEventKind::ConnectionState(state) => {
                debug!("Stream {} connectivity: {:?}", stream_id, state);
                match state {
                    PeerConnectionState::Connected => {
                        if let Some(session) = self.sessions.get_mut(&stream_id) {
                            if session.state == SessionState::Negotiating {
                                session.state = SessionState::Connected;
                                info!("Peer session {} connected", stream_id);
                            }
                        }
                    }
                    PeerConnectionState::Failed => {
                        self.fail_session(
                            &stream_id,
                            ErrorKind::Negotiation,
                            "Peer connection failed".to_owned(),
                        );
                    }
                    _ => {}
                }
                self.emit(ClientEvent::ConnectionStateChanged(state));
            }
            PeerEventKind::TrackReceived(track) => {
                info!("Received remote track {} for stream {}", track.id, stream_id);
                self.emit(ClientEvent::TrackReceived(track));
            }
            PeerEventKind::DataChannelOpen => self.emit(ClientEvent::DataChannelOpen),
            PeerEventKind::DataChannelMessage(data) => {
                self.emit(ClientEvent::DataChannelMessage(data))
            }
            PeerEventKind::DataChannelClose => self.emit(ClientEvent::DataChannelClose),
        }
    }

    /// Report the error and transition the session to Failed
    fn fail_session(&mut self, stream_id: &str, kind: ErrorKind, message: String) {
        warn!("Session {} failed: {}", stream_id, message);
        self.emit(ClientEvent::Error { kind, message });
        self.mark_failed(stream_id);
    }

    fn mark_failed(&mut self, stream_id: &str) {
        if let Some(session) = self.sessions.get_mut(stream_id) {
            if session.state.is_terminal() {
                return;
            }
            session.state = SessionState::Failed;
            session.invalidate();
            session.pending_candidates.clear();
            if let Some(capability) = session.capability.take() {
                capability.close();
            }
        }
    }

    fn send(&self, msg: SignalingMessage) {
        if self.outbound.send(msg).is_err() {
            warn!("Signaling channel gone, dropping outgoing message");
        }
    }

    fn emit(&self, event: ClientEvent) {
        if self.events.send(event).is_err() {
            debug!("Application dropped the event receiver");
        }
    }
}
