//! Peer-session negotiation: role policy and the coordinator state machine

pub mod coordinator;
pub mod role;

#[cfg(test)]
mod tests;

pub use coordinator::{NegotiationCoordinator, SessionState};
pub use role::Role;
