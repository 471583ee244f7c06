//! Participant domain
//!
//! The fixed roster that deliberates and votes.
//!
//! - [`entities`] — [`Role`], [`Participant`] and the standard ten-seat roster
//! - [`registry`] — [`ParticipantRegistry`], the validated roster snapshot
//! - [`reputation`] — session-scoped [`ReputationEvent`]s applied copy-on-write

pub mod entities;
pub mod registry;
pub mod reputation;

pub use entities::{Participant, Role, default_roster};
pub use registry::{ParticipantRegistry, ParticipantStatistics, RegistryStatistics, RosterConfig};
pub use reputation::ReputationEvent;
