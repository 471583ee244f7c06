//! Domain error types

use crate::meeting::MeetingPhase;
use thiserror::Error;

/// Fatal roster/weight configuration errors raised at registry initialization.
///
/// A meeting never starts when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Expected exactly {expected} participants, got {actual}")]
    ParticipantCount { expected: usize, actual: usize },

    #[error("Duplicate participant id: {0}")]
    DuplicateId(String),

    #[error("Voting weights do not match the configured roles (missing: {missing:?}, unexpected: {unexpected:?})")]
    WeightRoleMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error("Participant '{participant}' has role '{role}' which is not configured")]
    UnknownRole { participant: String, role: String },

    #[error("Invalid voting weight {weight} for role '{role}'")]
    InvalidWeight { role: String, weight: f64 },

    #[error("Invalid reputation multiplier {value} for participant '{participant}' (minimum 0.1)")]
    InvalidReputation { participant: String, value: f64 },

    #[error("Minimum voting participants must be between 1 and {participant_count}, got {min}")]
    InvalidQuorumFloor { min: usize, participant_count: usize },

    #[error("Only {voting} voting participants, quorum floor requires {required}")]
    InsufficientVotingParticipants { voting: usize, required: usize },

    #[error("Roster has no advisory (zero-weight) participant")]
    NoAdvisoryParticipant,

    #[error("Roster must contain exactly one critic, found {0}")]
    CriticCount(usize),
}

/// Illegal phase transition attempted on a meeting session.
///
/// The state machine never produces one of these on a correct run; seeing
/// one means the orchestration code is broken.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Illegal phase transition: {from} -> {to}")]
    IllegalTransition { from: MeetingPhase, to: MeetingPhase },
}
