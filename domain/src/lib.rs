//! Domain layer for council
//!
//! This crate contains the core business logic, entities, and value objects
//! of the deliberation engine. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Participants
//!
//! A fixed roster of weighted participants. Participants with a positive
//! base weight vote; at least one participant is advisory-only.
//!
//! ## Critic Gate
//!
//! Before any vote, the critic's evaluation must pass a content-presence
//! check. A blocked gate is a modeled outcome, not an error.
//!
//! ## Quorum Tally
//!
//! Votes are weighted by `base_weight * reputation_multiplier`. A proposal
//! is approved when at least 60% of the counted weight is positive and the
//! quorum floor of voting participants is met.

pub mod config;
pub mod core;
pub mod decision;
pub mod gate;
pub mod meeting;
pub mod participant;
pub mod prompt;
pub mod quorum;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::{ConfigurationError, TransitionError};
pub use decision::{Decision, DecisionBuilder, RoiEstimate};
pub use gate::{
    BlockedEvaluation, CriticEvaluation, CriticGate, GateAssessment, GateConfig, PassedEvaluation,
};
pub use meeting::{
    EntryKind, MeetingOutcome, MeetingPhase, MeetingSession, Proposal, Resolution, Transcript,
    TranscriptEntry,
};
pub use participant::{
    Participant, ParticipantRegistry, RegistryStatistics, ReputationEvent, Role, RosterConfig,
    default_roster,
};
pub use prompt::{PhaseContext, PromptTemplate};
pub use quorum::{
    TallyConfig, TallyOutcome, Vote, VoteChoice, VoteTally, compute_tally, voting_strategy,
};
