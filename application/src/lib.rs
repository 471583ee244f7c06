//! Application layer for council
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{CouncilConfig, MeetingParams};
pub use ports::{
    artifact_sink::{ArtifactReport, ArtifactSink},
    content_generator::{ContentGenerator, GenerationError, GenerationRequest},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    progress::{NoProgress, ProgressNotifier},
    reflection_provider::{ReflectionError, ReflectionProvider},
    vote_source::{AbsentVoters, StrategyVoteSource, VoteSource},
};
pub use use_cases::deliberation::{Deliberation, DeliberationError};
pub use use_cases::run_meeting::{MeetingResult, RunMeetingError, RunMeetingUseCase};
