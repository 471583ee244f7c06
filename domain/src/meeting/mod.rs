//! Meeting domain
//!
//! The session aggregate the deliberation state machine drives:
//! phases, the append-only transcript, proposals and the tagged outcome.

pub mod outcome;
pub mod phase;
pub mod proposal;
pub mod session;
pub mod transcript;

pub use outcome::{MeetingOutcome, Resolution};
pub use phase::MeetingPhase;
pub use proposal::Proposal;
pub use session::MeetingSession;
pub use transcript::{EntryKind, Transcript, TranscriptEntry};
