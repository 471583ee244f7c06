//! Tagged meeting outcome

use serde::{Deserialize, Serialize};

/// Result of a tallied vote that met quorum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    Approved,
    Rejected,
}

/// How a meeting ended.
///
/// Always set explicitly by the state machine; callers never have to infer
/// it from empty decision lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MeetingOutcome {
    /// Gate passed, quorum met, proposal approved or rejected
    Completed { outcome: Resolution },
    /// Critic gate blocked the vote
    Blocked { reason: String },
    /// Too few voting participants cast a vote
    QuorumFailed,
}

impl MeetingOutcome {
    /// Short status key, as written to the meetings index.
    pub fn status(&self) -> &'static str {
        match self {
            MeetingOutcome::Completed {
                outcome: Resolution::Approved,
            } => "approved",
            MeetingOutcome::Completed {
                outcome: Resolution::Rejected,
            } => "rejected",
            MeetingOutcome::Blocked { .. } => "blocked",
            MeetingOutcome::QuorumFailed => "quorum_failed",
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(
            self,
            MeetingOutcome::Completed {
                outcome: Resolution::Approved
            }
        )
    }
}

impl std::fmt::Display for MeetingOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeetingOutcome::Completed { outcome } => write!(f, "Completed ({:?})", outcome),
            MeetingOutcome::Blocked { reason } => write!(f, "Blocked: {}", reason),
            MeetingOutcome::QuorumFailed => write!(f, "Quorum failed"),
        }
    }
}
