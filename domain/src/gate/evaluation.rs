//! Critic evaluations and the gate verdict types

use crate::core::time::current_timestamp;
use serde::{Deserialize, Serialize};

/// The critic's evaluation of one proposal in one attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticEvaluation {
    pub proposal_id: String,
    pub author_id: String,
    pub content: String,
    /// Derived from `content` by the gate
    pub gate_passed: bool,
    pub created_at: u64,
}

impl CriticEvaluation {
    pub(super) fn new(
        proposal_id: impl Into<String>,
        author_id: impl Into<String>,
        content: impl Into<String>,
        gate_passed: bool,
    ) -> Self {
        Self {
            proposal_id: proposal_id.into(),
            author_id: author_id.into(),
            content: content.into(),
            gate_passed,
            created_at: current_timestamp(),
        }
    }
}

/// Evidence that an evaluation passed the gate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PassedEvaluation(CriticEvaluation);

impl PassedEvaluation {
    pub(super) fn new(evaluation: CriticEvaluation) -> Self {
        Self(evaluation)
    }

    pub fn evaluation(&self) -> &CriticEvaluation {
        &self.0
    }

    pub fn into_inner(self) -> CriticEvaluation {
        self.0
    }
}

/// An evaluation the gate refused, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockedEvaluation {
    pub evaluation: CriticEvaluation,
    pub reason: String,
}
