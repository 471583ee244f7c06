//! Session-scoped reputation events

use serde::{Deserialize, Serialize};

/// Reputation gained by the critic when its evaluation passes the gate.
pub const GATE_PASSED_DELTA: f64 = 0.05;
/// Reputation lost by the critic when its evaluation is blocked.
pub const GATE_BLOCKED_DELTA: f64 = -0.1;

/// A reputation change recorded on a meeting session.
///
/// Events never touch the snapshot that produced them; they are folded into
/// the next one with
/// [`ParticipantRegistry::with_reputation`](super::ParticipantRegistry::with_reputation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReputationEvent {
    pub participant_id: String,
    pub delta: f64,
    pub reason: String,
}

impl ReputationEvent {
    pub fn new(participant_id: impl Into<String>, delta: f64, reason: impl Into<String>) -> Self {
        Self {
            participant_id: participant_id.into(),
            delta,
            reason: reason.into(),
        }
    }

    pub fn gate_passed(critic_id: impl Into<String>) -> Self {
        Self::new(critic_id, GATE_PASSED_DELTA, "critic evaluation passed the gate")
    }

    pub fn gate_blocked(critic_id: impl Into<String>) -> Self {
        Self::new(critic_id, GATE_BLOCKED_DELTA, "critic evaluation was blocked")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_events() {
        let passed = ReputationEvent::gate_passed("critic");
        assert_eq!(passed.delta, 0.05);
        let blocked = ReputationEvent::gate_blocked("critic");
        assert_eq!(blocked.delta, -0.1);
        assert_eq!(blocked.participant_id, "critic");
    }
}
