//! Meeting phases and the legal transitions between them

use serde::{Deserialize, Serialize};

/// Phase of a deliberation.
///
/// ```text
/// Opening → Brainstorming → Discussion → EvaluationRequired
///     ├─ EvaluationPassed → Voting ─┬─ Resolved ─────┐
///     │                             └─ QuorumFailed ─┤
///     └─ EvaluationBlocked ──────────────────────────┴─ Closing
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingPhase {
    Opening,
    Brainstorming,
    Discussion,
    EvaluationRequired,
    EvaluationPassed,
    EvaluationBlocked,
    Voting,
    Resolved,
    QuorumFailed,
    Closing,
}

impl MeetingPhase {
    /// Whether `next` directly follows `self`.
    pub fn can_transition_to(&self, next: MeetingPhase) -> bool {
        use MeetingPhase::*;
        matches!(
            (self, next),
            (Opening, Brainstorming)
                | (Brainstorming, Discussion)
                | (Discussion, EvaluationRequired)
                | (EvaluationRequired, EvaluationPassed)
                | (EvaluationRequired, EvaluationBlocked)
                | (EvaluationPassed, Voting)
                | (Voting, Resolved)
                | (Voting, QuorumFailed)
                | (Resolved, Closing)
                | (QuorumFailed, Closing)
                | (EvaluationBlocked, Closing)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, MeetingPhase::Closing)
    }

    /// snake_case key used in artifacts and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingPhase::Opening => "opening",
            MeetingPhase::Brainstorming => "brainstorming",
            MeetingPhase::Discussion => "discussion",
            MeetingPhase::EvaluationRequired => "evaluation_required",
            MeetingPhase::EvaluationPassed => "evaluation_passed",
            MeetingPhase::EvaluationBlocked => "evaluation_blocked",
            MeetingPhase::Voting => "voting",
            MeetingPhase::Resolved => "resolved",
            MeetingPhase::QuorumFailed => "quorum_failed",
            MeetingPhase::Closing => "closing",
        }
    }
}

impl std::fmt::Display for MeetingPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use MeetingPhase::*;

    const ALL: [MeetingPhase; 10] = [
        Opening,
        Brainstorming,
        Discussion,
        EvaluationRequired,
        EvaluationPassed,
        EvaluationBlocked,
        Voting,
        Resolved,
        QuorumFailed,
        Closing,
    ];

    #[test]
    fn test_happy_path_is_legal() {
        let path = [
            Opening,
            Brainstorming,
            Discussion,
            EvaluationRequired,
            EvaluationPassed,
            Voting,
            Resolved,
            Closing,
        ];
        for pair in path.windows(2) {
            assert!(pair[0].can_transition_to(pair[1]), "{} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_no_revisits() {
        for phase in ALL {
            assert!(!phase.can_transition_to(phase));
            assert!(!phase.can_transition_to(Opening));
        }
    }

    #[test]
    fn test_blocked_skips_voting() {
        assert!(EvaluationBlocked.can_transition_to(Closing));
        assert!(!EvaluationBlocked.can_transition_to(Voting));
        assert!(!EvaluationRequired.can_transition_to(Voting));
    }

    #[test]
    fn test_closing_is_terminal() {
        assert!(Closing.is_terminal());
        assert!(ALL.iter().all(|p| !Closing.can_transition_to(*p)));
    }

    #[test]
    fn test_display_and_key() {
        assert_eq!(EvaluationRequired.to_string(), "EvaluationRequired");
        assert_eq!(EvaluationRequired.as_str(), "evaluation_required");
    }
}
