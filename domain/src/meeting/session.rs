//! Meeting session aggregate

use super::outcome::MeetingOutcome;
use super::phase::MeetingPhase;
use super::proposal::Proposal;
use super::transcript::{Transcript, TranscriptEntry};
use crate::core::error::TransitionError;
use crate::core::time::current_timestamp;
use crate::decision::Decision;
use crate::gate::CriticEvaluation;
use crate::participant::{ParticipantRegistry, ReputationEvent};

/// One meeting on one agenda.
///
/// Only the deliberation state machine mutates a session; everything else
/// reads it through the accessors.
#[derive(Debug, Clone)]
pub struct MeetingSession {
    id: String,
    attempt: u32,
    phase: MeetingPhase,
    participants: ParticipantRegistry,
    agenda: String,
    started_at: u64,
    proposals: Vec<Proposal>,
    evaluations: Vec<CriticEvaluation>,
    decisions: Vec<Decision>,
    transcript: Transcript,
    reputation_events: Vec<ReputationEvent>,
    outcome: Option<MeetingOutcome>,
}

impl MeetingSession {
    pub fn new(
        id: impl Into<String>,
        agenda: impl Into<String>,
        participants: ParticipantRegistry,
    ) -> Self {
        Self {
            id: id.into(),
            attempt: 1,
            phase: MeetingPhase::Opening,
            participants,
            agenda: agenda.into(),
            started_at: current_timestamp(),
            proposals: Vec::new(),
            evaluations: Vec::new(),
            decisions: Vec::new(),
            transcript: Transcript::new(),
            reputation_events: Vec::new(),
            outcome: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn phase(&self) -> MeetingPhase {
        self.phase
    }

    pub fn participants(&self) -> &ParticipantRegistry {
        &self.participants
    }

    pub fn agenda(&self) -> &str {
        &self.agenda
    }

    pub fn started_at(&self) -> u64 {
        self.started_at
    }

    pub fn proposals(&self) -> &[Proposal] {
        &self.proposals
    }

    pub fn evaluations(&self) -> &[CriticEvaluation] {
        &self.evaluations
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn reputation_events(&self) -> &[ReputationEvent] {
        &self.reputation_events
    }

    pub fn outcome(&self) -> Option<&MeetingOutcome> {
        self.outcome.as_ref()
    }

    /// Move to `next`, rejecting anything but a direct forward step.
    pub fn advance(&mut self, next: MeetingPhase) -> Result<(), TransitionError> {
        if !self.phase.can_transition_to(next) {
            return Err(TransitionError::IllegalTransition {
                from: self.phase,
                to: next,
            });
        }
        self.phase = next;
        Ok(())
    }

    pub fn record(&mut self, entry: TranscriptEntry) {
        self.transcript.push(entry);
    }

    pub fn add_proposal(&mut self, proposal: Proposal) {
        self.proposals.push(proposal);
    }

    pub fn add_evaluation(&mut self, evaluation: CriticEvaluation) {
        self.evaluations.push(evaluation);
    }

    pub fn add_decision(&mut self, decision: Decision) {
        self.decisions.push(decision);
    }

    pub fn record_reputation(&mut self, event: ReputationEvent) {
        self.reputation_events.push(event);
    }

    pub fn conclude(&mut self, outcome: MeetingOutcome) {
        self.outcome = Some(outcome);
    }

    /// Start a new attempt.
    ///
    /// Transcript, proposals and evaluations are dropped; decisions and
    /// reputation events from earlier attempts are kept.
    pub fn reset(&mut self) {
        self.attempt += 1;
        self.phase = MeetingPhase::Opening;
        self.transcript.clear();
        self.proposals.clear();
        self.evaluations.clear();
        self.outcome = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meeting::EntryKind;
    use crate::participant::{RosterConfig, default_roster};

    fn session() -> MeetingSession {
        let registry =
            ParticipantRegistry::initialize(default_roster(), &RosterConfig::default()).unwrap();
        MeetingSession::new("meeting_test", "Pick next product", registry)
    }

    #[test]
    fn test_new_session_starts_at_opening() {
        let session = session();
        assert_eq!(session.phase(), MeetingPhase::Opening);
        assert_eq!(session.attempt(), 1);
        assert!(session.transcript().is_empty());
        assert!(session.outcome().is_none());
    }

    #[test]
    fn test_advance_rejects_illegal_transition() {
        let mut session = session();
        let err = session.advance(MeetingPhase::Voting).unwrap_err();
        assert_eq!(
            err,
            TransitionError::IllegalTransition {
                from: MeetingPhase::Opening,
                to: MeetingPhase::Voting
            }
        );
        assert_eq!(session.phase(), MeetingPhase::Opening);

        session.advance(MeetingPhase::Brainstorming).unwrap();
        assert_eq!(session.phase(), MeetingPhase::Brainstorming);
    }

    #[test]
    fn test_reset_clears_attempt_state() {
        let mut session = session();
        session.advance(MeetingPhase::Brainstorming).unwrap();
        session.record(TranscriptEntry::new(
            "ceo",
            MeetingPhase::Brainstorming,
            EntryKind::Contribution,
            "An idea.",
        ));
        session.add_proposal(Proposal::from_contribution("p1", "ceo", "An idea."));
        session.record_reputation(ReputationEvent::gate_passed("critic"));
        session.conclude(MeetingOutcome::QuorumFailed);

        session.reset();

        assert_eq!(session.attempt(), 2);
        assert_eq!(session.phase(), MeetingPhase::Opening);
        assert!(session.transcript().is_empty());
        assert!(session.proposals().is_empty());
        assert!(session.outcome().is_none());
        assert_eq!(session.reputation_events().len(), 1);
    }
}
