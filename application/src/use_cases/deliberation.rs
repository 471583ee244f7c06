//! Deliberation state machine
//!
//! Drives one [`MeetingSession`] from `Opening` to `Closing`:
//! contributions per phase, the critic gate, the vote and the decision.

use crate::ports::content_generator::{ContentGenerator, GenerationError, GenerationRequest};
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::progress::ProgressNotifier;
use crate::ports::vote_source::VoteSource;
use council_domain::{
    CriticGate, DecisionBuilder, EntryKind, MeetingOutcome, MeetingPhase, MeetingSession,
    Participant, ParticipantRegistry, PassedEvaluation, PhaseContext, PromptTemplate, Proposal,
    Resolution, ReputationEvent, TallyConfig, TallyOutcome, TranscriptEntry, TransitionError, Vote,
    compute_tally,
};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Unexpected faults during deliberation.
///
/// Blocked gates and failed quorums are outcomes, not errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeliberationError {
    #[error(transparent)]
    IllegalTransition(#[from] TransitionError),

    #[error("No participant produced a proposal")]
    NoProposal,
}

/// One contribution, with whether the fallback template produced it.
struct Contribution {
    text: String,
    fallback: bool,
}

/// The phase state machine for a single session.
pub struct Deliberation<'a> {
    generator: &'a dyn ContentGenerator,
    vote_source: &'a dyn VoteSource,
    gate: &'a CriticGate,
    tally: &'a TallyConfig,
    generation_timeout: Duration,
    logger: &'a dyn ConversationLogger,
}

impl<'a> Deliberation<'a> {
    pub fn new(
        generator: &'a dyn ContentGenerator,
        vote_source: &'a dyn VoteSource,
        gate: &'a CriticGate,
        tally: &'a TallyConfig,
        generation_timeout: Duration,
        logger: &'a dyn ConversationLogger,
    ) -> Self {
        Self {
            generator,
            vote_source,
            gate,
            tally,
            generation_timeout,
            logger,
        }
    }

    /// Run the session to `Closing` and return how it ended.
    pub async fn run(
        &self,
        session: &mut MeetingSession,
        progress: &dyn ProgressNotifier,
    ) -> Result<MeetingOutcome, DeliberationError> {
        // Nothing may be recorded unless the session is at the start of an attempt.
        if session.phase() != MeetingPhase::Opening {
            return Err(TransitionError::IllegalTransition {
                from: session.phase(),
                to: MeetingPhase::Opening,
            }
            .into());
        }

        let registry = session.participants().clone();
        info!(
            "Deliberating '{}' (session {}, attempt {})",
            session.agenda(),
            session.id(),
            session.attempt()
        );

        self.phase_opening(session, &registry, progress).await;

        session.advance(MeetingPhase::Brainstorming)?;
        self.phase_brainstorming(session, &registry, progress).await;

        let proposal = session
            .proposals()
            .first()
            .cloned()
            .ok_or(DeliberationError::NoProposal)?;
        info!("Selected proposal: {}", proposal.title);

        session.advance(MeetingPhase::Discussion)?;
        self.phase_discussion(session, &registry, &proposal, progress)
            .await;

        session.advance(MeetingPhase::EvaluationRequired)?;
        let admitted = self
            .phase_evaluation(session, &registry, &proposal, progress)
            .await;

        let outcome = match admitted {
            Err(reason) => {
                session.advance(MeetingPhase::EvaluationBlocked)?;
                warn!("Critic gate blocked the vote: {}", reason);
                self.notice(
                    session,
                    &registry,
                    format!("The vote is cancelled: the critic's evaluation was blocked ({reason})."),
                );
                MeetingOutcome::Blocked { reason }
            }
            Ok(passed) => {
                session.advance(MeetingPhase::EvaluationPassed)?;
                self.notice(
                    session,
                    &registry,
                    "The critic's evaluation passed the gate. Moving to the vote.",
                );
                session.advance(MeetingPhase::Voting)?;
                self.phase_voting(session, &registry, &proposal, &passed, progress)
                    .await?
            }
        };

        session.advance(MeetingPhase::Closing)?;
        self.phase_closing(session, &registry, &proposal, &outcome, progress)
            .await;
        session.conclude(outcome.clone());

        info!("Meeting {} ended: {}", session.id(), outcome);
        Ok(outcome)
    }

    async fn phase_opening(
        &self,
        session: &mut MeetingSession,
        registry: &ParticipantRegistry,
        progress: &dyn ProgressNotifier,
    ) {
        let phase = MeetingPhase::Opening;
        info!("Phase: {}", phase);
        progress.on_phase_start(&phase, 1);

        let ctx = PhaseContext::new(session.agenda(), phase);
        self.contribute(session, registry.moderator(), &ctx, progress)
            .await;

        progress.on_phase_complete(&phase);
    }

    async fn phase_brainstorming(
        &self,
        session: &mut MeetingSession,
        registry: &ParticipantRegistry,
        progress: &dyn ProgressNotifier,
    ) {
        let phase = MeetingPhase::Brainstorming;
        info!("Phase: {}", phase);
        progress.on_phase_start(&phase, registry.len());

        let ctx = PhaseContext::new(session.agenda(), phase);
        for participant in registry.participants() {
            let text = self.contribute(session, participant, &ctx, progress).await;
            if participant.is_voting() && participant.role.proposes() {
                let id = format!("{}-proposal-{:03}", session.id(), session.proposals().len() + 1);
                let proposal = Proposal::from_contribution(id, &participant.id, &text);
                debug!("{} proposed '{}'", participant.id, proposal.title);
                session.add_proposal(proposal);
            }
        }

        progress.on_phase_complete(&phase);
    }

    async fn phase_discussion(
        &self,
        session: &mut MeetingSession,
        registry: &ParticipantRegistry,
        proposal: &Proposal,
        progress: &dyn ProgressNotifier,
    ) {
        let phase = MeetingPhase::Discussion;
        info!("Phase: {}", phase);
        progress.on_phase_start(&phase, registry.len());

        let ctx = PhaseContext::new(session.agenda(), phase).with_proposal(&proposal.title);
        for participant in registry.participants() {
            self.contribute(session, participant, &ctx, progress).await;
        }

        progress.on_phase_complete(&phase);
    }

    /// Ask the critic for an evaluation and run it through the gate.
    async fn phase_evaluation(
        &self,
        session: &mut MeetingSession,
        registry: &ParticipantRegistry,
        proposal: &Proposal,
        progress: &dyn ProgressNotifier,
    ) -> Result<PassedEvaluation, String> {
        let phase = MeetingPhase::EvaluationRequired;
        info!("Phase: {}", phase);
        progress.on_phase_start(&phase, 1);

        let critic = registry.critic();
        let ctx = PhaseContext::new(session.agenda(), phase).with_proposal(&proposal.title);
        let contribution = self.generate(critic, &ctx).await;
        session.record(
            TranscriptEntry::new(&critic.id, phase, EntryKind::Evaluation, &contribution.text)
                .with_fallback(contribution.fallback),
        );
        progress.on_contribution(&phase, critic, contribution.fallback);

        let evaluation = self
            .gate
            .evaluate(&proposal.id, &critic.id, contribution.text);
        session.add_evaluation(evaluation.clone());

        let verdict = self.gate.admit(evaluation);
        self.logger.log(ConversationEvent::new(
            "gate_evaluated",
            json!({
                "session_id": session.id(),
                "proposal_id": proposal.id,
                "critic": critic.id,
                "passed": verdict.is_ok(),
                "reason": verdict.as_ref().err().map(|b| b.reason.clone()),
            }),
        ));

        progress.on_phase_complete(&phase);
        verdict.map_err(|blocked| blocked.reason)
    }

    async fn phase_voting(
        &self,
        session: &mut MeetingSession,
        registry: &ParticipantRegistry,
        proposal: &Proposal,
        passed: &PassedEvaluation,
        progress: &dyn ProgressNotifier,
    ) -> Result<MeetingOutcome, DeliberationError> {
        let phase = MeetingPhase::Voting;
        info!("Phase: {}", phase);
        let voters = registry.voting_participants();
        progress.on_phase_start(&phase, voters.len());

        let mut votes = Vec::with_capacity(voters.len());
        for participant in voters {
            match self.vote_source.cast_vote(participant, proposal).await {
                Some(choice) => {
                    debug!("{} voted {}", participant.id, choice);
                    session.record(TranscriptEntry::new(
                        &participant.id,
                        phase,
                        EntryKind::Vote,
                        choice.to_string(),
                    ));
                    self.logger.log(ConversationEvent::new(
                        "vote_cast",
                        json!({
                            "session_id": session.id(),
                            "participant": participant.id,
                            "proposal_id": proposal.id,
                            "choice": choice,
                        }),
                    ));
                    progress.on_contribution(&phase, participant, false);
                    votes.push(Vote::new(&participant.id, &proposal.id, choice));
                }
                None => debug!("{} did not vote", participant.id),
            }
        }
        progress.on_phase_complete(&phase);

        let tally = compute_tally(&votes, registry, self.tally);
        info!(
            "Tally: {} ({:.2}% of {:.2} weight, {} of {} required voters)",
            tally.outcome,
            tally.approval_percentage,
            tally.total_weight,
            tally.voting_participant_count,
            tally.required_quorum
        );
        self.logger.log(ConversationEvent::new(
            "tally_computed",
            json!({ "session_id": session.id(), "tally": tally }),
        ));

        let decision_id = format!("{}-decision-{:03}", session.id(), session.decisions().len() + 1);
        let decision = DecisionBuilder::build(decision_id, proposal, &votes, &tally, passed);
        session.add_decision(decision);

        let (next, outcome, announcement) = match tally.outcome {
            TallyOutcome::FailedQuorum => (
                MeetingPhase::QuorumFailed,
                MeetingOutcome::QuorumFailed,
                format!(
                    "Quorum not met: {} of {} required voting participants voted. The vote will be rescheduled.",
                    tally.voting_participant_count, tally.required_quorum
                ),
            ),
            TallyOutcome::Approved => (
                MeetingPhase::Resolved,
                MeetingOutcome::Completed {
                    outcome: Resolution::Approved,
                },
                format!(
                    "\"{}\" is approved with {:.2}% of the weighted vote.",
                    proposal.title, tally.approval_percentage
                ),
            ),
            TallyOutcome::Rejected => (
                MeetingPhase::Resolved,
                MeetingOutcome::Completed {
                    outcome: Resolution::Rejected,
                },
                format!(
                    "\"{}\" is rejected with {:.2}% of the weighted vote.",
                    proposal.title, tally.approval_percentage
                ),
            ),
        };
        session.advance(next)?;
        self.notice(session, registry, announcement);
        Ok(outcome)
    }

    async fn phase_closing(
        &self,
        session: &mut MeetingSession,
        registry: &ParticipantRegistry,
        proposal: &Proposal,
        outcome: &MeetingOutcome,
        progress: &dyn ProgressNotifier,
    ) {
        let phase = MeetingPhase::Closing;
        info!("Phase: {}", phase);
        progress.on_phase_start(&phase, 1);

        let ctx = PhaseContext::new(session.agenda(), phase).with_proposal(&proposal.title);
        self.contribute(session, registry.moderator(), &ctx, progress)
            .await;

        let critic = &registry.critic().id;
        let event = match outcome {
            MeetingOutcome::Blocked { .. } => ReputationEvent::gate_blocked(critic),
            _ => ReputationEvent::gate_passed(critic),
        };
        debug!("Reputation {:+} for {}", event.delta, event.participant_id);
        session.record_reputation(event);

        progress.on_phase_complete(&phase);
    }

    /// Generate, record and report one contribution in the current phase.
    async fn contribute(
        &self,
        session: &mut MeetingSession,
        participant: &Participant,
        ctx: &PhaseContext,
        progress: &dyn ProgressNotifier,
    ) -> String {
        let contribution = self.generate(participant, ctx).await;
        session.record(
            TranscriptEntry::new(
                &participant.id,
                ctx.phase,
                EntryKind::Contribution,
                &contribution.text,
            )
            .with_fallback(contribution.fallback),
        );
        self.logger.log(ConversationEvent::new(
            "contribution",
            json!({
                "session_id": session.id(),
                "participant": participant.id,
                "phase": ctx.phase.as_str(),
                "fallback": contribution.fallback,
                "chars": contribution.text.chars().count(),
            }),
        ));
        progress.on_contribution(&ctx.phase, participant, contribution.fallback);
        contribution.text
    }

    /// Call the generator with a timeout; any failure yields the fallback template.
    async fn generate(&self, participant: &Participant, ctx: &PhaseContext) -> Contribution {
        let request = GenerationRequest::new(participant, ctx);
        let result =
            match tokio::time::timeout(self.generation_timeout, self.generator.generate(&request))
                .await
            {
                Ok(result) => result,
                Err(_) => Err(GenerationError::Timeout),
            };

        match result {
            Ok(text) if !text.trim().is_empty() => Contribution {
                text: text.trim().to_string(),
                fallback: false,
            },
            Ok(_) => {
                warn!(
                    "{} returned empty text for {} in {}; using fallback",
                    self.generator.name(),
                    participant.id,
                    ctx.phase
                );
                Self::fallback(participant, ctx)
            }
            Err(e) => {
                warn!(
                    "{} failed for {} in {}: {}; using fallback",
                    self.generator.name(),
                    participant.id,
                    ctx.phase,
                    e
                );
                Self::fallback(participant, ctx)
            }
        }
    }

    fn fallback(participant: &Participant, ctx: &PhaseContext) -> Contribution {
        Contribution {
            text: PromptTemplate::fallback(participant.role, ctx),
            fallback: true,
        }
    }

    /// Moderator notice in the current phase.
    fn notice(
        &self,
        session: &mut MeetingSession,
        registry: &ParticipantRegistry,
        text: impl Into<String>,
    ) {
        let phase = session.phase();
        session.record(TranscriptEntry::new(
            &registry.moderator().id,
            phase,
            EntryKind::Notice,
            text,
        ));
    }
}
