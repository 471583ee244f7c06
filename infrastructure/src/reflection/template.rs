//! Rule-based self reflections written at the end of a meeting.

use async_trait::async_trait;
use council_application::{ReflectionError, ReflectionProvider};
use council_domain::{MeetingOutcome, MeetingSession, Participant, Role, VoteChoice};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Builds one markdown reflection per participant from the session record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateReflectionProvider;

impl TemplateReflectionProvider {
    fn reflect(session: &MeetingSession, participant: &Participant) -> String {
        let registry = session.participants();
        let contributions = session.transcript().contribution_count(&participant.id);
        let fallbacks = session
            .transcript()
            .entries()
            .iter()
            .filter(|e| e.participant_id == participant.id && e.fallback)
            .count();
        let vote = session
            .decisions()
            .last()
            .and_then(|d| d.votes.get(&participant.id).copied());
        let approved = session.outcome().is_some_and(MeetingOutcome::is_approved);

        let mut worked = Vec::new();
        let mut improve = Vec::new();
        let mut plan = Vec::new();

        if contributions > 0 {
            worked.push(format!("Took part in the discussion with {contributions} contribution(s)."));
        } else {
            improve.push("Did not contribute to the discussion.".to_string());
            plan.push("Prepare at least one concrete point before the next meeting.".to_string());
        }
        if fallbacks > 0 {
            improve.push(format!(
                "{fallbacks} contribution(s) came from the standard template rather than a fresh answer."
            ));
        }

        if participant.role == Role::Critic {
            match session.outcome() {
                Some(MeetingOutcome::Blocked { reason }) => {
                    improve.push(format!("The evaluation was rejected by the gate: {reason}."));
                    plan.push("Name concrete risks, costs and a recommendation in every evaluation.".to_string());
                }
                _ if !session.evaluations().is_empty() => {
                    worked.push("Delivered an evaluation that passed the gate.".to_string());
                }
                _ => {}
            }
        }

        match vote {
            Some(choice) if choice.is_positive() == approved => {
                worked.push(format!("Voted {choice}, in line with the final decision."));
            }
            Some(VoteChoice::NeedsInfo) => {
                improve.push("Asked for more information instead of taking a position.".to_string());
                plan.push("Request the missing data before the vote.".to_string());
            }
            Some(choice) => {
                improve.push(format!("Voted {choice}, against the final decision."));
                plan.push("Share objections earlier so the discussion can address them.".to_string());
            }
            None if participant.is_voting() => {
                improve.push("Did not cast a vote.".to_string());
                plan.push("Attend the vote or delegate clearly.".to_string());
            }
            None => {}
        }

        if plan.is_empty() {
            plan.push("Keep the same level of preparation.".to_string());
        }

        let mut md = String::new();
        let _ = writeln!(md, "**Role:** {}", participant.role.display_name());
        let _ = writeln!(md, "**Contributions:** {contributions}");
        let _ = writeln!(md, "**Reputation:** {:.2}", participant.reputation_multiplier);
        let _ = writeln!(
            md,
            "**Effective weight:** {:.2}\n",
            registry.effective_weight(participant)
        );
        for (heading, items) in [
            ("What worked", &worked),
            ("What to improve", &improve),
            ("Improvement plan", &plan),
        ] {
            let _ = writeln!(md, "## {heading}\n");
            if items.is_empty() {
                let _ = writeln!(md, "- Nothing to note.");
            }
            for item in items {
                let _ = writeln!(md, "- {item}");
            }
            let _ = writeln!(md);
        }
        md
    }
}

#[async_trait]
impl ReflectionProvider for TemplateReflectionProvider {
    async fn generate_reflections(
        &self,
        session: &MeetingSession,
    ) -> Result<BTreeMap<String, String>, ReflectionError> {
        if session.outcome().is_none() {
            return Err(ReflectionError::Failed(format!(
                "session {} has not concluded",
                session.id()
            )));
        }
        Ok(session
            .participants()
            .participants()
            .iter()
            .map(|p| (p.id.clone(), Self::reflect(session, p)))
            .collect())
    }
}
