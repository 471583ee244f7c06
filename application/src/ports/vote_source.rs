//! Vote source port
//!
//! Where the voting phase gets each participant's choice from.

use async_trait::async_trait;
use council_domain::{Participant, Proposal, VoteChoice, voting_strategy};
use std::collections::HashSet;

/// Asks one participant for their vote on a proposal.
///
/// `None` means the participant did not respond and is treated as absent.
#[async_trait]
pub trait VoteSource: Send + Sync {
    async fn cast_vote(&self, participant: &Participant, proposal: &Proposal) -> Option<VoteChoice>;
}

/// Votes from the per-role strategy table. Advisory participants never vote.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategyVoteSource;

#[async_trait]
impl VoteSource for StrategyVoteSource {
    async fn cast_vote(&self, participant: &Participant, proposal: &Proposal) -> Option<VoteChoice> {
        if !participant.is_voting() {
            return None;
        }
        voting_strategy(participant.role).map(|strategy| strategy(proposal))
    }
}

/// Wraps another source so the listed participants do not respond.
pub struct AbsentVoters<V> {
    inner: V,
    absent: HashSet<String>,
}

impl<V: VoteSource> AbsentVoters<V> {
    pub fn new<I, S>(inner: V, absent: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner,
            absent: absent.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl<V: VoteSource> VoteSource for AbsentVoters<V> {
    async fn cast_vote(&self, participant: &Participant, proposal: &Proposal) -> Option<VoteChoice> {
        if self.absent.contains(&participant.id) {
            return None;
        }
        self.inner.cast_vote(participant, proposal).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::Role;

    fn proposal() -> Proposal {
        Proposal::new("p1", "Build API gateway", "A small service", "ceo")
    }

    #[tokio::test]
    async fn test_strategy_source_uses_role_table() {
        let cto = Participant::new("cto", "CTO", Role::Cto);
        assert_eq!(
            StrategyVoteSource.cast_vote(&cto, &proposal()).await,
            Some(VoteChoice::Approve)
        );
    }

    #[tokio::test]
    async fn test_advisory_participant_does_not_vote() {
        let memory = Participant::new("memory", "Memory Keeper", Role::Memory);
        assert_eq!(StrategyVoteSource.cast_vote(&memory, &proposal()).await, None);

        // a zero-weight participant stays silent whatever its role
        let ceo = Participant::new("ceo", "CEO", Role::Ceo).with_weight(0.0);
        assert_eq!(StrategyVoteSource.cast_vote(&ceo, &proposal()).await, None);
    }

    #[tokio::test]
    async fn test_absent_voters_do_not_respond() {
        let source = AbsentVoters::new(StrategyVoteSource, ["qa"]);
        let qa = Participant::new("qa", "QA", Role::Qa);
        let pm = Participant::new("pm", "PM", Role::ProjectManager);
        assert_eq!(source.cast_vote(&qa, &proposal()).await, None);
        assert!(source.cast_vote(&pm, &proposal()).await.is_some());
    }
}
