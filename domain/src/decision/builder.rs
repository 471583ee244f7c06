use super::roi::RoiEstimate;
use crate::core::time::current_timestamp;
use crate::gate::{CriticEvaluation, PassedEvaluation};
use crate::meeting::Proposal;
use crate::quorum::{TallyOutcome, Vote, VoteChoice, VoteTally};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Immutable record of one tallied proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub id: String,
    pub proposal: Proposal,
    /// participant id → first choice cast
    pub votes: BTreeMap<String, VoteChoice>,
    /// Number of counted votes per choice
    pub vote_breakdown: BTreeMap<VoteChoice, usize>,
    pub tally: VoteTally,
    pub gate_evaluation: CriticEvaluation,
    pub action_items: Vec<String>,
    pub roi: RoiEstimate,
    pub created_at: u64,
}

impl Decision {
    pub fn outcome(&self) -> TallyOutcome {
        self.tally.outcome
    }
}

/// Maps a proposal, its votes and its tally to a [`Decision`].
///
/// Requires a [`PassedEvaluation`], so no decision can exist for a proposal
/// whose critique was blocked.
///
/// # Example
///
/// ```
/// use council_domain::decision::DecisionBuilder;
/// use council_domain::quorum::TallyOutcome;
///
/// let items = DecisionBuilder::action_items("Task Tracker", TallyOutcome::FailedQuorum);
/// assert_eq!(items.len(), 2);
/// ```
pub struct DecisionBuilder;

impl DecisionBuilder {
    pub fn build(
        id: impl Into<String>,
        proposal: &Proposal,
        votes: &[Vote],
        tally: &VoteTally,
        evaluation: &PassedEvaluation,
    ) -> Decision {
        let mut vote_map = BTreeMap::new();
        for vote in votes {
            vote_map
                .entry(vote.participant_id.clone())
                .or_insert(vote.choice);
        }

        let mut vote_breakdown = BTreeMap::new();
        for choice in vote_map.values() {
            *vote_breakdown.entry(*choice).or_insert(0) += 1;
        }

        Decision {
            id: id.into(),
            proposal: proposal.clone(),
            votes: vote_map,
            vote_breakdown,
            tally: tally.clone(),
            gate_evaluation: evaluation.evaluation().clone(),
            action_items: Self::action_items(&proposal.title, tally.outcome),
            roi: RoiEstimate::for_title(&proposal.title),
            created_at: current_timestamp(),
        }
    }

    /// Fixed checklist for `outcome`, with the proposal title interpolated.
    pub fn action_items(title: &str, outcome: TallyOutcome) -> Vec<String> {
        match outcome {
            TallyOutcome::Approved => vec![
                format!("Create the project repository for {title}"),
                format!("Write the technical specification for {title}"),
                "Design the data model and storage schema".to_string(),
                "Build a working prototype of the core features".to_string(),
                "Design the user interface".to_string(),
                "Develop the service API".to_string(),
                "Write unit and integration tests".to_string(),
                "Write user and developer documentation".to_string(),
            ],
            TallyOutcome::Rejected => vec![
                format!("Review the reasons {title} was rejected"),
                "Collect the concerns raised by each participant".to_string(),
                "Analyze the critic's evaluation for gaps in the proposal".to_string(),
                "Explore alternative approaches to the same problem".to_string(),
                "Hold a short retrospective on the proposal process".to_string(),
                "Prepare an improved proposal for the next meeting".to_string(),
            ],
            TallyOutcome::FailedQuorum => vec![
                format!("Reschedule the vote on {title}"),
                "Ensure attendance of enough voting participants".to_string(),
            ],
        }
    }
}
