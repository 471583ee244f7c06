//! Weighted vote tally

use super::vote::Vote;
use crate::participant::ParticipantRegistry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Slack applied to the threshold comparison to absorb float representation error.
const THRESHOLD_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    /// Minimum number of voting participants that must cast a vote
    pub min_voting_participants: usize,
    /// Approval threshold in percent (inclusive)
    pub approval_threshold: f64,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            min_voting_participants: 7,
            approval_threshold: 60.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TallyOutcome {
    Approved,
    Rejected,
    FailedQuorum,
}

impl std::fmt::Display for TallyOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TallyOutcome::Approved => write!(f, "Approved"),
            TallyOutcome::Rejected => write!(f, "Rejected"),
            TallyOutcome::FailedQuorum => write!(f, "Failed quorum"),
        }
    }
}

/// Result of [`compute_tally`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteTally {
    pub total_weight: f64,
    pub positive_weight: f64,
    pub approval_percentage: f64,
    pub voting_participant_count: usize,
    pub required_quorum: usize,
    pub outcome: TallyOutcome,
}

/// Whether `percentage` reaches `threshold`, inclusively.
///
/// The tolerance only absorbs floating-point error from summing weights
/// (e.g. 59.99999999999 computed for an exact 60%). It is not a grace
/// margin: 59.999999 still rejects against 60.
pub fn meets_threshold(percentage: f64, threshold: f64) -> bool {
    percentage + THRESHOLD_TOLERANCE >= threshold
}

/// Weighted tally of `votes` against the registry snapshot.
///
/// Only the first vote per participant counts. Votes from unknown or
/// advisory participants carry no weight and do not count toward quorum.
/// When quorum is not met the tally short-circuits with zero weights.
pub fn compute_tally(
    votes: &[Vote],
    registry: &ParticipantRegistry,
    config: &TallyConfig,
) -> VoteTally {
    let mut seen = HashSet::new();
    let counted: Vec<(f64, bool)> = votes
        .iter()
        .filter(|v| seen.insert(v.participant_id.as_str()))
        .filter_map(|v| {
            registry
                .get(&v.participant_id)
                .filter(|p| p.is_voting())
                .map(|p| (registry.effective_weight(p), v.is_positive()))
        })
        .collect();

    let voting_participant_count = counted.len();
    if voting_participant_count < config.min_voting_participants {
        return VoteTally {
            total_weight: 0.0,
            positive_weight: 0.0,
            approval_percentage: 0.0,
            voting_participant_count,
            required_quorum: config.min_voting_participants,
            outcome: TallyOutcome::FailedQuorum,
        };
    }

    let total_weight: f64 = counted.iter().map(|(w, _)| w).sum();
    let positive_weight: f64 = counted.iter().filter(|(_, pos)| *pos).map(|(w, _)| w).sum();
    let approval_percentage = if total_weight > 0.0 {
        positive_weight / total_weight * 100.0
    } else {
        0.0
    };

    let outcome = if meets_threshold(approval_percentage, config.approval_threshold) {
        TallyOutcome::Approved
    } else {
        TallyOutcome::Rejected
    };

    VoteTally {
        total_weight,
        positive_weight,
        approval_percentage,
        voting_participant_count,
        required_quorum: config.min_voting_participants,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::participant::{Role, RosterConfig, default_roster};
    use crate::quorum::VoteChoice;

    fn registry() -> ParticipantRegistry {
        ParticipantRegistry::initialize(default_roster(), &RosterConfig::default()).unwrap()
    }

    fn votes(choices: &[(&str, VoteChoice)]) -> Vec<Vote> {
        choices
            .iter()
            .map(|(id, c)| Vote::new(*id, "p1", *c))
            .collect()
    }

    #[test]
    fn test_seven_voters_five_approve_is_approved() {
        let votes = votes(&[
            ("ceo", VoteChoice::Approve),
            ("pm", VoteChoice::Approve),
            ("cto", VoteChoice::ApproveWithConditions),
            ("developer", VoteChoice::Approve),
            ("finance", VoteChoice::Approve),
            ("qa", VoteChoice::Reject),
            ("marketing", VoteChoice::Reject),
        ]);
        let tally = compute_tally(&votes, &registry(), &TallyConfig::default());

        assert_eq!(tally.outcome, TallyOutcome::Approved);
        assert_eq!(tally.voting_participant_count, 7);
        assert!((tally.total_weight - 8.6).abs() < 1e-9);
        assert!((tally.positive_weight - 6.5).abs() < 1e-9);
        assert!(tally.approval_percentage >= 60.0);
    }

    #[test]
    fn test_six_voters_fail_quorum_with_zero_weights() {
        let votes = votes(&[
            ("ceo", VoteChoice::Approve),
            ("pm", VoteChoice::Approve),
            ("cto", VoteChoice::Approve),
            ("developer", VoteChoice::Approve),
            ("finance", VoteChoice::Approve),
            ("qa", VoteChoice::Approve),
        ]);
        let tally = compute_tally(&votes, &registry(), &TallyConfig::default());

        assert_eq!(tally.outcome, TallyOutcome::FailedQuorum);
        assert_eq!(tally.voting_participant_count, 6);
        assert_eq!(tally.required_quorum, 7);
        assert_eq!(tally.total_weight, 0.0);
        assert_eq!(tally.positive_weight, 0.0);
        assert_eq!(tally.approval_percentage, 0.0);
    }

    #[test]
    fn test_advisory_and_unknown_votes_are_ignored() {
        let mut list = votes(&[
            ("ceo", VoteChoice::Approve),
            ("pm", VoteChoice::Approve),
            ("cto", VoteChoice::Approve),
            ("developer", VoteChoice::Approve),
            ("finance", VoteChoice::Approve),
            ("qa", VoteChoice::Approve),
        ]);
        list.push(Vote::new("memory", "p1", VoteChoice::Approve));
        list.push(Vote::new("stranger", "p1", VoteChoice::Approve));
        let tally = compute_tally(&list, &registry(), &TallyConfig::default());
        assert_eq!(tally.outcome, TallyOutcome::FailedQuorum);
        assert_eq!(tally.voting_participant_count, 6);
    }

    #[test]
    fn test_duplicate_votes_count_once() {
        let mut list = votes(&[
            ("ceo", VoteChoice::Reject),
            ("pm", VoteChoice::Approve),
            ("cto", VoteChoice::Approve),
            ("developer", VoteChoice::Approve),
            ("finance", VoteChoice::Approve),
            ("qa", VoteChoice::Approve),
            ("marketing", VoteChoice::Approve),
        ]);
        list.push(Vote::new("ceo", "p1", VoteChoice::Approve));
        let tally = compute_tally(&list, &registry(), &TallyConfig::default());
        assert_eq!(tally.voting_participant_count, 7);
        assert!((tally.positive_weight - 7.1).abs() < 1e-9);
    }

    #[test]
    fn test_exact_threshold_approves() {
        // 3.0 of 5.0 positive is exactly 60%
        let config = RosterConfig::default()
            .with_weight(Role::Ceo, 1.5)
            .with_weight(Role::ProjectManager, 1.5)
            .with_weight(Role::Cto, 1.0)
            .with_weight(Role::Developer, 1.0);
        let registry = ParticipantRegistry::initialize(default_roster(), &config).unwrap();
        let votes = votes(&[
            ("ceo", VoteChoice::Approve),
            ("pm", VoteChoice::Approve),
            ("cto", VoteChoice::Reject),
            ("developer", VoteChoice::Reject),
        ]);
        let tally_config = TallyConfig {
            min_voting_participants: 4,
            ..TallyConfig::default()
        };
        let tally = compute_tally(&votes, &registry, &tally_config);
        assert_eq!(tally.outcome, TallyOutcome::Approved);
    }

    #[test]
    fn test_just_below_threshold_rejects() {
        let config = RosterConfig::default()
            .with_weight(Role::Ceo, 0.599995)
            .with_weight(Role::ProjectManager, 0.400005);
        let registry = ParticipantRegistry::initialize(default_roster(), &config).unwrap();
        let votes = votes(&[("ceo", VoteChoice::Approve), ("pm", VoteChoice::Reject)]);
        let tally_config = TallyConfig {
            min_voting_participants: 2,
            ..TallyConfig::default()
        };
        let tally = compute_tally(&votes, &registry, &tally_config);
        assert!((tally.approval_percentage - 59.9995).abs() < 1e-6);
        assert_eq!(tally.outcome, TallyOutcome::Rejected);
    }

    #[test]
    fn test_meets_threshold_boundary() {
        assert!(meets_threshold(60.0, 60.0));
        assert!(meets_threshold(59.999_999_999_99, 60.0));
        assert!(!meets_threshold(59.999, 60.0));
        assert!(!meets_threshold(59.999_999, 60.0));
        // 0.7 + 0.1 sums to 0.7999999999999999
        assert!(meets_threshold((0.7 + 0.1) * 100.0 - 20.0, 60.0));
    }

    #[test]
    fn test_reputation_scales_weight() {
        let base = registry();
        let boosted = base.with_reputation(&[crate::participant::ReputationEvent::new(
            "marketing",
            4.0,
            "test",
        )]);
        let votes = votes(&[
            ("ceo", VoteChoice::Reject),
            ("pm", VoteChoice::Reject),
            ("cto", VoteChoice::Reject),
            ("developer", VoteChoice::Reject),
            ("finance", VoteChoice::Reject),
            ("qa", VoteChoice::Reject),
            ("marketing", VoteChoice::Approve),
        ]);
        let before = compute_tally(&votes, &base, &TallyConfig::default());
        let after = compute_tally(&votes, &boosted, &TallyConfig::default());
        assert!(after.approval_percentage > before.approval_percentage);
        assert!((after.positive_weight - 5.0).abs() < 1e-9);
    }
}
