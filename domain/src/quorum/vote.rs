//! Vote types

use serde::{Deserialize, Serialize};

/// A participant's position on a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteChoice {
    Approve,
    ApproveWithConditions,
    Neutral,
    Reject,
    NeedsInfo,
}

impl VoteChoice {
    /// Approve and ApproveWithConditions count toward the positive weight.
    pub fn is_positive(&self) -> bool {
        matches!(self, VoteChoice::Approve | VoteChoice::ApproveWithConditions)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VoteChoice::Approve => "approve",
            VoteChoice::ApproveWithConditions => "approve_with_conditions",
            VoteChoice::Neutral => "neutral",
            VoteChoice::Reject => "reject",
            VoteChoice::NeedsInfo => "needs_info",
        }
    }
}

impl std::fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VoteChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "approve" => Ok(VoteChoice::Approve),
            "approve_with_conditions" | "conditional" => Ok(VoteChoice::ApproveWithConditions),
            "neutral" | "abstain" => Ok(VoteChoice::Neutral),
            "reject" => Ok(VoteChoice::Reject),
            "needs_info" | "needs_more_info" => Ok(VoteChoice::NeedsInfo),
            _ => Err(format!(
                "Unknown vote choice: {}. Valid: approve, approve_with_conditions, neutral, reject, needs_info",
                s
            )),
        }
    }
}

/// A single cast vote
///
/// # Example
///
/// ```
/// use council_domain::quorum::{Vote, VoteChoice};
///
/// let vote = Vote::new("cto", "p1", VoteChoice::ApproveWithConditions);
/// assert!(vote.is_positive());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub participant_id: String,
    pub proposal_id: String,
    pub choice: VoteChoice,
}

impl Vote {
    pub fn new(
        participant_id: impl Into<String>,
        proposal_id: impl Into<String>,
        choice: VoteChoice,
    ) -> Self {
        Self {
            participant_id: participant_id.into(),
            proposal_id: proposal_id.into(),
            choice,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.choice.is_positive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_choices() {
        assert!(VoteChoice::Approve.is_positive());
        assert!(VoteChoice::ApproveWithConditions.is_positive());
        assert!(!VoteChoice::Neutral.is_positive());
        assert!(!VoteChoice::Reject.is_positive());
        assert!(!VoteChoice::NeedsInfo.is_positive());
    }

    #[test]
    fn test_choice_from_str() {
        assert_eq!("Approve".parse::<VoteChoice>(), Ok(VoteChoice::Approve));
        assert_eq!(
            "approve-with-conditions".parse::<VoteChoice>(),
            Ok(VoteChoice::ApproveWithConditions)
        );
        assert_eq!("needs info".parse::<VoteChoice>(), Ok(VoteChoice::NeedsInfo));
        assert!("maybe".parse::<VoteChoice>().is_err());
    }

    #[test]
    fn test_choice_serde() {
        let json = serde_json::to_string(&VoteChoice::ApproveWithConditions).unwrap();
        assert_eq!(json, "\"approve_with_conditions\"");
    }
}
