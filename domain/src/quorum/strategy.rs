//! Per-role voting heuristics
//!
//! Each voting role maps to a plain function from proposal to choice. The
//! table is looked up once per participant; advisory roles have no entry.

use super::vote::VoteChoice;
use crate::meeting::Proposal;
use crate::participant::Role;

pub type VotingStrategy = fn(&Proposal) -> VoteChoice;

/// Strategy for `role`, or `None` for roles that never vote.
pub fn voting_strategy(role: Role) -> Option<VotingStrategy> {
    match role {
        Role::Ceo => Some(ceo),
        Role::ProjectManager => Some(project_manager),
        Role::Cto => Some(cto),
        Role::Developer => Some(developer),
        Role::Qa => Some(qa),
        Role::Marketing => Some(marketing),
        Role::Finance => Some(finance),
        Role::Critic => Some(critic),
        Role::Chair => Some(chair),
        Role::Memory => None,
    }
}

fn full_text(proposal: &Proposal) -> String {
    format!("{} {}", proposal.title, proposal.description).to_lowercase()
}

fn mentions(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

fn ceo(_: &Proposal) -> VoteChoice {
    VoteChoice::Approve
}

fn chair(_: &Proposal) -> VoteChoice {
    VoteChoice::Approve
}

fn project_manager(proposal: &Proposal) -> VoteChoice {
    let text = full_text(proposal);
    if mentions(&text, &["phases", "incremental", "staged"]) {
        VoteChoice::Approve
    } else if text.contains("complex") {
        VoteChoice::ApproveWithConditions
    } else {
        VoteChoice::Approve
    }
}

fn cto(proposal: &Proposal) -> VoteChoice {
    let title = proposal.title.to_lowercase();
    if mentions(&title, &["platform", "system", "tool", "framework", "api", "engine"]) {
        VoteChoice::Approve
    } else {
        VoteChoice::Neutral
    }
}

fn developer(proposal: &Proposal) -> VoteChoice {
    let text = full_text(proposal);
    if mentions(&text, &["library", "tool", "framework", "api"]) {
        VoteChoice::Approve
    } else if text.contains("very complex") {
        VoteChoice::ApproveWithConditions
    } else {
        VoteChoice::Approve
    }
}

fn qa(proposal: &Proposal) -> VoteChoice {
    if mentions(&full_text(proposal), &["complex", "cutting-edge", "advanced"]) {
        VoteChoice::ApproveWithConditions
    } else {
        VoteChoice::Approve
    }
}

fn marketing(proposal: &Proposal) -> VoteChoice {
    if mentions(&full_text(proposal), &["customer", "market", "sales", "marketing"]) {
        VoteChoice::Approve
    } else {
        VoteChoice::Neutral
    }
}

fn finance(proposal: &Proposal) -> VoteChoice {
    let title = proposal.title.to_lowercase();
    if mentions(&full_text(proposal), &["expensive", "large investment"]) {
        VoteChoice::ApproveWithConditions
    } else if mentions(&title, &["free", "open source"]) {
        VoteChoice::Neutral
    } else {
        VoteChoice::Approve
    }
}

fn critic(proposal: &Proposal) -> VoteChoice {
    let text = full_text(proposal);
    let says_ai = text.split(|c: char| !c.is_alphanumeric()).any(|w| w == "ai");
    if says_ai || mentions(&text, &["blockchain", "revolutionary", "unproven", "brand new"]) {
        VoteChoice::NeedsInfo
    } else if mentions(&text, &["high competition", "major challenges"]) {
        VoteChoice::ApproveWithConditions
    } else {
        VoteChoice::Approve
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proposal(title: &str, description: &str) -> Proposal {
        Proposal::new("p1", title, description, "ceo")
    }

    #[test]
    fn test_memory_never_votes() {
        assert!(voting_strategy(Role::Memory).is_none());
        for role in Role::ALL.into_iter().filter(|r| *r != Role::Memory) {
            assert!(voting_strategy(role).is_some(), "{role} should vote");
        }
    }

    #[test]
    fn test_critic_wants_more_info_on_hype() {
        let vote = voting_strategy(Role::Critic).unwrap();
        assert_eq!(
            vote(&proposal("Blockchain ledger", "Decentralized records")),
            VoteChoice::NeedsInfo
        );
        assert_eq!(
            vote(&proposal("Recipe box", "Facing high competition")),
            VoteChoice::ApproveWithConditions
        );
    }

    #[test]
    fn test_critic_matches_ai_as_a_word() {
        let vote = voting_strategy(Role::Critic).unwrap();
        assert_eq!(vote(&proposal("AI tutor", "")), VoteChoice::NeedsInfo);
        assert_eq!(vote(&proposal("Email digest", "Maintain inbox")), VoteChoice::Approve);
    }

    #[test]
    fn test_cto_looks_at_title() {
        let vote = voting_strategy(Role::Cto).unwrap();
        assert_eq!(vote(&proposal("Build API gateway", "")), VoteChoice::Approve);
        assert_eq!(vote(&proposal("Recipe box", "with an api")), VoteChoice::Neutral);
    }

    #[test]
    fn test_finance_conditions() {
        let vote = voting_strategy(Role::Finance).unwrap();
        assert_eq!(
            vote(&proposal("Data center", "A large investment up front")),
            VoteChoice::ApproveWithConditions
        );
        assert_eq!(vote(&proposal("Open source linter", "")), VoteChoice::Neutral);
        assert_eq!(vote(&proposal("Invoice helper", "")), VoteChoice::Approve);
    }

    #[test]
    fn test_strategies_are_deterministic() {
        let p = proposal("Customer portal", "A complex staged rollout");
        for role in Role::ALL {
            if let Some(vote) = voting_strategy(role) {
                assert_eq!(vote(&p), vote(&p));
            }
        }
    }

    #[test]
    fn test_marketing_and_qa() {
        let p = proposal("Customer portal", "An advanced dashboard");
        assert_eq!(voting_strategy(Role::Marketing).unwrap()(&p), VoteChoice::Approve);
        assert_eq!(
            voting_strategy(Role::Qa).unwrap()(&p),
            VoteChoice::ApproveWithConditions
        );
    }
}
