//! Participant entities

use serde::{Deserialize, Serialize};

/// Minimum value a reputation multiplier may take.
pub const MIN_REPUTATION: f64 = 0.1;

/// Closed set of meeting roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Ceo,
    #[serde(rename = "pm")]
    ProjectManager,
    Cto,
    Developer,
    Qa,
    Marketing,
    Finance,
    Critic,
    Chair,
    Memory,
}

impl Role {
    /// All roles in standard roster order.
    pub const ALL: [Role; 10] = [
        Role::Ceo,
        Role::ProjectManager,
        Role::Cto,
        Role::Developer,
        Role::Qa,
        Role::Marketing,
        Role::Finance,
        Role::Critic,
        Role::Chair,
        Role::Memory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Ceo => "ceo",
            Role::ProjectManager => "pm",
            Role::Cto => "cto",
            Role::Developer => "developer",
            Role::Qa => "qa",
            Role::Marketing => "marketing",
            Role::Finance => "finance",
            Role::Critic => "critic",
            Role::Chair => "chair",
            Role::Memory => "memory",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Ceo => "Chief Executive",
            Role::ProjectManager => "Project Manager",
            Role::Cto => "Chief Technology Officer",
            Role::Developer => "Developer",
            Role::Qa => "QA Engineer",
            Role::Marketing => "Marketing Specialist",
            Role::Finance => "Financial Analyst",
            Role::Critic => "Critic",
            Role::Chair => "Meeting Chair",
            Role::Memory => "Memory Keeper",
        }
    }

    /// Standard voting weight for this role. The memory keeper is advisory.
    pub fn default_weight(&self) -> f64 {
        match self {
            Role::Ceo => 1.5,
            Role::ProjectManager | Role::Cto => 1.3,
            Role::Developer | Role::Finance => 1.2,
            Role::Qa | Role::Critic => 1.1,
            Role::Marketing | Role::Chair => 1.0,
            Role::Memory => 0.0,
        }
    }

    /// Whether contributions from this role may become proposals.
    pub fn proposes(&self) -> bool {
        !matches!(self, Role::Critic | Role::Memory)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Role::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "Unknown role: {}. Valid: {}",
                    s,
                    Role::ALL
                        .iter()
                        .map(|r| r.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

/// A meeting participant (Entity)
///
/// # Example
///
/// ```
/// use council_domain::participant::{Participant, Role};
///
/// let ceo = Participant::new("ceo", "Chief Executive", Role::Ceo)
///     .with_weight(1.5)
///     .with_reputation(2.0);
/// assert!(ceo.is_voting());
/// assert_eq!(ceo.effective_weight(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique, stable identifier
    pub id: String,
    pub display_name: String,
    pub role: Role,
    /// Base voting weight (0 means advisory-only)
    pub base_weight: f64,
    /// Reputation multiplier (>= 0.1)
    pub reputation_multiplier: f64,
    /// Ordered expertise tags
    #[serde(default)]
    pub expertise_tags: Vec<String>,
}

impl Participant {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            role,
            base_weight: role.default_weight(),
            reputation_multiplier: 1.0,
            expertise_tags: Vec::new(),
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.base_weight = weight;
        self
    }

    pub fn with_reputation(mut self, multiplier: f64) -> Self {
        self.reputation_multiplier = multiplier;
        self
    }

    pub fn with_expertise<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expertise_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// `base_weight * reputation_multiplier`
    pub fn effective_weight(&self) -> f64 {
        self.base_weight * self.reputation_multiplier
    }

    /// Voting participants have a positive base weight.
    pub fn is_voting(&self) -> bool {
        self.base_weight > 0.0
    }

    /// Returns a copy with the reputation shifted by `delta`, floored at 0.1.
    pub fn adjusted_reputation(&self, delta: f64) -> Self {
        let mut next = self.clone();
        next.reputation_multiplier = (self.reputation_multiplier + delta).max(MIN_REPUTATION);
        next
    }
}

/// The standard ten-seat roster, one participant per role, ids equal to the
/// role keys.
pub fn default_roster() -> Vec<Participant> {
    Role::ALL
        .iter()
        .map(|role| {
            let tags: &[&str] = match role {
                Role::Ceo => &["strategy", "leadership", "vision"],
                Role::ProjectManager => &["project management", "planning", "coordination"],
                Role::Cto => &["technology", "engineering", "security"],
                Role::Developer => &["programming", "delivery", "implementation"],
                Role::Qa => &["testing", "quality", "verification"],
                Role::Marketing => &["marketing", "market research", "customers"],
                Role::Finance => &["finance", "roi", "costs"],
                Role::Critic => &["critical analysis", "risk assessment", "review"],
                Role::Chair => &["facilitation", "coordination", "decision making"],
                Role::Memory => &["knowledge management", "archiving", "retrieval"],
            };
            Participant::new(role.as_str(), role.display_name(), *role).with_expertise(tags.iter().copied())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
        assert!("intern".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serde_uses_short_keys() {
        let json = serde_json::to_string(&Role::ProjectManager).unwrap();
        assert_eq!(json, "\"pm\"");
        let role: Role = serde_json::from_str("\"critic\"").unwrap();
        assert_eq!(role, Role::Critic);
    }

    #[test]
    fn test_memory_is_advisory() {
        let memory = Participant::new("memory", "Memory Keeper", Role::Memory);
        assert!(!memory.is_voting());
        assert_eq!(memory.effective_weight(), 0.0);
    }

    #[test]
    fn test_adjusted_reputation_floors_at_minimum() {
        let critic = Participant::new("critic", "Critic", Role::Critic);
        let lowered = critic.adjusted_reputation(-5.0);
        assert_eq!(lowered.reputation_multiplier, MIN_REPUTATION);
        // Copy-on-write: original untouched
        assert_eq!(critic.reputation_multiplier, 1.0);
    }

    #[test]
    fn test_default_roster_shape() {
        let roster = default_roster();
        assert_eq!(roster.len(), 10);
        assert_eq!(roster.iter().filter(|p| p.is_voting()).count(), 9);
        assert_eq!(roster[0].id, "ceo");
        assert_eq!(roster[0].base_weight, 1.5);
        assert!(roster.iter().all(|p| !p.expertise_tags.is_empty()));
    }
}
