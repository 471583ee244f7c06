//! Custom roster entries from TOML (`[[roster]]` array)
//!
//! ```toml
//! [[roster]]
//! id = "alice"
//! role = "ceo"
//! display_name = "Alice"
//! reputation = 1.2
//! expertise = ["strategy", "fundraising"]
//! ```

use council_domain::{Participant, Role};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileParticipant {
    pub id: String,
    pub role: String,
    /// Defaults to the role's display name
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default = "default_reputation")]
    pub reputation: f64,
    #[serde(default)]
    pub expertise: Vec<String>,
}

fn default_reputation() -> f64 {
    1.0
}

impl FileParticipant {
    /// The base weight is left at the role default; the registry applies
    /// `[voting_weights]` on top.
    pub fn to_participant(&self) -> Result<Participant, String> {
        let role: Role = self.role.parse()?;
        let name = self
            .display_name
            .clone()
            .unwrap_or_else(|| role.display_name().to_string());
        Ok(Participant::new(&self.id, name, role)
            .with_reputation(self.reputation)
            .with_expertise(self.expertise.iter().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_participant() {
        let entry = FileParticipant {
            id: "alice".to_string(),
            role: "PM".to_string(),
            display_name: Some("Alice".to_string()),
            reputation: 1.5,
            expertise: vec!["planning".to_string()],
        };
        let participant = entry.to_participant().unwrap();
        assert_eq!(participant.role, Role::ProjectManager);
        assert_eq!(participant.display_name, "Alice");
        assert_eq!(participant.reputation_multiplier, 1.5);
        assert_eq!(participant.expertise_tags, vec!["planning".to_string()]);
    }

    #[test]
    fn test_unknown_role() {
        let entry = FileParticipant {
            id: "x".to_string(),
            role: "intern".to_string(),
            display_name: None,
            reputation: 1.0,
            expertise: vec![],
        };
        assert!(entry.to_participant().is_err());
    }
}
