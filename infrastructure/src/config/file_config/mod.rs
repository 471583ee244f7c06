//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application
//! configuration with `to_*` methods, which also report problems as
//! [`ConfigIssue`]s.

mod generator;
mod logging;
mod meeting;
mod output;
mod roster;

pub use generator::{FileGeneratorConfig, GeneratorProvider};
pub use logging::FileLoggingConfig;
pub use meeting::FileMeetingConfig;
pub use output::FileOutputConfig;
pub use roster::FileParticipant;

use council_application::{CouncilConfig, MeetingParams};
use council_domain::{
    ConfigIssue, ConfigIssueCode, GateConfig, Participant, Role, RosterConfig, Severity,
    default_roster,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Meeting rules and artifact locations
    pub meeting: FileMeetingConfig,
    /// Role key → base voting weight
    pub voting_weights: BTreeMap<String, f64>,
    /// Custom roster; the standard ten-seat roster when empty
    pub roster: Vec<FileParticipant>,
    /// Critic gate thresholds and word lists
    pub gate: GateConfig,
    /// Content generator settings
    pub generator: FileGeneratorConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            meeting: FileMeetingConfig::default(),
            voting_weights: Role::ALL
                .iter()
                .map(|r| (r.as_str().to_string(), r.default_weight()))
                .collect(),
            roster: Vec::new(),
            gate: GateConfig::default(),
            generator: FileGeneratorConfig::default(),
            output: FileOutputConfig::default(),
            logging: FileLoggingConfig::default(),
        }
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Roster rules themselves (counts, duplicates, quorum floor) are
    /// enforced when the meeting starts.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.to_roster_config().1);
        issues.extend(self.to_participants().1);
        issues.extend(self.meeting.validate());
        issues.extend(self.generator.validate());
        issues.extend(self.output.validate());
        issues
    }

    /// Roster rules from `[meeting]` and `[voting_weights]`.
    ///
    /// Unknown role keys are reported and skipped.
    pub fn to_roster_config(&self) -> (RosterConfig, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut weights = BTreeMap::new();
        for (key, weight) in &self.voting_weights {
            match key.parse::<Role>() {
                Ok(role) => {
                    weights.insert(role, *weight);
                }
                Err(_) => issues.push(unknown_role_issue(&format!("voting_weights.{key}"), key)),
            }
        }

        let config = RosterConfig {
            participant_count: self.meeting.participant_count,
            min_voting_participants: self.meeting.min_voting_participants,
            roles: weights.keys().copied().collect(),
            voting_weights: weights,
        };
        (config, issues)
    }

    /// Participants from `[[roster]]`, or the standard roster when none are listed.
    pub fn to_participants(&self) -> (Vec<Participant>, Vec<ConfigIssue>) {
        if self.roster.is_empty() {
            return (default_roster(), Vec::new());
        }

        let mut issues = Vec::new();
        let mut participants = Vec::with_capacity(self.roster.len());
        for (index, entry) in self.roster.iter().enumerate() {
            match entry.to_participant() {
                Ok(participant) => participants.push(participant),
                Err(_) => issues.push(unknown_role_issue(
                    &format!("roster[{index}].role"),
                    &entry.role,
                )),
            }
        }
        (participants, issues)
    }

    pub fn to_meeting_params(&self) -> MeetingParams {
        self.meeting.to_meeting_params()
    }

    /// Assemble the application configuration, ignoring issues already
    /// reported by [`validate`](Self::validate).
    pub fn to_council_config(&self) -> CouncilConfig {
        CouncilConfig::new(
            self.to_participants().0,
            self.to_roster_config().0,
            self.gate.clone(),
            self.to_meeting_params(),
        )
    }
}

fn unknown_role_issue(field: &str, value: &str) -> ConfigIssue {
    ConfigIssue {
        severity: Severity::Error,
        code: ConfigIssueCode::InvalidEnumValue {
            field: field.to_string(),
            value: value.to_string(),
            valid_values: Role::ALL.iter().map(|r| r.as_str().to_string()).collect(),
        },
        message: format!("{field}: unknown role '{value}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::{OutputFormat, config::has_errors};

    #[test]
    fn test_default_config_is_valid() {
        let config = FileConfig::default();
        let issues: Vec<_> = config
            .validate()
            .into_iter()
            .filter(|i| i.severity == Severity::Error)
            .collect();
        assert!(issues.is_empty(), "{issues:?}");
        assert_eq!(config.voting_weights.len(), 10);
        assert_eq!(config.voting_weights["ceo"], 1.5);
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[meeting]
participant_count = 10
min_voting_participants = 6
approval_threshold = 66.0
generation_timeout_secs = 5
absent = ["qa"]

[voting_weights]
ceo = 2.0

[gate]
min_chars = 30

[generator]
provider = "template"
seed = 7

[output]
format = "json"
color = false

[logging]
conversation_log = "logs/conversation.jsonl"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.meeting.min_voting_participants, 6);
        assert_eq!(config.meeting.absent, vec!["qa".to_string()]);
        assert_eq!(config.voting_weights["ceo"], 2.0);
        assert_eq!(config.gate.min_chars, 30);
        assert_eq!(config.gate.min_words, 3);
        assert_eq!(config.generator.seed, 7);
        assert_eq!(config.output.parse_format().0, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(
            config.logging.conversation_log.as_deref(),
            Some("logs/conversation.jsonl")
        );
    }

    #[test]
    fn test_unknown_weight_key_is_an_error() {
        let mut config = FileConfig::default();
        config.voting_weights.insert("intern".to_string(), 0.5);
        let (roster, issues) = config.to_roster_config();
        assert_eq!(roster.voting_weights.len(), 10);
        assert_eq!(issues.len(), 1);
        assert!(has_errors(&issues));
    }

    #[test]
    fn test_custom_roster() {
        let toml_str = r#"
[[roster]]
id = "alice"
role = "ceo"
expertise = ["strategy"]

[[roster]]
id = "bob"
role = "janitor"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let (participants, issues) = config.to_participants();
        assert_eq!(participants.len(), 1);
        assert_eq!(participants[0].id, "alice");
        assert_eq!(participants[0].display_name, "Chief Executive");
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_to_council_config() {
        let mut config = FileConfig::default();
        config.meeting.min_voting_participants = 5;
        config.meeting.approval_threshold = 70.0;
        let council = config.to_council_config();
        assert_eq!(council.participants().len(), 10);
        assert_eq!(council.tally().min_voting_participants, 5);
        assert_eq!(council.tally().approval_threshold, 70.0);
    }
}
