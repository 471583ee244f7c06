//! Meeting configuration from TOML (`[meeting]` section)
//!
//! ```toml
//! [meeting]
//! participant_count = 10
//! min_voting_participants = 7
//! approval_threshold = 60.0
//! generation_timeout_secs = 15
//! meetings_dir = "meetings"
//! board_dir = "board"
//! absent = []
//! regenerate_missing_artifacts = true
//! ```

use council_application::MeetingParams;
use council_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMeetingConfig {
    pub participant_count: usize,
    pub min_voting_participants: usize,
    /// Percent of positive weight needed to approve (inclusive)
    pub approval_threshold: f64,
    pub generation_timeout_secs: u64,
    /// Root directory for per-meeting artifacts and the meetings index
    pub meetings_dir: String,
    /// Directory holding the task board
    pub board_dir: String,
    /// Participant ids that will not answer the vote
    pub absent: Vec<String>,
    pub regenerate_missing_artifacts: bool,
}

impl Default for FileMeetingConfig {
    fn default() -> Self {
        Self {
            participant_count: 10,
            min_voting_participants: 7,
            approval_threshold: 60.0,
            generation_timeout_secs: 15,
            meetings_dir: "meetings".to_string(),
            board_dir: "board".to_string(),
            absent: Vec::new(),
            regenerate_missing_artifacts: true,
        }
    }
}

impl FileMeetingConfig {
    pub fn to_meeting_params(&self) -> MeetingParams {
        MeetingParams::default()
            .with_approval_threshold(self.approval_threshold)
            .with_generation_timeout(Duration::from_secs(self.generation_timeout_secs))
            .with_regeneration(self.regenerate_missing_artifacts)
            .with_absent(self.absent.iter().cloned())
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if !(self.approval_threshold > 0.0 && self.approval_threshold <= 100.0) {
            issues.push(out_of_range(
                "meeting.approval_threshold",
                self.approval_threshold.to_string(),
                "must be in (0, 100]",
            ));
        }
        if self.generation_timeout_secs == 0 {
            issues.push(out_of_range(
                "meeting.generation_timeout_secs",
                "0".to_string(),
                "must be at least 1 second",
            ));
        }
        issues
    }
}

fn out_of_range(field: &str, value: String, expectation: &str) -> ConfigIssue {
    ConfigIssue {
        severity: Severity::Error,
        message: format!("{field}: {value} {expectation}"),
        code: ConfigIssueCode::OutOfRange {
            field: field.to_string(),
            value,
        },
    }
}
