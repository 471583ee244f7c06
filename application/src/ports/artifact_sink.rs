//! Artifact sink port
//!
//! Persists a finished meeting (transcript, minutes, decisions, reflections)
//! and reports what is missing or malformed afterwards.

use async_trait::async_trait;
use council_domain::MeetingSession;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of a persist or regenerate pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArtifactReport {
    /// Paths of artifacts that exist and validated
    pub artifacts: Vec<String>,
    /// Required files that do not exist
    pub missing_files: Vec<String>,
    /// Files that exist but failed validation
    pub invalid_files: Vec<String>,
    /// Non-fatal problems (index, board)
    pub warnings: Vec<String>,
}

impl ArtifactReport {
    pub fn is_complete(&self) -> bool {
        self.missing_files.is_empty() && self.invalid_files.is_empty()
    }

    /// Files worth a regeneration pass.
    pub fn files_to_regenerate(&self) -> Vec<String> {
        let mut files = self.missing_files.clone();
        files.extend(self.invalid_files.iter().cloned());
        files
    }
}

#[async_trait]
pub trait ArtifactSink: Send + Sync {
    /// Write every artifact for `session`, then validate them.
    async fn persist(
        &self,
        session: &MeetingSession,
        reflections: &BTreeMap<String, String>,
    ) -> ArtifactReport;

    /// Rewrite only `files`, then validate the full set again.
    async fn regenerate(
        &self,
        session: &MeetingSession,
        reflections: &BTreeMap<String, String>,
        files: &[String],
    ) -> ArtifactReport;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_completeness() {
        let mut report = ArtifactReport::default();
        assert!(report.is_complete());

        report.missing_files.push("minutes.md".to_string());
        report.invalid_files.push("decisions.json".to_string());
        assert!(!report.is_complete());
        assert_eq!(
            report.files_to_regenerate(),
            vec!["minutes.md".to_string(), "decisions.json".to_string()]
        );
    }
}
