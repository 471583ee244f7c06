//! Meeting parameters — use case control.
//!
//! [`MeetingParams`] groups the static parameters that control
//! [`RunMeetingUseCase`](crate::use_cases::run_meeting::RunMeetingUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingParams {
    /// Approval threshold in percent (inclusive).
    pub approval_threshold: f64,
    /// Upper bound on a single generator call before the fallback template is used.
    pub generation_timeout: Duration,
    /// Run one regeneration pass when artifacts are missing or invalid.
    pub regenerate_missing_artifacts: bool,
    /// Participants that do not answer the vote.
    pub absent: Vec<String>,
}

impl Default for MeetingParams {
    fn default() -> Self {
        Self {
            approval_threshold: 60.0,
            generation_timeout: Duration::from_secs(15),
            regenerate_missing_artifacts: true,
            absent: Vec::new(),
        }
    }
}

impl MeetingParams {
    // ==================== Builder Methods ====================

    pub fn with_approval_threshold(mut self, threshold: f64) -> Self {
        self.approval_threshold = threshold;
        self
    }

    pub fn with_generation_timeout(mut self, timeout: Duration) -> Self {
        self.generation_timeout = timeout;
        self
    }

    pub fn with_regeneration(mut self, enabled: bool) -> Self {
        self.regenerate_missing_artifacts = enabled;
        self
    }

    pub fn with_absent<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.absent = ids.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = MeetingParams::default();
        assert_eq!(params.approval_threshold, 60.0);
        assert_eq!(params.generation_timeout, Duration::from_secs(15));
        assert!(params.regenerate_missing_artifacts);
        assert!(params.absent.is_empty());
    }

    #[test]
    fn test_builder() {
        let params = MeetingParams::default()
            .with_generation_timeout(Duration::from_millis(50))
            .with_absent(["qa", "cto"])
            .with_regeneration(false);

        assert_eq!(params.generation_timeout, Duration::from_millis(50));
        assert_eq!(params.absent, vec!["qa".to_string(), "cto".to_string()]);
        assert!(!params.regenerate_missing_artifacts);
    }
}
