//! Configuration issue reporting.
//!
//! Config loaders collect every problem they find instead of stopping at the
//! first one. Each problem is a [`ConfigIssue`] with a [`Severity`]; callers
//! abort only when [`has_errors`] is true.
//!
//! # Examples
//!
//! ```
//! use council_domain::config::{ConfigIssue, ConfigIssueCode, Severity, has_errors};
//!
//! let issues = vec![ConfigIssue {
//!     severity: Severity::Warning,
//!     code: ConfigIssueCode::OutOfRange {
//!         field: "gate.min_words".to_string(),
//!         value: "0".to_string(),
//!     },
//!     message: "gate.min_words is 0".to_string(),
//! }];
//! assert!(!has_errors(&issues));
//! ```

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A string field could not be parsed into its enum.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A numeric field is outside its accepted range.
    OutOfRange { field: String, value: String },
    /// A required secret (environment variable) is not set.
    MissingSecret { variable: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

/// Check whether any issues are errors (i.e. fatal).
pub fn has_errors(issues: &[ConfigIssue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Severity) -> ConfigIssue {
        ConfigIssue {
            severity,
            code: ConfigIssueCode::MissingSecret {
                variable: "AI_API_KEY".to_string(),
            },
            message: "missing".to_string(),
        }
    }

    #[test]
    fn has_errors_returns_true_for_errors() {
        assert!(has_errors(&[issue(Severity::Warning), issue(Severity::Error)]));
    }

    #[test]
    fn has_errors_returns_false_for_warnings_only() {
        assert!(!has_errors(&[issue(Severity::Warning)]));
    }

    #[test]
    fn has_errors_returns_false_for_empty() {
        assert!(!has_errors(&[]));
    }
}
