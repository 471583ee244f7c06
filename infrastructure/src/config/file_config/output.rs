//! `[output]` section: how results are printed.
//!
//! The format is kept as a string so a typo is reported through
//! [`ConfigIssue`] with the valid values instead of failing the whole load.

use council_domain::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
use serde::{Deserialize, Serialize};

/// Environment variable that disables color regardless of the config.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// `summary`, `full` or `json`; the CLI `-o` flag wins over this
    pub format: Option<String>,
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Parsed format. An unknown value is an error and yields `None`.
    pub fn parse_format(&self) -> (Option<OutputFormat>, Vec<ConfigIssue>) {
        let Some(raw) = self.format.as_deref().map(str::trim) else {
            return (None, vec![]);
        };
        match raw.parse::<OutputFormat>() {
            Ok(format) => (Some(format), vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "output.format".to_string(),
                        value: raw.to_string(),
                        valid_values: ["summary", "full", "json"].map(String::from).to_vec(),
                    },
                    message: format!("output.format: unknown value '{raw}'"),
                };
                (None, vec![issue])
            }
        }
    }

    /// Color is on only when configured and `NO_COLOR` is unset or empty.
    pub fn use_color(&self) -> bool {
        let no_color = std::env::var(NO_COLOR_ENV).is_ok_and(|v| !v.is_empty());
        self.color && !no_color
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let (_, mut issues) = self.parse_format();
        if self.format.as_deref().map(str::trim) == Some("json") && self.color {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::OutOfRange {
                    field: "output.color".to_string(),
                    value: "true".to_string(),
                },
                message: "output.color has no effect with output.format = \"json\"".to_string(),
            });
        }
        issues
    }
}
