//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL conversation log path; disabled when unset
    pub conversation_log: Option<String>,
    /// Directory for the daily rolling diagnostic log
    pub log_dir: String,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            conversation_log: None,
            log_dir: "logs".to_string(),
        }
    }
}
