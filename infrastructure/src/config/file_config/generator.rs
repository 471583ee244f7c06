//! Content generator configuration from TOML (`[generator]` section)
//!
//! ```toml
//! [generator]
//! provider = "http"                   # or "template"
//! base_url = "https://api.groq.com/openai/v1"
//! model = "llama-3.1-8b-instant"
//! api_key_env = "GROQ_API_KEY"
//! max_tokens = 300
//! temperature = 0.9
//! ```

use council_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorProvider {
    /// Offline rotating templates
    Template,
    /// OpenAI-compatible chat completions endpoint
    Http,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeneratorConfig {
    pub provider: String,
    pub base_url: String,
    pub model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Seed for the template generator's rotation
    pub seed: u64,
}

impl Default for FileGeneratorConfig {
    fn default() -> Self {
        Self {
            provider: "template".to_string(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama-3.1-8b-instant".to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            max_tokens: 300,
            temperature: 0.9,
            seed: 0,
        }
    }
}

impl FileGeneratorConfig {
    pub fn parse_provider(&self) -> (GeneratorProvider, Vec<ConfigIssue>) {
        match self.provider.trim().to_lowercase().as_str() {
            "template" | "offline" => (GeneratorProvider::Template, vec![]),
            "http" | "openai" | "groq" => (GeneratorProvider::Http, vec![]),
            _ => {
                let issue = ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "generator.provider".to_string(),
                        value: self.provider.clone(),
                        valid_values: vec!["template".to_string(), "http".to_string()],
                    },
                    message: format!("generator.provider: unknown value '{}'", self.provider),
                };
                (GeneratorProvider::Template, vec![issue])
            }
        }
    }

    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let (provider, mut issues) = self.parse_provider();

        if provider == GeneratorProvider::Http && self.api_key().is_none() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::MissingSecret {
                    variable: self.api_key_env.clone(),
                },
                message: format!(
                    "{} is not set; the offline template generator will be used",
                    self.api_key_env
                ),
            });
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::OutOfRange {
                    field: "generator.temperature".to_string(),
                    value: self.temperature.to_string(),
                },
                message: format!(
                    "generator.temperature: {} is outside 0.0..=2.0",
                    self.temperature
                ),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileGeneratorConfig::default();
        assert_eq!(config.parse_provider().0, GeneratorProvider::Template);
        assert_eq!(config.max_tokens, 300);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_unknown_provider() {
        let config = FileGeneratorConfig {
            provider: "carrier-pigeon".to_string(),
            ..FileGeneratorConfig::default()
        };
        let (provider, issues) = config.parse_provider();
        assert_eq!(provider, GeneratorProvider::Template);
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn test_http_without_key_warns() {
        let config = FileGeneratorConfig {
            provider: "http".to_string(),
            api_key_env: "COUNCIL_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..FileGeneratorConfig::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::MissingSecret { .. }
        ));
    }

    #[test]
    fn test_temperature_range() {
        let config = FileGeneratorConfig {
            temperature: 3.5,
            ..FileGeneratorConfig::default()
        };
        assert_eq!(config.validate().len(), 1);
    }
}
