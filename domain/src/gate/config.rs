use serde::{Deserialize, Serialize};

/// Thresholds and word lists used by [`CriticGate`](super::CriticGate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Minimum character count of the evaluation
    pub min_chars: usize,
    /// Minimum whitespace-separated word count
    pub min_words: usize,
    /// Generic praise words
    pub praise_words: Vec<String>,
    /// A praise word occurring more often than this marks the text as praise-dominated
    pub praise_repetition_threshold: usize,
    /// Phrases that mark the text as praise-dominated on their own
    pub praise_phrases: Vec<String>,
    /// Texts shorter than this may still pass through emergency acceptance
    pub short_text_chars: usize,
    /// High-signal keywords for emergency acceptance
    pub emergency_keywords: Vec<String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            min_chars: 20,
            min_words: 3,
            praise_words: ["excellent", "good", "great", "perfect", "amazing"]
                .map(String::from)
                .to_vec(),
            praise_repetition_threshold: 3,
            praise_phrases: vec!["no issues at all".to_string()],
            short_text_chars: 50,
            emergency_keywords: ["risk", "weakness", "do not recommend"]
                .map(String::from)
                .to_vec(),
        }
    }
}
