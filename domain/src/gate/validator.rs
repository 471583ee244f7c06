//! Gate validator

use super::config::GateConfig;
use super::evaluation::{BlockedEvaluation, CriticEvaluation, PassedEvaluation};
use serde::Serialize;

/// The five content categories a critique is checked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCategory {
    Risk,
    Feasibility,
    Market,
    Weakness,
    Recommendation,
}

impl KeywordCategory {
    pub const ALL: [KeywordCategory; 5] = [
        KeywordCategory::Risk,
        KeywordCategory::Feasibility,
        KeywordCategory::Market,
        KeywordCategory::Weakness,
        KeywordCategory::Recommendation,
    ];

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            KeywordCategory::Risk => &["risk", "challenge", "threat", "danger", "concern", "uncertain"],
            KeywordCategory::Feasibility => &[
                "feasib", "viable", "practical", "implement", "cost", "budget", "timeline",
                "resource",
            ],
            KeywordCategory::Market => &["market", "competit", "customer", "demand", "user"],
            KeywordCategory::Weakness => &[
                "weakness",
                "weak",
                "flaw",
                "problem",
                "issue",
                "limitation",
                "drawback",
                "critique",
                "gap",
            ],
            KeywordCategory::Recommendation => &[
                "recommend",
                "suggest",
                "propose",
                "should",
                "advise",
                "opinion",
                "i think",
                "i believe",
            ],
        }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.keywords().iter().any(|k| lowered.contains(k))
    }
}

/// Detailed verdict for one evaluation text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateAssessment {
    pub passed: bool,
    pub char_count: usize,
    pub word_count: usize,
    /// Categories whose keywords occur in the text
    pub categories: Vec<KeywordCategory>,
    pub praise_dominated: bool,
    /// Accepted only through the short-text emergency rule
    pub emergency: bool,
    /// Why the text was refused; `None` when it passed
    pub reason: Option<String>,
}

impl GateAssessment {
    pub fn hits(&self) -> usize {
        self.categories.len()
    }
}

/// Decides whether a critic evaluation is substantive enough to allow a vote.
///
/// The check is a pure function of the text.
///
/// # Example
///
/// ```
/// use council_domain::gate::CriticGate;
///
/// let gate = CriticGate::default();
/// assert!(gate.assess("The main risk is cost; I recommend a smaller pilot.").passed);
/// assert!(!gate.assess("Great, great, great, great idea!").passed);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CriticGate {
    config: GateConfig,
}

impl CriticGate {
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn assess(&self, content: &str) -> GateAssessment {
        let lowered = content.trim().to_lowercase();
        let char_count = lowered.chars().count();
        let word_count = lowered.split_whitespace().count();
        let categories: Vec<KeywordCategory> = KeywordCategory::ALL
            .into_iter()
            .filter(|c| c.matches(&lowered))
            .collect();
        let praise_dominated = self.is_praise_dominated(&lowered);

        let failure = if char_count < self.config.min_chars {
            Some(format!(
                "evaluation too short ({} chars, minimum {})",
                char_count, self.config.min_chars
            ))
        } else if categories.is_empty() {
            Some("evaluation addresses no risk, feasibility, market, weakness or recommendation".to_string())
        } else if praise_dominated {
            Some("evaluation is dominated by generic praise".to_string())
        } else if word_count < self.config.min_words {
            Some(format!(
                "evaluation has {} words, minimum {}",
                word_count, self.config.min_words
            ))
        } else {
            None
        };

        let emergency = failure.is_some()
            && char_count < self.config.short_text_chars
            && !praise_dominated
            && self
                .config
                .emergency_keywords
                .iter()
                .any(|k| lowered.contains(k.as_str()));

        GateAssessment {
            passed: failure.is_none() || emergency,
            char_count,
            word_count,
            categories,
            praise_dominated,
            emergency,
            reason: if emergency { None } else { failure },
        }
    }

    pub fn validate(&self, evaluation: &CriticEvaluation) -> bool {
        self.assess(&evaluation.content).passed
    }

    /// Record the critic's text as an evaluation of `proposal_id`.
    pub fn evaluate(
        &self,
        proposal_id: impl Into<String>,
        author_id: impl Into<String>,
        content: impl Into<String>,
    ) -> CriticEvaluation {
        let content = content.into();
        let passed = self.assess(&content).passed;
        CriticEvaluation::new(proposal_id, author_id, content, passed)
    }

    /// Turn an evaluation into a [`PassedEvaluation`] or the reason it was blocked.
    pub fn admit(
        &self,
        evaluation: CriticEvaluation,
    ) -> Result<PassedEvaluation, BlockedEvaluation> {
        let assessment = self.assess(&evaluation.content);
        if assessment.passed {
            Ok(PassedEvaluation::new(CriticEvaluation {
                gate_passed: true,
                ..evaluation
            }))
        } else {
            Err(BlockedEvaluation {
                reason: assessment
                    .reason
                    .unwrap_or_else(|| "evaluation rejected".to_string()),
                evaluation: CriticEvaluation {
                    gate_passed: false,
                    ..evaluation
                },
            })
        }
    }

    fn is_praise_dominated(&self, lowered: &str) -> bool {
        let repeated = self
            .config
            .praise_words
            .iter()
            .any(|w| !w.is_empty() && lowered.matches(w.as_str()).count() > self.config.praise_repetition_threshold);
        repeated || self.config.praise_phrases.iter().any(|p| lowered.contains(p.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> CriticGate {
        CriticGate::default()
    }

    #[test]
    fn test_substantive_critique_passes() {
        let a = gate().assess(
            "The market is crowded and the budget is tight. I recommend a phased rollout to limit risk.",
        );
        assert!(a.passed);
        assert!(!a.emergency);
        assert_eq!(a.hits(), 4);
        assert!(a.reason.is_none());
    }

    #[test]
    fn test_praise_dominated_text_is_blocked() {
        let a = gate().assess(
            "This has no risks, everything is excellent, excellent, excellent, excellent.",
        );
        assert!(a.categories.contains(&KeywordCategory::Risk));
        assert!(a.praise_dominated);
        assert!(!a.passed);
        assert!(a.reason.unwrap().contains("praise"));
    }

    #[test]
    fn test_no_issues_phrase_is_blocked() {
        let a = gate().assess("I see no issues at all with the cost of this proposal.");
        assert!(!a.passed);
    }

    #[test]
    fn test_three_repetitions_are_tolerated() {
        let a = gate().assess("Good team, good market, good timing; I see no major concern.");
        assert!(!a.praise_dominated);
        assert!(a.passed);
    }

    #[test]
    fn test_no_category_is_blocked() {
        let a = gate().assess("This is a proposal about a thing we might build later on.");
        assert!(!a.passed);
        assert_eq!(a.hits(), 0);
    }

    #[test]
    fn test_short_text_with_emergency_keyword_passes() {
        // below the 20 char floor but carries a high-signal keyword
        let a = gate().assess("High risk here.");
        assert!(a.passed);
        assert!(a.emergency);
    }

    #[test]
    fn test_short_text_without_emergency_keyword_fails() {
        let a = gate().assess("Seems fine.");
        assert!(!a.passed);
        assert!(!a.emergency);
    }

    #[test]
    fn test_too_few_words_rescued_by_emergency() {
        let a = gate().assess("Unacceptable-weakness-everywhere");
        assert_eq!(a.word_count, 1);
        assert!(a.passed);
        assert!(a.emergency);
    }

    #[test]
    fn test_gate_is_deterministic() {
        let text = "Budget concerns aside, I think the user demand is real.";
        let first = gate().assess(text);
        for _ in 0..5 {
            assert_eq!(gate().assess(text), first);
        }
    }

    #[test]
    fn test_admit_produces_passed_evaluation() {
        let gate = gate();
        let evaluation = gate.evaluate("p1", "critic", "The main risk is cost; I recommend a pilot.");
        assert!(evaluation.gate_passed);
        assert!(gate.validate(&evaluation));
        let passed = gate.admit(evaluation).unwrap();
        assert_eq!(passed.evaluation().proposal_id, "p1");
    }

    #[test]
    fn test_admit_blocks_with_reason() {
        let gate = gate();
        let evaluation = gate.evaluate("p1", "critic", "Amazing amazing amazing amazing plan!!");
        assert!(!evaluation.gate_passed);
        let blocked = gate.admit(evaluation).unwrap_err();
        assert!(!blocked.evaluation.gate_passed);
        assert!(!blocked.reason.is_empty());
    }

    #[test]
    fn test_custom_thresholds() {
        let gate = CriticGate::new(GateConfig {
            min_chars: 5,
            min_words: 1,
            ..GateConfig::default()
        });
        assert!(gate.assess("risky").passed);
    }
}
