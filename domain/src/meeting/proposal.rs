//! Proposals raised during brainstorming

use crate::core::time::current_timestamp;
use serde::{Deserialize, Serialize};

/// Maximum title length in characters.
pub const MAX_TITLE_CHARS: usize = 100;

/// An immutable proposal put to the meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub author_id: String,
    /// Milliseconds since the Unix epoch
    pub submitted_at: u64,
}

impl Proposal {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            author_id: author_id.into(),
            submitted_at: current_timestamp(),
        }
    }

    /// Build a proposal from a brainstorming contribution, deriving the title
    /// from the text.
    pub fn from_contribution(
        id: impl Into<String>,
        author_id: impl Into<String>,
        text: &str,
    ) -> Self {
        Self::new(id, extract_title(text), text.trim(), author_id)
    }
}

/// First double-quoted string, otherwise the first sentence, capped at
/// [`MAX_TITLE_CHARS`] characters.
///
/// ```
/// use council_domain::meeting::proposal::extract_title;
///
/// assert_eq!(extract_title("We should build \"Task Tracker\" now."), "Task Tracker");
/// assert_eq!(extract_title("A budgeting app. It helps families."), "A budgeting app");
/// ```
pub fn extract_title(text: &str) -> String {
    let quoted = text.split('"').nth(1).map(str::trim).filter(|q| {
        !q.is_empty() && text.matches('"').count() >= 2
    });

    let raw = match quoted {
        Some(q) => q,
        None => text
            .split(['.', '!', '?', '\n'])
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or("Untitled proposal"),
    };

    raw.chars().take(MAX_TITLE_CHARS).collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_prefers_quoted_text() {
        assert_eq!(
            extract_title("I propose \"Open Source Linter\". It is simple."),
            "Open Source Linter"
        );
    }

    #[test]
    fn test_title_falls_back_to_first_sentence() {
        assert_eq!(
            extract_title("  A platform for tutors! Everyone wins."),
            "A platform for tutors"
        );
    }

    #[test]
    fn test_unbalanced_quote_is_ignored() {
        assert_eq!(extract_title("Build a \"thing. Now"), "Build a \"thing");
    }

    #[test]
    fn test_title_is_capped() {
        let long = "x".repeat(250);
        assert_eq!(extract_title(&long).chars().count(), MAX_TITLE_CHARS);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(extract_title("   "), "Untitled proposal");
    }

    #[test]
    fn test_from_contribution() {
        let p = Proposal::from_contribution("p1", "ceo", "An API gateway. Fast.\n");
        assert_eq!(p.title, "An API gateway");
        assert_eq!(p.description, "An API gateway. Fast.");
        assert_eq!(p.author_id, "ceo");
    }
}
