//! Cleanup of raw model replies before they enter the transcript.

use council_domain::MeetingPhase;

/// Character budget for one contribution in the given phase.
pub fn max_chars_for(phase: MeetingPhase) -> usize {
    match phase {
        MeetingPhase::Brainstorming => 400,
        MeetingPhase::EvaluationRequired | MeetingPhase::Voting => 250,
        _ => 150,
    }
}

/// Collapse the reply to a single paragraph and fit it to the phase budget.
///
/// ```
/// use council_domain::MeetingPhase;
/// use council_infrastructure::generator::clean_response;
///
/// let raw = "  First point.\n\n  Second point.  ";
/// assert_eq!(clean_response(raw, MeetingPhase::Discussion), "First point. Second point.");
/// ```
pub fn clean_response(raw: &str, phase: MeetingPhase) -> String {
    let joined = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    truncate_at_sentence(&joined, max_chars_for(phase))
}

/// Cut `text` after the last full sentence that fits in `max_chars`.
///
/// Text with no sentence end inside the budget is cut at `max_chars`.
pub fn truncate_at_sentence(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut kept = String::new();
    let mut kept_chars = 0;
    for sentence in text.split_inclusive(['.', '!', '?']) {
        let len = sentence.chars().count();
        if kept_chars + len > max_chars {
            break;
        }
        kept.push_str(sentence);
        kept_chars += len;
    }

    let kept = kept.trim();
    if kept.is_empty() || !kept.ends_with(['.', '!', '?']) {
        text.chars().take(max_chars).collect::<String>().trim().to_string()
    } else {
        kept.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budgets() {
        assert_eq!(max_chars_for(MeetingPhase::Brainstorming), 400);
        assert_eq!(max_chars_for(MeetingPhase::EvaluationRequired), 250);
        assert_eq!(max_chars_for(MeetingPhase::Voting), 250);
        assert_eq!(max_chars_for(MeetingPhase::Discussion), 150);
        assert_eq!(max_chars_for(MeetingPhase::Opening), 150);
    }

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(truncate_at_sentence("Fine as is", 150), "Fine as is");
    }

    #[test]
    fn test_cut_at_last_full_sentence() {
        let text = "One two three. Four five six. Seven eight nine ten eleven.";
        assert_eq!(truncate_at_sentence(text, 30), "One two three. Four five six.");
    }

    #[test]
    fn test_hard_cut_without_sentence_end() {
        let text = "a".repeat(200);
        assert_eq!(truncate_at_sentence(&text, 150).len(), 150);
    }

    #[test]
    fn test_multibyte_text() {
        let text = "é".repeat(20);
        assert_eq!(truncate_at_sentence(&text, 10).chars().count(), 10);
    }

    #[test]
    fn test_clean_discussion_reply() {
        let raw = format!("{}.\n\n{}.", "x".repeat(100), "y".repeat(100));
        let cleaned = clean_response(&raw, MeetingPhase::Discussion);
        assert_eq!(cleaned, format!("{}.", "x".repeat(100)));
    }
}
