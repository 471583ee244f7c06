//! Console output formatter for meeting results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use council_application::MeetingResult;
use council_domain::{MeetingOutcome, Resolution, TallyOutcome};

/// Formats meeting results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn colored output off globally (config `output.color = false`).
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Outcome, decisions and action items
    pub fn format_summary(result: &MeetingResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Council Meeting"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Agenda:".cyan().bold(),
            result.agenda
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Session:".cyan().bold(),
            result.session_id
        ));

        if let Some(error) = &result.error {
            output.push_str(&format!("\n{} {}\n", "Error:".red().bold(), error));
            output.push_str(&Self::footer());
            return output;
        }

        output.push_str(&format!(
            "{} {}\n",
            "Outcome:".cyan().bold(),
            Self::outcome_label(result.outcome.as_ref())
        ));

        for decision in &result.decisions {
            output.push_str(&Self::section_header(&format!(
                "Decision: {}",
                decision.proposal.title
            )));
            let tally = &decision.tally;
            if tally.outcome == TallyOutcome::FailedQuorum {
                output.push_str(&format!(
                    "{} only {} voting participant(s), {} required\n",
                    "Quorum failed:".yellow().bold(),
                    tally.voting_participant_count,
                    tally.required_quorum
                ));
            } else {
                output.push_str(&format!(
                    "{} {:.1}% ({:.2} of {:.2} weight, {} voters)\n",
                    "Approval:".bold(),
                    tally.approval_percentage,
                    tally.positive_weight,
                    tally.total_weight,
                    tally.voting_participant_count
                ));
            }
            let roi = &decision.roi;
            output.push_str(&format!(
                "{} ${} cost, ${} revenue, {:.1}% over {} weeks\n",
                "ROI:".bold(),
                roi.estimated_cost,
                roi.projected_revenue,
                roi.roi_percentage,
                roi.development_time_weeks
            ));
        }

        if !result.action_items.is_empty() {
            output.push_str(&format!("\n{}\n", "Action Items:".cyan().bold()));
            for item in &result.action_items {
                output.push_str(&format!("  * {}\n", item));
            }
        }

        if !result.artifacts.is_empty() {
            output.push_str(&format!(
                "\n{} {} file(s) written\n",
                "Artifacts:".dimmed(),
                result.artifacts.len()
            ));
        }

        if !result.warnings.is_empty() {
            output.push_str(&format!("\n{}\n", "Warnings:".yellow().bold()));
            for warning in &result.warnings {
                output.push_str(&format!("  ! {}\n", warning));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Summary plus the transcript and roster statistics
    pub fn format_full(result: &MeetingResult) -> String {
        let mut output = Self::format_summary(result);

        if let Some(stats) = &result.statistics {
            output.push_str(&Self::section_header(&format!(
                "Participants ({} total, {} voting)",
                stats.total_participants, stats.voting_participants
            )));
            for p in &stats.participants {
                output.push_str(&format!(
                    "  {:<24} {:<10} weight {:.2} x rep {:.2} = {:.2}\n",
                    p.display_name,
                    p.role.as_str(),
                    p.base_weight,
                    p.reputation,
                    p.effective_weight
                ));
            }
        }

        if !result.transcript.is_empty() {
            output.push_str(&Self::section_header("Transcript"));
            let mut current = None;
            for entry in &result.transcript {
                if current != Some(entry.phase) {
                    output.push_str(&format!("\n{}\n", format!("── {} ──", entry.phase).yellow().bold()));
                    current = Some(entry.phase);
                }
                let marker = if entry.fallback { " (template)".dimmed().to_string() } else { String::new() };
                output.push_str(&format!(
                    "{}{}: {}\n",
                    entry.participant_id.bold(),
                    marker,
                    entry.content
                ));
            }
        }

        for decision in &result.decisions {
            output.push_str(&Self::section_header(&format!("Votes: {}", decision.proposal.title)));
            for (id, choice) in &decision.votes {
                output.push_str(&format!("  {:<12} {}\n", id, choice));
            }
        }

        if !result.reputation_events.is_empty() {
            output.push_str(&Self::section_header("Reputation"));
            for event in &result.reputation_events {
                output.push_str(&format!(
                    "  {:<12} {:+.2} ({})\n",
                    event.participant_id, event.delta, event.reason
                ));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(result: &MeetingResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    fn outcome_label(outcome: Option<&MeetingOutcome>) -> String {
        match outcome {
            Some(MeetingOutcome::Completed {
                outcome: Resolution::Approved,
            }) => "APPROVED".green().bold().to_string(),
            Some(MeetingOutcome::Completed {
                outcome: Resolution::Rejected,
            }) => "REJECTED".red().bold().to_string(),
            Some(MeetingOutcome::Blocked { reason }) => {
                format!("{} ({})", "BLOCKED".yellow().bold(), reason)
            }
            Some(MeetingOutcome::QuorumFailed) => "QUORUM FAILED".yellow().bold().to_string(),
            None => "not reached".dimmed().to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_summary(&self, result: &MeetingResult) -> String {
        Self::format_summary(result)
    }

    fn format_full(&self, result: &MeetingResult) -> String {
        Self::format_full(result)
    }

    fn format_json(&self, result: &MeetingResult) -> String {
        Self::format_json(result)
    }
}
