//! Progress reporting for meeting execution

use colored::Colorize;
use council_application::ProgressNotifier;
use council_domain::{MeetingPhase, Participant};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress during a meeting with one progress bar per phase
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn phase_display_name(phase: &MeetingPhase) -> &'static str {
        match phase {
            MeetingPhase::Opening => "Opening",
            MeetingPhase::Brainstorming => "Brainstorming",
            MeetingPhase::Discussion => "Discussion",
            MeetingPhase::EvaluationRequired => "Critic evaluation",
            MeetingPhase::EvaluationPassed => "Gate passed",
            MeetingPhase::EvaluationBlocked => "Gate blocked",
            MeetingPhase::Voting => "Voting",
            MeetingPhase::Resolved => "Resolved",
            MeetingPhase::QuorumFailed => "Quorum failed",
            MeetingPhase::Closing => "Closing",
        }
    }

    fn contribution_mark(participant: &Participant, fallback: bool) -> String {
        if fallback {
            format!("{} {} (template)", "~".yellow(), participant.display_name)
        } else {
            format!("{} {}", "v".green(), participant.display_name)
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &MeetingPhase, total_contributions: usize) {
        let pb = self.multi.add(ProgressBar::new(total_contributions as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(Self::phase_display_name(phase).to_string());
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.phase_bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_contribution(&self, _phase: &MeetingPhase, participant: &Participant, fallback: bool) {
        if let Ok(bar) = self.phase_bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.set_message(Self::contribution_mark(participant, fallback));
            pb.inc(1);
        }
    }

    fn on_phase_complete(&self, phase: &MeetingPhase) {
        if let Ok(mut bar) = self.phase_bar.lock()
            && let Some(pb) = bar.take()
        {
            let name = Self::phase_display_name(phase);
            pb.finish_with_message(format!("{} complete", name.green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &MeetingPhase, total_contributions: usize) {
        println!(
            "{} {} ({} contributions)",
            "->".cyan(),
            ProgressReporter::phase_display_name(phase).bold(),
            total_contributions
        );
    }

    fn on_contribution(&self, _phase: &MeetingPhase, participant: &Participant, fallback: bool) {
        println!("  {}", ProgressReporter::contribution_mark(participant, fallback));
    }

    fn on_phase_complete(&self, _phase: &MeetingPhase) {
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::Role;

    #[test]
    fn test_reporter_tracks_phase_bar() {
        let reporter = ProgressReporter::new();
        let cto = Participant::new("cto", "Chief Technology Officer", Role::Cto);

        reporter.on_phase_start(&MeetingPhase::Discussion, 2);
        reporter.on_contribution(&MeetingPhase::Discussion, &cto, false);
        reporter.on_contribution(&MeetingPhase::Discussion, &cto, true);
        {
            let bar = reporter.phase_bar.lock().unwrap();
            assert_eq!(bar.as_ref().unwrap().position(), 2);
        }
        reporter.on_phase_complete(&MeetingPhase::Discussion);
        assert!(reporter.phase_bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_fallback_marker() {
        colored::control::set_override(false);
        let qa = Participant::new("qa", "QA Engineer", Role::Qa);
        assert_eq!(ProgressReporter::contribution_mark(&qa, true), "~ QA Engineer (template)");
        assert_eq!(ProgressReporter::contribution_mark(&qa, false), "v QA Engineer");
    }
}
