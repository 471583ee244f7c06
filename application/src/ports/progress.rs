//! Progress notification port
//!
//! Defines the interface for reporting progress while a meeting runs.

use council_domain::{MeetingPhase, Participant};

/// Callback for progress updates during a meeting
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinners, plain lines, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts, with the number of expected contributions
    fn on_phase_start(&self, phase: &MeetingPhase, total_contributions: usize);

    /// Called after each contribution; `fallback` is true when the template was used
    fn on_contribution(&self, phase: &MeetingPhase, participant: &Participant, fallback: bool);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &MeetingPhase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &MeetingPhase, _total_contributions: usize) {}
    fn on_contribution(&self, _phase: &MeetingPhase, _participant: &Participant, _fallback: bool) {}
    fn on_phase_complete(&self, _phase: &MeetingPhase) {}
}
