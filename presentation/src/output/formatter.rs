//! Output formatter trait

use council_application::MeetingResult;
use council_domain::OutputFormat;

/// Trait for formatting meeting results
pub trait OutputFormatter {
    /// Outcome, decisions and action items
    fn format_summary(&self, result: &MeetingResult) -> String;

    /// Summary plus the transcript and roster statistics
    fn format_full(&self, result: &MeetingResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &MeetingResult) -> String;

    /// Dispatch on the selected format
    fn render(&self, result: &MeetingResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Summary => self.format_summary(result),
            OutputFormat::Full => self.format_full(result),
            OutputFormat::Json => self.format_json(result),
        }
    }
}
