//! Filesystem artifacts for finished meetings.
//!
//! Layout under the meetings directory:
//!
//! ```text
//! meetings/
//! ├── index.json
//! └── <session>/
//!     ├── transcript.jsonl
//!     ├── minutes.md
//!     ├── decisions.json
//!     └── self_reflections/<participant>.md
//! board/
//! └── tasks.json
//! ```

mod error;
mod ledger;
mod render;
mod sink;
mod validation;

pub use error::{ArtifactError, check_session_id};
pub use ledger::{BoardTask, MeetingIndexEntry};
pub use sink::FsArtifactSink;

pub(crate) const TRANSCRIPT_FILE: &str = "transcript.jsonl";
pub(crate) const MINUTES_FILE: &str = "minutes.md";
pub(crate) const DECISIONS_FILE: &str = "decisions.json";
pub(crate) const REFLECTIONS_DIR: &str = "self_reflections";

pub(crate) fn reflection_file(participant_id: &str) -> String {
    format!("{REFLECTIONS_DIR}/{participant_id}.md")
}

/// RFC3339 rendering of a millisecond timestamp.
pub(crate) fn rfc3339(millis: u64) -> String {
    chrono::DateTime::from_timestamp_millis(millis as i64)
        .unwrap_or_default()
        .to_rfc3339()
}
