//! Post-write checks of a meeting directory.

use super::{DECISIONS_FILE, MINUTES_FILE, TRANSCRIPT_FILE, reflection_file};
use std::path::Path;

const TRANSCRIPT_FIELDS: [&str; 6] = [
    "timestamp",
    "participant",
    "phase",
    "kind",
    "content",
    "fallback",
];

/// Relative file names that are absent or malformed.
#[derive(Debug, Default, PartialEq)]
pub(super) struct Findings {
    pub missing: Vec<String>,
    pub invalid: Vec<String>,
}

type Check = fn(&str) -> bool;

enum FileState {
    Missing,
    Invalid,
    Valid,
}

pub(super) async fn inspect(meeting_dir: &Path, participant_ids: &[String]) -> Findings {
    let mut findings = Findings::default();

    let mut checks: Vec<(String, Check)> = vec![
        (TRANSCRIPT_FILE.to_string(), valid_transcript as Check),
        (MINUTES_FILE.to_string(), valid_markdown as Check),
        (DECISIONS_FILE.to_string(), valid_decisions as Check),
    ];
    checks.extend(
        participant_ids
            .iter()
            .map(|id| (reflection_file(id), valid_markdown as Check)),
    );

    for (name, check) in checks {
        match file_state(&meeting_dir.join(&name), check).await {
            FileState::Missing => findings.missing.push(name),
            FileState::Invalid => findings.invalid.push(name),
            FileState::Valid => {}
        }
    }
    findings
}

async fn file_state(path: &Path, check: Check) -> FileState {
    match tokio::fs::read_to_string(path).await {
        Ok(content) if check(&content) => FileState::Valid,
        Ok(_) => FileState::Invalid,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileState::Missing,
        Err(_) => FileState::Invalid,
    }
}

fn valid_markdown(content: &str) -> bool {
    !content.trim().is_empty()
}

fn valid_transcript(content: &str) -> bool {
    let mut lines = content.lines().filter(|l| !l.trim().is_empty()).peekable();
    if lines.peek().is_none() {
        return false;
    }
    lines.all(|line| {
        serde_json::from_str::<serde_json::Value>(line)
            .ok()
            .and_then(|v| v.as_object().cloned())
            .is_some_and(|obj| TRANSCRIPT_FIELDS.iter().all(|f| obj.contains_key(*f)))
    })
}

fn valid_decisions(content: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(content)
        .ok()
        .is_some_and(|v| v.get("decisions").is_some_and(|d| d.is_array()))
}
