//! Cross-meeting files: the meetings index and the task board.

use super::error::ArtifactError;
use super::rfc3339;
use council_domain::{Decision, MeetingSession};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub(super) const INDEX_FILE: &str = "index.json";
pub(super) const BOARD_FILE: &str = "tasks.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingIndexEntry {
    pub session_id: String,
    pub agenda: String,
    pub status: String,
    pub started_at: String,
    pub decisions: usize,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct MeetingIndex {
    #[serde(default)]
    meetings: Vec<MeetingIndexEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardTask {
    pub id: String,
    pub title: String,
    pub session_id: String,
    pub decision_id: String,
    pub created_at: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct TaskBoard {
    #[serde(default)]
    todo: Vec<BoardTask>,
    #[serde(default)]
    in_progress: Vec<BoardTask>,
    #[serde(default)]
    done: Vec<BoardTask>,
}

/// Append this meeting to `index.json`, replacing an earlier entry for the
/// same session.
pub(super) async fn update_index(meetings_dir: &Path, session: &MeetingSession) -> Result<(), ArtifactError> {
    let path = meetings_dir.join(INDEX_FILE);
    let mut index: MeetingIndex = read_json(&path).await?;

    let status = session
        .outcome()
        .map(|o| o.status().to_string())
        .unwrap_or_else(|| "incomplete".to_string());
    index.meetings.retain(|m| m.session_id != session.id());
    index.meetings.push(MeetingIndexEntry {
        session_id: session.id().to_string(),
        agenda: session.agenda().to_string(),
        status,
        started_at: rfc3339(session.started_at()),
        decisions: session.decisions().len(),
    });

    write_json(&path, &index).await
}

/// Add one `todo` task per action item of every decision in the session.
pub(super) async fn update_board(board_dir: &Path, session: &MeetingSession) -> Result<usize, ArtifactError> {
    let path = board_dir.join(BOARD_FILE);
    let mut board: TaskBoard = read_json(&path).await?;

    let mut added = 0;
    for decision in session.decisions() {
        for task in tasks_for(session.id(), decision) {
            let known = board
                .todo
                .iter()
                .chain(&board.in_progress)
                .chain(&board.done)
                .any(|t| t.id == task.id);
            if !known {
                board.todo.push(task);
                added += 1;
            }
        }
    }

    write_json(&path, &board).await?;
    Ok(added)
}

fn tasks_for(session_id: &str, decision: &Decision) -> Vec<BoardTask> {
    decision
        .action_items
        .iter()
        .enumerate()
        .map(|(n, item)| BoardTask {
            id: format!("{}-task-{:02}", decision.id, n + 1),
            title: item.clone(),
            session_id: session_id.to_string(),
            decision_id: decision.id.clone(),
            created_at: rfc3339(decision.created_at),
        })
        .collect()
}

async fn read_json<T: Default + for<'de> Deserialize<'de>>(path: &Path) -> Result<T, ArtifactError> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) if content.trim().is_empty() => Ok(T::default()),
        Ok(content) => serde_json::from_str(&content).map_err(|source| ArtifactError::Json {
            path: path.to_path_buf(),
            source,
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(T::default()),
        Err(e) => Err(ArtifactError::io("read", path, e)),
    }
}

async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ArtifactError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| ArtifactError::io("create", parent, e))?;
    }
    let json = serde_json::to_string_pretty(value).map_err(|source| ArtifactError::Serialize {
        name: path.display().to_string(),
        source,
    })?;
    tokio::fs::write(path, json)
        .await
        .map_err(|e| ArtifactError::io("write", path, e))
}
