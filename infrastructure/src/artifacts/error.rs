//! Artifact persistence errors
//!
//! These never abort a meeting; the sink turns them into report warnings.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid JSON ({source}); left untouched", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize {name}: {source}")]
    Serialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown artifact '{0}'")]
    UnknownArtifact(String),

    #[error("Invalid session id '{0}': must be a single path component")]
    InvalidSessionId(String),
}

impl ArtifactError {
    pub(super) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ArtifactError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// A session id becomes a directory name under the meetings directory, so it
/// must not be empty, contain a path separator or be a dot component.
pub fn check_session_id(session_id: &str) -> Result<(), ArtifactError> {
    let bad = session_id.trim().is_empty()
        || session_id == "."
        || session_id.contains("..")
        || session_id.contains(['/', '\\'])
        || session_id.contains('\0');
    if bad {
        Err(ArtifactError::InvalidSessionId(session_id.to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_session_ids_are_accepted() {
        for id in ["meeting_20250101_120000", "retro-q3", "a.b"] {
            assert!(check_session_id(id).is_ok(), "{id}");
        }
    }

    #[test]
    fn test_path_like_session_ids_are_rejected() {
        for id in ["../x", "..", ".", "a/b", "a\\b", "/abs", "", "  "] {
            assert!(
                matches!(check_session_id(id), Err(ArtifactError::InvalidSessionId(_))),
                "{id:?}"
            );
        }
    }

    #[test]
    fn test_messages_name_the_path() {
        let err = ArtifactError::io(
            "write",
            "meetings/x/minutes.md",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(err.to_string().starts_with("Failed to write meetings/x/minutes.md"));
    }
}
