//! [`ArtifactSink`] adapter writing meeting files with `tokio::fs`.

use super::error::{ArtifactError, check_session_id};
use super::ledger::{update_board, update_index};
use super::render::{decisions_json, minutes_markdown, reflection_markdown, transcript_jsonl};
use super::validation::inspect;
use super::{DECISIONS_FILE, MINUTES_FILE, REFLECTIONS_DIR, TRANSCRIPT_FILE, reflection_file};
use async_trait::async_trait;
use council_application::{ArtifactReport, ArtifactSink};
use council_domain::MeetingSession;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Writes transcript, minutes, decisions and reflections for each meeting
/// and keeps the meetings index and task board up to date.
#[derive(Debug, Clone)]
pub struct FsArtifactSink {
    meetings_dir: PathBuf,
    board_dir: PathBuf,
}

impl FsArtifactSink {
    pub fn new(meetings_dir: impl Into<PathBuf>, board_dir: impl Into<PathBuf>) -> Self {
        Self {
            meetings_dir: meetings_dir.into(),
            board_dir: board_dir.into(),
        }
    }

    /// Directory holding the files of one session. The id must be a single
    /// path component so nothing is written outside the meetings directory.
    pub fn meeting_dir(&self, session_id: &str) -> Result<PathBuf, ArtifactError> {
        check_session_id(session_id)?;
        Ok(self.meetings_dir.join(session_id))
    }

    fn participant_ids(session: &MeetingSession) -> Vec<String> {
        session
            .participants()
            .participants()
            .iter()
            .map(|p| p.id.clone())
            .collect()
    }

    fn render(
        name: &str,
        session: &MeetingSession,
        reflections: &BTreeMap<String, String>,
    ) -> Result<String, ArtifactError> {
        match name {
            TRANSCRIPT_FILE => Ok(transcript_jsonl(session)),
            MINUTES_FILE => Ok(minutes_markdown(session)),
            DECISIONS_FILE => decisions_json(session).map_err(|source| ArtifactError::Serialize {
                name: DECISIONS_FILE.to_string(),
                source,
            }),
            _ => name
                .strip_prefix(REFLECTIONS_DIR)
                .and_then(|rest| rest.strip_prefix('/'))
                .and_then(|file| file.strip_suffix(".md"))
                .filter(|id| session.participants().get(id).is_some())
                .map(|id| reflection_markdown(session, id, reflections))
                .ok_or_else(|| ArtifactError::UnknownArtifact(name.to_string())),
        }
    }

    async fn write_one(
        dir: &Path,
        name: &str,
        session: &MeetingSession,
        reflections: &BTreeMap<String, String>,
    ) -> Result<PathBuf, ArtifactError> {
        let content = Self::render(name, session, reflections)?;
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ArtifactError::io("create", parent, e))?;
        }
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| ArtifactError::io("write", &path, e))?;
        debug!("Wrote {}", path.display());
        Ok(path)
    }

    async fn write_all(
        &self,
        session: &MeetingSession,
        reflections: &BTreeMap<String, String>,
        names: &[String],
    ) -> ArtifactReport {
        let mut report = ArtifactReport::default();
        let dir = match self.meeting_dir(session.id()) {
            Ok(dir) => dir,
            Err(e) => {
                warn!("{}", e);
                report.warnings.push(e.to_string());
                report.missing_files = names.to_vec();
                return report;
            }
        };

        for name in names {
            match Self::write_one(&dir, name, session, reflections).await {
                Ok(path) => report.artifacts.push(path.display().to_string()),
                Err(e) => {
                    warn!("{}", e);
                    report.warnings.push(e.to_string());
                }
            }
        }

        let findings = inspect(&dir, &Self::participant_ids(session)).await;
        report.missing_files = findings.missing;
        report.invalid_files = findings.invalid;
        report
    }
}

#[async_trait]
impl ArtifactSink for FsArtifactSink {
    async fn persist(
        &self,
        session: &MeetingSession,
        reflections: &BTreeMap<String, String>,
    ) -> ArtifactReport {
        let mut names = vec![
            TRANSCRIPT_FILE.to_string(),
            MINUTES_FILE.to_string(),
            DECISIONS_FILE.to_string(),
        ];
        names.extend(Self::participant_ids(session).iter().map(|id| reflection_file(id)));

        let mut report = self.write_all(session, reflections, &names).await;
        if check_session_id(session.id()).is_err() {
            return report;
        }

        if let Err(e) = update_index(&self.meetings_dir, session).await {
            warn!("Meetings index not updated: {}", e);
            report.warnings.push(e.to_string());
        }
        match update_board(&self.board_dir, session).await {
            Ok(added) => debug!("Added {} task(s) to the board", added),
            Err(e) => {
                warn!("Task board not updated: {}", e);
                report.warnings.push(e.to_string());
            }
        }

        info!(
            "Persisted {} artifact(s) for {} ({} missing, {} invalid)",
            report.artifacts.len(),
            session.id(),
            report.missing_files.len(),
            report.invalid_files.len()
        );
        report
    }

    async fn regenerate(
        &self,
        session: &MeetingSession,
        reflections: &BTreeMap<String, String>,
        files: &[String],
    ) -> ArtifactReport {
        info!("Regenerating {} artifact(s) for {}", files.len(), session.id());
        self.write_all(session, reflections, files).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::TemplateContentGenerator;
    use council_application::{Deliberation, NoConversationLogger, NoProgress, StrategyVoteSource};
    use council_domain::{
        CriticGate, ParticipantRegistry, RosterConfig, TallyConfig, default_roster,
    };
    use std::time::Duration;

    async fn finished_session() -> MeetingSession {
        finished_session_with_id("meeting_test").await
    }

    async fn finished_session_with_id(id: &str) -> MeetingSession {
        let registry =
            ParticipantRegistry::initialize(default_roster(), &RosterConfig::default()).unwrap();
        let mut session = MeetingSession::new(id, "New internal product", registry);
        let generator = TemplateContentGenerator::new(1);
        let votes = StrategyVoteSource;
        let gate = CriticGate::default();
        let tally = TallyConfig::default();
        Deliberation::new(
            &generator,
            &votes,
            &gate,
            &tally,
            Duration::from_secs(1),
            &NoConversationLogger,
        )
        .run(&mut session, &NoProgress)
        .await
        .unwrap();
        session
    }

    fn reflections() -> BTreeMap<String, String> {
        BTreeMap::from([("ceo".to_string(), "Worked: clear pitch.".to_string())])
    }

    #[tokio::test]
    async fn test_persist_writes_complete_meeting() {
        let root = tempfile::tempdir().unwrap();
        let sink = FsArtifactSink::new(root.path().join("meetings"), root.path().join("board"));
        let session = finished_session().await;

        let report = sink.persist(&session, &reflections()).await;
        assert!(report.is_complete(), "{report:?}");
        assert!(report.warnings.is_empty(), "{report:?}");
        assert_eq!(report.artifacts.len(), 3 + 10);

        let dir = sink.meeting_dir("meeting_test").unwrap();
        let transcript = std::fs::read_to_string(dir.join(TRANSCRIPT_FILE)).unwrap();
        assert_eq!(transcript.lines().count(), session.transcript().len());
        let first: serde_json::Value =
            serde_json::from_str(transcript.lines().next().unwrap()).unwrap();
        assert_eq!(first["phase"], "opening");
        assert_eq!(first["participant"], "chair");

        let decisions: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.join(DECISIONS_FILE)).unwrap())
                .unwrap();
        assert_eq!(decisions["decisions"].as_array().unwrap().len(), 1);
        let roi = &decisions["decisions"][0]["roi"];
        assert_eq!(
            roi["estimated_cost"],
            session.decisions()[0].roi.estimated_cost
        );
        assert_eq!(roi["assumptions"].as_array().unwrap().len(), 4);
        assert!(decisions["decisions"][0]["vote_breakdown"].is_object());

        let minutes = std::fs::read_to_string(dir.join(MINUTES_FILE)).unwrap();
        assert!(minutes.contains("# Meeting minutes: New internal product"));
        assert!(minutes.contains("Action items"));
        assert!(minutes.contains("**ROI estimate:**"));
        assert!(minutes.contains("**Vote breakdown:**"));

        let ceo = std::fs::read_to_string(dir.join("self_reflections/ceo.md")).unwrap();
        assert!(ceo.contains("clear pitch"));
        let qa = std::fs::read_to_string(dir.join("self_reflections/qa.md")).unwrap();
        assert!(qa.contains("No reflection"));
    }

    #[tokio::test]
    async fn test_index_and_board_updated() {
        let root = tempfile::tempdir().unwrap();
        let sink = FsArtifactSink::new(root.path().join("meetings"), root.path().join("board"));
        let session = finished_session().await;
        sink.persist(&session, &reflections()).await;
        // persisting twice must not duplicate index entries or tasks
        sink.persist(&session, &reflections()).await;

        let index: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(root.path().join("meetings/index.json")).unwrap(),
        )
        .unwrap();
        let meetings = index["meetings"].as_array().unwrap();
        assert_eq!(meetings.len(), 1);
        assert_eq!(
            meetings[0]["status"],
            session.outcome().unwrap().status()
        );

        let board: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(root.path().join("board/tasks.json")).unwrap(),
        )
        .unwrap();
        let expected = session.decisions()[0].action_items.len();
        assert_eq!(board["todo"].as_array().unwrap().len(), expected);
        assert!(board["in_progress"].as_array().unwrap().is_empty());
        assert!(board["done"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_index_is_a_warning() {
        let root = tempfile::tempdir().unwrap();
        let meetings = root.path().join("meetings");
        std::fs::create_dir_all(&meetings).unwrap();
        std::fs::write(meetings.join("index.json"), "{ not json").unwrap();

        let sink = FsArtifactSink::new(&meetings, root.path().join("board"));
        let report = sink.persist(&finished_session().await, &reflections()).await;
        assert!(report.is_complete());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("is not valid JSON"), "{report:?}");
        assert_eq!(
            std::fs::read_to_string(meetings.join("index.json")).unwrap(),
            "{ not json"
        );
    }

    #[tokio::test]
    async fn test_regenerate_rewrites_only_named_files() {
        let root = tempfile::tempdir().unwrap();
        let sink = FsArtifactSink::new(root.path().join("meetings"), root.path().join("board"));
        let session = finished_session().await;
        sink.persist(&session, &reflections()).await;

        let dir = sink.meeting_dir("meeting_test").unwrap();
        std::fs::remove_file(dir.join(MINUTES_FILE)).unwrap();
        std::fs::write(dir.join(DECISIONS_FILE), "[]").unwrap();
        std::fs::write(dir.join(TRANSCRIPT_FILE), "").unwrap();

        let broken = sink.regenerate(&session, &reflections(), &[]).await;
        assert_eq!(broken.missing_files, vec![MINUTES_FILE.to_string()]);
        assert_eq!(
            broken.invalid_files,
            vec![TRANSCRIPT_FILE.to_string(), DECISIONS_FILE.to_string()]
        );

        let partial = sink
            .regenerate(&session, &reflections(), &broken.missing_files)
            .await;
        assert_eq!(partial.artifacts.len(), 1);
        assert!(partial.missing_files.is_empty());
        assert_eq!(partial.invalid_files.len(), 2);

        let fixed = sink
            .regenerate(&session, &reflections(), &partial.files_to_regenerate())
            .await;
        assert!(fixed.is_complete());
    }

    #[tokio::test]
    async fn test_unknown_artifact_name_is_a_warning() {
        let root = tempfile::tempdir().unwrap();
        let sink = FsArtifactSink::new(root.path().join("meetings"), root.path().join("board"));
        let session = finished_session().await;
        let report = sink
            .regenerate(&session, &reflections(), &["../escape.md".to_string()])
            .await;
        assert!(report.artifacts.is_empty());
        assert_eq!(report.warnings, vec!["Unknown artifact '../escape.md'".to_string()]);
    }

    #[tokio::test]
    async fn test_traversing_session_id_writes_nothing() {
        let root = tempfile::tempdir().unwrap();
        let meetings = root.path().join("nested/meetings");
        let sink = FsArtifactSink::new(&meetings, root.path().join("board"));
        let session = finished_session_with_id("../escape").await;

        let report = sink.persist(&session, &reflections()).await;
        assert!(report.artifacts.is_empty());
        assert!(!report.is_complete());
        assert_eq!(report.missing_files.len(), 3 + 10);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("Invalid session id '../escape'"));
        assert!(!root.path().join("nested/escape").exists());
        assert!(!meetings.join("index.json").exists());
        assert!(!root.path().join("board/tasks.json").exists());
        assert!(sink.meeting_dir("../escape").is_err());
    }
}
