//! Run Meeting use case
//!
//! Validates the roster, runs the deliberation, collects reflections and
//! persists artifacts.

use crate::config::CouncilConfig;
use crate::ports::artifact_sink::{ArtifactReport, ArtifactSink};
use crate::ports::content_generator::ContentGenerator;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::reflection_provider::ReflectionProvider;
use crate::ports::vote_source::{AbsentVoters, StrategyVoteSource, VoteSource};
use crate::use_cases::deliberation::{Deliberation, DeliberationError};
use council_domain::{
    ConfigurationError, CriticGate, Decision, MeetingOutcome, MeetingPhase, MeetingSession,
    ParticipantRegistry, RegistryStatistics, ReputationEvent, TranscriptEntry,
};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that end a meeting with `success = false`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RunMeetingError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Deliberation failed: {0}")]
    Deliberation(#[from] DeliberationError),
}

/// Everything the caller learns about one meeting.
#[derive(Debug, Clone, Serialize)]
pub struct MeetingResult {
    /// False only for configuration errors and unexpected faults
    pub success: bool,
    pub session_id: String,
    pub agenda: String,
    pub outcome: Option<MeetingOutcome>,
    pub terminal_phase: Option<MeetingPhase>,
    pub decisions: Vec<Decision>,
    pub action_items: Vec<String>,
    pub artifacts: Vec<String>,
    pub warnings: Vec<String>,
    pub reputation_events: Vec<ReputationEvent>,
    pub transcript: Vec<TranscriptEntry>,
    pub statistics: Option<RegistryStatistics>,
    pub error: Option<String>,
}

impl MeetingResult {
    fn failure(session_id: &str, agenda: &str, error: &RunMeetingError) -> Self {
        Self {
            success: false,
            session_id: session_id.to_string(),
            agenda: agenda.to_string(),
            outcome: None,
            terminal_phase: None,
            decisions: Vec::new(),
            action_items: Vec::new(),
            artifacts: Vec::new(),
            warnings: Vec::new(),
            reputation_events: Vec::new(),
            transcript: Vec::new(),
            statistics: None,
            error: Some(error.to_string()),
        }
    }

    fn from_session(session: &MeetingSession, report: ArtifactReport, warnings: Vec<String>) -> Self {
        Self {
            success: true,
            session_id: session.id().to_string(),
            agenda: session.agenda().to_string(),
            outcome: session.outcome().cloned(),
            terminal_phase: Some(session.phase()),
            decisions: session.decisions().to_vec(),
            action_items: session
                .decisions()
                .iter()
                .flat_map(|d| d.action_items.iter().cloned())
                .collect(),
            artifacts: report.artifacts,
            warnings,
            reputation_events: session.reputation_events().to_vec(),
            transcript: session.transcript().entries().to_vec(),
            statistics: Some(session.participants().statistics()),
            error: None,
        }
    }
}

/// Use case for running one meeting
pub struct RunMeetingUseCase<G: ContentGenerator + 'static> {
    generator: Arc<G>,
    config: CouncilConfig,
    vote_source: Arc<dyn VoteSource>,
    reflections: Option<Arc<dyn ReflectionProvider>>,
    artifact_sink: Option<Arc<dyn ArtifactSink>>,
    conversation_logger: Arc<dyn ConversationLogger>,
    reputation_history: Vec<ReputationEvent>,
}

impl<G: ContentGenerator + 'static> RunMeetingUseCase<G> {
    /// Votes come from the role strategy table, minus the configured absentees.
    pub fn new(generator: Arc<G>, config: CouncilConfig) -> Self {
        let vote_source: Arc<dyn VoteSource> = if config.params().absent.is_empty() {
            Arc::new(StrategyVoteSource)
        } else {
            Arc::new(AbsentVoters::new(
                StrategyVoteSource,
                config.params().absent.iter().cloned(),
            ))
        };
        Self {
            generator,
            config,
            vote_source,
            reflections: None,
            artifact_sink: None,
            conversation_logger: Arc::new(NoConversationLogger),
            reputation_history: Vec::new(),
        }
    }

    pub fn with_vote_source(mut self, vote_source: Arc<dyn VoteSource>) -> Self {
        self.vote_source = vote_source;
        self
    }

    pub fn with_reflections(mut self, provider: Arc<dyn ReflectionProvider>) -> Self {
        self.reflections = Some(provider);
        self
    }

    pub fn with_artifact_sink(mut self, sink: Arc<dyn ArtifactSink>) -> Self {
        self.artifact_sink = Some(sink);
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Reputation events from earlier meetings, folded into this meeting's snapshot.
    pub fn with_reputation_history(mut self, events: Vec<ReputationEvent>) -> Self {
        self.reputation_history = events;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, session_id: &str, agenda: &str) -> MeetingResult {
        self.execute_with_progress(session_id, agenda, &NoProgress)
            .await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        session_id: &str,
        agenda: &str,
        progress: &dyn ProgressNotifier,
    ) -> MeetingResult {
        info!("Starting meeting {} on '{}'", session_id, agenda);

        let mut session = match self.prepare(session_id, agenda) {
            Ok(session) => session,
            Err(e) => {
                warn!("Meeting {} cannot start: {}", session_id, e);
                return MeetingResult::failure(session_id, agenda, &e);
            }
        };
        self.conversation_logger.log(ConversationEvent::new(
            "meeting_started",
            json!({
                "session_id": session_id,
                "agenda": agenda,
                "participants": session.participants().len(),
            }),
        ));

        let gate = CriticGate::new(self.config.gate().clone());
        let tally = self.config.tally();
        let deliberation = Deliberation::new(
            self.generator.as_ref(),
            self.vote_source.as_ref(),
            &gate,
            &tally,
            self.config.params().generation_timeout,
            self.conversation_logger.as_ref(),
        );

        if let Err(e) = deliberation.run(&mut session, progress).await {
            let error = RunMeetingError::from(e);
            warn!("Meeting {} aborted: {}", session_id, error);
            return MeetingResult::failure(session_id, agenda, &error);
        }

        let mut warnings = Vec::new();
        let reflections = self.collect_reflections(&session, &mut warnings).await;
        let report = self
            .persist_artifacts(&session, &reflections, &mut warnings)
            .await;

        let result = MeetingResult::from_session(&session, report, warnings);
        self.conversation_logger.log(ConversationEvent::new(
            "meeting_finished",
            json!({
                "session_id": session_id,
                "outcome": result.outcome,
                "decisions": result.decisions.len(),
                "warnings": result.warnings.len(),
            }),
        ));
        result
    }

    fn prepare(&self, session_id: &str, agenda: &str) -> Result<MeetingSession, RunMeetingError> {
        let registry =
            ParticipantRegistry::initialize(self.config.participants().to_vec(), self.config.roster())?
                .with_reputation(&self.reputation_history);
        Ok(MeetingSession::new(session_id, agenda, registry))
    }

    async fn collect_reflections(
        &self,
        session: &MeetingSession,
        warnings: &mut Vec<String>,
    ) -> BTreeMap<String, String> {
        let Some(provider) = &self.reflections else {
            return BTreeMap::new();
        };
        match provider.generate_reflections(session).await {
            Ok(reflections) => reflections,
            Err(e) => {
                warn!("Reflections unavailable: {}", e);
                warnings.push(e.to_string());
                BTreeMap::new()
            }
        }
    }

    /// Persist, then run at most one regeneration pass for whatever is
    /// missing or invalid. Leftovers become warnings.
    async fn persist_artifacts(
        &self,
        session: &MeetingSession,
        reflections: &BTreeMap<String, String>,
        warnings: &mut Vec<String>,
    ) -> ArtifactReport {
        let Some(sink) = &self.artifact_sink else {
            return ArtifactReport::default();
        };

        let mut report = sink.persist(session, reflections).await;
        if !report.is_complete() && self.config.params().regenerate_missing_artifacts {
            let files = report.files_to_regenerate();
            info!("Regenerating {} artifact(s): {}", files.len(), files.join(", "));
            report = sink.regenerate(session, reflections, &files).await;
        }

        let leftovers = report
            .warnings
            .iter()
            .cloned()
            .chain(report.missing_files.iter().map(|f| format!("Missing artifact: {}", f)))
            .chain(report.invalid_files.iter().map(|f| format!("Invalid artifact: {}", f)));
        for warning in leftovers {
            warn!("{}", warning);
            warnings.push(warning);
        }
        report
    }
}
