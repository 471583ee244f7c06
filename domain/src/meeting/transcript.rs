//! Append-only, phase-tagged meeting transcript

use super::phase::MeetingPhase;
use crate::core::time::current_timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Free-form contribution from a participant
    Contribution,
    /// The critic's evaluation of the proposal under review
    Evaluation,
    /// A cast vote
    Vote,
    /// Moderator announcement (gate result, tally)
    Notice,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Contribution => "contribution",
            EntryKind::Evaluation => "evaluation",
            EntryKind::Vote => "vote",
            EntryKind::Notice => "notice",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
    pub participant_id: String,
    pub phase: MeetingPhase,
    pub kind: EntryKind,
    pub content: String,
    /// Content came from the deterministic fallback template
    #[serde(default)]
    pub fallback: bool,
}

impl TranscriptEntry {
    pub fn new(
        participant_id: impl Into<String>,
        phase: MeetingPhase,
        kind: EntryKind,
        content: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: current_timestamp(),
            participant_id: participant_id.into(),
            phase,
            kind,
            content: content.into(),
            fallback: false,
        }
    }

    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }
}

/// Entries are only ever appended; the whole transcript is dropped when a
/// session starts a new attempt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn in_phase(&self, phase: MeetingPhase) -> impl Iterator<Item = &TranscriptEntry> {
        self.entries.iter().filter(move |e| e.phase == phase)
    }

    /// Number of contributions (any kind except notices) by one participant.
    pub fn contribution_count(&self, participant_id: &str) -> usize {
        self.entries
            .iter()
            .filter(|e| e.participant_id == participant_id && e.kind != EntryKind::Notice)
            .count()
    }

    pub fn fallback_count(&self) -> usize {
        self.entries.iter().filter(|e| e.fallback).count()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
