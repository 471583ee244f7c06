//! Reflection provider port

use async_trait::async_trait;
use council_domain::MeetingSession;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReflectionError {
    #[error("Reflection generation failed: {0}")]
    Failed(String),
}

/// Produces one self-reflection text per participant, keyed by participant id.
///
/// Called once, after the meeting has closed.
#[async_trait]
pub trait ReflectionProvider: Send + Sync {
    async fn generate_reflections(
        &self,
        session: &MeetingSession,
    ) -> Result<BTreeMap<String, String>, ReflectionError>;
}
