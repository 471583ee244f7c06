//! Content generator port
//!
//! Defines the interface for producing participant contributions.

use async_trait::async_trait;
use council_domain::{MeetingPhase, Participant, PhaseContext, PromptTemplate, Role};
use thiserror::Error;

/// Errors that can occur while generating a contribution.
///
/// The deliberation never propagates these; it falls back to a template.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("Generator not available: {0}")]
    Unavailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// Everything a generator needs to produce one contribution.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub participant_id: String,
    pub role: Role,
    pub phase: MeetingPhase,
    pub agenda: String,
    pub proposal_title: Option<String>,
    pub system_prompt: String,
    /// Phase prompt handed to the generator
    pub prompt: String,
}

impl GenerationRequest {
    pub fn new(participant: &Participant, context: &PhaseContext) -> Self {
        Self {
            participant_id: participant.id.clone(),
            role: participant.role,
            phase: context.phase,
            agenda: context.agenda.clone(),
            proposal_title: context.proposal_title.clone(),
            system_prompt: PromptTemplate::system_prompt(participant),
            prompt: PromptTemplate::phase_prompt(context),
        }
    }

    pub fn context(&self) -> PhaseContext {
        PhaseContext {
            agenda: self.agenda.clone(),
            phase: self.phase,
            proposal_title: self.proposal_title.clone(),
        }
    }
}

/// Source of participant contributions
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generate the text of one contribution.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;

    /// Short name used in logs
    fn name(&self) -> &str {
        "generator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_carries_prompts() {
        let participant = Participant::new("cto", "Chief Technology Officer", Role::Cto);
        let ctx = PhaseContext::new("Next product", MeetingPhase::Discussion).with_proposal("Spend Tracker");
        let request = GenerationRequest::new(&participant, &ctx);

        assert_eq!(request.participant_id, "cto");
        assert!(request.prompt.contains("Spend Tracker"));
        assert!(request.system_prompt.contains("Chief Technology Officer"));
        assert_eq!(request.context(), ctx);
    }
}
