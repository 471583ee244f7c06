//! Prompt templates for the deliberation phases

use crate::meeting::MeetingPhase;
use crate::participant::{Participant, Role};
use serde::{Deserialize, Serialize};

/// What a participant needs to know to contribute to a phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseContext {
    pub agenda: String,
    pub phase: MeetingPhase,
    /// Title of the proposal under review, once one is selected
    pub proposal_title: Option<String>,
}

impl PhaseContext {
    pub fn new(agenda: impl Into<String>, phase: MeetingPhase) -> Self {
        Self {
            agenda: agenda.into(),
            phase,
            proposal_title: None,
        }
    }

    pub fn with_proposal(mut self, title: impl Into<String>) -> Self {
        self.proposal_title = Some(title.into());
        self
    }

    fn subject(&self) -> &str {
        self.proposal_title.as_deref().unwrap_or(&self.agenda)
    }
}

/// Templates for generating prompts at each phase
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt describing the participant's seat at the table.
    pub fn system_prompt(participant: &Participant) -> String {
        let expertise = if participant.expertise_tags.is_empty() {
            "general business".to_string()
        } else {
            participant.expertise_tags.join(", ")
        };
        format!(
            r#"You are {name}, the {role} of a small product company, taking part in a decision meeting.
Your expertise: {expertise}.
Answer in two to four sentences, in plain prose, speaking from your role's perspective."#,
            name = participant.display_name,
            role = participant.role.display_name(),
        )
    }

    /// User prompt for one phase.
    pub fn phase_prompt(ctx: &PhaseContext) -> String {
        match ctx.phase {
            MeetingPhase::Opening => format!(
                "Open the meeting. Today's agenda: {}. Summarize the goal and how the meeting will run.",
                ctx.agenda
            ),
            MeetingPhase::Brainstorming => format!(
                r#"Agenda: {}

Propose one concrete product idea. Put its name in double quotes, then describe it in one or two sentences."#,
                ctx.agenda
            ),
            MeetingPhase::Discussion => format!(
                "Discuss the proposal \"{}\". Raise one point from your area of expertise.",
                ctx.subject()
            ),
            MeetingPhase::EvaluationRequired => format!(
                r#"Critically evaluate the proposal "{}".
Cover risks, feasibility, market and competition, weaknesses, and give your recommendation.
Avoid generic praise."#,
                ctx.subject()
            ),
            MeetingPhase::Voting => format!(
                "Vote on \"{}\": approve, approve with conditions, neutral, reject, or needs more information. Give one sentence of reasoning.",
                ctx.subject()
            ),
            _ => format!(
                "Close the meeting on \"{}\". Summarize the result and the next steps.",
                ctx.subject()
            ),
        }
    }

    /// Deterministic text used when the generator fails, times out or
    /// returns nothing.
    ///
    /// The critic's fallback evaluation passes the gate, so a meeting run
    /// entirely offline still reaches the vote.
    pub fn fallback(role: Role, ctx: &PhaseContext) -> String {
        let subject = ctx.subject();
        match ctx.phase {
            MeetingPhase::Opening => format!(
                "Welcome everyone. Today we will decide on: {}. We will brainstorm, discuss, hear the critic's evaluation and then vote.",
                ctx.agenda
            ),
            MeetingPhase::Brainstorming => Self::brainstorm_fallback(role),
            MeetingPhase::Discussion => match role {
                Role::Ceo => format!("\"{subject}\" fits our strategy if we keep the first release small."),
                Role::ProjectManager => format!("We can deliver \"{subject}\" in incremental phases with a clear milestone plan."),
                Role::Cto => format!("The architecture for \"{subject}\" is manageable with our current stack."),
                Role::Developer => format!("I can start on \"{subject}\" right away; the core is a few weeks of work."),
                Role::Qa => format!("We need a test plan for \"{subject}\" before the first release."),
                Role::Marketing => format!("There is customer demand for \"{subject}\" in our current market."),
                Role::Finance => format!("The cost of \"{subject}\" is moderate and the return looks reasonable."),
                Role::Critic => format!("Before we commit to \"{subject}\" we should look hard at its risks."),
                Role::Chair => format!("Let's keep the discussion of \"{subject}\" focused on the decision ahead."),
                Role::Memory => format!("Past meetings considered similar ideas to \"{subject}\"; I will record this one."),
            },
            MeetingPhase::EvaluationRequired => format!(
                "The main risk of \"{subject}\" is execution cost and competition in a crowded market. Feasibility depends on a realistic timeline. I recommend a staged pilot before full commitment."
            ),
            MeetingPhase::Voting => format!("My vote on \"{subject}\" follows my role's assessment."),
            _ => format!(
                "Thank you all. The meeting on \"{subject}\" is closed; decisions and action items will be recorded."
            ),
        }
    }

    fn brainstorm_fallback(role: Role) -> String {
        let (name, pitch) = match role {
            Role::Ceo => ("Team Knowledge Hub", "A platform where small teams share and search internal know-how."),
            Role::ProjectManager => ("Sprint Planner", "A tool that plans work in incremental phases from a backlog."),
            Role::Cto => ("Deploy Check API", "An API that validates deployment configs before release."),
            Role::Developer => ("Snippet Library", "A library of reusable code snippets with search and tagging."),
            Role::Qa => ("Flaky Test Finder", "A service that spots unstable tests in CI runs."),
            Role::Marketing => ("Customer Pulse", "A dashboard summarizing customer feedback across channels."),
            Role::Finance => ("Spend Tracker", "A simple tool that tracks team subscriptions and costs."),
            Role::Critic => ("Risk Register", "A shared list of project risks with owners and reviews."),
            Role::Chair => ("Meeting Notes Assistant", "A tool that turns meeting transcripts into action items."),
            Role::Memory => ("Decision Archive", "A searchable archive of past decisions and their outcomes."),
        };
        format!("I propose \"{name}\". {pitch}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::CriticGate;
    use crate::meeting::proposal::extract_title;

    #[test]
    fn test_fallback_is_deterministic() {
        let ctx = PhaseContext::new("Next product", MeetingPhase::Discussion).with_proposal("Sprint Planner");
        for role in Role::ALL {
            assert_eq!(PromptTemplate::fallback(role, &ctx), PromptTemplate::fallback(role, &ctx));
        }
    }

    #[test]
    fn test_critic_fallback_passes_gate() {
        let ctx = PhaseContext::new("Next product", MeetingPhase::EvaluationRequired)
            .with_proposal("Team Knowledge Hub");
        let text = PromptTemplate::fallback(Role::Critic, &ctx);
        assert!(CriticGate::default().assess(&text).passed);
    }

    #[test]
    fn test_brainstorm_fallback_has_quoted_title() {
        let ctx = PhaseContext::new("Next product", MeetingPhase::Brainstorming);
        let text = PromptTemplate::fallback(Role::Ceo, &ctx);
        assert_eq!(extract_title(&text), "Team Knowledge Hub");
    }

    #[test]
    fn test_phase_prompt_mentions_subject() {
        let ctx = PhaseContext::new("Next product", MeetingPhase::EvaluationRequired)
            .with_proposal("Spend Tracker");
        let prompt = PromptTemplate::phase_prompt(&ctx);
        assert!(prompt.contains("Spend Tracker"));
        assert!(prompt.contains("risks"));
    }

    #[test]
    fn test_system_prompt_includes_expertise() {
        let p = Participant::new("qa", "QA Engineer", Role::Qa).with_expertise(["testing"]);
        let prompt = PromptTemplate::system_prompt(&p);
        assert!(prompt.contains("QA Engineer"));
        assert!(prompt.contains("testing"));
    }
}
