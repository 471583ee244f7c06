//! Offline content generator built from rotating templates.

use async_trait::async_trait;
use council_application::{ContentGenerator, GenerationError, GenerationRequest};
use council_domain::{MeetingPhase, PromptTemplate, Role};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Deterministic generator that needs no network.
///
/// Each contribution picks one of several phrasings for the participant's
/// role and phase. The pick depends only on the seed, participant id, phase
/// and agenda, so two runs with the same inputs produce the same meeting.
#[derive(Debug, Clone, Default)]
pub struct TemplateContentGenerator {
    seed: u64,
}

impl TemplateContentGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn pick(&self, request: &GenerationRequest, variants: usize) -> usize {
        let mut hash = FNV_OFFSET ^ self.seed;
        for part in [
            request.participant_id.as_str(),
            request.phase.as_str(),
            request.agenda.as_str(),
        ] {
            for byte in part.bytes().chain(std::iter::once(0)) {
                hash ^= u64::from(byte);
                hash = hash.wrapping_mul(FNV_PRIME);
            }
        }
        (hash % variants as u64) as usize
    }

    fn render(&self, request: &GenerationRequest) -> String {
        let subject = request
            .proposal_title
            .as_deref()
            .unwrap_or(request.agenda.as_str());

        let variants: Vec<String> = match request.phase {
            MeetingPhase::Opening => vec![
                format!("Good morning. Our agenda today is {}. Let's hear every idea before we judge any.", request.agenda),
                format!("Welcome. We are here to decide on {}. Brainstorm first, then discussion, evaluation and the vote.", request.agenda),
            ],
            MeetingPhase::Brainstorming => brainstorm_variants(request.role),
            MeetingPhase::Discussion => discussion_variants(request.role, subject),
            MeetingPhase::EvaluationRequired => vec![
                format!("The biggest risk with \"{subject}\" is competition; other products already serve this market. I recommend validating demand with a small pilot first."),
                format!("\"{subject}\" looks feasible, but the timeline and budget are optimistic. The weakness is a thin customer base. I suggest narrowing the scope."),
                format!("My concern with \"{subject}\" is resource cost against uncertain user demand. Implementation is practical. I advise a staged launch with clear exit criteria."),
            ],
            MeetingPhase::Closing => vec![
                format!("Thank you all. The outcome on \"{subject}\" is recorded with its action items."),
                format!("That concludes our meeting on \"{subject}\". Owners, please follow up on your action items."),
            ],
            _ => Vec::new(),
        };

        if variants.is_empty() {
            return PromptTemplate::fallback(request.role, &request.context());
        }
        let index = self.pick(request, variants.len());
        variants.into_iter().nth(index).unwrap_or_default()
    }
}

fn brainstorm_variants(role: Role) -> Vec<String> {
    let ideas: &[(&str, &str)] = match role {
        Role::Ceo => &[
            ("Team Knowledge Hub", "A platform where small teams share and search internal know-how."),
            ("Partner Marketplace", "A marketplace connecting our customers with vetted service partners."),
        ],
        Role::ProjectManager => &[
            ("Sprint Planner", "A tool that plans work in incremental phases from a backlog."),
            ("Status Digest", "A weekly digest that turns ticket activity into a readable project status."),
        ],
        Role::Cto => &[
            ("Deploy Check API", "An API that validates deployment configs before release."),
            ("Log Insight Engine", "A service that clusters production logs and flags new error patterns."),
        ],
        Role::Developer => &[
            ("Snippet Library", "A library of reusable code snippets with search and tagging."),
            ("Review Buddy", "A bot that pre-checks pull requests for common mistakes."),
        ],
        Role::Qa => &[
            ("Flaky Test Finder", "A service that spots unstable tests in CI runs."),
            ("Release Checklist", "A guided checklist that blocks releases until critical checks pass."),
        ],
        Role::Marketing => &[
            ("Customer Pulse", "A dashboard summarizing customer feedback across channels."),
            ("Launch Kit", "Templates and timelines for announcing new features to customers."),
        ],
        Role::Finance => &[
            ("Spend Tracker", "A simple tool that tracks team subscriptions and costs."),
            ("Invoice Autopilot", "Automatic invoice reminders and reconciliation for small businesses."),
        ],
        Role::Critic => &[("Risk Register", "A shared list of project risks with owners and reviews.")],
        Role::Chair => &[
            ("Meeting Notes Assistant", "A tool that turns meeting transcripts into action items."),
            ("Agenda Builder", "A helper that collects topics and drafts meeting agendas."),
        ],
        Role::Memory => &[("Decision Archive", "A searchable archive of past decisions and their outcomes.")],
    };
    ideas
        .iter()
        .map(|(name, pitch)| format!("I propose \"{name}\". {pitch}"))
        .collect()
}

fn discussion_variants(role: Role, subject: &str) -> Vec<String> {
    let base = PromptTemplate::fallback(
        role,
        &council_domain::PhaseContext::new(subject, MeetingPhase::Discussion).with_proposal(subject),
    );
    let alternate = match role {
        Role::Ceo => format!("\"{subject}\" could open a new revenue line for us."),
        Role::ProjectManager => format!("A first milestone for \"{subject}\" is realistic within a quarter."),
        Role::Cto => format!("\"{subject}\" needs a clean data model; the rest is standard work."),
        Role::Developer => format!("Most of \"{subject}\" reuses components we already have."),
        Role::Qa => format!("\"{subject}\" has a few edge cases we must cover with automated tests."),
        Role::Marketing => format!("We can position \"{subject}\" clearly against existing tools."),
        Role::Finance => format!("\"{subject}\" should break even within the first year if adoption holds."),
        Role::Critic => format!("I have doubts about \"{subject}\" that I will raise in my evaluation."),
        Role::Chair => format!("Let's hear each department's view on \"{subject}\" in turn."),
        Role::Memory => format!("I have noted the main arguments about \"{subject}\" for the record."),
    };
    vec![base, alternate]
}

#[async_trait]
impl ContentGenerator for TemplateContentGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        Ok(self.render(request))
    }

    fn name(&self) -> &str {
        "template"
    }
}
