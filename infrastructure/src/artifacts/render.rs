//! Text rendering of the per-meeting files.

use super::{reflection_file, rfc3339};
use council_domain::{MeetingSession, TallyOutcome};
use serde_json::json;
use std::collections::BTreeMap;
use std::fmt::Write;

pub(super) const MISSING_REFLECTION: &str = "_No reflection was recorded for this meeting._";

pub(super) fn transcript_jsonl(session: &MeetingSession) -> String {
    let mut out = String::new();
    for entry in session.transcript().entries() {
        let line = json!({
            "timestamp": rfc3339(entry.timestamp),
            "participant": entry.participant_id,
            "phase": entry.phase.as_str(),
            "kind": entry.kind.as_str(),
            "content": entry.content,
            "fallback": entry.fallback,
        });
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}

pub(super) fn decisions_json(session: &MeetingSession) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({
        "session_id": session.id(),
        "decisions": session.decisions(),
    }))
}

pub(super) fn reflection_markdown(
    session: &MeetingSession,
    participant_id: &str,
    reflections: &BTreeMap<String, String>,
) -> String {
    let name = session
        .participants()
        .get(participant_id)
        .map(|p| p.display_name.as_str())
        .unwrap_or(participant_id);
    let body = reflections
        .get(participant_id)
        .map(String::as_str)
        .unwrap_or(MISSING_REFLECTION);
    format!(
        "# Self reflection: {name}\n\nSession: {}\n\n{}\n",
        session.id(),
        body.trim()
    )
}

pub(super) fn minutes_markdown(session: &MeetingSession) -> String {
    let registry = session.participants();
    let name_of = |id: &str| {
        registry
            .get(id)
            .map(|p| p.display_name.clone())
            .unwrap_or_else(|| id.to_string())
    };

    let mut md = String::new();
    let _ = writeln!(md, "# Meeting minutes: {}\n", session.agenda());
    let _ = writeln!(md, "- **Session:** {}", session.id());
    let _ = writeln!(md, "- **Attempt:** {}", session.attempt());
    let _ = writeln!(md, "- **Started:** {}", rfc3339(session.started_at()));
    let _ = writeln!(md, "- **Final phase:** {}", session.phase());
    match session.outcome() {
        Some(outcome) => {
            let _ = writeln!(md, "- **Outcome:** {outcome}\n");
        }
        None => {
            let _ = writeln!(md, "- **Outcome:** pending\n");
        }
    }

    let stats = registry.statistics();
    let _ = writeln!(
        md,
        "## Participants ({} total, {} voting)\n",
        stats.total_participants, stats.voting_participants
    );
    let _ = writeln!(md, "| Participant | Role | Base weight | Reputation | Effective weight |");
    let _ = writeln!(md, "|---|---|---|---|---|");
    for p in &stats.participants {
        let _ = writeln!(
            md,
            "| {} | {} | {:.2} | {:.2} | {:.2} |",
            p.display_name, p.role, p.base_weight, p.reputation, p.effective_weight
        );
    }

    if !session.proposals().is_empty() {
        let _ = writeln!(md, "\n## Proposals\n");
        for proposal in session.proposals() {
            let _ = writeln!(
                md,
                "- **{}** ({}): {}",
                proposal.title,
                name_of(&proposal.author_id),
                proposal.description
            );
        }
    }

    let _ = writeln!(md, "\n## Transcript");
    let mut current = None;
    for entry in session.transcript().entries() {
        if current != Some(entry.phase) {
            let _ = writeln!(md, "\n### {}\n", entry.phase);
            current = Some(entry.phase);
        }
        let marker = if entry.fallback { " _(template)_" } else { "" };
        let _ = writeln!(
            md,
            "- **{}** [{}]{}: {}",
            name_of(&entry.participant_id),
            entry.kind.as_str(),
            marker,
            entry.content
        );
    }

    let _ = writeln!(md, "\n## Decisions\n");
    if session.decisions().is_empty() {
        let _ = writeln!(md, "No decision was recorded.");
    }
    for decision in session.decisions() {
        let tally = &decision.tally;
        let _ = writeln!(md, "### {}\n", decision.proposal.title);
        let _ = writeln!(md, "- **Result:** {}", decision.outcome());
        if decision.outcome() != TallyOutcome::FailedQuorum {
            let _ = writeln!(
                md,
                "- **Approval:** {:.1}% ({:.2} of {:.2} weight)",
                tally.approval_percentage, tally.positive_weight, tally.total_weight
            );
        }
        let _ = writeln!(
            md,
            "- **Voters:** {} (quorum {})\n",
            tally.voting_participant_count, tally.required_quorum
        );
        let _ = writeln!(md, "| Participant | Vote |");
        let _ = writeln!(md, "|---|---|");
        for (id, choice) in &decision.votes {
            let _ = writeln!(md, "| {} | {} |", name_of(id), choice);
        }
        if !decision.vote_breakdown.is_empty() {
            let breakdown: Vec<String> = decision
                .vote_breakdown
                .iter()
                .map(|(choice, n)| format!("{choice}: {n}"))
                .collect();
            let _ = writeln!(md, "\n**Vote breakdown:** {}", breakdown.join(", "));
        }

        let roi = &decision.roi;
        let _ = writeln!(md, "\n**ROI estimate:**\n");
        let _ = writeln!(md, "- Estimated cost: ${}", roi.estimated_cost);
        let _ = writeln!(md, "- Projected revenue: ${}", roi.projected_revenue);
        let _ = writeln!(md, "- ROI: {:.1}%", roi.roi_percentage);
        let _ = writeln!(md, "- Development time: {} weeks", roi.development_time_weeks);
        let _ = writeln!(md, "- Market size: {}", roi.market_size);
        let _ = writeln!(md, "- Competition: {}", roi.competition_level);
        let _ = writeln!(md, "- Monetization: {}", roi.monetization_strategy);
        for assumption in &roi.assumptions {
            let _ = writeln!(md, "- _Assumption:_ {assumption}");
        }

        let _ = writeln!(md, "\n**Action items:**\n");
        for item in &decision.action_items {
            let _ = writeln!(md, "- [ ] {item}");
        }
        let _ = writeln!(md);
    }

    if !session.reputation_events().is_empty() {
        let _ = writeln!(md, "## Reputation changes\n");
        for event in session.reputation_events() {
            let _ = writeln!(
                md,
                "- {}: {:+.2} ({})",
                name_of(&event.participant_id),
                event.delta,
                event.reason
            );
        }
    }

    let _ = writeln!(md, "\n## Self reflections\n");
    for p in registry.participants() {
        let _ = writeln!(md, "- [{}]({})", p.display_name, reflection_file(&p.id));
    }

    md
}
