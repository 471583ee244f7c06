//! Council configuration container.
//!
//! [`CouncilConfig`] groups the roster, gate and meeting settings that the
//! CLI assembles from file configuration and hands to
//! [`RunMeetingUseCase`](crate::use_cases::run_meeting::RunMeetingUseCase).

use crate::config::MeetingParams;
use council_domain::{GateConfig, Participant, RosterConfig, TallyConfig, default_roster};

#[derive(Debug, Clone)]
pub struct CouncilConfig {
    participants: Vec<Participant>,
    roster: RosterConfig,
    gate: GateConfig,
    params: MeetingParams,
}

impl Default for CouncilConfig {
    fn default() -> Self {
        Self::new(
            default_roster(),
            RosterConfig::default(),
            GateConfig::default(),
            MeetingParams::default(),
        )
    }
}

impl CouncilConfig {
    pub fn new(
        participants: Vec<Participant>,
        roster: RosterConfig,
        gate: GateConfig,
        params: MeetingParams,
    ) -> Self {
        Self {
            participants,
            roster,
            gate,
            params,
        }
    }

    // ==================== Accessors ====================

    /// Participant profiles, validated at the start of each meeting.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn roster(&self) -> &RosterConfig {
        &self.roster
    }

    pub fn gate(&self) -> &GateConfig {
        &self.gate
    }

    pub fn params(&self) -> &MeetingParams {
        &self.params
    }

    /// Tally settings derived from the roster floor and the approval threshold.
    pub fn tally(&self) -> TallyConfig {
        TallyConfig {
            min_voting_participants: self.roster.min_voting_participants,
            approval_threshold: self.params.approval_threshold,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_participants(mut self, participants: Vec<Participant>) -> Self {
        self.participants = participants;
        self
    }

    pub fn with_roster(mut self, roster: RosterConfig) -> Self {
        self.roster = roster;
        self
    }

    pub fn with_params(mut self, params: MeetingParams) -> Self {
        self.params = params;
        self
    }
}
