//! Participant registry
//!
//! Validates a roster against a [`RosterConfig`] and serves read-only views
//! of the resulting snapshot.

use super::entities::{MIN_REPUTATION, Participant, Role};
use super::reputation::ReputationEvent;
use crate::core::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Roster rules applied at registry initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Exact number of participants per session
    pub participant_count: usize,
    /// Quorum floor of voting participants
    pub min_voting_participants: usize,
    /// Configured role set
    pub roles: Vec<Role>,
    /// Role → base weight; keys must equal `roles`
    pub voting_weights: BTreeMap<Role, f64>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            participant_count: 10,
            min_voting_participants: 7,
            roles: Role::ALL.to_vec(),
            voting_weights: Role::ALL
                .iter()
                .map(|r| (*r, r.default_weight()))
                .collect(),
        }
    }
}

impl RosterConfig {
    pub fn with_participant_count(mut self, count: usize) -> Self {
        self.participant_count = count;
        self
    }

    pub fn with_min_voting_participants(mut self, min: usize) -> Self {
        self.min_voting_participants = min;
        self
    }

    pub fn with_weight(mut self, role: Role, weight: f64) -> Self {
        self.voting_weights.insert(role, weight);
        self
    }
}

/// Validated roster snapshot for one session.
///
/// Participants are kept in roster order. Construction goes through
/// [`ParticipantRegistry::initialize`]; reputation changes produce a new
/// snapshot through [`ParticipantRegistry::with_reputation`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantRegistry {
    participants: Vec<Participant>,
    critic_index: usize,
    moderator_index: usize,
}

impl ParticipantRegistry {
    /// Validate `roster` against `config` and build the snapshot.
    ///
    /// Each participant's base weight is replaced by the configured weight
    /// for its role.
    pub fn initialize(
        roster: Vec<Participant>,
        config: &RosterConfig,
    ) -> Result<Self, ConfigurationError> {
        if config.min_voting_participants == 0
            || config.min_voting_participants > config.participant_count
        {
            return Err(ConfigurationError::InvalidQuorumFloor {
                min: config.min_voting_participants,
                participant_count: config.participant_count,
            });
        }

        if roster.len() != config.participant_count {
            return Err(ConfigurationError::ParticipantCount {
                expected: config.participant_count,
                actual: roster.len(),
            });
        }

        let configured: BTreeSet<Role> = config.roles.iter().copied().collect();
        let weighted: BTreeSet<Role> = config.voting_weights.keys().copied().collect();
        if configured != weighted {
            return Err(ConfigurationError::WeightRoleMismatch {
                missing: configured
                    .difference(&weighted)
                    .map(|r| r.to_string())
                    .collect(),
                unexpected: weighted
                    .difference(&configured)
                    .map(|r| r.to_string())
                    .collect(),
            });
        }

        for (role, weight) in &config.voting_weights {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(ConfigurationError::InvalidWeight {
                    role: role.to_string(),
                    weight: *weight,
                });
            }
        }

        let mut seen = HashSet::new();
        let mut participants = Vec::with_capacity(roster.len());
        for participant in roster {
            if !seen.insert(participant.id.clone()) {
                return Err(ConfigurationError::DuplicateId(participant.id));
            }
            let Some(weight) = config.voting_weights.get(&participant.role) else {
                return Err(ConfigurationError::UnknownRole {
                    participant: participant.id,
                    role: participant.role.to_string(),
                });
            };
            if !participant.reputation_multiplier.is_finite()
                || participant.reputation_multiplier < MIN_REPUTATION
            {
                return Err(ConfigurationError::InvalidReputation {
                    participant: participant.id,
                    value: participant.reputation_multiplier,
                });
            }
            participants.push(participant.with_weight(*weight));
        }

        let critics: Vec<usize> = participants
            .iter()
            .enumerate()
            .filter(|(_, p)| p.role == Role::Critic)
            .map(|(i, _)| i)
            .collect();
        if critics.len() != 1 {
            return Err(ConfigurationError::CriticCount(critics.len()));
        }

        let voting = participants.iter().filter(|p| p.is_voting()).count();
        if voting < config.min_voting_participants {
            return Err(ConfigurationError::InsufficientVotingParticipants {
                voting,
                required: config.min_voting_participants,
            });
        }
        if voting == participants.len() {
            return Err(ConfigurationError::NoAdvisoryParticipant);
        }

        let moderator_index = participants
            .iter()
            .position(|p| p.role == Role::Chair)
            .unwrap_or(0);

        Ok(Self {
            participants,
            critic_index: critics[0],
            moderator_index,
        })
    }

    /// All participants in roster order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Voting participants (`base_weight > 0`) sorted by id.
    pub fn voting_participants(&self) -> Vec<&Participant> {
        let mut voting: Vec<&Participant> =
            self.participants.iter().filter(|p| p.is_voting()).collect();
        voting.sort_by(|a, b| a.id.cmp(&b.id));
        voting
    }

    pub fn get(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn effective_weight(&self, participant: &Participant) -> f64 {
        participant.effective_weight()
    }

    pub fn critic(&self) -> &Participant {
        &self.participants[self.critic_index]
    }

    /// The chair, or the first participant when there is no chair.
    pub fn moderator(&self) -> &Participant {
        &self.participants[self.moderator_index]
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Copy-on-write snapshot with `events` folded into the reputation
    /// multipliers. Events naming unknown participants are ignored.
    pub fn with_reputation(&self, events: &[ReputationEvent]) -> Self {
        let mut deltas: BTreeMap<&str, f64> = BTreeMap::new();
        for event in events {
            *deltas.entry(event.participant_id.as_str()).or_default() += event.delta;
        }

        let participants = self
            .participants
            .iter()
            .map(|p| match deltas.get(p.id.as_str()) {
                Some(delta) => p.adjusted_reputation(*delta),
                None => p.clone(),
            })
            .collect();

        Self {
            participants,
            critic_index: self.critic_index,
            moderator_index: self.moderator_index,
        }
    }

    pub fn statistics(&self) -> RegistryStatistics {
        RegistryStatistics {
            total_participants: self.participants.len(),
            voting_participants: self.participants.iter().filter(|p| p.is_voting()).count(),
            participants: self
                .participants
                .iter()
                .map(|p| ParticipantStatistics {
                    id: p.id.clone(),
                    display_name: p.display_name.clone(),
                    role: p.role,
                    base_weight: p.base_weight,
                    reputation: p.reputation_multiplier,
                    effective_weight: p.effective_weight(),
                    expertise_tags: p.expertise_tags.clone(),
                })
                .collect(),
        }
    }
}

/// Summary of a registry snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryStatistics {
    pub total_participants: usize,
    pub voting_participants: usize,
    pub participants: Vec<ParticipantStatistics>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantStatistics {
    pub id: String,
    pub display_name: String,
    pub role: Role,
    pub base_weight: f64,
    pub reputation: f64,
    pub effective_weight: f64,
    pub expertise_tags: Vec<String>,
}
