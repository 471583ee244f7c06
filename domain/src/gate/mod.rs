//! Critic gate
//!
//! A content-presence check on the critic's evaluation that must pass before
//! any vote is taken.
//!
//! [`CriticGate::admit`] is the only constructor of [`PassedEvaluation`], and
//! both the voting phase and
//! [`DecisionBuilder::build`](crate::decision::DecisionBuilder::build) take
//! one, so a vote without a passed gate cannot be expressed.

mod config;
mod evaluation;
mod validator;

pub use config::GateConfig;
pub use evaluation::{BlockedEvaluation, CriticEvaluation, PassedEvaluation};
pub use validator::{CriticGate, GateAssessment, KeywordCategory};
