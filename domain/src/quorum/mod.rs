//! Weighted quorum voting
//!
//! - [`vote`] — [`VoteChoice`] and [`Vote`]
//! - [`tally`] — [`compute_tally`], the weighted approval computation
//! - [`strategy`] — per-role voting heuristics

pub mod strategy;
pub mod tally;
pub mod vote;

pub use strategy::{VotingStrategy, voting_strategy};
pub use tally::{TallyConfig, TallyOutcome, VoteTally, compute_tally};
pub use vote::{Vote, VoteChoice};
