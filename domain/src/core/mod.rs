//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ConfigurationError`] — roster and weight configuration errors
//! - [`error::TransitionError`] — illegal state machine transitions
//! - [`time::current_timestamp`] — millisecond wall clock used for records

pub mod error;
pub mod time;
