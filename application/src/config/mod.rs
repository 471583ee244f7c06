//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`MeetingParams`] — timeouts, approval threshold and artifact behavior
//! - [`CouncilConfig`] — container holding the roster, gate and meeting settings

pub mod council_config;
pub mod meeting_params;

pub use council_config::CouncilConfig;
pub use meeting_params::MeetingParams;
