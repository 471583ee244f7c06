//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod artifact_sink;
pub mod content_generator;
pub mod conversation_logger;
pub mod progress;
pub mod reflection_provider;
pub mod vote_source;
