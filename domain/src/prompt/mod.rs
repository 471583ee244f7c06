//! Prompt domain
//!
//! Prompts sent to the content generator for each phase, and the
//! deterministic fallback text used when generation fails.

mod template;

pub use template::{PhaseContext, PromptTemplate};
