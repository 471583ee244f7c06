//! Content generator adapters
//!
//! Implements the [`ContentGenerator`](council_application::ContentGenerator)
//! port:
//!
//! - [`TemplateContentGenerator`]: offline, deterministic rotating templates
//! - `HttpContentGenerator` (feature `http-generator`): OpenAI-compatible
//!   chat completions endpoint

mod response;
mod template;

#[cfg(feature = "http-generator")]
mod http;

#[cfg(feature = "http-generator")]
pub use http::HttpContentGenerator;
pub use response::{clean_response, max_chars_for, truncate_at_sentence};
pub use template::TemplateContentGenerator;
