//! Infrastructure layer for council
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: configuration file loading, content generators,
//! reflections, filesystem artifacts and the JSONL conversation log.

pub mod artifacts;
pub mod config;
pub mod generator;
pub mod logging;
pub mod reflection;

// Re-export commonly used types
pub use artifacts::{ArtifactError, FsArtifactSink, check_session_id};
pub use config::{
    ConfigLoadError, ConfigLoader, FileConfig, FileGeneratorConfig, FileLoggingConfig,
    FileMeetingConfig, FileOutputConfig, FileParticipant, GeneratorProvider,
};
#[cfg(feature = "http-generator")]
pub use generator::HttpContentGenerator;
pub use generator::TemplateContentGenerator;
pub use logging::JsonlConversationLogger;
pub use reflection::TemplateReflectionProvider;
