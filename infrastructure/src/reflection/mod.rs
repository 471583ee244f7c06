//! Reflection provider adapters

mod template;

pub use template::TemplateReflectionProvider;
