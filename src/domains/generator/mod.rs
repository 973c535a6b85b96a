//! Generator domain module.
//!
//! This module turns a short structured request (role, domain, objective,
//! audience, tone, constraints, output format) into a formatted brief meant
//! to be pasted into an external language model.
//!
//! ## Architecture
//!
//! - `definitions/` - Template variants (one file per variant)
//! - `request.rs` - Incoming request and its resolved form
//! - `templates.rs` - Single-pass template rendering
//! - `service.rs` - Prompt generator used by the HTTP handlers

pub mod definitions;
mod error;
mod request;
mod service;
pub mod templates;

pub use definitions::{BriefDefaults, BriefDefinition};
pub use error::GeneratorError;
pub use request::{BriefRequest, ResolvedBrief};
pub use service::{PromptGenerator, TemplateVariant, build_prompt};
pub use templates::PromptTemplate;
