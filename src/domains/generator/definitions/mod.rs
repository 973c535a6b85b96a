//! Brief template definitions.
//!
//! Each template variant is defined in its own file with:
//! - Metadata (name, description)
//! - Template string
//! - Default values for optional fields
//!
//! ## Adding a New Variant
//!
//! 1. Create a new file (e.g., `my_brief.rs`)
//! 2. Implement the `BriefDefinition` trait
//! 3. Export it here
//! 4. Add a `TemplateVariant` case in `service.rs`

mod senior;
mod standard;

pub use senior::SeniorBrief;
pub use standard::StandardBrief;

/// Values substituted for optional fields the client leaves out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BriefDefaults {
    pub role: &'static str,
    pub domain: &'static str,
    pub target_audience: &'static str,
    pub tone: &'static str,
    pub constraints: &'static str,
    pub output_format: &'static str,
}

/// Trait for brief definitions.
///
/// Each variant must implement this trait to provide its metadata, template
/// and defaults.
pub trait BriefDefinition {
    /// The unique name of the variant.
    const NAME: &'static str;

    /// A description of the variant.
    const DESCRIPTION: &'static str;

    /// The template string with {{field}} placeholders.
    fn template() -> &'static str;

    /// Defaults for the optional fields.
    fn defaults() -> BriefDefaults;
}
