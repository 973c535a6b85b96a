//! Prompt generator service.
//!
//! Resolves a [`BriefRequest`] against the configured variant's defaults and
//! renders it. Generation is pure: the same request always yields the same
//! text and nothing is stored.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

use super::definitions::{SeniorBrief, StandardBrief};
use super::error::GeneratorError;
use super::request::BriefRequest;
use super::templates::PromptTemplate;
use crate::core::config::GeneratorConfig;

/// Which brief layout `/generate` produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    /// "Act as a world-class ..." brief.
    #[default]
    Standard,
    /// Senior-role brief with an output format section.
    Senior,
}

impl TemplateVariant {
    /// The template for this variant.
    pub fn template(self) -> PromptTemplate {
        match self {
            Self::Standard => PromptTemplate::from_definition::<StandardBrief>(),
            Self::Senior => PromptTemplate::from_definition::<SeniorBrief>(),
        }
    }
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("standard"),
            Self::Senior => f.write_str("senior"),
        }
    }
}

impl FromStr for TemplateVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "senior" => Ok(Self::Senior),
            other => Err(format!("unknown template variant '{other}'")),
        }
    }
}

/// Builds prompt briefs from client requests.
pub struct PromptGenerator {
    template: PromptTemplate,
}

impl PromptGenerator {
    /// Create a generator for the configured variant.
    pub fn new(config: GeneratorConfig) -> Self {
        info!("Initializing PromptGenerator ({} template)", config.variant);
        Self {
            template: config.variant.template(),
        }
    }

    /// The template in use.
    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// Resolve defaults and render the brief.
    pub fn generate(&self, request: &BriefRequest) -> Result<String, GeneratorError> {
        let brief = request.resolve(&self.template.defaults)?;
        let prompt = self.template.render(&brief.values())?;
        debug!("Generated {} brief ({} bytes)", self.template.name, prompt.len());
        Ok(prompt)
    }
}

/// Build a brief with the standard template.
pub fn build_prompt(request: &BriefRequest) -> Result<String, GeneratorError> {
    let template = TemplateVariant::Standard.template();
    let brief = request.resolve(&template.defaults)?;
    template.render(&brief.values())
}
