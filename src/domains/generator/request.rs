//! Brief requests and their resolved form.

use serde::{Deserialize, Serialize};

use super::definitions::BriefDefaults;
use super::error::GeneratorError;

/// Fields a client may send to `/generate`. Only `objective` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefRequest {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub objective: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub constraints: Option<String>,
    #[serde(default)]
    pub output_format: Option<String>,
}

impl BriefRequest {
    /// Start a request with the given objective.
    pub fn new(objective: impl Into<String>) -> Self {
        Self {
            objective: Some(objective.into()),
            ..Default::default()
        }
    }

    /// Fill every absent or blank field from `defaults`.
    ///
    /// Supplied values are kept verbatim.
    pub fn resolve(&self, defaults: &BriefDefaults) -> Result<ResolvedBrief, GeneratorError> {
        let objective = supplied(&self.objective).ok_or(GeneratorError::MissingObjective)?;

        let pick = |value: &Option<String>, default: &str| {
            supplied(value).unwrap_or(default).to_string()
        };

        Ok(ResolvedBrief {
            role: pick(&self.role, defaults.role),
            domain: pick(&self.domain, defaults.domain),
            objective: objective.to_string(),
            target_audience: pick(&self.target_audience, defaults.target_audience),
            tone: pick(&self.tone, defaults.tone),
            constraints: pick(&self.constraints, defaults.constraints),
            output_format: pick(&self.output_format, defaults.output_format),
        })
    }
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// A brief with every field decided, ready for substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBrief {
    pub role: String,
    pub domain: String,
    pub objective: String,
    pub target_audience: String,
    pub tone: String,
    pub constraints: String,
    pub output_format: String,
}

impl ResolvedBrief {
    /// Placeholder name and value pairs, named as they appear in templates.
    pub fn values(&self) -> [(&'static str, &str); 7] {
        [
            ("role", self.role.as_str()),
            ("domain", self.domain.as_str()),
            ("objective", self.objective.as_str()),
            ("targetAudience", self.target_audience.as_str()),
            ("tone", self.tone.as_str()),
            ("constraints", self.constraints.as_str()),
            ("outputFormat", self.output_format.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::generator::definitions::{BriefDefinition, StandardBrief};

    #[test]
    fn test_resolve_fills_defaults() {
        let brief = BriefRequest::new("Write a poem")
            .resolve(&StandardBrief::defaults())
            .unwrap();

        assert_eq!(brief.role, "Expert");
        assert_eq!(brief.domain, "General");
        assert_eq!(brief.target_audience, "General");
        assert_eq!(brief.tone, "Professional");
        assert_eq!(brief.constraints, "None");
        assert_eq!(brief.output_format, "Markdown");
    }

    #[test]
    fn test_blank_values_take_defaults_but_others_are_verbatim() {
        let request = BriefRequest {
            role: Some("   ".to_string()),
            tone: Some("  playful ".to_string()),
            ..BriefRequest::new("Plan a trip")
        };
        let brief = request.resolve(&StandardBrief::defaults()).unwrap();

        assert_eq!(brief.role, "Expert");
        assert_eq!(brief.tone, "  playful ");
    }

    #[test]
    fn test_blank_objective_is_rejected() {
        let request = BriefRequest::new(" \n ");
        assert!(matches!(
            request.resolve(&StandardBrief::defaults()),
            Err(GeneratorError::MissingObjective)
        ));
        assert!(matches!(
            BriefRequest::default().resolve(&StandardBrief::defaults()),
            Err(GeneratorError::MissingObjective)
        ));
    }

    #[test]
    fn test_request_reads_camel_case_json() {
        let request: BriefRequest = serde_json::from_str(
            r#"{"objective":"x","targetAudience":"CTOs","outputFormat":"JSON"}"#,
        )
        .unwrap();
        assert_eq!(request.target_audience.as_deref(), Some("CTOs"));
        assert_eq!(request.output_format.as_deref(), Some("JSON"));
    }
}
