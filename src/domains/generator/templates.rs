//! Prompt templates module.
//!
//! This module contains the PromptTemplate struct used to turn a resolved
//! brief into the final text block.

use super::definitions::{BriefDefaults, BriefDefinition};
use super::error::GeneratorError;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A named template with `{{field}}` placeholders.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The variant name.
    pub name: String,

    /// What the template produces.
    pub description: String,

    /// The template string with placeholders.
    pub template: String,

    /// Defaults applied before rendering.
    pub defaults: BriefDefaults,
}

impl PromptTemplate {
    /// Build a PromptTemplate from a BriefDefinition.
    pub fn from_definition<B: BriefDefinition>() -> Self {
        Self {
            name: B::NAME.to_string(),
            description: B::DESCRIPTION.to_string(),
            template: B::template().to_string(),
            defaults: B::defaults(),
        }
    }

    /// Render the template with the given values.
    ///
    /// The template is scanned once from left to right, so text coming from
    /// a value is copied as-is even if it looks like a placeholder. Every
    /// placeholder must have a value.
    pub fn render(&self, values: &[(&str, &str)]) -> Result<String, GeneratorError> {
        let mut output = String::with_capacity(self.template.len() + 256);
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find(OPEN) {
            output.push_str(&rest[..start]);
            let after_open = &rest[start + OPEN.len()..];

            let end = after_open.find(CLOSE).ok_or_else(|| {
                GeneratorError::template(format!("unclosed placeholder in '{}'", self.name))
            })?;
            let key = after_open[..end].trim();

            let value = values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| *value)
                .ok_or_else(|| {
                    GeneratorError::template(format!(
                        "no value for placeholder '{}' in '{}'",
                        key, self.name
                    ))
                })?;

            output.push_str(value);
            rest = &after_open[end + CLOSE.len()..];
        }

        output.push_str(rest);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::generator::definitions::StandardBrief;

    fn template(text: &str) -> PromptTemplate {
        PromptTemplate {
            name: "test".to_string(),
            description: String::new(),
            template: text.to_string(),
            defaults: StandardBrief::defaults(),
        }
    }

    #[test]
    fn test_simple_substitution() {
        let result = template("Hello, {{name}}!")
            .render(&[("name", "World")])
            .unwrap();
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_placeholder_whitespace_is_ignored() {
        let result = template("{{ a }}-{{b}}").render(&[("a", "1"), ("b", "2")]).unwrap();
        assert_eq!(result, "1-2");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let result = template("{{a}} / {{b}}")
            .render(&[("a", "{{b}}"), ("b", "<script>")])
            .unwrap();
        assert_eq!(result, "{{b}} / <script>");
    }

    #[test]
    fn test_unknown_placeholder_is_an_error() {
        let result = template("Hi {{who}}").render(&[("name", "x")]);
        assert!(matches!(result, Err(GeneratorError::Template(_))));
    }

    #[test]
    fn test_unclosed_placeholder_is_an_error() {
        let result = template("Hi {{name").render(&[("name", "x")]);
        assert!(matches!(result, Err(GeneratorError::Template(_))));
    }

    #[test]
    fn test_from_definition() {
        let template = PromptTemplate::from_definition::<StandardBrief>();
        assert_eq!(template.name, "standard");
        assert_eq!(template.defaults, StandardBrief::defaults());
    }
}
