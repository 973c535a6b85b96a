//! Draft validation and the optional schema rules.
//!
//! Required-field checks always run. The length caps, tag limit and
//! category list are opt-in: [`ValidationRules::default`] enforces none of
//! them and [`ValidationRules::schema`] enables the documented preset.

use serde::{Deserialize, Serialize};

use super::error::PromptError;
use super::model::{NewPrompt, PromptDraft, REQUIRED_FIELDS};

/// Extra constraints applied to new prompts once required fields are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRules {
    pub max_title_len: Option<usize>,
    pub max_description_len: Option<usize>,
    pub max_author_len: Option<usize>,
    pub max_content_len: Option<usize>,
    pub max_tags: Option<usize>,
    /// Accepted categories, compared after lowercasing.
    pub allowed_categories: Option<Vec<String>>,
}

impl ValidationRules {
    /// The schema preset: 200/500/100/5000 character caps, at most 10 tags
    /// and a fixed category list.
    pub fn schema() -> Self {
        Self {
            max_title_len: Some(200),
            max_description_len: Some(500),
            max_author_len: Some(100),
            max_content_len: Some(5000),
            max_tags: Some(10),
            allowed_categories: Some(
                ["writing", "coding", "marketing", "study", "other"]
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            ),
        }
    }

    /// Check a normalized prompt against the enabled rules.
    pub fn check(&self, prompt: &NewPrompt) -> Result<(), PromptError> {
        check_len("title", &prompt.title, self.max_title_len)?;
        check_len("description", &prompt.description, self.max_description_len)?;
        check_len("author", &prompt.author, self.max_author_len)?;
        check_len("content", &prompt.content, self.max_content_len)?;

        if let Some(max) = self.max_tags {
            if prompt.tags.len() > max {
                return Err(PromptError::invalid_field(
                    "tags",
                    format!("at most {max} tags allowed"),
                ));
            }
        }

        if let Some(allowed) = &self.allowed_categories {
            if !allowed.iter().any(|c| c == &prompt.category) {
                return Err(PromptError::invalid_field(
                    "category",
                    format!("must be one of: {}", allowed.join(", ")),
                ));
            }
        }

        Ok(())
    }
}

fn check_len(field: &'static str, value: &str, max: Option<usize>) -> Result<(), PromptError> {
    match max {
        Some(max) if value.chars().count() > max => Err(PromptError::invalid_field(
            field,
            format!("must be at most {max} characters"),
        )),
        _ => Ok(()),
    }
}

impl PromptDraft {
    /// Validate and normalize a draft.
    ///
    /// Text fields are trimmed, the category is lowercased and tags are
    /// trimmed with blanks dropped. Every missing required field is reported
    /// in a single [`PromptError::MissingFields`].
    pub fn validate(&self, rules: &ValidationRules) -> Result<NewPrompt, PromptError> {
        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .into_iter()
            .filter(|name| self.field(name).is_none_or(|v| v.trim().is_empty()))
            .collect();

        if !missing.is_empty() {
            return Err(PromptError::MissingFields(missing));
        }

        let text = |name: &str| self.field(name).unwrap_or_default().trim().to_string();

        let prompt = NewPrompt {
            title: text("title"),
            description: text("description"),
            category: text("category").to_lowercase(),
            tags: self.normalized_tags(),
            author: text("author"),
            content: text("content"),
        };

        rules.check(&prompt)?;
        Ok(prompt)
    }
}
