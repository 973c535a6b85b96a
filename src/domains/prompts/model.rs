//! Prompt records and the request shapes that create them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields that must be present and non-blank when creating a prompt.
pub const REQUIRED_FIELDS: [&str; 5] = ["title", "description", "category", "author", "content"];

/// A stored prompt record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    /// Store-assigned identifier, never reused. Sent as `_id`.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub description: String,
    /// Lowercased category name.
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    pub content: String,
    pub upvotes: u64,
    pub created_at: DateTime<Utc>,
}

/// A validated prompt that has not been stored yet.
///
/// Produced by [`PromptDraft::validate`](super::PromptDraft); the store
/// assigns the id, creation time and upvote counter on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPrompt {
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    pub content: String,
}

impl NewPrompt {
    /// Turn this draft into a stored record.
    pub fn into_prompt(self, id: String, created_at: DateTime<Utc>) -> Prompt {
        Prompt {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            tags: self.tags,
            author: self.author,
            content: self.content,
            upvotes: 0,
            created_at,
        }
    }
}

/// Raw body of a create request, before validation.
///
/// Every field is optional so that missing fields can be reported together
/// instead of failing on the first one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Anything other than an array of strings is ignored.
    #[serde(default)]
    pub tags: Option<Value>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl PromptDraft {
    /// Look up a required field by name.
    pub(crate) fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => self.title.as_deref(),
            "description" => self.description.as_deref(),
            "category" => self.category.as_deref(),
            "author" => self.author.as_deref(),
            "content" => self.content.as_deref(),
            _ => None,
        }
    }

    /// Trimmed, non-empty tags in submission order.
    pub(crate) fn normalized_tags(&self) -> Vec<String> {
        match &self.tags {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Optional filters for listing prompts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptQuery {
    /// Category to match; empty or `all` matches everything.
    #[serde(default)]
    pub category: Option<String>,
    /// Case-insensitive text matched against title, description and tags.
    #[serde(default)]
    pub search: Option<String>,
}

impl PromptQuery {
    /// Whether the query filters anything at all.
    pub fn is_empty(&self) -> bool {
        self.category_filter().is_none() && self.search_term().is_none()
    }

    /// Check whether a prompt passes both filters.
    pub fn matches(&self, prompt: &Prompt) -> bool {
        let category_ok = self
            .category_filter()
            .is_none_or(|category| prompt.category.eq_ignore_ascii_case(&category));

        let search_ok = self.search_term().is_none_or(|term| {
            prompt.title.to_lowercase().contains(&term)
                || prompt.description.to_lowercase().contains(&term)
                || prompt
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&term))
        });

        category_ok && search_ok
    }

    fn category_filter(&self) -> Option<String> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"))
            .map(str::to_lowercase)
    }

    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}
