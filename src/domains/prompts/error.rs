//! Prompt-catalog error types.

use thiserror::Error;

/// Errors that can occur during prompt catalog operations.
#[derive(Debug, Error)]
pub enum PromptError {
    /// No prompt exists with the given id.
    #[error("Prompt not found: {0}")]
    NotFound(String),

    /// One or more required fields were absent or blank.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// A field was present but violated a validation rule.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// The storage backend failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PromptError {
    /// Create a new "not found" error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Create a new "invalid field" error.
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// Create a new storage error.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_lists_names() {
        let err = PromptError::MissingFields(vec!["title", "author"]);
        assert_eq!(err.to_string(), "Missing required fields: title, author");
    }
}
