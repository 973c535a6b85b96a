//! Generator error types.

use thiserror::Error;

/// Errors that can occur while building a prompt brief.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The request carried no usable objective.
    #[error("Objective is required")]
    MissingObjective,

    /// A template definition is malformed.
    #[error("Template error: {0}")]
    Template(String),
}

impl GeneratorError {
    /// Create a new "template" error.
    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }
}
