//! Error types and handling for the catalog server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains, and the mapping from those errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::domains::generator::GeneratorError;
use crate::domains::prompts::{PromptError, REQUIRED_FIELDS};

/// A specialized Result type for catalog server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the catalog server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the prompts domain.
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// Error originating from the generator domain.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// The request body could not be read as the expected JSON.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl Error {
    /// Create a new invalid-body error.
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Prompt(PromptError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Prompt(PromptError::MissingFields(_) | PromptError::InvalidField { .. })
            | Self::Generator(GeneratorError::MissingObjective)
            | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Prompt(PromptError::Storage(_)) | Self::Generator(GeneratorError::Template(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            Self::Prompt(PromptError::NotFound(_)) => json!({ "error": "Prompt not found" }),
            Self::Prompt(PromptError::MissingFields(missing)) => json!({
                "error": "Missing required fields",
                "required": REQUIRED_FIELDS,
                "missing": missing,
            }),
            Self::Prompt(PromptError::InvalidField { field, reason }) => json!({
                "error": "Invalid field value",
                "field": field,
                "reason": reason,
            }),
            Self::Generator(GeneratorError::MissingObjective) => json!({
                "error": "Objective is required",
                "missing": ["objective"],
            }),
            Self::InvalidBody(details) => json!({
                "error": "Invalid request body",
                "details": details,
            }),
            Self::Prompt(PromptError::Storage(_)) | Self::Generator(GeneratorError::Template(_)) => {
                error!("Request failed: {}", self);
                json!({ "error": "Internal server error" })
            }
        };

        (status, Json(body)).into_response()
    }
}
