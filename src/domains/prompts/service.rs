//! Prompt catalog service.
//!
//! The PromptService validates incoming drafts and delegates storage to a
//! [`PromptStore`]. Swapping the in-memory store for a durable backend does
//! not require modifying this file.

use std::sync::Arc;
use tracing::{debug, info};

use super::error::PromptError;
use super::model::{Prompt, PromptDraft, PromptQuery};
use super::store::PromptStore;
use super::validation::ValidationRules;
use crate::core::config::CatalogConfig;

/// Service for browsing and curating the prompt catalog.
pub struct PromptService {
    /// Backing store for prompt records.
    store: Arc<dyn PromptStore>,

    /// Rules applied to new prompts beyond the required fields.
    rules: ValidationRules,
}

impl PromptService {
    /// Create a new PromptService over the given store.
    pub fn new(config: CatalogConfig, store: Arc<dyn PromptStore>) -> Self {
        info!("Initializing PromptService ({} store)", store.backend());
        Self {
            store,
            rules: config.validation,
        }
    }

    /// The validation rules in force.
    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// List prompts in popularity order, optionally filtered.
    pub async fn list_prompts(&self, query: &PromptQuery) -> Result<Vec<Prompt>, PromptError> {
        let prompts = self.store.list().await?;
        if query.is_empty() {
            return Ok(prompts);
        }

        let filtered: Vec<_> = prompts.into_iter().filter(|p| query.matches(p)).collect();
        debug!("Filter matched {} prompt(s)", filtered.len());
        Ok(filtered)
    }

    /// Fetch a single prompt.
    pub async fn get_prompt(&self, id: &str) -> Result<Prompt, PromptError> {
        self.store.get(id).await
    }

    /// Validate a draft and store it.
    pub async fn create_prompt(&self, draft: PromptDraft) -> Result<Prompt, PromptError> {
        let new_prompt = draft.validate(&self.rules)?;
        let prompt = self.store.insert(new_prompt).await?;
        info!("Created prompt {} ({:?})", prompt.id, prompt.title);
        Ok(prompt)
    }

    /// Add one upvote to a prompt and return the new count.
    pub async fn upvote_prompt(&self, id: &str) -> Result<u64, PromptError> {
        let upvotes = self.store.upvote(id).await?;
        info!("Upvoted prompt {} (now {})", id, upvotes);
        Ok(upvotes)
    }

    /// Remove a prompt.
    pub async fn delete_prompt(&self, id: &str) -> Result<(), PromptError> {
        self.store.delete(id).await?;
        info!("Deleted prompt {}", id);
        Ok(())
    }
}
