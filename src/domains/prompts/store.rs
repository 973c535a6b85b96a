//! Storage abstraction for prompt records.

use async_trait::async_trait;

use super::error::PromptError;
use super::model::{NewPrompt, Prompt};

/// A backend holding the prompt collection.
///
/// Every operation is atomic with respect to the collection: callers never
/// observe a partially applied insert, upvote or delete.
#[async_trait]
pub trait PromptStore: Send + Sync {
    /// Short backend name used in logs.
    fn backend(&self) -> &'static str;

    /// All prompts, most upvoted first, newest first among equals.
    async fn list(&self) -> Result<Vec<Prompt>, PromptError>;

    /// Fetch a single prompt by exact id.
    async fn get(&self, id: &str) -> Result<Prompt, PromptError>;

    /// Store a validated prompt, assigning a fresh id, `upvotes = 0` and the
    /// current time.
    async fn insert(&self, prompt: NewPrompt) -> Result<Prompt, PromptError>;

    /// Add one upvote and return the new count.
    async fn upvote(&self, id: &str) -> Result<u64, PromptError>;

    /// Remove a prompt.
    async fn delete(&self, id: &str) -> Result<(), PromptError>;
}

/// Sort prompts into listing order: upvotes descending, then creation time
/// descending. The sort is stable, so full ties keep insertion order.
pub fn sort_by_popularity(prompts: &mut [Prompt]) {
    prompts.sort_by(|a, b| {
        b.upvotes
            .cmp(&a.upvotes)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}
