//! In-process prompt store.
//!
//! The collection lives behind a single `RwLock`. Reads share the lock;
//! insert, upvote and delete take the write guard for their whole
//! read-modify-write sequence, which keeps ids unique across worker threads.
//! Nothing survives a restart.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use super::error::PromptError;
use super::model::{NewPrompt, Prompt};
use super::seed::seed_prompts;
use super::store::{PromptStore, sort_by_popularity};

/// Prompt store backed by a `Vec` in insertion order.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    prompts: Vec<Prompt>,
    next_id: u64,
}

impl MemoryStore {
    /// Create an empty store. The first id handed out is "1".
    pub fn new() -> Self {
        Self::with_prompts(Vec::new())
    }

    /// Create a store holding the five seed prompts; new ids start at "6".
    pub fn seeded() -> Self {
        Self::with_prompts(seed_prompts())
    }

    /// Create a store preloaded with `prompts`.
    ///
    /// The id counter starts after the highest numeric id present so that
    /// preloaded ids are never handed out again.
    pub fn with_prompts(prompts: Vec<Prompt>) -> Self {
        let next_id = prompts
            .iter()
            .filter_map(|p| p.id.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);

        Self {
            inner: RwLock::new(Inner { prompts, next_id }),
        }
    }

    /// Number of stored prompts.
    pub async fn len(&self) -> usize {
        self.inner.read().await.prompts.len()
    }

    /// Whether the store holds no prompts.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn list(&self) -> Result<Vec<Prompt>, PromptError> {
        let mut prompts = self.inner.read().await.prompts.clone();
        sort_by_popularity(&mut prompts);
        Ok(prompts)
    }

    async fn get(&self, id: &str) -> Result<Prompt, PromptError> {
        self.inner
            .read()
            .await
            .prompts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| PromptError::not_found(id))
    }

    async fn insert(&self, prompt: NewPrompt) -> Result<Prompt, PromptError> {
        let mut inner = self.inner.write().await;

        let id = inner.next_id.to_string();
        inner.next_id += 1;

        let prompt = prompt.into_prompt(id, Utc::now());
        inner.prompts.push(prompt.clone());
        debug!("Stored prompt {} ({} total)", prompt.id, inner.prompts.len());

        Ok(prompt)
    }

    async fn upvote(&self, id: &str) -> Result<u64, PromptError> {
        let mut inner = self.inner.write().await;
        let prompt = inner
            .prompts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| PromptError::not_found(id))?;

        prompt.upvotes += 1;
        Ok(prompt.upvotes)
    }

    async fn delete(&self, id: &str) -> Result<(), PromptError> {
        let mut inner = self.inner.write().await;
        let index = inner
            .prompts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PromptError::not_found(id))?;

        inner.prompts.remove(index);
        Ok(())
    }
}
