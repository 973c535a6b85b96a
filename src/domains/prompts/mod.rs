//! Prompts domain module.
//!
//! This module holds the prompt catalog: community-submitted prompt records
//! that clients can browse, upvote and delete.
//!
//! ## Architecture
//!
//! - `model.rs` - Prompt records, create drafts and listing filters
//! - `validation.rs` - Required-field checks and optional schema rules
//! - `store.rs` - The `PromptStore` storage trait
//! - `memory.rs` - In-memory `PromptStore` implementation
//! - `seed.rs` - Starter records for a fresh catalog
//! - `service.rs` - Prompt service used by the HTTP handlers
//!
//! ## Adding a Storage Backend
//!
//! 1. Implement `PromptStore` for the new backend
//! 2. Hand it to `CatalogServer::with_store`
//!
//! **No need to modify `service.rs`!**

mod error;
mod memory;
mod model;
mod seed;
mod service;
mod store;
mod validation;

pub use error::PromptError;
pub use memory::MemoryStore;
pub use model::{NewPrompt, Prompt, PromptDraft, PromptQuery, REQUIRED_FIELDS};
pub use seed::seed_prompts;
pub use service::PromptService;
pub use store::{PromptStore, sort_by_popularity};
pub use validation::ValidationRules;
