//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the
//! catalog server and is independent of the HTTP layer.

pub mod generator;
pub mod prompts;
