//! PromptCart API Library
//!
//! This crate provides a small prompt catalog service: clients submit,
//! browse, upvote and delete short prompt records, and a generator endpoint
//! formats structured fields into a brief for an external language model.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Configuration, error handling, the shared server handle and the HTTP transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **prompts**: The prompt catalog and its storage backends
//!   - **generator**: Template-based brief generation
//!
//! # Example
//!
//! ```rust,no_run
//! use promptcart_server::core::{CatalogServer, Config, HttpTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = CatalogServer::new(config.clone());
//!     HttpTransport::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{CatalogServer, Config, Error, Result};
