//! Transport layer for the catalog server.
//!
//! The server speaks JSON over HTTP. This module owns the listener
//! configuration, the axum router and the handlers that translate between
//! HTTP and the domain services.

mod config;
mod error;
pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::{HttpTransport, build_router};
