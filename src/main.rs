//! PromptCart API Entry Point
//!
//! This is the main entry point for the catalog server. It initializes
//! logging, loads configuration, and serves the HTTP API.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use promptcart_server::core::{CatalogServer, Config, HttpTransport, config::LoggingConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = CatalogServer::new(config.clone());

    info!("Server initialized");

    HttpTransport::new(config.transport).run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format.
fn init_logging(logging: &LoggingConfig) {
    let level = match logging.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if logging.with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
