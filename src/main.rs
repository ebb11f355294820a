//! Vercel MCP Server entry point.
//!
//! Loads configuration, initializes logging on stderr and serves the tools
//! on the configured transport.

use anyhow::Result;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use vercel_mcp_server::core::config::LoggingConfig;
use vercel_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // Config::from_env logs, so the subscriber goes first.
    init_logging(&LoggingConfig::from_env().level);

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = McpServer::new(config.clone()).inspect_err(|e| error!("{}", e))?;

    TransportService::new(config.transport)
        .run(server)
        .await
        .inspect_err(|e| error!("{}", e))?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Everything goes to stderr: stdout carries the MCP protocol in STDIO mode.
/// `RUST_LOG` directives are honoured on top of the configured level.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}
