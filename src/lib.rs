//! Vercel MCP Server Library
//!
//! Exposes the Vercel REST API to Model Context Protocol clients as a fixed
//! set of `vercel-*` tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: argument validation, tool definitions, registry and dispatcher
//! - **vercel**: the authenticated HTTP client for `api.vercel.com`
//!
//! # Example
//!
//! ```rust,no_run
//! use vercel_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;
pub mod vercel;

pub use core::{Config, Error, McpServer, Result};
