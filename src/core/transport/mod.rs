//! Transport layer for the MCP server.
//!
//! - **STDIO**: the client spawns the server as a child process - feature `stdio` (default)
//! - **TCP**: line-delimited JSON-RPC over a socket - feature `tcp`
//! - **HTTP**: JSON-RPC over POST via axum - feature `http`
//!
//! Transports only move messages. Tool listing and tool calls always go
//! through the server's dispatcher.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
