//! Vercel REST API access.
//!
//! - `request.rs` - [`ApiRequest`], the method/path/query/body description a tool builds
//! - `client.rs` - [`VercelClient`], the only place that performs network I/O
//! - `error.rs` - [`ApiError`], remote/transport/decode failures

mod client;
mod error;
mod request;

pub use client::VercelClient;
pub use error::ApiError;
pub use request::{ApiRequest, segment};

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.vercel.com";
