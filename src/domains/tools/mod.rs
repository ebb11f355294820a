//! Tools domain module.
//!
//! Tools are the Vercel operations MCP clients can call. Each one validates
//! its arguments, issues one or more Vercel API requests and answers with a
//! summary line plus the JSON payload.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `validation.rs` - Argument decoding and constraint checks
//! - `handlers.rs` - Handler traits and the shared single-request pipeline
//! - `registry.rs` - The ordered set of tools exposed by the server
//! - `dispatcher.rs` - Name lookup, error envelopes and panic containment
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with a params struct and an
//!    [`EndpointTool`] impl (or a [`ToolHandler`] impl for aggregating tools)
//! 2. Export it from its `definitions/` group
//! 3. Register it in `registry.rs`

pub mod definitions;
mod dispatcher;
mod error;
mod handlers;
mod registry;
mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use dispatcher::Dispatcher;
pub use error::ToolError;
pub use handlers::{Endpoint, EndpointTool, ToolHandler, descriptor};
pub use registry::ToolRegistry;
pub use validation::{Validate, Violations, parse_arguments};
