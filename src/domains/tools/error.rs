//! Tool-specific error types.

use rmcp::model::{CallToolResult, Content};
use thiserror::Error;
use tracing::{error, warn};

use crate::vercel::ApiError;

/// Errors that can occur during tool operations.
///
/// None of these reach the MCP client as protocol errors: the dispatcher
/// turns each one into an `isError` envelope with [`ToolError::into_result`].
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool is registered under the requested name.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The arguments do not satisfy the tool's input contract.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The Vercel API call failed (non-2xx, transport, decode).
    #[error("Failed to {operation}: {source}")]
    Api {
        operation: String,
        #[source]
        source: ApiError,
    },

    /// The API answered successfully but without the expected data.
    #[error("Failed to {0}: no data returned")]
    EmptyResult(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Wrap an API failure with the operation that was attempted.
    pub fn api(operation: impl Into<String>, source: ApiError) -> Self {
        Self::Api {
            operation: operation.into(),
            source,
        }
    }

    /// Create a new "empty result" error for the given operation.
    pub fn empty(operation: impl Into<String>) -> Self {
        Self::EmptyResult(operation.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Convert into the error envelope returned to the client.
    pub fn into_result(self) -> CallToolResult {
        match &self {
            Self::UnknownTool(_) | Self::InvalidArguments(_) | Self::EmptyResult(_) => {
                warn!("{}", self)
            }
            Self::Api { .. } | Self::Internal(_) => error!("{}", self),
        }
        CallToolResult::error(vec![Content::text(self.to_string())])
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization failed: {err}"))
    }
}
