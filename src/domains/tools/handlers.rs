//! Tool handler traits.
//!
//! [`ToolHandler`] is what the registry stores and the dispatcher calls.
//! Most tools map to exactly one API request; they implement the simpler
//! [`EndpointTool`] and are wrapped in [`Endpoint`], which runs the shared
//! validate → request → call → render pipeline. Tools that aggregate several
//! requests implement [`ToolHandler`] directly.

use std::marker::PhantomData;

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use super::ToolError;
use super::validation::{Validate, parse_arguments};
use crate::vercel::{ApiRequest, VercelClient};

/// A callable tool.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Get the name of this tool.
    fn name(&self) -> &'static str;

    /// Descriptor published through `tools/list`.
    fn descriptor(&self) -> Tool;

    /// Execute the tool with the raw call arguments.
    async fn call(
        &self,
        client: &VercelClient,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError>;
}

/// A tool backed by a single Vercel API request.
pub trait EndpointTool: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// What the tool does, phrased to follow "Failed to ..." in error messages.
    const OPERATION: &'static str;

    /// Input contract.
    type Params: DeserializeOwned + JsonSchema + Validate + Send + Sync + 'static;

    /// Build the API request for validated parameters.
    fn request(params: &Self::Params) -> Result<ApiRequest, ToolError>;

    /// Turn the decoded response into the success envelope.
    fn render(params: &Self::Params, data: Value) -> Result<CallToolResult, ToolError>;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        descriptor::<Self::Params>(Self::NAME, Self::DESCRIPTION)
    }
}

/// Build a tool descriptor whose input schema is derived from `P`.
pub fn descriptor<P: JsonSchema + 'static>(name: &'static str, description: &'static str) -> Tool {
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<P>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Adapter running an [`EndpointTool`] as a [`ToolHandler`].
pub struct Endpoint<T>(PhantomData<fn() -> T>);

impl<T> Endpoint<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Endpoint<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl<T: EndpointTool> ToolHandler for Endpoint<T> {
    fn name(&self) -> &'static str {
        T::NAME
    }

    fn descriptor(&self) -> Tool {
        T::to_tool()
    }

    async fn call(
        &self,
        client: &VercelClient,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let params: T::Params = parse_arguments(arguments)?;
        let request = T::request(&params)?;
        info!(tool = T::NAME, "{} {}", request.method(), request.endpoint());

        let data = client
            .send_json(&request)
            .await
            .map_err(|e| ToolError::api(T::OPERATION, e))?
            .ok_or_else(|| ToolError::empty(T::OPERATION))?;

        T::render(&params, data)
    }
}
