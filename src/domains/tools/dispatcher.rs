//! Tool call dispatch.
//!
//! The dispatcher is the boundary where typed [`ToolError`]s become error
//! envelopes. It never fails towards its caller: unknown tools, invalid
//! arguments, API failures and even panicking handlers all come back as a
//! `CallToolResult` with `is_error` set.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{debug, instrument};

use super::registry::ToolRegistry;
use super::ToolError;
use crate::vercel::VercelClient;

/// Routes tool calls to their handlers.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
    client: Arc<VercelClient>,
}

impl Dispatcher {
    pub fn new(registry: ToolRegistry, client: VercelClient) -> Self {
        Self {
            registry: Arc::new(registry),
            client: Arc::new(client),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Descriptors of every registered tool, in registration order.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.registry.list_tools()
    }

    /// Run a tool call and always produce an envelope.
    #[instrument(skip_all, fields(tool = %name))]
    pub async fn dispatch(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        match self.try_dispatch(name, arguments).await {
            Ok(result) => {
                debug!("Tool call succeeded");
                result
            }
            Err(e) => e.into_result(),
        }
    }

    async fn try_dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let handler = self
            .registry
            .get(name)
            .ok_or_else(|| ToolError::unknown_tool(name))?;

        AssertUnwindSafe(handler.call(&self.client, arguments))
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| {
                Err(ToolError::internal(format!(
                    "tool {name} panicked: {}",
                    panic_message(payload.as_ref())
                )))
            })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::handlers::{ToolHandler, descriptor};
    use crate::domains::tools::test_support::{args, client_for, text};
    use serde_json::json;
    use wiremock::matchers::{any, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(schemars::JsonSchema)]
    struct NoParams {}

    struct PanickingTool;

    #[async_trait::async_trait]
    impl ToolHandler for PanickingTool {
        fn name(&self) -> &'static str {
            "vercel-panics"
        }

        fn descriptor(&self) -> Tool {
            descriptor::<NoParams>(self.name(), "Always panics")
        }

        async fn call(
            &self,
            _client: &VercelClient,
            _arguments: Option<JsonObject>,
        ) -> Result<CallToolResult, ToolError> {
            panic!("handler exploded");
        }
    }

    fn dispatcher(server: &MockServer) -> Dispatcher {
        Dispatcher::new(ToolRegistry::new(), client_for(server))
    }

    #[tokio::test]
    async fn test_unknown_tool_does_no_io() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = dispatcher(&server)
            .dispatch("vercel-make-coffee", None)
            .await;
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 1);
        assert_eq!(text(&result, 0), "Unknown tool: vercel-make-coffee");
    }

    #[tokio::test]
    async fn test_missing_required_field_does_no_io() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = dispatcher(&server)
            .dispatch("vercel-get-deployment", args(json!({ "teamId": "t1" })))
            .await;
        assert_eq!(result.is_error, Some(true));
        assert!(text(&result, 0).starts_with("Invalid arguments:"));
        assert!(text(&result, 0).contains("idOrUrl"));
    }

    #[tokio::test]
    async fn test_remote_failure_then_recovery() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/teams"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v2/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "teams": [] })))
            .mount(&server)
            .await;

        let dispatcher = dispatcher(&server);

        let failed = dispatcher.dispatch("vercel-list-all-teams", None).await;
        assert_eq!(failed.is_error, Some(true));
        assert_eq!(
            text(&failed, 0),
            "Failed to list teams: Vercel API error 503: upstream unavailable"
        );

        let recovered = dispatcher.dispatch("vercel-list-all-teams", None).await;
        assert_eq!(recovered.is_error, Some(false));
        assert_eq!(text(&recovered, 0), "Found 0 teams");
    }

    #[tokio::test]
    async fn test_panicking_handler_becomes_internal_error() {
        let server = MockServer::start().await;
        let registry = ToolRegistry::from_handlers(vec![Arc::new(PanickingTool)]);
        let dispatcher = Dispatcher::new(registry, client_for(&server));

        let result = dispatcher.dispatch("vercel-panics", None).await;
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text(&result, 0),
            "Internal error: tool vercel-panics panicked: handler exploded"
        );
    }

    #[tokio::test]
    async fn test_lists_registered_tools() {
        let server = MockServer::start().await;
        assert_eq!(dispatcher(&server).list_tools().len(), 20);
    }
}
