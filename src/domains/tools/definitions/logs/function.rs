//! Function logs tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domains::tools::definitions::common::{
    LogLevel, MAX_LOG_LIMIT, default_log_limit, success_result,
};
use crate::domains::tools::handlers::EndpointTool;
use crate::domains::tools::validation::{Validate, Violations};
use crate::domains::tools::ToolError;
use crate::vercel::{ApiRequest, segment};

/// Parameters for reading the logs of one serverless function.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetFunctionLogsParams {
    /// The function ID to get logs for
    pub function_id: String,

    /// Filter by specific deployment
    pub deployment_id: Option<String>,

    /// The project ID containing the function
    pub project_id: Option<String>,

    /// Team ID to scope the request
    pub team_id: Option<String>,

    /// ISO timestamp to start from
    pub since: Option<String>,

    /// ISO timestamp to end at
    pub until: Option<String>,

    /// Number of log entries to return (1-1000, default: 100)
    #[serde(default = "default_log_limit")]
    #[schemars(range(min = 1, max = MAX_LOG_LIMIT))]
    pub limit: u32,

    /// Filter by log level
    pub level: Option<LogLevel>,

    /// Pagination cursor
    pub cursor: Option<String>,
}

impl Validate for GetFunctionLogsParams {
    fn validate(&self, v: &mut Violations) {
        v.not_blank("functionId", &self.function_id);
        v.range("limit", self.limit, 1, MAX_LOG_LIMIT);
    }
}

/// Reads logs emitted by a serverless function.
pub struct GetFunctionLogsTool;

impl EndpointTool for GetFunctionLogsTool {
    const NAME: &'static str = "vercel-get-function-logs";
    const DESCRIPTION: &'static str = "Get logs for serverless functions with filtering";
    const OPERATION: &'static str = "retrieve function logs";

    type Params = GetFunctionLogsParams;

    fn request(params: &Self::Params) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::get(format!("v1/functions/{}/logs", segment(&params.function_id)))
            .param_opt("deploymentId", params.deployment_id.as_deref())
            .param_opt("projectId", params.project_id.as_deref())
            .team(params.team_id.as_deref())
            .param_opt("since", params.since.as_deref())
            .param_opt("until", params.until.as_deref())
            .param("limit", params.limit)
            .param_opt("level", params.level)
            .param_opt("cursor", params.cursor.as_deref()))
    }

    fn render(params: &Self::Params, data: Value) -> Result<CallToolResult, ToolError> {
        Ok(success_result(
            format!("Successfully retrieved function logs for {}", params.function_id),
            &data,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::test_support::{args, client_for, text};
    use crate::domains::tools::{Endpoint, ToolHandler};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_function_logs() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/functions/fn_api/logs"))
            .and(query_param("deploymentId", "dpl_1"))
            .and(query_param("level", "warning"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "logs": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = Endpoint::<GetFunctionLogsTool>::new();
        let result = tool
            .call(
                &client_for(&server),
                args(json!({ "functionId": "fn_api", "deploymentId": "dpl_1", "level": "warning" })),
            )
            .await
            .unwrap();
        assert_eq!(text(&result, 0), "Successfully retrieved function logs for fn_api");
    }

    #[tokio::test]
    async fn test_null_body_is_empty_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let tool = Endpoint::<GetFunctionLogsTool>::new();
        let err = tool
            .call(&client_for(&server), args(json!({ "functionId": "fn_api" })))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to retrieve function logs: no data returned");
    }
}
