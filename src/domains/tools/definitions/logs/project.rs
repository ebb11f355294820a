//! Project runtime logs tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domains::tools::definitions::common::{
    LogLevel, LogSource, MAX_LOG_LIMIT, default_log_limit, success_result,
};
use crate::domains::tools::handlers::EndpointTool;
use crate::domains::tools::validation::{Validate, Violations};
use crate::domains::tools::ToolError;
use crate::vercel::{ApiRequest, segment};

/// Parameters for reading a project's runtime logs.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetProjectLogsParams {
    /// The project ID to get logs for
    pub project_id: String,

    /// Team ID to scope the request
    pub team_id: Option<String>,

    /// ISO timestamp to start from (e.g., '2024-01-01T00:00:00Z')
    pub since: Option<String>,

    /// ISO timestamp to end at (e.g., '2024-01-01T23:59:59Z')
    pub until: Option<String>,

    /// Number of log entries to return (1-1000, default: 100)
    #[serde(default = "default_log_limit")]
    #[schemars(range(min = 1, max = MAX_LOG_LIMIT))]
    pub limit: u32,

    /// Filter by log level
    pub level: Option<LogLevel>,

    /// Filter by log source
    pub source: Option<LogSource>,

    /// Pagination cursor for next set of results
    pub cursor: Option<String>,
}

impl Validate for GetProjectLogsParams {
    fn validate(&self, v: &mut Violations) {
        v.not_blank("projectId", &self.project_id);
        v.range("limit", self.limit, 1, MAX_LOG_LIMIT);
    }
}

/// `GET v1/projects/{projectId}/logs` with no filters applied.
pub fn project_logs_request(project_id: &str) -> ApiRequest {
    ApiRequest::get(format!("v1/projects/{}/logs", segment(project_id)))
}

/// Reads runtime logs of a project.
pub struct GetProjectLogsTool;

impl EndpointTool for GetProjectLogsTool {
    const NAME: &'static str = "vercel-get-project-logs";
    const DESCRIPTION: &'static str = "Get runtime logs for a specific project with filtering options";
    const OPERATION: &'static str = "retrieve project logs";

    type Params = GetProjectLogsParams;

    fn request(params: &Self::Params) -> Result<ApiRequest, ToolError> {
        Ok(project_logs_request(&params.project_id)
            .team(params.team_id.as_deref())
            .param_opt("since", params.since.as_deref())
            .param_opt("until", params.until.as_deref())
            .param("limit", params.limit)
            .param_opt("level", params.level)
            .param_opt("source", params.source)
            .param_opt("cursor", params.cursor.as_deref()))
    }

    fn render(params: &Self::Params, data: Value) -> Result<CallToolResult, ToolError> {
        Ok(success_result(
            format!("Successfully retrieved logs for project {}", params.project_id),
            &data,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::test_support::{args, client_for, text};
    use crate::domains::tools::validation::parse_arguments;
    use crate::domains::tools::{Endpoint, ToolHandler};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_filters_in_request_order() {
        let params: GetProjectLogsParams = parse_arguments(args(json!({
            "projectId": "prj_1",
            "teamId": "team_1",
            "level": "error",
            "source": "edge-function"
        })))
        .unwrap();
        assert_eq!(
            GetProjectLogsTool::request(&params).unwrap().endpoint(),
            "v1/projects/prj_1/logs?teamId=team_1&limit=100&level=error&source=edge-function"
        );
    }

    #[test]
    fn test_limit_bounds() {
        let err = parse_arguments::<GetProjectLogsParams>(args(json!({
            "projectId": "prj_1",
            "limit": 1001
        })))
        .unwrap_err();
        assert!(err.to_string().contains("between 1 and 1000"));
    }

    #[tokio::test]
    async fn test_get_project_logs() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/projects/prj_1/logs"))
            .and(query_param("since", "2024-01-01T00:00:00Z"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "logs": [{ "message": "GET /api 200" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = Endpoint::<GetProjectLogsTool>::new();
        let result = tool
            .call(
                &client_for(&server),
                args(json!({ "projectId": "prj_1", "since": "2024-01-01T00:00:00Z" })),
            )
            .await
            .unwrap();
        assert_eq!(text(&result, 0), "Successfully retrieved logs for project prj_1");
    }
}
