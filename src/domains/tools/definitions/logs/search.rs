//! Log search tool definition.

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

/// Parameters for a full-text log search.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchLogsParams {
    /// The project ID to search logs in
    pub project_id: String,

    /// Team ID to scope the request
    pub team_id: Option<String>,

    /// Search query string
    pub query: String,

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

    /// Filter by log source
    pub source: Option<LogSource>,

    /// Pagination cursor
    pub cursor: Option<String>,
}

impl Validate for SearchLogsParams {
    fn validate(&self, v: &mut Violations) {
        v.not_blank("projectId", &self.project_id);
        v.not_blank("query", &self.query);
        v.range("limit", self.limit, 1, MAX_LOG_LIMIT);
    }
}

/// Searches the logs of a project.
pub struct SearchLogsTool;

impl EndpointTool for SearchLogsTool {
    const NAME: &'static str = "vercel-search-logs";
    const DESCRIPTION: &'static str = "Search logs with advanced filtering and text search";
    const OPERATION: &'static str = "search logs";

    type Params = SearchLogsParams;

    fn request(params: &Self::Params) -> Result<ApiRequest, ToolError> {
        Ok(
            ApiRequest::get(format!("v1/projects/{}/logs/search", segment(&params.project_id)))
                .param("q", params.query.as_str())
                .team(params.team_id.as_deref())
                .param_opt("since", params.since.as_deref())
                .param_opt("until", params.until.as_deref())
                .param("limit", params.limit)
                .param_opt("level", params.level)
                .param_opt("source", params.source)
                .param_opt("cursor", params.cursor.as_deref()),
        )
    }

    fn render(params: &Self::Params, data: Value) -> Result<CallToolResult, ToolError> {
        Ok(success_result(
            format!(
                "Successfully searched logs in project {} for: \"{}\"",
                params.project_id, params.query
            ),
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
    fn test_query_is_required() {
        let err = parse_arguments::<SearchLogsParams>(args(json!({ "projectId": "prj_1" })))
            .unwrap_err();
        assert!(err.to_string().contains("query"));
    }

    #[tokio::test]
    async fn test_search_sends_query_first() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/projects/prj_1/logs/search"))
            .and(query_param("q", "status:500 timeout"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "logs": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = Endpoint::<SearchLogsTool>::new();
        let result = tool
            .call(
                &client_for(&server),
                args(json!({ "projectId": "prj_1", "query": "status:500 timeout" })),
            )
            .await
            .unwrap();
        assert_eq!(
            text(&result, 0),
            "Successfully searched logs in project prj_1 for: \"status:500 timeout\""
        );

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].url.query().unwrap().starts_with("q="));
    }
}
