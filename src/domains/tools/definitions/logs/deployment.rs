//! Deployment build logs tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domains::tools::definitions::common::{MAX_LOG_LIMIT, default_log_limit, success_result};
use crate::domains::tools::handlers::EndpointTool;
use crate::domains::tools::validation::{Validate, Violations};
use crate::domains::tools::ToolError;
use crate::vercel::{ApiRequest, segment};

/// Parameters for reading the build event stream of a deployment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetDeploymentLogsParams {
    /// The deployment ID to get logs for
    pub deployment_id: String,

    /// Team ID to scope the request
    pub team_id: Option<String>,

    /// Follow logs in real-time
    #[serde(default)]
    pub follow: bool,

    /// ISO timestamp to start from
    pub since: Option<String>,

    /// ISO timestamp to end at
    pub until: Option<String>,

    /// Number of log entries to return (1-1000, default: 100)
    #[serde(default = "default_log_limit")]
    #[schemars(range(min = 1, max = MAX_LOG_LIMIT))]
    pub limit: u32,

    /// Pagination cursor
    pub cursor: Option<String>,
}

impl Validate for GetDeploymentLogsParams {
    fn validate(&self, v: &mut Violations) {
        v.not_blank("deploymentId", &self.deployment_id);
        v.range("limit", self.limit, 1, MAX_LOG_LIMIT);
    }
}

/// `GET v3/deployments/{deploymentId}/events`, optionally team scoped.
pub fn deployment_events_request(deployment_id: &str, team_id: Option<&str>) -> ApiRequest {
    ApiRequest::get(format!("v3/deployments/{}/events", segment(deployment_id))).team(team_id)
}

/// Reads the build and runtime events of a deployment.
pub struct GetDeploymentLogsTool;

impl EndpointTool for GetDeploymentLogsTool {
    const NAME: &'static str = "vercel-get-deployment-logs";
    const DESCRIPTION: &'static str = "Get deployment build logs and events for a specific deployment";
    const OPERATION: &'static str = "retrieve deployment logs";

    type Params = GetDeploymentLogsParams;

    fn request(params: &Self::Params) -> Result<ApiRequest, ToolError> {
        Ok(
            deployment_events_request(&params.deployment_id, params.team_id.as_deref())
                .param_opt("follow", params.follow.then_some("1"))
                .param_opt("since", params.since.as_deref())
                .param_opt("until", params.until.as_deref())
                .param("limit", params.limit)
                .param_opt("cursor", params.cursor.as_deref()),
        )
    }

    fn render(params: &Self::Params, data: Value) -> Result<CallToolResult, ToolError> {
        Ok(success_result(
            format!("Successfully retrieved deployment logs for {}", params.deployment_id),
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
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_follow_only_sent_when_true() {
        let quiet: GetDeploymentLogsParams =
            parse_arguments(args(json!({ "deploymentId": "dpl_1" }))).unwrap();
        assert_eq!(
            GetDeploymentLogsTool::request(&quiet).unwrap().endpoint(),
            "v3/deployments/dpl_1/events?limit=100"
        );

        let following: GetDeploymentLogsParams =
            parse_arguments(args(json!({ "deploymentId": "dpl_1", "follow": true }))).unwrap();
        assert_eq!(
            GetDeploymentLogsTool::request(&following).unwrap().endpoint(),
            "v3/deployments/dpl_1/events?follow=1&limit=100"
        );
    }

    #[tokio::test]
    async fn test_events_array_is_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/deployments/dpl_1/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "type": "stdout", "text": "Installing dependencies" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let tool = Endpoint::<GetDeploymentLogsTool>::new();
        let result = tool
            .call(&client_for(&server), args(json!({ "deploymentId": "dpl_1" })))
            .await
            .unwrap();
        assert_eq!(text(&result, 0), "Successfully retrieved deployment logs for dpl_1");
        assert!(text(&result, 1).contains("Installing dependencies"));
    }
}
