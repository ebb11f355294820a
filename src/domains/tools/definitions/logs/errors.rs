//! Runtime and build error report tool definitions.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domains::tools::definitions::common::{
    MAX_REPORT_LIMIT, default_report_limit, success_result,
};
use crate::domains::tools::handlers::EndpointTool;
use crate::domains::tools::validation::{Validate, Violations};
use crate::domains::tools::ToolError;
use crate::vercel::{ApiRequest, segment};

/// Triage state of an error report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ErrorStatus {
    New,
    Acknowledged,
    Resolved,
}

/// Parameters for reading runtime error reports.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetRuntimeErrorsParams {
    /// The project ID to get errors for
    pub project_id: String,

    /// Filter by specific deployment
    pub deployment_id: Option<String>,

    /// Team ID to scope the request
    pub team_id: Option<String>,

    /// ISO timestamp to start from
    pub since: Option<String>,

    /// ISO timestamp to end at
    pub until: Option<String>,

    /// Number of error reports to return (1-100, default: 20)
    #[serde(default = "default_report_limit")]
    #[schemars(range(min = 1, max = MAX_REPORT_LIMIT))]
    pub limit: u32,

    /// Filter by error status
    pub status: Option<ErrorStatus>,

    /// Pagination cursor
    pub cursor: Option<String>,
}

impl Validate for GetRuntimeErrorsParams {
    fn validate(&self, v: &mut Violations) {
        v.not_blank("projectId", &self.project_id);
        v.range("limit", self.limit, 1, MAX_REPORT_LIMIT);
    }
}

/// `GET v1/projects/{projectId}/errors` with no filters applied.
pub fn runtime_errors_request(project_id: &str) -> ApiRequest {
    ApiRequest::get(format!("v1/projects/{}/errors", segment(project_id)))
}

/// Reads runtime error reports for a project.
pub struct GetRuntimeErrorsTool;

impl EndpointTool for GetRuntimeErrorsTool {
    const NAME: &'static str = "vercel-get-runtime-errors";
    const DESCRIPTION: &'static str = "Get runtime error reports for debugging production issues";
    const OPERATION: &'static str = "retrieve runtime errors";

    type Params = GetRuntimeErrorsParams;

    fn request(params: &Self::Params) -> Result<ApiRequest, ToolError> {
        Ok(runtime_errors_request(&params.project_id)
            .param_opt("deploymentId", params.deployment_id.as_deref())
            .team(params.team_id.as_deref())
            .param_opt("since", params.since.as_deref())
            .param_opt("until", params.until.as_deref())
            .param("limit", params.limit)
            .param_opt("status", params.status)
            .param_opt("cursor", params.cursor.as_deref()))
    }

    fn render(params: &Self::Params, data: Value) -> Result<CallToolResult, ToolError> {
        Ok(success_result(
            format!("Successfully retrieved runtime errors for project {}", params.project_id),
            &data,
        ))
    }
}

/// Parameters for reading build errors of a deployment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetBuildErrorsParams {
    /// The deployment ID to get build errors for
    pub deployment_id: String,

    /// Team ID to scope the request
    pub team_id: Option<String>,

    /// Number of build errors to return (1-100, default: 20)
    #[serde(default = "default_report_limit")]
    #[schemars(range(min = 1, max = MAX_REPORT_LIMIT))]
    pub limit: u32,
}

impl Validate for GetBuildErrorsParams {
    fn validate(&self, v: &mut Violations) {
        v.not_blank("deploymentId", &self.deployment_id);
        v.range("limit", self.limit, 1, MAX_REPORT_LIMIT);
    }
}

/// Reads build errors of a deployment.
pub struct GetBuildErrorsTool;

impl EndpointTool for GetBuildErrorsTool {
    const NAME: &'static str = "vercel-get-build-errors";
    const DESCRIPTION: &'static str = "Get build errors for a specific deployment to debug build failures";
    const OPERATION: &'static str = "retrieve build errors";

    type Params = GetBuildErrorsParams;

    fn request(params: &Self::Params) -> Result<ApiRequest, ToolError> {
        Ok(
            ApiRequest::get(format!("v1/deployments/{}/build-errors", segment(&params.deployment_id)))
                .team(params.team_id.as_deref())
                .param("limit", params.limit),
        )
    }

    fn render(params: &Self::Params, data: Value) -> Result<CallToolResult, ToolError> {
        Ok(success_result(
            format!(
                "Successfully retrieved build errors for deployment {}",
                params.deployment_id
            ),
            &data,
        ))
    }
}
