//! List deployments tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domains::tools::definitions::common::{count_noun, list_result};
use crate::domains::tools::handlers::EndpointTool;
use crate::domains::tools::validation::{Validate, Violations};
use crate::domains::tools::ToolError;
use crate::vercel::ApiRequest;

/// Page size used when the caller does not pass `limit`.
pub const DEFAULT_DEPLOYMENT_LIMIT: u32 = 50;

fn default_limit() -> u32 {
    DEFAULT_DEPLOYMENT_LIMIT
}

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for listing deployments.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListDeploymentsParams {
    /// Name of the deployment
    pub app: Option<String>,

    /// Number of deployments to return (default: 50)
    #[serde(default = "default_limit")]
    #[schemars(range(min = 1))]
    pub limit: u32,

    /// Filter deployments from the given project ID or name
    pub project_id: Option<String>,

    /// Filter deployments based on their state (BUILDING, ERROR, INITIALIZING, QUEUED, READY, CANCELED). Ex: 'BUILDING,READY'
    pub state: Option<String>,

    /// Filter deployments based on the environment. Ex: 'production'
    pub target: Option<String>,

    /// Team ID to scope the request
    pub team_id: Option<String>,
}

impl Validate for ListDeploymentsParams {
    fn validate(&self, v: &mut Violations) {
        v.at_least("limit", self.limit, 1);
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Lists deployments of the authenticated user or team.
pub struct ListDeploymentsTool;

impl EndpointTool for ListDeploymentsTool {
    const NAME: &'static str = "vercel-list-all-deployments";
    const DESCRIPTION: &'static str = "List deployments under the authenticated user or team.";
    const OPERATION: &'static str = "retrieve deployments";

    type Params = ListDeploymentsParams;

    fn request(params: &Self::Params) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::get("v6/deployments")
            .param("limit", params.limit)
            .param_opt("app", params.app.as_deref())
            .param_opt("projectId", params.project_id.as_deref())
            .param_opt("state", params.state.as_deref())
            .param_opt("target", params.target.as_deref())
            .team(params.team_id.as_deref()))
    }

    fn render(_params: &Self::Params, data: Value) -> Result<CallToolResult, ToolError> {
        list_result(data, "deployments", Self::OPERATION, |count| {
            if count == 0 {
                "No deployments found".to_string()
            } else {
                format!("Found {}", count_noun(count, "deployment"))
            }
        })
    }
}
