//! Get deployment tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domains::tools::definitions::common::{str_field, success_result};
use crate::domains::tools::handlers::EndpointTool;
use crate::domains::tools::validation::{Validate, Violations};
use crate::domains::tools::ToolError;
use crate::vercel::{ApiRequest, segment};

/// Parameters for fetching a single deployment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetDeploymentParams {
    /// ID or URL of the deployment to retrieve
    pub id_or_url: String,

    /// Team ID to scope the request
    pub team_id: Option<String>,
}

impl Validate for GetDeploymentParams {
    fn validate(&self, v: &mut Violations) {
        v.not_blank("idOrUrl", &self.id_or_url);
    }
}

/// Fetches one deployment by ID or URL.
pub struct GetDeploymentTool;

impl EndpointTool for GetDeploymentTool {
    const NAME: &'static str = "vercel-get-deployment";
    const DESCRIPTION: &'static str = "Get a deployment by its ID or URL";
    const OPERATION: &'static str = "retrieve deployment";

    type Params = GetDeploymentParams;

    fn request(params: &Self::Params) -> Result<ApiRequest, ToolError> {
        Ok(deployment_request(&params.id_or_url, params.team_id.as_deref()))
    }

    fn render(params: &Self::Params, data: Value) -> Result<CallToolResult, ToolError> {
        let id = str_field(&data, "id")
            .or_else(|| str_field(&data, "uid"))
            .unwrap_or(&params.id_or_url);
        let summary = match str_field(&data, "readyState").or_else(|| str_field(&data, "state")) {
            Some(state) => format!("Deployment {id} is {state}"),
            None => format!("Retrieved deployment {id}"),
        };
        Ok(success_result(summary, &data))
    }
}

/// `GET v13/deployments/{idOrUrl}`, shared with the debugging tool.
pub fn deployment_request(id_or_url: &str, team_id: Option<&str>) -> ApiRequest {
    ApiRequest::get(format!("v13/deployments/{}", segment(id_or_url))).team(team_id)
}
