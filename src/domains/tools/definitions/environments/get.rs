//! Get environment variables tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domains::tools::definitions::common::{count_noun, list_result};
use crate::domains::tools::handlers::EndpointTool;
use crate::domains::tools::validation::{Validate, Violations};
use crate::domains::tools::ToolError;
use crate::vercel::{ApiRequest, segment};

/// Parameters for reading a project's environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetEnvironmentsParams {
    /// The unique project identifier or project name
    pub id_or_name: String,

    /// Team ID to scope the request
    pub team_id: Option<String>,
}

impl Validate for GetEnvironmentsParams {
    fn validate(&self, v: &mut Violations) {
        v.not_blank("idOrName", &self.id_or_name);
    }
}

/// Reads the environment variables of a project.
pub struct GetEnvironmentsTool;

impl EndpointTool for GetEnvironmentsTool {
    const NAME: &'static str = "vercel-get-environments";
    const DESCRIPTION: &'static str = "Retrieve environment variables for a project by ID or name";
    const OPERATION: &'static str = "retrieve environment variables";

    type Params = GetEnvironmentsParams;

    fn request(params: &Self::Params) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::get(format!("v10/projects/{}/env", segment(&params.id_or_name)))
            .team(params.team_id.as_deref()))
    }

    fn render(params: &Self::Params, data: Value) -> Result<CallToolResult, ToolError> {
        list_result(data, "envs", Self::OPERATION, |count| {
            format!(
                "Retrieving {} for project: {}",
                count_noun(count, "environment variable"),
                params.id_or_name
            )
        })
    }
}
