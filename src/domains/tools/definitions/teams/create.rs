//! Create team tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domains::tools::definitions::common::{str_field, success_result};
use crate::domains::tools::handlers::EndpointTool;
use crate::domains::tools::validation::{Validate, Violations};
use crate::domains::tools::ToolError;
use crate::vercel::ApiRequest;

/// Parameters for creating a team. Sent as the request body unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateTeamParams {
    /// A unique identifier for the team
    pub slug: String,

    /// A display name for the team
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Validate for CreateTeamParams {
    fn validate(&self, v: &mut Violations) {
        v.not_blank("slug", &self.slug);
    }
}

/// Creates a team.
pub struct CreateTeamTool;

impl EndpointTool for CreateTeamTool {
    const NAME: &'static str = "vercel-create-team";
    const DESCRIPTION: &'static str = "Create a new Vercel team";
    const OPERATION: &'static str = "create team";

    type Params = CreateTeamParams;

    fn request(params: &Self::Params) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::post("v1/teams").json(serde_json::to_value(params)?))
    }

    fn render(params: &Self::Params, data: Value) -> Result<CallToolResult, ToolError> {
        let id = str_field(&data, "id").unwrap_or("unknown id");
        Ok(success_result(
            format!("Team {} ({id}) created successfully", params.slug),
            &data,
        ))
    }
}
