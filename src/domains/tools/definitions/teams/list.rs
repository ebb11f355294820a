//! List teams tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domains::tools::definitions::common::list_result;
use crate::domains::tools::handlers::EndpointTool;
use crate::domains::tools::validation::{Validate, Violations};
use crate::domains::tools::ToolError;
use crate::vercel::ApiRequest;

/// Parameters for listing teams.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTeamsParams {
    /// Maximum number of teams to return
    pub limit: Option<u32>,

    /// Timestamp in milliseconds to get teams created after this time
    pub since: Option<u64>,

    /// Timestamp in milliseconds to get teams created before this time
    pub until: Option<u64>,

    /// Team ID to scope the request
    pub team_id: Option<String>,
}

impl Validate for ListTeamsParams {
    fn validate(&self, v: &mut Violations) {
        if let (Some(since), Some(until)) = (self.since, self.until) {
            if since > until {
                v.push("since", "must not be later than `until`");
            }
        }
    }
}

/// Lists the teams the token can see.
pub struct ListTeamsTool;

impl EndpointTool for ListTeamsTool {
    const NAME: &'static str = "vercel-list-all-teams";
    const DESCRIPTION: &'static str = "List all teams under the authenticated account";
    const OPERATION: &'static str = "list teams";

    type Params = ListTeamsParams;

    fn request(params: &Self::Params) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::get("v2/teams")
            .param_opt("limit", params.limit)
            .param_opt("since", params.since)
            .param_opt("until", params.until)
            .team(params.team_id.as_deref()))
    }

    fn render(_params: &Self::Params, data: Value) -> Result<CallToolResult, ToolError> {
        list_result(data, "teams", Self::OPERATION, |count| format!("Found {count} teams"))
    }
}
