//! List projects tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domains::tools::definitions::common::{count_noun, list_result};
use crate::domains::tools::handlers::EndpointTool;
use crate::domains::tools::validation::{Validate, Violations};
use crate::domains::tools::ToolError;
use crate::vercel::ApiRequest;

/// Whether pull requests from forks need authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum GitForkProtection {
    #[serde(rename = "0")]
    Disabled,
    #[serde(rename = "1")]
    Enabled,
}

/// Parameters for listing projects.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectsParams {
    /// Maximum number of projects to return
    #[schemars(range(min = 1))]
    pub limit: Option<u32>,

    /// Projects created/updated after this timestamp
    pub from: Option<u64>,

    /// Team ID for request scoping
    pub team_id: Option<String>,

    /// Search projects by name
    pub search: Option<String>,

    /// Filter by repository URL
    pub repo_url: Option<String>,

    /// Specify PR authorization from forks (0/1)
    pub git_fork_protection: Option<GitForkProtection>,
}

impl Validate for ListProjectsParams {
    fn validate(&self, v: &mut Violations) {
        if let Some(limit) = self.limit {
            v.at_least("limit", limit, 1);
        }
    }
}

/// Lists projects of the authenticated user or team.
pub struct ListProjectsTool;

impl EndpointTool for ListProjectsTool {
    const NAME: &'static str = "vercel-list-projects";
    const DESCRIPTION: &'static str = "List all projects under the authenticated user or team";
    const OPERATION: &'static str = "list projects";

    type Params = ListProjectsParams;

    fn request(params: &Self::Params) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::get("v9/projects")
            .param_opt("limit", params.limit)
            .param_opt("from", params.from)
            .team(params.team_id.as_deref())
            .param_opt("search", params.search.as_deref())
            .param_opt("repoUrl", params.repo_url.as_deref())
            .param_opt("gitForkProtection", params.git_fork_protection))
    }

    fn render(_params: &Self::Params, data: Value) -> Result<CallToolResult, ToolError> {
        list_result(data, "projects", Self::OPERATION, |count| {
            format!("Found {}", count_noun(count, "project"))
        })
    }
}
