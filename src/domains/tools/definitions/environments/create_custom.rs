//! Create custom environment tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::domains::tools::definitions::common::success_result;
use crate::domains::tools::handlers::EndpointTool;
use crate::domains::tools::validation::{Validate, Violations};
use crate::domains::tools::ToolError;
use crate::vercel::{ApiRequest, segment};

/// Names owned by the built-in environments.
const RESERVED_NAMES: [&str; 2] = ["production", "preview"];

/// Strategy used to match branches to the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum BranchMatchType {
    StartsWith,
    EndsWith,
    Contains,
    ExactMatch,
    Regex,
}

/// Branch matching configuration for the custom environment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BranchMatcher {
    /// Type of branch matching
    #[serde(rename = "type")]
    pub kind: BranchMatchType,

    /// Pattern to match branches against
    pub pattern: String,
}

/// Parameters for creating a custom environment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomEnvironmentParams {
    /// The unique project identifier or project name
    pub id_or_name: String,

    /// Name for the custom environment (cannot be 'Production' or 'Preview')
    pub name: String,

    /// Description of the custom environment
    pub description: Option<String>,

    /// Branch matching configuration for the custom environment
    pub branch_matcher: Option<BranchMatcher>,

    /// Team ID to perform the request on behalf of
    pub team_id: Option<String>,

    /// Team slug to perform the request on behalf of
    pub slug: Option<String>,
}

impl Validate for CreateCustomEnvironmentParams {
    fn validate(&self, v: &mut Violations) {
        v.not_blank("idOrName", &self.id_or_name);
        v.not_blank("name", &self.name);
        let lowered = self.name.trim().to_lowercase();
        if RESERVED_NAMES.contains(&lowered.as_str()) {
            v.push("name", format_args!("cannot be '{}', it is reserved", self.name.trim()));
        }
        if let Some(matcher) = &self.branch_matcher {
            v.not_blank("branchMatcher.pattern", &matcher.pattern);
        }
    }
}

/// Creates a custom environment on a project.
pub struct CreateCustomEnvironmentTool;

impl EndpointTool for CreateCustomEnvironmentTool {
    const NAME: &'static str = "vercel-create-custom-environment";
    const DESCRIPTION: &'static str =
        "Create a custom environment for a Vercel project. Note: Cannot be named 'Production' or 'Preview'";
    const OPERATION: &'static str = "create custom environment";

    type Params = CreateCustomEnvironmentParams;

    fn request(params: &Self::Params) -> Result<ApiRequest, ToolError> {
        let mut body = json!({ "slug": params.name });
        if let Some(description) = &params.description {
            body["description"] = json!(description);
        }
        if let Some(matcher) = &params.branch_matcher {
            body["branchMatcher"] = serde_json::to_value(matcher)?;
        }

        Ok(ApiRequest::post(format!(
            "v9/projects/{}/custom-environments",
            segment(&params.id_or_name)
        ))
        .team(params.team_id.as_deref())
        .param_opt("slug", params.slug.as_deref())
        .json(body))
    }

    fn render(params: &Self::Params, data: Value) -> Result<CallToolResult, ToolError> {
        Ok(success_result(
            format!(
                "Custom environment {} created for project {}",
                params.name, params.id_or_name
            ),
            &data,
        ))
    }
}
