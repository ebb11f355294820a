//! Log drain tool definitions.

use std::collections::BTreeMap;

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
use crate::vercel::ApiRequest;

// ============================================================================
// Get Log Drains
// ============================================================================

/// Parameters for listing log drains.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetLogDrainsParams {
    /// Filter by project ID
    pub project_id: Option<String>,

    /// Team ID to scope the request
    pub team_id: Option<String>,

    /// Number of log drains to return (1-100, default: 20)
    #[serde(default = "default_report_limit")]
    #[schemars(range(min = 1, max = MAX_REPORT_LIMIT))]
    pub limit: u32,

    /// Pagination cursor
    pub cursor: Option<String>,
}

impl Validate for GetLogDrainsParams {
    fn validate(&self, v: &mut Violations) {
        v.range("limit", self.limit, 1, MAX_REPORT_LIMIT);
    }
}

/// Lists configured log drains.
pub struct GetLogDrainsTool;

impl EndpointTool for GetLogDrainsTool {
    const NAME: &'static str = "vercel-get-log-drains";
    const DESCRIPTION: &'static str = "Get configured log drains for projects or teams";
    const OPERATION: &'static str = "retrieve log drains";

    type Params = GetLogDrainsParams;

    fn request(params: &Self::Params) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::get("v1/log-drains")
            .param_opt("projectId", params.project_id.as_deref())
            .team(params.team_id.as_deref())
            .param("limit", params.limit)
            .param_opt("cursor", params.cursor.as_deref()))
    }

    fn render(_params: &Self::Params, data: Value) -> Result<CallToolResult, ToolError> {
        Ok(success_result("Successfully retrieved log drains", &data))
    }
}

// ============================================================================
// Create Log Drain
// ============================================================================

/// Wire format of delivered logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DrainFormat {
    #[default]
    Json,
    Ndjson,
    Syslog,
}

/// Log source forwarded by a drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DrainSource {
    Static,
    Build,
    Function,
    EdgeFunction,
}

fn default_sources() -> Vec<DrainSource> {
    vec![
        DrainSource::Static,
        DrainSource::Build,
        DrainSource::Function,
        DrainSource::EdgeFunction,
    ]
}

/// Parameters for creating a log drain. All but `teamId` form the body.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLogDrainParams {
    /// Name for the log drain
    pub name: String,

    /// Destination URL for log delivery
    pub url: String,

    /// Project ID to associate with (optional for team-level drains)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Team ID to scope the request
    #[serde(skip_serializing)]
    pub team_id: Option<String>,

    /// Additional headers to send with logs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,

    /// Log format (default: json)
    #[serde(default)]
    pub format: DrainFormat,

    /// Log sources to include (default: all)
    #[serde(default = "default_sources")]
    pub sources: Vec<DrainSource>,
}

impl Validate for CreateLogDrainParams {
    fn validate(&self, v: &mut Violations) {
        v.not_blank("name", &self.name);
        match reqwest::Url::parse(&self.url) {
            Ok(url) if url.has_host() => {}
            Ok(_) => v.push("url", "must include a host"),
            Err(e) => v.push("url", format_args!("is not a valid URL: {e}")),
        }
    }
}

/// Creates a log drain forwarding logs to an external endpoint.
pub struct CreateLogDrainTool;

impl EndpointTool for CreateLogDrainTool {
    const NAME: &'static str = "vercel-create-log-drain";
    const DESCRIPTION: &'static str = "Create a new log drain to send logs to external services";
    const OPERATION: &'static str = "create log drain";

    type Params = CreateLogDrainParams;

    fn request(params: &Self::Params) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::post("v1/log-drains")
            .team(params.team_id.as_deref())
            .json(serde_json::to_value(params)?))
    }

    fn render(params: &Self::Params, data: Value) -> Result<CallToolResult, ToolError> {
        Ok(success_result(
            format!("Successfully created log drain: {}", params.name),
            &data,
        ))
    }
}
