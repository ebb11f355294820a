//! Create deployment tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domains::tools::definitions::common::{Target, str_field, success_result};
use crate::domains::tools::handlers::EndpointTool;
use crate::domains::tools::validation::{Validate, Violations};
use crate::domains::tools::ToolError;
use crate::vercel::ApiRequest;

// ============================================================================
// Nested Types
// ============================================================================

/// Git provider of a deployment source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum GitProvider {
    Github,
    Gitlab,
    Bitbucket,
}

/// Repository identifier, numeric or textual depending on the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RepoId {
    Number(u64),
    Text(String),
}

/// Git source information.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GitSource {
    /// Git provider type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub provider: Option<GitProvider>,

    /// Repository ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_id: Option<RepoId>,

    /// Git reference (branch/tag)
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,

    /// Git commit SHA
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

/// Git metadata for the deployment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GitMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_sha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,
    /// Indicates if the working directory has uncommitted changes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dirty: Option<bool>,
}

/// Project-specific build settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_directory: Option<String>,
    /// Framework preset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serverless_function_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_git_connect_during_link: Option<bool>,
}

/// Encoding of an inline file's `data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum FileEncoding {
    #[serde(rename = "base64")]
    Base64,
    #[serde(rename = "utf-8")]
    Utf8,
}

/// A file uploaded inline for non-git deployments.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DeploymentFile {
    /// File path
    pub file: String,

    /// File content
    pub data: String,

    /// File content encoding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<FileEncoding>,
}

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for creating a deployment.
///
/// Everything except `teamId` is forwarded as the request body, with absent
/// fields left out.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeploymentParams {
    /// Name of the deployment/project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Project ID or name (required unless deploymentId is provided)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// ID of a previous deployment to redeploy (required unless project is provided)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_id: Option<String>,

    /// A unique URL-friendly identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Team ID for scoping
    #[serde(skip_serializing)]
    pub team_id: Option<String>,

    /// Custom environment slug or ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_environment_slug_or_id: Option<String>,

    /// Deployment target environment (default: production)
    #[serde(default)]
    pub target: Target,

    /// Regions to deploy to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,

    /// Serverless functions configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub functions: Option<Map<String, Value>>,

    /// Array of route definitions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<Value>>,

    /// Enable or disable Clean URLs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean_urls: Option<bool>,

    /// Enable or disable trailing slashes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_slash: Option<bool>,

    /// Make the deployment public
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,

    /// Command to check whether files should be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_command: Option<String>,

    /// Git source information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_source: Option<GitSource>,

    /// Git metadata for the deployment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_metadata: Option<GitMetadata>,

    /// Project-specific settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_settings: Option<ProjectSettings>,

    /// Additional metadata for the deployment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,

    /// Monorepo manager (e.g., turborepo, nx)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monorepo_manager: Option<String>,

    /// Files to deploy (for non-git deployments)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<DeploymentFile>>,

    /// Force new deployment even if identical exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_new: Option<bool>,

    /// Enable or disable build cache
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_cache: Option<bool>,

    /// Automatically assign custom domains to the deployment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_assign_custom_domains: Option<bool>,

    /// Include the latest commit in the deployment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_latest_commit: Option<bool>,
}

impl Validate for CreateDeploymentParams {
    fn validate(&self, v: &mut Violations) {
        let present = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.trim().is_empty());
        let redeploy = present(&self.deployment_id);
        let fresh = present(&self.name) && present(&self.project);
        if !redeploy && !fresh {
            v.push(
                "deploymentId",
                "is required unless both `name` and `project` are provided",
            );
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Creates a deployment, either fresh from a project or as a redeploy.
pub struct CreateDeploymentTool;

impl EndpointTool for CreateDeploymentTool {
    const NAME: &'static str = "vercel-create-deployment";
    const DESCRIPTION: &'static str = "Create a new Vercel deployment with the v13/deployments API";
    const OPERATION: &'static str = "create deployment";

    type Params = CreateDeploymentParams;

    fn request(params: &Self::Params) -> Result<ApiRequest, ToolError> {
        let body = serde_json::to_value(params)?;
        Ok(ApiRequest::post("v13/deployments")
            .team(params.team_id.as_deref())
            .json(body))
    }

    fn render(_params: &Self::Params, data: Value) -> Result<CallToolResult, ToolError> {
        let url = str_field(&data, "url").unwrap_or("<no url>");
        Ok(success_result(format!("Deployment created successfully: {url}"), &data))
    }
}
