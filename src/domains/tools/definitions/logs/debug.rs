//! Deployment debugging report.
//!
//! Unlike the other tools this one issues several requests and never fails
//! because one of them did: every failed or skipped sub-fetch is recorded as
//! an investigation in the report instead.

use chrono::{SecondsFormat, Utc};
use futures::future::OptionFuture;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::deployment::deployment_events_request;
use super::errors::runtime_errors_request;
use super::project::project_logs_request;
use crate::domains::tools::definitions::common::{str_field, success_result};
use crate::domains::tools::definitions::deployments::get::deployment_request;
use crate::domains::tools::handlers::{ToolHandler, descriptor};
use crate::domains::tools::validation::{Validate, Violations, parse_arguments};
use crate::domains::tools::ToolError;
use crate::vercel::{ApiRequest, VercelClient};

fn enabled() -> bool {
    true
}

/// Parameters for a debugging report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DebugDeploymentParams {
    /// The deployment ID to debug
    pub deployment_id: String,

    /// Team ID to scope the request
    pub team_id: Option<String>,

    /// Include system/infrastructure logs (default: true)
    #[serde(default = "enabled")]
    pub include_system_logs: bool,

    /// Include application runtime logs (default: true)
    #[serde(default = "enabled")]
    pub include_application_logs: bool,

    /// Include build process logs (default: true)
    #[serde(default = "enabled")]
    pub include_build_logs: bool,

    /// ISO timestamp to start investigation from
    pub since: Option<String>,
}

impl Validate for DebugDeploymentParams {
    fn validate(&self, v: &mut Violations) {
        v.not_blank("deploymentId", &self.deployment_id);
    }
}

/// A sub-fetch that failed or could not be attempted.
#[derive(Debug, Clone, Serialize)]
pub struct Investigation {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub error: String,
}

/// Aggregate payload of the debugging report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugReport {
    pub deployment_id: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_logs: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_logs: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_logs: Option<Value>,
    pub investigations: Vec<Investigation>,
}

impl DebugReport {
    fn new(deployment_id: &str) -> Self {
        Self {
            deployment_id: deployment_id.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            deployment: None,
            build_logs: None,
            application_logs: None,
            system_logs: None,
            investigations: Vec::new(),
        }
    }

    /// Keep a successful sub-fetch, record a failed one.
    fn settle(
        &mut self,
        kind: &'static str,
        label: &str,
        outcome: Option<Result<Value, String>>,
    ) -> Option<Value> {
        match outcome? {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(kind, "Debug sub-fetch failed: {}", error);
                self.investigations.push(Investigation {
                    kind,
                    error: format!("Failed to get {label}: {error}"),
                });
                None
            }
        }
    }
}

/// Builds a combined debugging report for a deployment.
pub struct DebugDeploymentTool;

impl DebugDeploymentTool {
    pub const NAME: &'static str = "vercel-debug-deployment";
    pub const DESCRIPTION: &'static str =
        "Comprehensive deployment debugging - aggregates logs, errors, and deployment info";

    /// Collect the report. Sub-fetch failures end up in `investigations`.
    pub async fn investigate(
        client: &VercelClient,
        params: &DebugDeploymentParams,
    ) -> DebugReport {
        let id = params.deployment_id.as_str();
        let team = params.team_id.as_deref();
        let mut report = DebugReport::new(id);

        // Project-scoped fetches need the project id from the deployment.
        let details = fetch(client, deployment_request(id, team)).await;
        report.deployment = report.settle("deployment_details", "deployment details", Some(details));
        let project_id = report
            .deployment
            .as_ref()
            .and_then(|d| str_field(d, "projectId"))
            .map(str::to_string);

        let build = OptionFuture::from(
            params
                .include_build_logs
                .then(|| fetch(client, deployment_events_request(id, team))),
        );

        let application = OptionFuture::from(params.include_application_logs.then(|| {
            let request = project_id
                .as_deref()
                .map(|project| scoped(project_logs_request(project), params));
            fetch_for_project(client, request)
        }));

        let system = OptionFuture::from(params.include_system_logs.then(|| {
            let request = project_id
                .as_deref()
                .map(|project| scoped(runtime_errors_request(project), params));
            fetch_for_project(client, request)
        }));

        let (build, application, system) = futures::join!(build, application, system);

        report.build_logs = report.settle("build_logs", "build logs", build);
        report.application_logs = report.settle("application_logs", "application logs", application);
        report.system_logs = report.settle("system_logs", "system logs", system);
        report
    }
}

/// Filter a project-level request down to the debugged deployment.
fn scoped(request: ApiRequest, params: &DebugDeploymentParams) -> ApiRequest {
    request
        .param("deploymentId", params.deployment_id.as_str())
        .team(params.team_id.as_deref())
        .param_opt("since", params.since.as_deref())
}

async fn fetch(client: &VercelClient, request: ApiRequest) -> Result<Value, String> {
    debug!("Debug sub-fetch {}", request.endpoint());
    match client.send_json(&request).await {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Err("no data returned".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

async fn fetch_for_project(
    client: &VercelClient,
    request: Option<ApiRequest>,
) -> Result<Value, String> {
    match request {
        Some(request) => fetch(client, request).await,
        None => Err("project id unknown, deployment details unavailable".to_string()),
    }
}

#[async_trait::async_trait]
impl ToolHandler for DebugDeploymentTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn descriptor(&self) -> Tool {
        descriptor::<DebugDeploymentParams>(Self::NAME, Self::DESCRIPTION)
    }

    async fn call(
        &self,
        client: &VercelClient,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let params: DebugDeploymentParams = parse_arguments(arguments)?;
        info!(tool = Self::NAME, deployment_id = %params.deployment_id, "Debugging deployment");

        let report = Self::investigate(client, &params).await;
        let payload = serde_json::to_value(&report)?;
        Ok(success_result(
            format!("Comprehensive debugging report for deployment {}", params.deployment_id),
            &payload,
        ))
    }
}
