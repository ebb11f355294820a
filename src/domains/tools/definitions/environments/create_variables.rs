//! Create environment variables tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domains::tools::definitions::common::{Target, success_result};
use crate::domains::tools::handlers::EndpointTool;
use crate::domains::tools::validation::{Validate, Violations};
use crate::domains::tools::ToolError;
use crate::vercel::{ApiRequest, segment};

/// How Vercel stores a variable's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnvType {
    System,
    Encrypted,
    Plain,
    Sensitive,
}

/// One variable to create.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentVariable {
    /// Environment variable key name
    pub key: String,

    /// Environment variable value
    pub value: String,

    /// Target environments for this variable
    pub target: Vec<Target>,

    /// Type of environment variable
    #[serde(rename = "type")]
    pub kind: EnvType,

    /// Git branch to apply this variable to (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_branch: Option<String>,
}

/// Parameters for creating environment variables in bulk.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnvironmentVariablesParams {
    /// Project ID to create environment variables for
    pub project_id: String,

    /// Team ID for scoping
    pub team_id: Option<String>,

    /// Array of environment variables to create
    pub environment_variables: Vec<EnvironmentVariable>,
}

impl Validate for CreateEnvironmentVariablesParams {
    fn validate(&self, v: &mut Violations) {
        v.not_blank("projectId", &self.project_id);
        if self.environment_variables.is_empty() {
            v.push("environmentVariables", "must contain at least one variable");
        }
        for (i, var) in self.environment_variables.iter().enumerate() {
            v.not_blank(&format!("environmentVariables[{i}].key"), &var.key);
            if var.target.is_empty() {
                v.push(
                    &format!("environmentVariables[{i}].target"),
                    "must name at least one environment",
                );
            }
        }
    }
}

/// Creates several environment variables in one request.
pub struct CreateEnvironmentVariablesTool;

impl EndpointTool for CreateEnvironmentVariablesTool {
    const NAME: &'static str = "vercel-create-environment-variables";
    const DESCRIPTION: &'static str = "Create environment variables for a Vercel project";
    const OPERATION: &'static str = "create environment variables";

    type Params = CreateEnvironmentVariablesParams;

    fn request(params: &Self::Params) -> Result<ApiRequest, ToolError> {
        let body = serde_json::to_value(&params.environment_variables)?;
        Ok(ApiRequest::post(format!("v10/projects/{}/env", segment(&params.project_id)))
            .team(params.team_id.as_deref())
            .json(body))
    }

    fn render(params: &Self::Params, data: Value) -> Result<CallToolResult, ToolError> {
        let created = match data.get("created") {
            Some(Value::Array(items)) => items.len(),
            Some(Value::Object(_)) => 1,
            _ => params.environment_variables.len(),
        };
        Ok(success_result(
            format!("Successfully created {created} environment variables"),
            &data,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::test_support::{args, client_for, text};
    use crate::domains::tools::validation::parse_arguments;
    use crate::domains::tools::{Endpoint, ToolHandler};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_body_is_exactly_the_array() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v10/projects/p1/env"))
            .and(body_json(json!([
                { "key": "K", "value": "V", "target": ["production"], "type": "plain" }
            ])))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "created": [{ "key": "K" }],
                "failed": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = Endpoint::<CreateEnvironmentVariablesTool>::new();
        let result = tool
            .call(
                &client_for(&server),
                args(json!({
                    "projectId": "p1",
                    "environmentVariables": [
                        { "key": "K", "value": "V", "target": ["production"], "type": "plain" }
                    ]
                })),
            )
            .await
            .unwrap();
        assert_eq!(text(&result, 0), "Successfully created 1 environment variables");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let err = parse_arguments::<CreateEnvironmentVariablesParams>(args(json!({
            "projectId": "p1",
            "environmentVariables": [
                { "key": "K", "value": "V", "target": ["production"], "type": "secret" }
            ]
        })))
        .unwrap_err();
        assert!(err.to_string().contains("secret"));
    }

    #[test]
    fn test_empty_target_and_list_rejected() {
        let err = parse_arguments::<CreateEnvironmentVariablesParams>(args(json!({
            "projectId": "p1",
            "environmentVariables": [
                { "key": "K", "value": "V", "target": [], "type": "plain" }
            ]
        })))
        .unwrap_err();
        assert!(err.to_string().contains("environmentVariables[0].target"));

        let err = parse_arguments::<CreateEnvironmentVariablesParams>(args(json!({
            "projectId": "p1",
            "environmentVariables": []
        })))
        .unwrap_err();
        assert!(err.to_string().contains("at least one variable"));
    }

    #[test]
    fn test_team_is_query_parameter() {
        let params: CreateEnvironmentVariablesParams = parse_arguments(args(json!({
            "projectId": "p1",
            "teamId": "t1",
            "environmentVariables": [
                { "key": "K", "value": "V", "target": ["preview", "development"], "type": "encrypted", "gitBranch": "dev" }
            ]
        })))
        .unwrap();
        let request = CreateEnvironmentVariablesTool::request(&params).unwrap();
        assert_eq!(request.endpoint(), "v10/projects/p1/env?teamId=t1");
        assert_eq!(request.body().unwrap()[0]["gitBranch"], "dev");
    }
}
