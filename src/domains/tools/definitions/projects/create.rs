//! Create project tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domains::tools::definitions::common::{str_field, success_result};
use crate::domains::tools::handlers::EndpointTool;
use crate::domains::tools::validation::{Validate, Violations};
use crate::domains::tools::ToolError;
use crate::vercel::ApiRequest;

/// Parameters for creating a project. All but `teamId` form the body.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectParams {
    /// Name of the project
    pub name: String,

    /// Framework preset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,

    /// Custom build command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_command: Option<String>,

    /// Custom development command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_command: Option<String>,

    /// Custom install command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_command: Option<String>,

    /// Directory of build output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_directory: Option<String>,

    /// Make the project source public
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_source: Option<bool>,

    /// Directory where the project is located
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_directory: Option<String>,

    /// Region for serverless functions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serverless_function_region: Option<String>,

    /// Skip Git connection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_git_connect_during_link: Option<bool>,

    /// Team ID for scoping
    #[serde(skip_serializing)]
    pub team_id: Option<String>,
}

impl Validate for CreateProjectParams {
    fn validate(&self, v: &mut Violations) {
        v.not_blank("name", &self.name);
    }
}

/// Creates a new project.
pub struct CreateProjectTool;

impl EndpointTool for CreateProjectTool {
    const NAME: &'static str = "vercel-create-project";
    const DESCRIPTION: &'static str = "Create a new Vercel project";
    const OPERATION: &'static str = "create project";

    type Params = CreateProjectParams;

    fn request(params: &Self::Params) -> Result<ApiRequest, ToolError> {
        let body = serde_json::to_value(params)?;
        Ok(ApiRequest::post("v11/projects")
            .team(params.team_id.as_deref())
            .json(body))
    }

    fn render(params: &Self::Params, data: Value) -> Result<CallToolResult, ToolError> {
        let name = str_field(&data, "name").unwrap_or(&params.name);
        let id = str_field(&data, "id").unwrap_or("unknown id");
        Ok(success_result(format!("Project {name} ({id}) created successfully"), &data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::test_support::{args, client_for, text};
    use crate::domains::tools::validation::parse_arguments;
    use crate::domains::tools::{Endpoint, ToolHandler};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_blank_name_rejected() {
        let err = parse_arguments::<CreateProjectParams>(args(json!({ "name": "  " }))).unwrap_err();
        assert!(err.to_string().contains("`name` must not be empty"));
    }

    #[tokio::test]
    async fn test_create_project() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v11/projects"))
            .and(query_param("teamId", "team_1"))
            .and(body_json(json!({ "name": "shop", "framework": "nextjs" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "prj_9",
                "name": "shop"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = Endpoint::<CreateProjectTool>::new();
        let result = tool
            .call(
                &client_for(&server),
                args(json!({ "name": "shop", "framework": "nextjs", "teamId": "team_1" })),
            )
            .await
            .unwrap();
        assert_eq!(text(&result, 0), "Project shop (prj_9) created successfully");
    }
}
