//! List deployment files tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domains::tools::definitions::common::list_result;
use crate::domains::tools::handlers::EndpointTool;
use crate::domains::tools::validation::{Validate, Violations};
use crate::domains::tools::ToolError;
use crate::vercel::{ApiRequest, segment};

/// Parameters for listing the files of a deployment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListDeploymentFilesParams {
    /// The unique deployment identifier
    pub id: String,

    /// Team identifier to perform the request on behalf of
    pub team_id: Option<String>,

    /// Team slug to perform the request on behalf of
    pub slug: Option<String>,
}

impl Validate for ListDeploymentFilesParams {
    fn validate(&self, v: &mut Violations) {
        v.not_blank("id", &self.id);
    }
}

/// Lists the file tree of a deployment.
pub struct ListDeploymentFilesTool;

impl EndpointTool for ListDeploymentFilesTool {
    const NAME: &'static str = "vercel-list-deployment-files";
    const DESCRIPTION: &'static str = "List all files of a Vercel deployment";
    const OPERATION: &'static str = "retrieve deployment files";

    type Params = ListDeploymentFilesParams;

    fn request(params: &Self::Params) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::get(format!("v6/deployments/{}/files", segment(&params.id)))
            .team(params.team_id.as_deref())
            .param_opt("slug", params.slug.as_deref()))
    }

    fn render(params: &Self::Params, data: Value) -> Result<CallToolResult, ToolError> {
        list_result(data, "files", Self::OPERATION, |count| {
            format!("Found {count} files in deployment {}", params.id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::test_support::{args, client_for, payload, text};
    use crate::domains::tools::{Endpoint, ToolHandler};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_request_with_slug() {
        let params = ListDeploymentFilesParams {
            id: "dpl_1".to_string(),
            team_id: None,
            slug: Some("acme".to_string()),
        };
        let request = ListDeploymentFilesTool::request(&params).unwrap();
        assert_eq!(request.endpoint(), "v6/deployments/dpl_1/files?slug=acme");
    }

    #[tokio::test]
    async fn test_lists_files() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v6/deployments/dpl_1/files"))
            .and(query_param("teamId", "team_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "files": [
                    { "name": "index.html", "type": "file" },
                    { "name": "api", "type": "directory" }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = Endpoint::<ListDeploymentFilesTool>::new();
        let result = tool
            .call(&client_for(&server), args(json!({ "id": "dpl_1", "teamId": "team_1" })))
            .await
            .unwrap();
        assert_eq!(text(&result, 0), "Found 2 files in deployment dpl_1");
        assert_eq!(payload(&result)[0]["name"], "index.html");
    }

    #[tokio::test]
    async fn test_missing_files_key_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let tool = Endpoint::<ListDeploymentFilesTool>::new();
        let err = tool
            .call(&client_for(&server), args(json!({ "id": "dpl_1" })))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to retrieve deployment files: no data returned");
    }
}
