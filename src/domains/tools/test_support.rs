//! Helpers for tool tests.

use rmcp::model::{CallToolResult, JsonObject, RawContent};
use serde_json::Value;
use wiremock::MockServer;

use crate::core::config::ApiConfig;
use crate::vercel::VercelClient;

pub const TEST_TOKEN: &str = "test-token";

/// Client pointed at a mock server, bypassing any system proxy.
pub fn client_for(server: &MockServer) -> VercelClient {
    let config = ApiConfig {
        token: TEST_TOKEN.to_string(),
        base_url: server.uri(),
        timeout_secs: 5,
    };
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    VercelClient::new(&config).unwrap().with_http_client(http)
}

/// Turn a JSON object literal into call arguments.
pub fn args(value: Value) -> Option<JsonObject> {
    match value {
        Value::Object(map) => Some(map),
        other => panic!("arguments must be an object, got {other}"),
    }
}

/// Text of the content item at `index`.
pub fn text(result: &CallToolResult, index: usize) -> String {
    match &result.content[index].raw {
        RawContent::Text(text) => text.text.clone(),
        _ => panic!("expected text content at index {index}"),
    }
}

/// The pretty-printed JSON payload (second content item) parsed back.
pub fn payload(result: &CallToolResult) -> Value {
    serde_json::from_str(&text(result, 1)).unwrap()
}
