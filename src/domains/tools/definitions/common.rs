//! Common utilities shared across Vercel tools.
//!
//! Response formatting helpers plus the small enums several tools accept.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domains::tools::ToolError;

/// Pretty-print a JSON payload for a text content item.
pub fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Success envelope: summary line followed by the full payload.
pub fn success_result(summary: impl Into<String>, payload: &Value) -> CallToolResult {
    CallToolResult::success(vec![Content::text(summary.into()), Content::text(pretty(payload))])
}

/// Success envelope for list responses.
///
/// Extracts the array stored under `key`, reports its length through
/// `summary` and forwards only the array. A missing or non-array `key`
/// means the API did not return what the operation needs.
pub fn list_result(
    data: Value,
    key: &str,
    operation: &str,
    summary: impl FnOnce(usize) -> String,
) -> Result<CallToolResult, ToolError> {
    let Value::Object(mut map) = data else {
        return Err(ToolError::empty(operation));
    };
    match map.remove(key) {
        Some(items @ Value::Array(_)) => {
            let count = items.as_array().map_or(0, Vec::len);
            Ok(success_result(summary(count), &items))
        }
        _ => Err(ToolError::empty(operation)),
    }
}

/// "1 deployment", "3 deployments".
pub fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Read a string field from a response object.
pub fn str_field<'a>(data: &'a Value, key: &str) -> Option<&'a str> {
    data.get(key).and_then(Value::as_str)
}

/// Default page size for log queries.
pub fn default_log_limit() -> u32 {
    100
}

/// Default page size for drains and error reports.
pub fn default_report_limit() -> u32 {
    20
}

/// Largest page the log endpoints accept.
pub const MAX_LOG_LIMIT: u32 = 1000;

/// Largest page the drain and error report endpoints accept.
pub const MAX_REPORT_LIMIT: u32 = 100;

/// Log severity filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

/// Log origin filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LogSource {
    Runtime,
    Build,
    Function,
    EdgeFunction,
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Production,
    Preview,
    Development,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn text(result: &CallToolResult, index: usize) -> String {
        match &result.content[index].raw {
            RawContent::Text(text) => text.text.clone(),
            _ => panic!("expected text content"),
        }
    }

    #[test]
    fn test_success_result_has_summary_and_payload() {
        let result = success_result("Done", &json!({ "id": "x" }));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.content.len(), 2);
        assert_eq!(text(&result, 0), "Done");
        assert_eq!(text(&result, 1), "{\n  \"id\": \"x\"\n}");
    }

    #[test]
    fn test_list_result_counts_items() {
        let data = json!({ "teams": [{ "id": "a" }, { "id": "b" }], "pagination": {} });
        let result = list_result(data, "teams", "list teams", |n| format!("Found {n} teams")).unwrap();
        assert_eq!(text(&result, 0), "Found 2 teams");
        assert!(text(&result, 1).starts_with('['));
    }

    #[test]
    fn test_list_result_missing_key_is_empty_result() {
        let err = list_result(json!({ "error": "x" }), "teams", "list teams", |n| n.to_string())
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to list teams: no data returned");
    }

    #[test]
    fn test_count_noun() {
        assert_eq!(count_noun(1, "deployment"), "1 deployment");
        assert_eq!(count_noun(0, "deployment"), "0 deployments");
        assert_eq!(count_noun(7, "project"), "7 projects");
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_value(LogSource::EdgeFunction).unwrap(), json!("edge-function"));
        assert_eq!(serde_json::to_value(LogLevel::Warning).unwrap(), json!("warning"));
        assert_eq!(Target::default(), Target::Production);
    }
}
