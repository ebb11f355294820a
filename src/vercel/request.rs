//! Request description passed from tool handlers to the client.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

/// A single call against the Vercel REST API.
///
/// The path is relative to the configured base URL (`v13/deployments/...`)
/// and must already contain encoded path parameters, see [`segment`].
/// Query parameters are only recorded when they carry a value.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
    headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Append a query parameter. `null` values are skipped.
    pub fn param(mut self, key: &str, value: impl Serialize) -> Self {
        if let Some(value) = scalar(value) {
            self.query.push((key.to_string(), value));
        }
        self
    }

    /// Append a query parameter only when present.
    pub fn param_opt<V: Serialize>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Scope the request to a team when one is given.
    pub fn team(self, team_id: Option<&str>) -> Self {
        self.param_opt("teamId", team_id)
    }

    /// Attach a JSON body.
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add an extra header; it overrides client defaults of the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Path plus encoded query string, e.g. `v6/deployments?limit=50`.
    pub fn endpoint(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = serde_urlencoded::to_string(&self.query).unwrap_or_default();
        format!("{}?{}", self.path, query)
    }
}

/// Percent-encode a value for use as a single path segment.
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Render a serializable scalar the way it should appear in a query string.
fn scalar(value: impl Serialize) -> Option<String> {
    match serde_json::to_value(value).ok()? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    #[serde(rename_all = "kebab-case")]
    enum Source {
        EdgeFunction,
    }

    #[test]
    fn test_endpoint_without_query() {
        let req = ApiRequest::get("v13/deployments/dpl_123");
        assert_eq!(req.endpoint(), "v13/deployments/dpl_123");
        assert_eq!(req.method(), &Method::GET);
    }

    #[test]
    fn test_param_opt_skips_absent_values() {
        let req = ApiRequest::get("v6/deployments")
            .param("limit", 50)
            .param_opt("app", None::<&str>)
            .param_opt("target", Some("production"))
            .team(None);
        assert_eq!(req.endpoint(), "v6/deployments?limit=50&target=production");
    }

    #[test]
    fn test_param_renders_enums_and_bools() {
        let req = ApiRequest::get("v1/logs")
            .param("source", Source::EdgeFunction)
            .param("public", true);
        assert_eq!(req.endpoint(), "v1/logs?source=edge-function&public=true");
    }

    #[test]
    fn test_query_values_are_encoded() {
        let req = ApiRequest::get("v1/search").param("q", "status:500 & timeout");
        assert_eq!(req.endpoint(), "v1/search?q=status%3A500+%26+timeout");
    }

    #[test]
    fn test_segment_encodes_reserved_characters() {
        assert_eq!(segment("dpl_123"), "dpl_123");
        assert_eq!(
            segment("my-app.vercel.app/path?x"),
            "my-app.vercel.app%2Fpath%3Fx"
        );
    }

    #[test]
    fn test_json_body_and_headers() {
        let req = ApiRequest::post("v1/teams")
            .json(json!({ "slug": "acme" }))
            .header("x-vercel-trace", "1");
        assert_eq!(req.body(), Some(&json!({ "slug": "acme" })));
        assert_eq!(req.headers().len(), 1);
    }
}
