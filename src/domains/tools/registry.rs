//! Tool Registry - the fixed set of tools this server exposes.
//!
//! Built once at startup and never mutated. The order of registration is the
//! order clients see in `tools/list`.

use std::sync::Arc;

use rmcp::model::Tool;

use super::definitions::{
    CreateCustomEnvironmentTool, CreateDeploymentTool, CreateEnvironmentVariablesTool,
    CreateLogDrainTool, CreateProjectTool, CreateTeamTool, DebugDeploymentTool,
    GetBuildErrorsTool, GetDeploymentLogsTool, GetDeploymentTool, GetEnvironmentsTool,
    GetFunctionLogsTool, GetLogDrainsTool, GetProjectLogsTool, GetRuntimeErrorsTool,
    ListDeploymentFilesTool, ListDeploymentsTool, ListProjectsTool, ListTeamsTool,
    SearchLogsTool,
};
use super::handlers::{Endpoint, ToolHandler};

// ============================================================================
// Tool Registry
// ============================================================================

/// Ordered collection of every available tool.
pub struct ToolRegistry {
    handlers: Vec<Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    /// Create the registry with all Vercel tools.
    pub fn new() -> Self {
        Self::from_handlers(vec![
            Arc::new(Endpoint::<ListDeploymentsTool>::new()),
            Arc::new(Endpoint::<GetEnvironmentsTool>::new()),
            Arc::new(Endpoint::<GetDeploymentTool>::new()),
            Arc::new(Endpoint::<ListDeploymentFilesTool>::new()),
            Arc::new(Endpoint::<CreateDeploymentTool>::new()),
            Arc::new(Endpoint::<CreateProjectTool>::new()),
            Arc::new(Endpoint::<ListTeamsTool>::new()),
            Arc::new(Endpoint::<CreateTeamTool>::new()),
            Arc::new(Endpoint::<CreateEnvironmentVariablesTool>::new()),
            Arc::new(Endpoint::<CreateCustomEnvironmentTool>::new()),
            Arc::new(Endpoint::<ListProjectsTool>::new()),
            Arc::new(Endpoint::<GetProjectLogsTool>::new()),
            Arc::new(Endpoint::<GetDeploymentLogsTool>::new()),
            Arc::new(Endpoint::<GetFunctionLogsTool>::new()),
            Arc::new(Endpoint::<SearchLogsTool>::new()),
            Arc::new(Endpoint::<GetLogDrainsTool>::new()),
            Arc::new(Endpoint::<CreateLogDrainTool>::new()),
            Arc::new(Endpoint::<GetRuntimeErrorsTool>::new()),
            Arc::new(Endpoint::<GetBuildErrorsTool>::new()),
            Arc::new(DebugDeploymentTool),
        ])
    }

    /// Create a registry from an explicit handler list.
    pub fn from_handlers(handlers: Vec<Arc<dyn ToolHandler>>) -> Self {
        Self { handlers }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools. Every
    /// transport lists tools through it.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.handlers.iter().map(|h| h.descriptor()).collect()
    }

    /// Look up a handler by tool name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ToolHandler>> {
        self.handlers.iter().find(|h| h.name() == name).cloned()
    }

    /// Number of registered tools.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new();
        let names = registry.tool_names();
        assert_eq!(names.len(), 20);
        assert_eq!(names[0], "vercel-list-all-deployments");
        assert_eq!(names[19], "vercel-debug-deployment");
        assert!(names.contains(&"vercel-create-environment-variables"));
        assert!(names.contains(&"vercel-search-logs"));
        assert!(!names.contains(&"vercel-test-debug"));
    }

    #[test]
    fn test_names_are_unique_and_prefixed() {
        let registry = ToolRegistry::new();
        let names = registry.tool_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
        assert!(names.iter().all(|n| n.starts_with("vercel-")));
    }

    #[test]
    fn test_descriptors_are_complete() {
        for tool in ToolRegistry::new().list_tools() {
            assert!(!tool.name.is_empty());
            assert!(tool.description.as_deref().is_some_and(|d| !d.is_empty()), "{}", tool.name);
            assert_eq!(
                tool.input_schema.get("type").and_then(|t| t.as_str()),
                Some("object"),
                "{} schema is not an object",
                tool.name
            );
        }
    }

    #[test]
    fn test_limit_bounds_are_published() {
        let tools = ToolRegistry::new().list_tools();
        let limit_schema = |name: &str| {
            let tool = tools.iter().find(|t| t.name == name).unwrap();
            tool.input_schema["properties"]["limit"].clone()
        };

        for name in [
            "vercel-get-project-logs",
            "vercel-get-deployment-logs",
            "vercel-get-function-logs",
            "vercel-search-logs",
        ] {
            let limit = limit_schema(name);
            assert_eq!(limit["minimum"], 1, "{name}");
            assert_eq!(limit["maximum"], 1000, "{name}");
        }

        for name in [
            "vercel-get-log-drains",
            "vercel-get-runtime-errors",
            "vercel-get-build-errors",
        ] {
            let limit = limit_schema(name);
            assert_eq!(limit["minimum"], 1, "{name}");
            assert_eq!(limit["maximum"], 100, "{name}");
        }

        let deployments = limit_schema("vercel-list-all-deployments");
        assert_eq!(deployments["minimum"], 1);
        assert!(deployments.get("maximum").is_none());
    }

    #[test]
    fn test_required_fields_are_published() {
        let registry = ToolRegistry::new();
        let tool = registry
            .list_tools()
            .into_iter()
            .find(|t| t.name == "vercel-get-deployment")
            .unwrap();
        let required = tool.input_schema.get("required").unwrap();
        assert_eq!(required, &serde_json::json!(["idOrUrl"]));
    }

    #[test]
    fn test_lookup() {
        let registry = ToolRegistry::new();
        assert_eq!(
            registry.get("vercel-create-team").map(|h| h.name()),
            Some("vercel-create-team")
        );
        assert!(registry.get("vercel-test-debug").is_none());
        assert_eq!(registry.len(), 20);
    }
}
