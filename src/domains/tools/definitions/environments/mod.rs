//! Environment and environment variable tools.

pub mod create_custom;
pub mod create_variables;
pub mod get;

pub use create_custom::CreateCustomEnvironmentTool;
pub use create_variables::CreateEnvironmentVariablesTool;
pub use get::GetEnvironmentsTool;
