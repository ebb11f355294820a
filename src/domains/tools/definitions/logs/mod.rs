//! Logging and debugging tools.
//!
//! Runtime and build logs, log search, log drains and error reports, plus
//! the aggregating `vercel-debug-deployment` report built from several of
//! the same endpoints.

pub mod debug;
pub mod deployment;
pub mod drains;
pub mod errors;
pub mod function;
pub mod project;
pub mod search;

pub use debug::DebugDeploymentTool;
pub use deployment::GetDeploymentLogsTool;
pub use drains::{CreateLogDrainTool, GetLogDrainsTool};
pub use errors::{GetBuildErrorsTool, GetRuntimeErrorsTool};
pub use function::GetFunctionLogsTool;
pub use project::GetProjectLogsTool;
pub use search::SearchLogsTool;
