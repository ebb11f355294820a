//! Tool definitions module.
//!
//! One file per tool, grouped by the Vercel resource they act on.

pub mod common;
pub mod deployments;
pub mod environments;
pub mod logs;
pub mod projects;
pub mod teams;

pub use deployments::{
    CreateDeploymentTool, GetDeploymentTool, ListDeploymentFilesTool, ListDeploymentsTool,
};
pub use environments::{
    CreateCustomEnvironmentTool, CreateEnvironmentVariablesTool, GetEnvironmentsTool,
};
pub use logs::{
    CreateLogDrainTool, DebugDeploymentTool, GetBuildErrorsTool, GetDeploymentLogsTool,
    GetFunctionLogsTool, GetLogDrainsTool, GetProjectLogsTool, GetRuntimeErrorsTool,
    SearchLogsTool,
};
pub use projects::{CreateProjectTool, ListProjectsTool};
pub use teams::{CreateTeamTool, ListTeamsTool};
