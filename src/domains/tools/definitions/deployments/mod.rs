//! Deployment tools.

pub mod create;
pub mod files;
pub mod get;
pub mod list;

pub use create::CreateDeploymentTool;
pub use files::ListDeploymentFilesTool;
pub use get::GetDeploymentTool;
pub use list::ListDeploymentsTool;
