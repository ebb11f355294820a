//! Project tools.

pub mod create;
pub mod list;

pub use create::CreateProjectTool;
pub use list::ListProjectsTool;
