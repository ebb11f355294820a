//! Team tools.

pub mod create;
pub mod list;

pub use create::CreateTeamTool;
pub use list::ListTeamsTool;
