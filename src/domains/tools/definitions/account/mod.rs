//! Account tools returning fixed sample data.

pub mod todos;
pub mod user_profile;

pub use todos::GetTodosTool;
pub use user_profile::GetUserProfileTool;
