mod forms;
mod paged;
mod project;
mod role;
mod task;
mod user;

pub use forms::{EditProfileForm, LoginForm, ResetPasswordForm, ResetRequestForm};
pub use paged::Paged;
pub use project::Project;
pub use role::Role;
pub use task::{Task, TaskStatus};
pub use user::{UserGroup, UserProfile};
