mod auth;
mod dashboard;
mod profile;
mod task;

pub use auth::{
    handle_login, handle_logout, handle_reset_password, handle_reset_request, serve_login_page,
    serve_reset_password_page, serve_reset_request_page,
};
pub use dashboard::{dashboard_data, serve_dashboard_page};
pub use profile::{handle_profile_update, serve_profile_page};
pub use task::delete_task;
