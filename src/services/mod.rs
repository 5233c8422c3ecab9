mod api_client;
mod auth_session;
pub mod validation;

pub use api_client::ApiClient;
pub use auth_session::AuthSession;
