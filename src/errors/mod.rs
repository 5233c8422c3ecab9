// Defines the application error type and a result type alias using the thiserror crate.
use thiserror::Error;

// Make the response module public
pub mod response;

// Fallback shown when the remote API gives no usable message
pub const GENERIC_REMOTE_ERROR: &str = "Something went wrong";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Remote API error ({status}): {message}")]
    Remote { status: u16, message: String },

    // The #[from] attribute automatically converts a reqwest::Error into an AppError::Http.
    #[error("Request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Template error: {0}")]
    Template(#[from] std::io::Error),
}

impl AppError {
    /// Message suitable for display in a transient notification.
    ///
    /// Server-provided messages pass through; transport-level failures fall
    /// back to the generic message so internals never leak to the page.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Auth(msg) => msg.clone(),
            AppError::Remote { message, .. } => message.clone(),
            _ => GENERIC_REMOTE_ERROR.to_string(),
        }
    }
}

// Custom result type
pub type AppResult<T> = Result<T, AppError>;
