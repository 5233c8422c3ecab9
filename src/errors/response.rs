use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use urlencoding;

use crate::errors::AppError;

// The IntoResponse trait implementation converts AppError into a well-formed HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Authentication errors redirect to the login entry point
            AppError::Auth(msg) => {
                Redirect::to(&format!("/?error={}", urlencoding::encode(&msg))).into_response()
            }

            // A remote 401 means the stored token went stale; treat it as an auth error
            AppError::Remote { status: 401, message } => {
                Redirect::to(&format!("/?error={}", urlencoding::encode(&message)))
                    .into_response()
            }

            // Other remote failures keep their upstream status where it is a valid code
            AppError::Remote { status, message } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                message,
            )
                .into_response(),

            // Network failures and timeouts surface as gateway errors
            AppError::Http(e) => (
                StatusCode::BAD_GATEWAY,
                format!("Request error: {}", e),
            )
                .into_response(),

            AppError::Session(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Session error: {}", msg),
            )
                .into_response(),

            AppError::Template(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template error: {}", e),
            )
                .into_response(),
        }
    }
}
