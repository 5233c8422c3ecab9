use axum::{
    body::Body,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::services::AuthSession;

const PUBLIC_PATHS: &[&str] = &["/", "/login", "/reset-request", "/reset-password"];

/// Pages that need a session redirect to the login entry point when no
/// token is present. Public pages render without consulting the session.
pub async fn require_auth(session: Session, req: Request<Body>, next: Next) -> Response {
    let path = req.uri().path();

    if PUBLIC_PATHS.contains(&path) || path.starts_with("/static") {
        return next.run(req).await;
    }

    let auth = AuthSession::new(session);
    if auth.is_authenticated().await {
        next.run(req).await
    } else {
        Redirect::to("/").into_response()
    }
}
