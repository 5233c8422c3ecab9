use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use std::fs;
use tower_sessions::Session;

use crate::config::Config;
use crate::models::{LoginForm, ResetPasswordForm, ResetRequestForm};
use crate::services::{validation, ApiClient, AuthSession};

fn error_redirect(path: &str, message: &str) -> Response {
    Redirect::to(&format!("{}?error={}", path, urlencoding::encode(message))).into_response()
}

// Pre-network check of the login form. The password gets the full policy,
// the same rule the reset form enforces, so a value that could never have
// been accepted upstream is rejected without a round trip.
fn validate_login(form: &LoginForm) -> Option<String> {
    validation::validate_email(&form.email)
        .or_else(|| validation::validate_password(&form.password))
}

pub async fn serve_login_page() -> impl IntoResponse {
    let login_html = fs::read_to_string("templates/login.html")
        .unwrap_or_else(|_| "Error loading login page".to_string());
    Html(login_html)
}

#[axum::debug_handler]
pub async fn handle_login(
    State((api, _config)): State<(ApiClient, Config)>,
    session: Session,
    Form(login_form): Form<LoginForm>,
) -> Response {
    // Field-level validation runs before any network call
    if let Some(message) = validate_login(&login_form) {
        return error_redirect("/", &message);
    }

    tracing::info!("Login attempt for {}", login_form.email);

    match api.login(&login_form.email, &login_form.password).await {
        Ok(token) => {
            let auth = AuthSession::new(session);
            if let Err(e) = auth.save_token(&token).await {
                tracing::error!("Failed to persist session token: {}", e);
                return error_redirect("/", &e.user_message());
            }
            // Warm the profile cache; the dashboard can still refetch if
            // this fails, so a cold cache is not a login failure.
            if let Err(e) = auth.get_current_user(&api).await {
                tracing::warn!("Profile fetch after login failed: {}", e);
            }
            tracing::info!("Login success for {}", login_form.email);
            Redirect::to("/dashboard").into_response()
        }
        // A failed login leaves any prior session untouched
        Err(e) => {
            tracing::warn!("Login failed for {}: {}", login_form.email, e);
            error_redirect("/", &e.user_message())
        }
    }
}

#[axum::debug_handler]
pub async fn handle_logout(session: Session) -> Response {
    let auth = AuthSession::new(session);
    if let Err(e) = auth.clear().await {
        tracing::warn!("Session clear error: {}", e);
    }
    Redirect::to("/").into_response()
}

pub async fn serve_reset_request_page() -> impl IntoResponse {
    let html = fs::read_to_string("templates/reset_request.html")
        .unwrap_or_else(|_| "Error loading reset page".to_string());
    Html(html)
}

pub async fn handle_reset_request(
    State((api, _config)): State<(ApiClient, Config)>,
    Form(form): Form<ResetRequestForm>,
) -> Response {
    if let Some(message) = validation::validate_email(&form.email) {
        return error_redirect("/reset-request", &message);
    }

    match api.request_reset(&form.email).await {
        Ok(()) => {
            tracing::info!("Reset OTP requested for {}", form.email);
            Redirect::to(&format!(
                "/reset-password?email={}",
                urlencoding::encode(&form.email)
            ))
            .into_response()
        }
        Err(e) => {
            tracing::warn!("Reset request failed for {}: {}", form.email, e);
            error_redirect("/reset-request", &e.user_message())
        }
    }
}

pub async fn serve_reset_password_page() -> impl IntoResponse {
    let html = fs::read_to_string("templates/reset_password.html")
        .unwrap_or_else(|_| "Error loading reset page".to_string());
    Html(html)
}

pub async fn handle_reset_password(
    State((api, _config)): State<(ApiClient, Config)>,
    Form(form): Form<ResetPasswordForm>,
) -> Response {
    let field_error = validation::validate_email(&form.email)
        .or_else(|| validation::validate_otp(&form.seed))
        .or_else(|| validation::validate_password(&form.password))
        .or_else(|| validation::validate_confirmation(&form.password, &form.confirm_password));
    if let Some(message) = field_error {
        return error_redirect("/reset-password", &message);
    }

    match api.reset_password(&form).await {
        Ok(()) => {
            tracing::info!("Password reset for {}", form.email);
            error_redirect("/", "Password has been reset successfully! Please login")
        }
        Err(e) => {
            tracing::warn!("Password reset failed for {}: {}", form.email, e);
            error_redirect("/reset-password", &e.user_message())
        }
    }
}
