use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::EditProfileForm;
use crate::services::{validation, ApiClient, AuthSession};

pub async fn serve_profile_page(
    State((api, _config)): State<(ApiClient, Config)>,
    session: Session,
) -> AppResult<Response> {
    let auth = AuthSession::new(session);
    // Always refresh here so an edit on another tab is reflected
    let profile = auth.get_current_user(&api).await?;

    let template = std::fs::read_to_string("templates/profile.html").map_err(|e| {
        tracing::error!("Failed to read profile template: {}", e);
        AppError::Template(e)
    })?;

    let avatar = profile
        .image_path
        .as_deref()
        .map(|path| api.avatar_url(path))
        .unwrap_or_else(|| "/static/avatar-placeholder.svg".to_string());

    let html = template
        .replace("{{username}}", &profile.user_name)
        .replace("{{email}}", &profile.email)
        .replace("{{country}}", profile.country.as_deref().unwrap_or("N/A"))
        .replace("{{phone}}", profile.phone_number.as_deref().unwrap_or("N/A"))
        .replace(
            "{{role}}",
            profile
                .group
                .as_ref()
                .map(|g| g.name.as_str())
                .unwrap_or("N/A"),
        )
        .replace(
            "{{status}}",
            if profile.is_activated {
                "Activated"
            } else {
                "Inactive"
            },
        )
        .replace(
            "{{joined}}",
            &profile
                .creation_date
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        )
        .replace(
            "{{modified}}",
            &profile
                .modification_date
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        )
        .replace("{{avatar}}", &avatar);

    Ok(Html(html).into_response())
}

#[axum::debug_handler]
pub async fn handle_profile_update(
    State((api, _config)): State<(ApiClient, Config)>,
    session: Session,
    Form(form): Form<EditProfileForm>,
) -> Response {
    let field_error = validation::validate_username(&form.user_name)
        .or_else(|| validation::validate_phone(form.phone_number.as_deref().unwrap_or("")));
    if let Some(message) = field_error {
        return Redirect::to(&format!("/profile?error={}", urlencoding::encode(&message)))
            .into_response();
    }

    let auth = AuthSession::new(session);
    let token = match auth.require_token().await {
        Ok(token) => token,
        Err(e) => return e.into_response(),
    };

    if let Err(e) = api.update_profile(&token, &form).await {
        tracing::warn!("Profile update failed: {}", e);
        return Redirect::to(&format!(
            "/profile?error={}",
            urlencoding::encode(&e.user_message())
        ))
        .into_response();
    }

    // Refresh the cached profile so the page shows the new values
    if let Err(e) = auth.get_current_user(&api).await {
        tracing::warn!("Profile refresh after update failed: {}", e);
    }

    tracing::info!("Profile updated for user {}", form.user_name);
    Redirect::to("/profile").into_response()
}
