use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::config::Config;
use crate::errors::AppResult;
use crate::services::{ApiClient, AuthSession};

/// Confirmed deletion from the delete modal. The remote API owns the data;
/// the dashboard re-fetches on the redirect, so no local state to patch.
pub async fn delete_task(
    State((api, _config)): State<(ApiClient, Config)>,
    session: Session,
    Path(task_id): Path<i64>,
) -> AppResult<Response> {
    let auth = AuthSession::new(session);
    let token = auth.require_token().await?;

    api.delete_task(&token, task_id).await?;
    tracing::info!("Deleted task {}", task_id);

    Ok(Redirect::to("/dashboard").into_response())
}
