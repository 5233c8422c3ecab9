use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::aggregate::{build_dashboard, DashboardCharts, Theme};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Role;
use crate::services::{ApiClient, AuthSession};

#[derive(Debug, Deserialize, Default)]
pub struct ChartQuery {
    #[serde(default)]
    pub theme: Theme,
}

pub async fn serve_dashboard_page(
    State((api, _config)): State<(ApiClient, Config)>,
    session: Session,
) -> AppResult<Response> {
    let auth = AuthSession::new(session);
    let profile = auth.profile_or_fetch(&api).await?;

    let template = std::fs::read_to_string("templates/dashboard.html").map_err(|e| {
        tracing::error!("Failed to read dashboard template: {}", e);
        AppError::Template(e)
    })?;

    let html = template
        .replace("{{username}}", &profile.user_name)
        .replace(
            "{{role}}",
            if profile.role().is_manager() {
                "Manager"
            } else {
                "Employee"
            },
        );

    Ok(Html(html).into_response())
}

/// Which fetches a role is entitled to. Tasks and projects always run
/// (their role-scoped paths are picked by the client); the all-users
/// endpoint is manager-only and must never be requested for an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FetchPlan {
    include_users: bool,
}

impl FetchPlan {
    fn for_role(role: Role) -> Self {
        Self {
            include_users: role.is_manager(),
        }
    }
}

/// Chart data for the viewer's role.
///
/// The role-appropriate fetches run concurrently and fail independently: a
/// fetch that errors contributes an empty list and the rest of the charts
/// render normally.
#[axum::debug_handler]
pub async fn dashboard_data(
    State((api, _config)): State<(ApiClient, Config)>,
    session: Session,
    Query(query): Query<ChartQuery>,
) -> AppResult<Json<DashboardCharts>> {
    let auth = AuthSession::new(session);
    let token = auth.require_token().await?;
    let profile = auth.profile_or_fetch(&api).await?;
    let role = profile.role();

    let page = 1;
    let plan = FetchPlan::for_role(role);
    let (tasks, projects, users) = tokio::join!(
        api.tasks(&token, role, page),
        api.projects(&token, role, page),
        async {
            if plan.include_users {
                Some(api.users(&token, page).await)
            } else {
                None
            }
        },
    );

    let tasks = or_empty("tasks", tasks);
    let projects = or_empty("projects", projects);
    let users = users.map(|result| or_empty("users", result)).unwrap_or_default();

    Ok(Json(build_dashboard(
        role, query.theme, &users, &tasks, &projects,
    )))
}

// Degrade a failed fetch to an empty list so the other aggregates still
// render in the same cycle.
fn or_empty<T>(what: &str, result: AppResult<Vec<T>>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("Fetch of {} failed, rendering empty: {}", what, e);
            Vec::new()
        }
    }
}
