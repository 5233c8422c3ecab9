mod aggregate;
mod config;
mod errors;
mod handlers;
mod middleware;
mod models;
mod services;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;
use tower_sessions::cookie::SameSite;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::config::Config;
use crate::services::ApiClient;

#[tokio::main]
async fn main() {
    // Initialize basic tracing subscriber
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load().expect("Failed to load configuration");
    let config_state = config.clone();

    // Client for the remote PMS API; all data lives upstream
    let api_client = ApiClient::new(&config.api).expect("Failed to build API client");

    // Session store setup; one cookie session holds the token and the
    // cached profile
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(config.session.secure)
        .with_same_site(SameSite::Lax)
        .with_name(config.session.cookie_name.clone());

    // Create router with all routes
    let app = Router::new()
        // Auth routes
        .route("/", get(handlers::serve_login_page))
        .route("/login", post(handlers::handle_login))
        .route("/logout", get(handlers::handle_logout))
        .route(
            "/reset-request",
            get(handlers::serve_reset_request_page).post(handlers::handle_reset_request),
        )
        .route(
            "/reset-password",
            get(handlers::serve_reset_password_page).post(handlers::handle_reset_password),
        )
        // Dashboard routes
        .route("/dashboard", get(handlers::serve_dashboard_page))
        .route("/dashboard/data", get(handlers::dashboard_data))
        // Profile routes
        .route(
            "/profile",
            get(handlers::serve_profile_page).post(handlers::handle_profile_update),
        )
        // Task routes
        .route("/tasks/:task_id/delete", get(handlers::delete_task))
        // Static files
        .nest_service("/static", ServeDir::new("static"))
        // Add middleware
        .layer(from_fn(middleware::require_auth))
        .layer(session_layer)
        // Add state
        .with_state((api_client, config_state));

    tracing::info!(
        "Server running on {}:{}",
        config.server.host,
        config.server.port
    );
    let listener = tokio::net::TcpListener::bind(format!(
        "{}:{}",
        config.server.host, config.server.port
    ))
    .await
    .expect("Failed to bind server");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Failed to start server");
}
