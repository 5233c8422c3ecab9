use tower_sessions::Session;

use crate::errors::{AppError, AppResult};
use crate::models::UserProfile;
use crate::services::ApiClient;

const TOKEN_KEY: &str = "auth_token";
const PROFILE_KEY: &str = "auth_profile";

/// Session-backed auth state: the opaque API token plus the cached profile.
///
/// This is the only writer of session state; everything else reads through
/// it. Token validity is never checked locally -- the remote API is the
/// source of truth, and a stale token surfaces as an auth error on the next
/// call.
#[derive(Clone)]
pub struct AuthSession {
    session: Session,
}

fn session_err(e: tower_sessions::session::Error) -> AppError {
    AppError::Session(e.to_string())
}

impl AuthSession {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Store the token returned by a successful login. Called only from the
    /// login handler; a failed login never reaches this point, so a prior
    /// session stays untouched.
    pub async fn save_token(&self, token: &str) -> AppResult<()> {
        self.session
            .insert(TOKEN_KEY, token.to_string())
            .await
            .map_err(session_err)
    }

    pub async fn token(&self) -> AppResult<Option<String>> {
        self.session.get::<String>(TOKEN_KEY).await.map_err(session_err)
    }

    pub async fn is_authenticated(&self) -> bool {
        matches!(self.token().await, Ok(Some(_)))
    }

    /// Token or an auth error; handlers behind `require_auth` use this so a
    /// session that expired mid-flight redirects instead of panicking.
    pub async fn require_token(&self) -> AppResult<String> {
        self.token()
            .await?
            .ok_or_else(|| AppError::Auth("Not authenticated".into()))
    }

    /// Drop token and cached profile. Idempotent; clearing an empty session
    /// is a no-op.
    pub async fn clear(&self) -> AppResult<()> {
        self.session
            .remove::<String>(TOKEN_KEY)
            .await
            .map_err(session_err)?;
        self.session
            .remove::<UserProfile>(PROFILE_KEY)
            .await
            .map_err(session_err)?;
        Ok(())
    }

    pub async fn cached_profile(&self) -> AppResult<Option<UserProfile>> {
        self.session
            .get::<UserProfile>(PROFILE_KEY)
            .await
            .map_err(session_err)
    }

    /// Fetch the authenticated user's profile and refresh the cache.
    ///
    /// Safe to call repeatedly; this is the only path that updates the
    /// cached profile (e.g. after a profile edit).
    pub async fn get_current_user(&self, api: &ApiClient) -> AppResult<UserProfile> {
        let token = self.require_token().await?;
        let profile = api.current_user(&token).await?;
        self.session
            .insert(PROFILE_KEY, &profile)
            .await
            .map_err(session_err)?;
        Ok(profile)
    }

    /// Cached profile when present, otherwise a refresh.
    pub async fn profile_or_fetch(&self, api: &ApiClient) -> AppResult<UserProfile> {
        if let Some(profile) = self.cached_profile().await? {
            return Ok(profile);
        }
        self.get_current_user(api).await
    }
}
