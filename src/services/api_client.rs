use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use crate::config::ApiConfig;
use crate::errors::{AppError, AppResult, GENERIC_REMOTE_ERROR};
use crate::models::{
    EditProfileForm, Paged, Project, ResetPasswordForm, Role, Task, UserProfile,
};

/// Client for the remote PMS REST API. All project/task/user data lives
/// upstream; this layer only fetches and re-fetches it.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    assets_base_url: String,
    page_size: u32,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

// Error payload shape used by the remote API on non-2xx responses
#[derive(Debug, Deserialize)]
struct RemoteMessage {
    #[serde(default)]
    message: Option<String>,
}

fn task_list_path(role: Role) -> &'static str {
    match role {
        Role::Manager => "Task/manager",
        Role::Employee => "Task",
    }
}

fn project_list_path(role: Role) -> &'static str {
    match role {
        Role::Manager => "Project",
        Role::Employee => "Project/employee",
    }
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        // Single request timeout covers connect and body; timeouts surface
        // through the same error path as any other request failure.
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            assets_base_url: config.assets_base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Resolve a profile image path against the asset base URL.
    pub fn avatar_url(&self, image_path: &str) -> String {
        format!("{}/{}", self.assets_base_url, image_path.trim_start_matches('/'))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }
        Err(Self::remote_error(status, response).await)
    }

    async fn expect_success(response: reqwest::Response) -> AppResult<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(Self::remote_error(status, response).await)
    }

    async fn remote_error(status: StatusCode, response: reqwest::Response) -> AppError {
        let message = response
            .json::<RemoteMessage>()
            .await
            .ok()
            .and_then(|m| m.message)
            .unwrap_or_else(|| GENERIC_REMOTE_ERROR.to_string());

        // A stale token is an auth error, not a generic remote failure
        if status == StatusCode::UNAUTHORIZED {
            AppError::Auth(message)
        } else {
            AppError::Remote {
                status: status.as_u16(),
                message,
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> AppResult<String> {
        let response = self
            .http
            .post(self.url("Users/Login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        Ok(Self::decode::<TokenResponse>(response).await?.token)
    }

    pub async fn request_reset(&self, email: &str) -> AppResult<()> {
        let response = self
            .http
            .post(self.url("Users/Reset/Request"))
            .json(&json!({ "email": email }))
            .send()
            .await?;
        Self::expect_success(response).await
    }

    pub async fn reset_password(&self, form: &ResetPasswordForm) -> AppResult<()> {
        let response = self
            .http
            .post(self.url("Users/Reset"))
            .json(&json!({
                "email": form.email,
                "seed": form.seed,
                "password": form.password,
                "confirmPassword": form.confirm_password,
            }))
            .send()
            .await?;
        Self::expect_success(response).await
    }

    pub async fn current_user(&self, token: &str) -> AppResult<UserProfile> {
        let response = self
            .http
            .get(self.url("Users/currentUser"))
            .bearer_auth(token)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn update_profile(&self, token: &str, form: &EditProfileForm) -> AppResult<()> {
        let response = self
            .http
            .put(self.url("Users"))
            .bearer_auth(token)
            .json(&json!({
                "userName": form.user_name,
                "country": form.country,
                "phoneNumber": form.phone_number,
            }))
            .send()
            .await?;
        Self::expect_success(response).await
    }

    /// All-users list; manager-only upstream, so callers must gate on role.
    pub async fn users(&self, token: &str, page: u32) -> AppResult<Vec<UserProfile>> {
        let response = self
            .http
            .get(self.url("Users"))
            .bearer_auth(token)
            .query(&[("pageSize", self.page_size), ("pageNumber", page)])
            .send()
            .await?;
        Ok(Self::decode::<Paged<UserProfile>>(response).await?.data)
    }

    pub async fn tasks(&self, token: &str, role: Role, page: u32) -> AppResult<Vec<Task>> {
        let response = self
            .http
            .get(self.url(task_list_path(role)))
            .bearer_auth(token)
            .query(&[("pageSize", self.page_size), ("pageNumber", page)])
            .send()
            .await?;
        Ok(Self::decode::<Paged<Task>>(response).await?.data)
    }

    pub async fn projects(&self, token: &str, role: Role, page: u32) -> AppResult<Vec<Project>> {
        let response = self
            .http
            .get(self.url(project_list_path(role)))
            .bearer_auth(token)
            .query(&[("pageSize", self.page_size), ("pageNumber", page)])
            .send()
            .await?;
        Ok(Self::decode::<Paged<Project>>(response).await?.data)
    }

    pub async fn delete_task(&self, token: &str, task_id: i64) -> AppResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("Task/{}", task_id)))
            .bearer_auth(token)
            .send()
            .await?;
        Self::expect_success(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn test_client() -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: "https://api.example.com/api/v1/".to_string(),
            assets_base_url: "https://api.example.com/".to_string(),
            timeout_secs: 5,
            page_size: 100,
        })
        .unwrap()
    }

    #[test]
    fn test_url_joining_normalizes_slashes() {
        let client = test_client();
        assert_eq!(
            client.url("Users/Login"),
            "https://api.example.com/api/v1/Users/Login"
        );
    }

    #[test]
    fn test_avatar_resolves_against_asset_base() {
        let client = test_client();
        assert_eq!(
            client.avatar_url("/files/avatars/42.png"),
            "https://api.example.com/files/avatars/42.png"
        );
        assert_eq!(
            client.avatar_url("files/avatars/42.png"),
            "https://api.example.com/files/avatars/42.png"
        );
    }

    #[test]
    fn test_list_paths_are_role_scoped() {
        assert_eq!(task_list_path(Role::Manager), "Task/manager");
        assert_eq!(task_list_path(Role::Employee), "Task");
        assert_eq!(project_list_path(Role::Manager), "Project");
        assert_eq!(project_list_path(Role::Employee), "Project/employee");
    }
}
