//! HTTP client for the board backend.

use async_trait::async_trait;
use dragboard_config::ClientConfig;
use dragboard_kanban::{Board, Column, ColumnId, Task, TaskId};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::BoardApi;
use crate::error::{ApiError, Result};
use crate::types::*;

/// Extract a human-readable message from a JSON error body.
///
/// Tries `detail`, then `message`, then `non_field_errors`, then the first
/// field error, and finally falls back to the raw body.
pub(crate) fn extract_error_description(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.to_string();
    };
    if let Some(detail) = json.get("detail").and_then(|v| v.as_str()) {
        return detail.to_string();
    }
    if let Some(msg) = json.get("message").and_then(|v| v.as_str()) {
        return msg.to_string();
    }
    if let Some(errors) = json.get("non_field_errors").and_then(|v| v.as_array()) {
        let joined = join_messages(errors);
        if !joined.is_empty() {
            return joined;
        }
    }
    if let Some(fields) = json.as_object() {
        for (field, value) in fields {
            if let Some(errors) = value.as_array() {
                let joined = join_messages(errors);
                if !joined.is_empty() {
                    return format!("{}: {}", field, joined);
                }
            }
        }
    }
    body.to_string()
}

fn join_messages(values: &[serde_json::Value]) -> String {
    values
        .iter()
        .filter_map(|v| v.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Client for the boards/columns/tasks API and its auth endpoints.
#[derive(Debug, Clone)]
pub struct BoardClient {
    client: Client,
    api_url: String,
    auth_url: String,
    auth_scheme: String,
    token: Option<String>,
}

impl BoardClient {
    /// Create an unauthenticated client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            auth_url: config.auth_url.trim_end_matches('/').to_string(),
            auth_scheme: config.auth_scheme.clone(),
            token: None,
        })
    }

    /// Attach a token sent with every subsequent request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the authorization header value, if authenticated.
    fn auth_header(&self) -> Option<String> {
        self.token
            .as_ref()
            .map(|token| format!("{} {}", self.auth_scheme, token))
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        debug!("{} {}", method, url);
        let builder = self.client.request(method, url);
        match self.auth_header() {
            Some(auth) => builder.header("Authorization", auth),
            None => builder,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    /// Map an HTTP response to an `ApiError` based on status code.
    async fn check_response(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let status_code = status.as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = extract_error_description(&body);

        match status_code {
            400 => Err(ApiError::Validation(message)),
            401 => Err(ApiError::Unauthorized(message)),
            403 => Err(ApiError::Forbidden(message)),
            404 => Err(ApiError::NotFound(message)),
            _ => Err(ApiError::Api {
                status: status_code,
                body: message,
            }),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .request(Method::GET, &self.endpoint(path))
            .send()
            .await?;
        let response = self.check_response(response).await?;
        Ok(response.json().await?)
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .request(method, &self.endpoint(path))
            .json(body)
            .send()
            .await?;
        let response = self.check_response(response).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let response = self
            .request(Method::DELETE, &self.endpoint(path))
            .send()
            .await?;
        self.check_response(response).await?;
        Ok(())
    }

    // -- Auth endpoints --

    /// Exchange a username and password for a token.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let url = format!("{}/login/", self.auth_url);
        let response = self
            .client
            .post(&url)
            .json(&LoginRequest { username, password })
            .send()
            .await?;
        let response = self.check_response(response).await?;
        Ok(response.json().await?)
    }

    /// Register a new user. The server does not log the user in.
    pub async fn signup(&self, username: &str, email: &str, password: &str) -> Result<()> {
        let url = format!("{}/signup/", self.auth_url);
        let response = self
            .client
            .post(&url)
            .json(&SignupRequest {
                username,
                email,
                password,
            })
            .send()
            .await?;
        self.check_response(response).await?;
        Ok(())
    }
}

#[async_trait]
impl BoardApi for BoardClient {
    async fn list_boards(&self) -> Result<Vec<Board>> {
        self.get_json("boards/").await
    }

    async fn create_board(&self, board: &NewBoard) -> Result<Board> {
        self.send_json(Method::POST, "boards/", board).await
    }

    async fn list_columns(&self) -> Result<Vec<Column>> {
        self.get_json("columns/").await
    }

    async fn create_column(&self, column: &NewColumn) -> Result<Column> {
        self.send_json(Method::POST, "columns/", column).await
    }

    async fn update_column(&self, id: ColumnId, update: &ColumnUpdate) -> Result<Column> {
        self.send_json(Method::PUT, &format!("columns/{}/", id), update)
            .await
    }

    async fn delete_column(&self, id: ColumnId) -> Result<()> {
        self.delete(&format!("columns/{}/", id)).await
    }

    async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.get_json("tasks/").await
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task> {
        self.send_json(Method::POST, "tasks/", task).await
    }

    async fn update_task(&self, id: TaskId, update: &TaskUpdate) -> Result<Task> {
        self.send_json(Method::PUT, &format!("tasks/{}/", id), update)
            .await
    }

    async fn delete_task(&self, id: TaskId) -> Result<()> {
        self.delete(&format!("tasks/{}/", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail() {
        assert_eq!(
            extract_error_description(r#"{"detail": "Not found."}"#),
            "Not found."
        );
    }

    #[test]
    fn test_extract_non_field_errors() {
        let body = r#"{"non_field_errors": ["Unable to log in.", "Try again."]}"#;
        assert_eq!(
            extract_error_description(body),
            "Unable to log in.; Try again."
        );
    }

    #[test]
    fn test_extract_field_error() {
        let body = r#"{"title": ["This field may not be blank."]}"#;
        assert_eq!(
            extract_error_description(body),
            "title: This field may not be blank."
        );
    }

    #[test]
    fn test_extract_falls_back_to_raw_body() {
        assert_eq!(extract_error_description("<h1>oops</h1>"), "<h1>oops</h1>");
        assert_eq!(extract_error_description(r#"{"ok": true}"#), r#"{"ok": true}"#);
    }

    #[test]
    fn test_auth_header_uses_configured_scheme() {
        let config = ClientConfig {
            auth_scheme: "Bearer".into(),
            ..ClientConfig::default()
        };
        let client = BoardClient::new(&config).unwrap().with_token("abc");
        assert_eq!(client.auth_header().as_deref(), Some("Bearer abc"));
    }

    #[test]
    fn test_urls_lose_trailing_slash() {
        let config = ClientConfig::default().with_server("http://boards.test/");
        let client = BoardClient::new(&config).unwrap();
        assert_eq!(client.endpoint("tasks/"), "http://boards.test/tasks/");
    }
}
