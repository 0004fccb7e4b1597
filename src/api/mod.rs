//! Gateway API Client
//!
//! Frontend bindings to the HTTP gateway, organized by domain. Every call
//! goes through [`ApiClient`], which attaches the bearer header in one place
//! and turns every outcome into `Result<T, ApiError>`.

mod auth;
mod todo;
mod user;

use std::sync::Arc;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use session_storage::{SessionStorage, StorageError};
use thiserror::Error;

use crate::models::Session;

// Re-export all public items
pub use auth::*;
pub use todo::*;
pub use user::*;

/// Session storage shared by the client and the auth context
pub type SharedSession = Arc<dyn SessionStorage<Session>>;

/// Typed failure for every API call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("request failed: {0}")]
    Network(String),
    /// Non-2xx response, or any response carrying a `detail`; `payload` is the body when it was JSON
    #[error("server returned {status}: {message}")]
    Server {
        status: u16,
        payload: Option<Value>,
        message: String,
    },
    /// 2xx response whose body did not match the expected shape
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Classify a non-2xx response from its status and raw body
    pub fn from_status(status: u16, body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(payload) if !payload.is_null() => Self::from_payload(status, payload),
            _ => ApiError::Server {
                status,
                payload: None,
                message: if body.trim().is_empty() {
                    format!("HTTP {}", status)
                } else {
                    body.trim().to_string()
                },
            },
        }
    }

    /// Error built from a JSON error body
    pub fn from_payload(status: u16, payload: Value) -> Self {
        let message = match detail_of(&payload) {
            Some(detail) => detail.to_string(),
            None => payload.to_string(),
        };
        ApiError::Server {
            status,
            payload: Some(payload),
            message,
        }
    }

    /// The server's `detail` string, if it sent one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Server {
                payload: Some(payload),
                ..
            } => detail_of(payload),
            _ => None,
        }
    }

    /// Text to show the user: the server's `detail`, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

fn detail_of(payload: &Value) -> Option<&str> {
    payload.get("detail").and_then(Value::as_str)
}

/// Decode a 2xx body.
///
/// The gateway forwards service errors with status 200, so a body carrying
/// `detail` is an error whatever the status.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if value.get("detail").is_some() {
        return Err(ApiError::from_payload(status, value));
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `Authorization` header value for a session
pub fn bearer(session: Option<&Session>) -> Option<String> {
    session
        .and_then(Session::access_token)
        .map(|token| format!("Bearer {}", token))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Placeholder body type for requests without a body
const NO_BODY: Option<&()> = None;

/// HTTP client bound to the gateway and the current session
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SharedSession,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SharedSession) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, session }
    }

    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Header for the next request, read from storage on every call
    pub fn authorization(&self) -> Option<String> {
        bearer(self.session.get().as_ref())
    }

    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        log::debug!("{:?} {}", method, url);

        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        if let Some(value) = self.authorization() {
            builder = builder.header("Authorization", &value);
        }
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = request.send().await.map_err(|e| {
            log::warn!("{:?} {} failed: {}", method, path, e);
            ApiError::Network(e.to_string())
        })?;

        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let error = ApiError::from_status(status, &text);
        log::warn!("{:?} {} -> {}", method, path, error);
        Err(error)
    }

    async fn fetch_json<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(method, path, body).await?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_body(status, &text).inspect_err(|e| log::warn!("{:?} {} -> {}", method, path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Message;
    use serde_json::json;
    use session_storage::MemoryStorage;

    fn session(body: Value) -> Session {
        Session::from_login_body(&body).expect("valid login body")
    }

    fn client_with(storage: MemoryStorage<Session>) -> ApiClient {
        ApiClient::new("http://localhost:8080/", Arc::new(storage))
    }

    #[test]
    fn test_bearer_without_session() {
        assert_eq!(bearer(None), None);
    }

    #[test]
    fn test_bearer_with_session() {
        let s = session(json!({"access_token": "t1", "username": "alice"}));
        assert_eq!(bearer(Some(&s)).as_deref(), Some("Bearer t1"));
    }

    #[test]
    fn test_authorization_follows_storage() {
        let client = client_with(MemoryStorage::new());
        assert_eq!(client.authorization(), None);

        client
            .session()
            .set(&session(json!({"access_token": "t1", "username": "alice"})))
            .unwrap();
        assert_eq!(client.authorization().as_deref(), Some("Bearer t1"));

        client.session().clear();
        assert_eq!(client.authorization(), None);
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = client_with(MemoryStorage::new());
        assert_eq!(client.url("/todos"), "http://localhost:8080/todos");
        assert_eq!(client.url("/todos/3"), "http://localhost:8080/todos/3");
    }

    #[test]
    fn test_server_error_with_detail() {
        let err = ApiError::from_status(400, r#"{"detail":"bad old password"}"#);
        assert_eq!(err.detail(), Some("bad old password"));
        assert_eq!(err.user_message("Failed to change password"), "bad old password");
        assert_eq!(err.to_string(), "server returned 400: bad old password");
    }

    #[test]
    fn test_server_error_with_non_string_detail() {
        let err = ApiError::from_status(422, r#"{"detail":[{"msg":"field required"}]}"#);
        assert_eq!(err.detail(), None);
        assert_eq!(err.user_message("Failed to change password"), "Failed to change password");
        assert!(matches!(err, ApiError::Server { payload: Some(_), .. }));
    }

    #[test]
    fn test_server_error_without_payload() {
        let err = ApiError::from_status(502, "Bad Gateway");
        assert_eq!(
            err,
            ApiError::Server {
                status: 502,
                payload: None,
                message: "Bad Gateway".to_string(),
            }
        );
        assert_eq!(err.user_message("Login failed"), "Login failed");

        let empty = ApiError::from_status(500, "");
        assert_eq!(empty.to_string(), "server returned 500: HTTP 500");
    }

    #[test]
    fn test_detail_on_success_status_is_error() {
        let result = decode_body::<Message>(200, r#"{"detail":"Could not validate credentials"}"#);
        let err = result.expect_err("detail body must not decode as a message");
        assert_eq!(err.detail(), Some("Could not validate credentials"));
        assert_eq!(err.user_message("Failed to delete account"), "Could not validate credentials");
    }

    #[test]
    fn test_login_detail_on_success_status_is_error() {
        let result = decode_body::<Value>(200, r#"{"detail":"Incorrect username or password"}"#);
        assert_eq!(
            result.unwrap_err().user_message("Login failed"),
            "Incorrect username or password"
        );
    }

    #[test]
    fn test_decode_body_shapes() {
        let message: Message = decode_body(200, r#"{"msg":"Password updated successfully"}"#).unwrap();
        assert_eq!(message.msg, "Password updated successfully");

        assert!(matches!(decode_body::<Message>(200, r#"{"other":1}"#), Err(ApiError::Decode(_))));
        assert!(matches!(decode_body::<Message>(200, "not json"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_non_server_errors_have_no_detail() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.detail(), None);
        assert_eq!(err.user_message("Failed to delete account"), "Failed to delete account");

        let err: ApiError = StorageError::Unavailable.into();
        assert_eq!(err.to_string(), "local storage is not available");
    }
}
