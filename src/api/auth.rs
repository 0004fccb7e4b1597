//! Auth Calls
//!
//! Login, registration and logout. Login is the only call that writes the session.

use serde_json::Value;
use session_storage::{SessionStorage, StorageError};

use super::{ApiClient, ApiError, Method};
use crate::models::{LoginRequest, RegisterRequest, RegisteredUser, Session};

/// Log in and persist the response body as the session.
///
/// Returns the body whether or not it carried a token.
pub async fn login(client: &ApiClient, username: &str, password: &str) -> Result<Value, ApiError> {
    let body: Value = client
        .fetch_json(Method::Post, "/auth/login", Some(&LoginRequest { username, password }))
        .await?;
    if persist_login(client.session().as_ref(), &body)?.is_some() {
        log::info!("logged in as {}", username);
    }
    Ok(body)
}

/// Store `body` as the session when it carries an access token
pub fn persist_login(
    storage: &dyn SessionStorage<Session>,
    body: &Value,
) -> Result<Option<Session>, StorageError> {
    match Session::from_login_body(body) {
        Some(session) => {
            storage.set(&session)?;
            Ok(Some(session))
        }
        None => Ok(None),
    }
}

pub async fn register(
    client: &ApiClient,
    username: &str,
    email: &str,
    password: &str,
) -> Result<RegisteredUser, ApiError> {
    let args = RegisterRequest {
        username,
        email,
        password,
    };
    client.fetch_json(Method::Post, "/auth/register", Some(&args)).await
}

/// Forget the session. No network call.
pub fn logout(client: &ApiClient) {
    client.session().clear();
    log::info!("session cleared");
}
