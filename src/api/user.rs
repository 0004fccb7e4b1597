//! Account Calls
//!
//! Password change and account deletion for the logged-in user.

use super::{ApiClient, ApiError, Method, NO_BODY};
use crate::models::{Message, PasswordChange};

pub async fn change_password(client: &ApiClient, old_password: &str, new_password: &str) -> Result<Message, ApiError> {
    let args = PasswordChange {
        old_password,
        new_password,
    };
    client.fetch_json(Method::Put, "/auth/password", Some(&args)).await
}

/// Delete the account. The caller is responsible for dropping the session.
pub async fn delete_user(client: &ApiClient) -> Result<Message, ApiError> {
    client.fetch_json(Method::Delete, "/auth/user", NO_BODY).await
}
