//! Frontend Models
//!
//! Data structures matching the gateway's JSON bodies, plus the list item
//! rendered by the todo view.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Login response body, kept exactly as the server returned it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session(Map<String, Value>);

impl Session {
    /// Build a session from a login body.
    ///
    /// Only bodies carrying a non-empty string `access_token` qualify.
    pub fn from_login_body(body: &Value) -> Option<Self> {
        let fields = body.as_object()?;
        match fields.get("access_token") {
            Some(Value::String(token)) if !token.is_empty() => Some(Self(fields.clone())),
            _ => None,
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.0.get("access_token").and_then(Value::as_str)
    }

    pub fn username(&self) -> Option<&str> {
        self.0.get("username").and_then(Value::as_str)
    }
}

/// Todo list entry shown in the view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Todo record owned by the todo service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<Todo> for TodoItem {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            text: todo.title,
            completed: todo.completed,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewTodo<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
}

/// Partial update; unset fields stay off the wire
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoUpdate {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }
}

// ========================
// Auth bodies
// ========================

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct PasswordChange<'a> {
    pub old_password: &'a str,
    pub new_password: &'a str,
}

/// User record returned by registration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegisteredUser {
    pub id: u64,
    pub username: String,
    pub email: String,
}

/// `{msg}` from the auth service, `{message}` from the todo service
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Message {
    #[serde(alias = "message")]
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_keeps_body_verbatim() {
        let body = json!({"access_token": "t1", "username": "alice", "token_type": "bearer"});
        let session = Session::from_login_body(&body).expect("session");
        assert_eq!(serde_json::to_value(&session).unwrap(), body);
        assert_eq!(session.access_token(), Some("t1"));
        assert_eq!(session.username(), Some("alice"));
    }

    #[test]
    fn test_session_requires_token() {
        assert!(Session::from_login_body(&json!({"username": "alice"})).is_none());
        assert!(Session::from_login_body(&json!({"access_token": ""})).is_none());
        assert!(Session::from_login_body(&json!({"access_token": null})).is_none());
        assert!(Session::from_login_body(&json!(["t1"])).is_none());
    }

    #[test]
    fn test_session_without_username() {
        let session = Session::from_login_body(&json!({"access_token": "t", "token_type": "bearer"})).unwrap();
        assert_eq!(session.username(), None);
    }

    #[test]
    fn test_todo_update_skips_unset() {
        let body = serde_json::to_value(TodoUpdate::completed(true)).unwrap();
        assert_eq!(body, json!({"completed": true}));
    }

    #[test]
    fn test_todo_into_item() {
        let todo: Todo = serde_json::from_value(json!({
            "id": 7,
            "title": "Buy milk",
            "description": null,
            "completed": false,
            "user_id": "alice",
            "created_at": "2024-01-01T00:00:00",
            "updated_at": null
        }))
        .unwrap();
        let item = TodoItem::from(todo);
        assert_eq!(item, TodoItem { id: 7, text: "Buy milk".to_string(), completed: false });
    }

    #[test]
    fn test_message_alias() {
        let auth: Message = serde_json::from_value(json!({"msg": "Password updated successfully"})).unwrap();
        let todo: Message = serde_json::from_value(json!({"message": "Todo deleted successfully"})).unwrap();
        assert_eq!(auth.msg, "Password updated successfully");
        assert_eq!(todo.msg, "Todo deleted successfully");
    }

    #[test]
    fn test_message_requires_msg() {
        assert!(serde_json::from_value::<Message>(json!({"detail": "Incorrect password"})).is_err());
    }
}
