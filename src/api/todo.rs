//! Todo Calls
//!
//! CRUD bindings for the todo service.

use serde_json::Value;

use super::{ApiClient, ApiError, Method, NO_BODY};
use crate::models::{NewTodo, Todo, TodoUpdate};

pub async fn get_all_todos(client: &ApiClient) -> Result<Vec<Todo>, ApiError> {
    client.fetch_json(Method::Get, "/todos", NO_BODY).await
}

pub async fn create_todo(client: &ApiClient, title: &str, description: Option<&str>) -> Result<Todo, ApiError> {
    let args = NewTodo { title, description };
    client.fetch_json(Method::Post, "/todos", Some(&args)).await
}

pub async fn update_todo(client: &ApiClient, id: u64, update: &TodoUpdate) -> Result<Todo, ApiError> {
    client.fetch_json(Method::Put, &todo_path(id), Some(update)).await
}

/// Returns the raw response body
pub async fn delete_todo(client: &ApiClient, id: u64) -> Result<Value, ApiError> {
    client.fetch_json(Method::Delete, &todo_path(id), NO_BODY).await
}

fn todo_path(id: u64) -> String {
    format!("/todos/{}", id)
}
