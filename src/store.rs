//! Todo List Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TodoItem;
use crate::todos;

/// Todo view state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Items in display order
    pub todos: Vec<TodoItem>,
    /// Last failed action, shown above the list
    pub error: Option<String>,
    /// Initial load from the server still running
    pub loading: bool,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

// ========================
// Store Helper Functions
// ========================

/// All items (tracked)
pub fn store_todos(store: &TodoStore) -> Vec<TodoItem> {
    store.todos().get()
}

pub fn store_error(store: &TodoStore) -> Option<String> {
    store.error().get()
}

pub fn store_loading(store: &TodoStore) -> bool {
    store.loading().get()
}

/// Replace the whole list
pub fn store_set_todos(store: &TodoStore, items: Vec<TodoItem>) {
    store.todos().set(items);
}

/// Add a local item stamped with the current time
pub fn store_add_local(store: &TodoStore, text: &str) -> Option<u64> {
    let now = todos::now_ms();
    todos::add(&mut store.todos().write(), text, now)
}

/// Insert or replace an item by ID
pub fn store_upsert(store: &TodoStore, item: TodoItem) {
    todos::upsert(&mut store.todos().write(), item);
}

/// Toggle an item by ID
pub fn store_toggle(store: &TodoStore, id: u64) {
    todos::toggle(&mut store.todos().write(), id);
}

/// Remove an item by ID
pub fn store_remove(store: &TodoStore, id: u64) {
    todos::remove(&mut store.todos().write(), id);
}

/// Completion state of an item (untracked)
pub fn store_is_completed(store: &TodoStore, id: u64) -> Option<bool> {
    store
        .todos()
        .read_untracked()
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.completed)
}

pub fn store_set_error(store: &TodoStore, error: Option<String>) {
    store.error().set(error);
}

pub fn store_set_loading(store: &TodoStore, loading: bool) {
    store.loading().set(loading);
}
