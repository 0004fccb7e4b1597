//! Todo Row Component
//!
//! Individual todo in the list.

use leptos::prelude::*;

use crate::models::TodoItem;

/// A single todo row
#[component]
pub fn TodoRow(
    todo: TodoItem,
    #[prop(into)] on_toggle: Callback<u64>,
    #[prop(into)] on_delete: Callback<u64>,
) -> impl IntoView {
    let id = todo.id;
    let completed = todo.completed;

    view! {
        <li class=if completed { "todo-row completed" } else { "todo-row" }>
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| on_toggle.run(id)
            />
            <span class="todo-text">{todo.text}</span>
            <button class="delete-btn" on:click=move |_| on_delete.run(id)>"Delete"</button>
        </li>
    }
}
