//! Todo List View
//!
//! In local mode the list lives in memory only. In remote mode it is loaded
//! from the todo service and every change is applied after the server accepts it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{NavBar, NewTodoForm, TodoRow};
use crate::config::{self, SyncMode};
use crate::context::use_api;
use crate::models::{TodoItem, TodoUpdate};
use crate::store::*;

#[component]
pub fn TodoList() -> impl IntoView {
    let client = use_api();
    let mode = config::sync_mode();
    let store = TodoStore::new(TodoState::default());

    // Load on mount
    if mode == SyncMode::Remote {
        let client = client.clone();
        store_set_loading(&store, true);
        spawn_local(async move {
            match api::get_all_todos(&client).await {
                Ok(loaded) => {
                    log::debug!("loaded {} todos", loaded.len());
                    store_set_todos(&store, loaded.into_iter().map(TodoItem::from).collect());
                }
                Err(err) => store_set_error(&store, Some(err.user_message("Failed to load todos"))),
            }
            store_set_loading(&store, false);
        });
    }

    let add = {
        let client = client.clone();
        Callback::new(move |text: String| match mode {
            SyncMode::Local => {
                store_add_local(&store, &text);
            }
            SyncMode::Remote => {
                let client = client.clone();
                spawn_local(async move {
                    match api::create_todo(&client, &text, None).await {
                        Ok(todo) => {
                            store_upsert(&store, todo.into());
                            store_set_error(&store, None);
                        }
                        Err(err) => store_set_error(&store, Some(err.user_message("Failed to add todo"))),
                    }
                });
            }
        })
    };

    let toggle = {
        let client = client.clone();
        Callback::new(move |id: u64| match mode {
            SyncMode::Local => store_toggle(&store, id),
            SyncMode::Remote => {
                let Some(completed) = store_is_completed(&store, id) else { return };
                let client = client.clone();
                spawn_local(async move {
                    match api::update_todo(&client, id, &TodoUpdate::completed(!completed)).await {
                        Ok(todo) => {
                            store_upsert(&store, todo.into());
                            store_set_error(&store, None);
                        }
                        Err(err) => store_set_error(&store, Some(err.user_message("Failed to update todo"))),
                    }
                });
            }
        })
    };

    let delete = Callback::new(move |id: u64| match mode {
        SyncMode::Local => store_remove(&store, id),
        SyncMode::Remote => {
            let client = client.clone();
            spawn_local(async move {
                match api::delete_todo(&client, id).await {
                    Ok(_) => {
                        store_remove(&store, id);
                        store_set_error(&store, None);
                    }
                    Err(err) => store_set_error(&store, Some(err.user_message("Failed to delete todo"))),
                }
            });
        }
    });

    view! {
        <div class="todo-page">
            <NavBar />

            <div class="todo-content">
                <NewTodoForm on_add=add />

                {move || store_error(&store).map(|message| view! {
                    <div class="error-banner">{message}</div>
                })}

                <Show
                    when=move || !store_todos(&store).is_empty()
                    fallback=move || view! {
                        <div class="todo-empty">
                            {move || if store_loading(&store) { "Loading todos..." } else { "No todos yet. Add some above!" }}
                        </div>
                    }
                >
                    <ul class="todo-items">
                        <For
                            each=move || store_todos(&store)
                            key=|todo| (todo.id, todo.completed)
                            children=move |todo| view! {
                                <TodoRow todo=todo on_toggle=toggle on_delete=delete />
                            }
                        />
                    </ul>
                </Show>
            </div>
        </div>
    }
}
