//! New Todo Form Component
//!
//! Single text input for adding a todo.

use leptos::prelude::*;

/// Form for creating new todos
#[component]
pub fn NewTodoForm(
    #[prop(into)] on_add: Callback<String>,
) -> impl IntoView {
    let (new_text, set_new_text) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.trim().is_empty() { return; }
        on_add.run(text);
        set_new_text.set(String::new());
    };

    view! {
        <form class="new-todo-form" on:submit=submit>
            <input
                type="text"
                placeholder="What needs to be done?"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add Todo"</button>
        </form>
    }
}
