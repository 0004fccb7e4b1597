//! Todo Header Bar
//!
//! Shows who is logged in, with settings and logout actions.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::context::{use_api, use_auth};
use crate::routes::AppRoute;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = use_auth();
    let client = use_api();
    let navigate = use_navigate();

    let open_settings = {
        let navigate = navigate.clone();
        move |_| navigate(AppRoute::UserSettings.path(), NavigateOptions::default())
    };

    let logout = move |_| {
        auth.logout(&client);
        navigate(AppRoute::Login.path(), NavigateOptions::default());
    };

    view! {
        <nav class="todo-nav">
            <h1 class="todo-nav-title">"Todo App"</h1>
            <div class="todo-nav-actions">
                <button class="nav-btn user" title="Account settings" on:click=open_settings>
                    {move || auth.username()}
                </button>
                <button class="nav-btn logout" on:click=logout>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
