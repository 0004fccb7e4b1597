//! Login View

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use crate::api;
use crate::context::{use_api, use_auth};
use crate::routes::AppRoute;

#[component]
pub fn LoginForm() -> impl IntoView {
    let auth = use_auth();
    let client = use_api();
    let navigate = use_navigate();
    let query = use_query_map();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let just_registered = move || query.with(|q| q.get("registered").is_some());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() { return; }
        let user = username.get_untracked();
        let pass = password.get_untracked();
        let client = client.clone();
        let navigate = navigate.clone();
        set_pending.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api::login(&client, &user, &pass).await;
            set_pending.set(false);
            match result {
                Ok(_) => {
                    auth.reload();
                    navigate(AppRoute::Todos.path(), NavigateOptions::default());
                }
                Err(err) => set_error.set(Some(err.user_message("Login failed"))),
            }
        });
    };

    view! {
        <div class="auth-page">
            <h2>"Login"</h2>

            <Show when=just_registered>
                <div class="success-banner">"Registration successful. Please log in."</div>
            </Show>
            {move || error.get().map(|message| view! {
                <div class="error-banner">{message}</div>
            })}

            <form class="auth-form" on:submit=submit>
                <label>
                    "Username"
                    <input
                        type="text"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || pending.get()>"Login"</button>
            </form>

            <p class="auth-switch">
                "No account? " <A href=AppRoute::Register.path()>"Register"</A>
            </p>
        </div>
    }
}
