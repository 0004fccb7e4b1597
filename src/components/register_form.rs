//! Registration View

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::api;
use crate::context::use_api;
use crate::routes::AppRoute;

#[component]
pub fn RegisterForm() -> impl IntoView {
    let client = use_api();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() { return; }
        let user = username.get_untracked();
        let mail = email.get_untracked();
        let pass = password.get_untracked();
        let client = client.clone();
        let navigate = navigate.clone();
        set_pending.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api::register(&client, &user, &mail, &pass).await;
            set_pending.set(false);
            match result {
                Ok(created) => {
                    log::info!("registered {}", created.username);
                    // No session yet, so the login page is where the guard would send us anyway
                    navigate(&format!("{}?registered=1", AppRoute::Login.path()), NavigateOptions::default());
                }
                Err(err) => set_error.set(Some(err.user_message("Registration failed"))),
            }
        });
    };

    view! {
        <div class="auth-page">
            <h2>"Register"</h2>

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
                    "Email"
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
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
                <button type="submit" disabled=move || pending.get()>"Register"</button>
            </form>

            <p class="auth-switch">
                "Already have an account? " <A href=AppRoute::Login.path()>"Login"</A>
            </p>
        </div>
    }
}
