//! User Settings View
//!
//! Password change and account deletion.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::account::{apply_delete_result, DeleteEvent, DeleteState, Feedback};
use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::{use_api, use_auth};
use crate::routes::AppRoute;

#[component]
pub fn UserSettings() -> impl IntoView {
    let auth = use_auth();
    let client = use_api();
    let navigate = use_navigate();

    let (old_password, set_old_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (feedback, set_feedback) = signal(Feedback::default());
    let (delete_state, set_delete_state) = signal(DeleteState::Idle);

    // Leave once the account is gone
    Effect::new(move |_| {
        if delete_state.get() == DeleteState::Deleted {
            navigate(AppRoute::Login.path(), NavigateOptions::default());
        }
    });

    let change_password = {
        let client = client.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            if saving.get_untracked() { return; }
            let old = old_password.get_untracked();
            let new = new_password.get_untracked();
            let client = client.clone();
            set_saving.set(true);
            spawn_local(async move {
                match api::change_password(&client, &old, &new).await {
                    Ok(message) => {
                        set_feedback.set(Feedback::succeeded(Some(message.msg)));
                        set_old_password.set(String::new());
                        set_new_password.set(String::new());
                    }
                    Err(err) => {
                        set_feedback.set(Feedback::failed(err.user_message("Failed to change password")));
                    }
                }
                set_saving.set(false);
            });
        }
    };

    let on_delete_event = Callback::new(move |event: DeleteEvent| {
        let previous = delete_state.get_untracked();
        let next = previous.next(event);
        set_delete_state.set(next);
        if previous != DeleteState::ConfirmPending || next != DeleteState::Deleting {
            return;
        }

        let client = client.clone();
        spawn_local(async move {
            let result = api::delete_user(&client).await;
            let (state, update) =
                apply_delete_result(delete_state.get_untracked(), result, client.session().as_ref());
            if let Some(update) = update {
                set_feedback.set(update);
            }
            set_delete_state.set(state);
            if state == DeleteState::Deleted {
                auth.reload();
            }
        });
    });

    view! {
        <div class="settings-page">
            <div class="back-link">
                <A href=AppRoute::Todos.path()>"← Back to todos"</A>
            </div>
            <h2>"User Settings"</h2>

            {move || feedback.get().error.map(|message| view! {
                <div class="error-banner">{message}</div>
            })}
            {move || feedback.get().success.map(|message| view! {
                <div class="success-banner">{message}</div>
            })}

            <section class="settings-section">
                <h3>"Change Password"</h3>
                <form class="settings-form" on:submit=change_password>
                    <label>
                        "Old Password"
                        <input
                            type="password"
                            required
                            prop:value=move || old_password.get()
                            on:input=move |ev| set_old_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "New Password"
                        <input
                            type="password"
                            required
                            prop:value=move || new_password.get()
                            on:input=move |ev| set_new_password.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" disabled=move || saving.get()>"Update Password"</button>
                </form>
            </section>

            <section class="settings-section">
                <h3>"Delete Account"</h3>
                <DeleteConfirmButton state=delete_state on_event=on_delete_event />
            </section>
        </div>
    }
}
