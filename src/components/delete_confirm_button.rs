//! Delete Confirm Button Component
//!
//! Two-step account deletion control driven by [`DeleteState`].

use leptos::prelude::*;

use crate::account::{DeleteEvent, DeleteState};

/// Account deletion button with inline confirmation
///
/// Shows "Delete Account" initially. Requesting it shows a warning with
/// confirm/cancel buttons; every click is reported through `on_event`.
#[component]
pub fn DeleteConfirmButton(
    state: ReadSignal<DeleteState>,
    #[prop(into)] on_event: Callback<DeleteEvent>,
) -> impl IntoView {
    let deleting = move || state.get() == DeleteState::Deleting;

    view! {
        <Show when=move || !state.get().is_confirming()>
            <button
                class="danger-btn"
                on:click=move |_| on_event.run(DeleteEvent::Request)
            >
                "Delete Account"
            </button>
        </Show>
        <Show when=move || state.get().is_confirming()>
            <div class="delete-confirm">
                <p class="delete-confirm-text">
                    "Are you sure you want to delete your account? This action cannot be undone."
                </p>
                <button
                    class="danger-btn"
                    disabled=deleting
                    on:click=move |_| on_event.run(DeleteEvent::Confirm)
                >
                    "Yes, Delete Account"
                </button>
                <button
                    class="cancel-btn"
                    disabled=deleting
                    on:click=move |_| on_event.run(DeleteEvent::Cancel)
                >
                    "Cancel"
                </button>
            </div>
        </Show>
    }
}
