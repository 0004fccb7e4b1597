//! Route Guard
//!
//! Renders its children only while a session is stored.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::context::use_auth;
use crate::routes::{redirect_for, AppRoute};

#[component]
pub fn PrivateRoute(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    // Storage may have changed since the signal was last written
    auth.reload();
    let redirect = move || redirect_for(route, auth.is_authenticated());

    view! {
        <Show
            when=move || redirect().is_none()
            fallback=move || redirect().map(|target| view! { <Redirect path=target.path() /> })
        >
            {children()}
        </Show>
    }
}
