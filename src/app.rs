//! Todo App Frontend App
//!
//! Router, title bar and context providers.

use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::StaticSegment;
use session_storage::LocalStorage;

use crate::api::{ApiClient, SharedSession};
use crate::components::{LoginForm, PrivateRoute, RegisterForm, TodoList, UserSettings};
use crate::config;
use crate::context::{touches_session, AuthContext};
use crate::models::Session;
use crate::routes::{AppRoute, HOME};

#[component]
pub fn App() -> impl IntoView {
    // Session lives in localStorage; the client and the auth context share it
    let storage: SharedSession = Arc::new(LocalStorage::<Session>::new(config::SESSION_KEY));
    let client = ApiClient::new(config::API_URL, storage.clone());
    log::debug!("using API at {}, todo sync {:?}", config::API_URL, config::sync_mode());

    let auth = AuthContext::new(storage);
    provide_context(auth);
    provide_context(client);

    // Login or logout in another tab
    let _ = window_event_listener(ev::storage, move |event| {
        if touches_session(event.key().as_deref()) {
            log::debug!("session changed in another tab");
            auth.reload();
        }
    });

    view! {
        <Router>
            <div class="app-layout">
                <header class="app-title-bar">
                    <a href="/" class="app-title">"Todo App"</a>
                </header>

                <main class="main-content">
                    <Routes fallback=|| view! { <Redirect path="/" /> }>
                        <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginForm />
                        <Route path=StaticSegment(AppRoute::Register.segment()) view=RegisterForm />
                        <Route
                            path=StaticSegment(AppRoute::Todos.segment())
                            view=|| view! {
                                <PrivateRoute route=AppRoute::Todos>
                                    <TodoList />
                                </PrivateRoute>
                            }
                        />
                        <Route
                            path=StaticSegment(AppRoute::UserSettings.segment())
                            view=|| view! {
                                <PrivateRoute route=AppRoute::UserSettings>
                                    <UserSettings />
                                </PrivateRoute>
                            }
                        />
                        <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME.path() /> } />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
