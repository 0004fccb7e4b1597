//! Application Context
//!
//! Session state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::{self, ApiClient, SharedSession};
use crate::config;
use crate::models::Session;

/// Reactive view of the stored session
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current session - read
    pub session: ReadSignal<Option<Session>>,
    /// Current session - write
    set_session: WriteSignal<Option<Session>>,
    /// Persistent backing store
    storage: StoredValue<SharedSession>,
}

impl AuthContext {
    pub fn new(storage: SharedSession) -> Self {
        let (session, set_session) = signal(storage.get());
        Self {
            session,
            set_session,
            storage: StoredValue::new(storage),
        }
    }

    /// True iff a session is stored; the token itself is not checked
    pub fn is_authenticated(&self) -> bool {
        self.session.with(Option::is_some)
    }

    /// Display name for the header
    pub fn username(&self) -> String {
        self.session.with(|session| {
            session
                .as_ref()
                .and_then(Session::username)
                .unwrap_or("User")
                .to_string()
        })
    }

    /// Re-read the session from storage; no-op when it is unchanged
    pub fn reload(&self) {
        let current = self.storage.with_value(|storage| storage.get());
        if self.session.with_untracked(|session| *session != current) {
            self.set_session.set(current);
        }
    }

    /// Drop the session from storage and memory
    pub fn logout(&self, client: &ApiClient) {
        api::logout(client);
        self.set_session.set(None);
    }
}

/// Whether a `storage` event for `key` can change the session.
///
/// `None` is what the browser sends for `localStorage.clear()`.
pub fn touches_session(key: Option<&str>) -> bool {
    key.map_or(true, |key| key == config::SESSION_KEY)
}

/// Get the auth context
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Get the API client
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touches_session() {
        assert!(touches_session(Some(config::SESSION_KEY)));
        assert!(touches_session(None));
        assert!(!touches_session(Some("theme")));
    }
}
