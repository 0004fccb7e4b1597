//! Build-time Configuration
//!
//! Values are baked in by the bundler environment, e.g.
//! `TODO_API_URL=https://api.example.com TODO_SYNC=remote trunk build`.

/// Gateway base URL
pub const API_URL: &str = match option_env!("TODO_API_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

/// localStorage key holding the session
pub const SESSION_KEY: &str = "user";

/// Where the todo list lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// In-memory only, lost on refresh
    Local,
    /// Loaded from and written through the todo service
    Remote,
}

impl SyncMode {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.eq_ignore_ascii_case("remote") => SyncMode::Remote,
            _ => SyncMode::Local,
        }
    }
}

pub fn sync_mode() -> SyncMode {
    SyncMode::parse(option_env!("TODO_SYNC"))
}
