//! Route Table
//!
//! Client-side paths and the session gate in front of them.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Register,
    Todos,
    UserSettings,
}

impl AppRoute {
    /// Path segment as registered with the router
    pub const fn segment(self) -> &'static str {
        match self {
            AppRoute::Login => "login",
            AppRoute::Register => "register",
            AppRoute::Todos => "todos",
            AppRoute::UserSettings => "user-settings",
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            AppRoute::Login => "/login",
            AppRoute::Register => "/register",
            AppRoute::Todos => "/todos",
            AppRoute::UserSettings => "/user-settings",
        }
    }

    pub const fn requires_session(self) -> bool {
        matches!(self, AppRoute::Todos | AppRoute::UserSettings)
    }
}

/// Where `/` lands
pub const HOME: AppRoute = AppRoute::Todos;

/// Redirect target for `route`, or `None` if it may render.
///
/// Only presence of a session counts; token expiry is not checked.
pub fn redirect_for(route: AppRoute, authenticated: bool) -> Option<AppRoute> {
    if route.requires_session() && !authenticated {
        Some(AppRoute::Login)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [AppRoute; 4] = [AppRoute::Login, AppRoute::Register, AppRoute::Todos, AppRoute::UserSettings];

    #[test]
    fn test_path_is_slash_segment() {
        for route in ALL {
            assert_eq!(route.path(), format!("/{}", route.segment()));
        }
    }

    #[test]
    fn test_guarded_routes_redirect_to_login() {
        assert_eq!(redirect_for(AppRoute::Todos, false), Some(AppRoute::Login));
        assert_eq!(redirect_for(AppRoute::UserSettings, false), Some(AppRoute::Login));
        assert_eq!(redirect_for(AppRoute::Todos, true), None);
        assert_eq!(redirect_for(AppRoute::UserSettings, true), None);
    }

    #[test]
    fn test_public_routes_always_render() {
        for authenticated in [false, true] {
            assert_eq!(redirect_for(AppRoute::Login, authenticated), None);
            assert_eq!(redirect_for(AppRoute::Register, authenticated), None);
        }
    }

    #[test]
    fn test_home_is_guarded() {
        assert_eq!(HOME.path(), "/todos");
        assert!(HOME.requires_session());
    }
}
