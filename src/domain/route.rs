use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Views reachable through the router
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Route {
    #[default]
    Home,
    SignIn,
    SignUp,
    Test,
}

/// Path table, canonical paths first. Non-hyphenated aliases are accepted
/// on input but never produced.
const ROUTE_TABLE: &[(&str, Route)] = &[
    ("/", Route::Home),
    ("/sign-in", Route::SignIn),
    ("/sign-up", Route::SignUp),
    ("/test", Route::Test),
    ("/signin", Route::SignIn),
    ("/signup", Route::SignUp),
];

impl Route {
    /// Resolve a path to a view. Unknown paths fall back to sign-in.
    pub fn from_path(path: &str) -> Self {
        let normalized = normalize_path(path);
        ROUTE_TABLE
            .iter()
            .find(|(p, _)| *p == normalized)
            .map(|(_, route)| *route)
            .unwrap_or(Route::SignIn)
    }

    /// Canonical path used by in-app links
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::SignIn => "/sign-in",
            Route::SignUp => "/sign-up",
            Route::Test => "/test",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::SignIn => "Sign In",
            Route::SignUp => "Sign Up",
            Route::Test => "Test",
        }
    }

    pub fn table() -> &'static [(&'static str, Route)] {
        ROUTE_TABLE
    }
}

/// Strips query and fragment, trailing slashes and case so that
/// `/Sign-In/?next=x` resolves like `/sign-in`.
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default().trim();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return String::from("/");
    }
    let lowered = trimmed.to_lowercase();
    if lowered.starts_with('/') {
        lowered
    } else {
        format!("/{lowered}")
    }
}
