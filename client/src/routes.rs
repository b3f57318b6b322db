//! Route classification shared by the guard, the gateway, and the auth screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only place that knows which paths are reachable without a
//! session. Anything not listed in [`PUBLIC_PATHS`] requires authentication.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Sign-in screen; target of every forced redirect.
pub const SIGN_IN_PATH: &str = "/signin";
/// Account registration screen.
pub const SIGN_UP_PATH: &str = "/signup";
/// Password reset request screen.
pub const PASSWORD_RESET_PATH: &str = "/password-reset";
/// Protected landing page used after sign-in.
pub const HOME_PATH: &str = "/";

/// Router segments for the public screens; each is its path without the `/`.
pub const SIGN_IN_SEGMENT: &str = "signin";
pub const SIGN_UP_SEGMENT: &str = "signup";
pub const PASSWORD_RESET_SEGMENT: &str = "password-reset";

/// Paths that are only meaningful without a session.
pub const PUBLIC_PATHS: [&str; 3] = [SIGN_IN_PATH, SIGN_UP_PATH, PASSWORD_RESET_PATH];

/// Access class of a navigable path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// Sign-in, sign-up, password reset.
    Public,
    /// Everything else.
    Protected,
}

/// Classify `path`, ignoring query string, fragment, and a trailing slash.
pub fn classify(path: &str) -> RouteClass {
    let normalized = normalize_path(path);
    if PUBLIC_PATHS.contains(&normalized) {
        RouteClass::Public
    } else {
        RouteClass::Protected
    }
}

/// Convenience wrapper over [`classify`].
pub fn is_public(path: &str) -> bool {
    classify(path) == RouteClass::Public
}

fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { HOME_PATH } else { trimmed }
}
