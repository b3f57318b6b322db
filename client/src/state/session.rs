//! The signed-in pairing of bearer token and cached user profile.

use crate::net::types::User;

/// A populated session. The empty session is represented as `None` by
/// callers, so a token never exists without its user or the reverse.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    /// Opaque bearer credential.
    pub token: String,
    /// Non-authoritative profile cache used for display.
    pub user: User,
}

impl Session {
    pub fn new(user: User, token: impl Into<String>) -> Self {
        Self { token: token.into(), user }
    }
}

/// A token counts only if it has visible characters. Blank tokens are never
/// persisted, restored, or sent.
pub fn is_usable_token(token: &str) -> bool {
    !token.trim().is_empty()
}
