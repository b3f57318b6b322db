//! Persisted session store: token and serialized user profile, kept as a pair.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only [`crate::state::auth::AuthContext`] holds a `SessionStore`; every other
//! component reaches the session through it so persisted and rendered state
//! cannot diverge.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::sync::Arc;

use crate::net::types::User;
use crate::state::session::{Session, is_usable_token};
use crate::util::storage::{BrowserStorage, KeyValueStorage, StorageError};

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-serialized user profile.
pub const USER_KEY: &str = "user";

#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueStorage>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(BrowserStorage)
    }
}

impl SessionStore {
    pub fn new(backend: impl KeyValueStorage + 'static) -> Self {
        Self { backend: Arc::new(backend) }
    }

    /// Load the persisted session.
    ///
    /// Returns `None` unless both keys are present, the token is not blank,
    /// and the user value parses. Corrupt entries read as absent.
    pub fn read(&self) -> Option<Session> {
        let token = self.backend.get(TOKEN_KEY).filter(|t| is_usable_token(t))?;
        let raw_user = self.backend.get(USER_KEY)?;
        let user = serde_json::from_str::<User>(&raw_user).ok()?;
        Some(Session { token, user })
    }

    /// Persist `session`, replacing whatever was stored.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the profile cannot be serialized or the
    /// backend rejects either write. A partial write is rolled back.
    pub fn write(&self, session: &Session) -> Result<(), StorageError> {
        let raw_user = serde_json::to_string(&session.user).map_err(|e| StorageError::Serialize {
            key: USER_KEY.to_owned(),
            reason: e.to_string(),
        })?;
        let result = self
            .backend
            .set(TOKEN_KEY, &session.token)
            .and_then(|()| self.backend.set(USER_KEY, &raw_user));
        if result.is_err() {
            self.clear();
        }
        result
    }

    /// Remove both keys. Idempotent.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }
}
