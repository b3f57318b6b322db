//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`AuthContext`] is created by the root component and provided through
//! context. The route guard, the request gateway, and the auth screens all
//! share it, so a `login` or `logout` is visible everywhere as soon as the
//! call returns.
//!
//! LIFECYCLE
//! =========
//! `Uninitialized` until [`AuthContext::resolve`] reads the persisted store,
//! then `Authenticated` or `Unauthenticated`. After that the only transitions
//! are `login` and `logout`. Resolution trusts what is stored; the first
//! authenticated request is what actually validates the token.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::session::{Session, is_usable_token};
use crate::util::session_store::SessionStore;

/// Authentication phase plus the active session, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AuthState {
    /// Persisted store not read yet.
    #[default]
    Uninitialized,
    Unauthenticated,
    Authenticated(Session),
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// `false` only while the store has not been read.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Uninitialized)
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.session().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session().map(|s| s.token.as_str())
    }
}

/// Shared handle to the session authority. Clones refer to the same state.
#[derive(Clone, Debug)]
pub struct AuthContext {
    state: ArcRwSignal<AuthState>,
    store: SessionStore,
}

impl AuthContext {
    /// Create an unresolved context backed by `store`.
    pub fn new(store: SessionStore) -> Self {
        Self { state: ArcRwSignal::new(AuthState::Uninitialized), store }
    }

    /// Hydrate from the persisted store. Only the first call has an effect.
    pub fn resolve(&self) {
        if self.state.with_untracked(AuthState::is_resolved) {
            return;
        }
        let next = match self.store.read() {
            Some(session) => AuthState::Authenticated(session),
            None => AuthState::Unauthenticated,
        };
        self.state.set(next);
    }

    /// Current state, tracked.
    pub fn state(&self) -> AuthState {
        self.state.get()
    }

    pub fn state_untracked(&self) -> AuthState {
        self.state.get_untracked()
    }

    /// Tracked `isAuthenticated` flag.
    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    /// Tracked; `false` while still `Uninitialized`.
    pub fn is_resolved(&self) -> bool {
        self.state.with(AuthState::is_resolved)
    }

    /// Tracked current user.
    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user().cloned())
    }

    /// Current bearer token, untracked.
    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token().map(str::to_owned))
    }

    /// Persist and activate a new session.
    ///
    /// A storage failure is logged and the session stays active in memory for
    /// the rest of this page load. A blank token is refused and leaves the
    /// context signed out.
    pub fn login(&self, user: User, token: impl Into<String>) {
        let session = Session::new(user, token);
        if !is_usable_token(&session.token) {
            leptos::logging::warn!("login refused: blank token");
            self.logout();
            return;
        }
        if let Err(e) = self.store.write(&session) {
            leptos::logging::warn!("session not persisted: {e}");
        }
        self.state.set(AuthState::Authenticated(session));
    }

    /// Clear the persisted and in-memory session. Safe from any state.
    pub fn logout(&self) {
        self.store.clear();
        self.state.set(AuthState::Unauthenticated);
    }
}
