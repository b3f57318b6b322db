//! Route access guard logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: signed-out users are
//! sent to sign-in from protected paths, signed-in users are sent home from
//! the public auth screens. Nothing happens until auth has resolved.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::{HOME_PATH, RouteClass, SIGN_IN_PATH, classify};
use crate::state::auth::{AuthContext, AuthState};

/// Outcome of evaluating one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth not resolved yet; render neither content nor a redirect.
    Wait,
    Render,
    Redirect(&'static str),
}

/// Decide what to do with `path` given the current auth state.
pub fn guard_decision(state: &AuthState, path: &str) -> GuardDecision {
    if !state.is_resolved() {
        return GuardDecision::Wait;
    }
    match (state.is_authenticated(), classify(path)) {
        (true, RouteClass::Public) => GuardDecision::Redirect(HOME_PATH),
        (false, RouteClass::Protected) => GuardDecision::Redirect(SIGN_IN_PATH),
        _ => GuardDecision::Render,
    }
}

/// Re-run the guard whenever auth state or `current_path` changes.
pub fn install_route_guard<P, F>(auth: AuthContext, current_path: P, navigate: F)
where
    P: Fn() -> String + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.state();
        let path = current_path();
        if let GuardDecision::Redirect(target) = guard_decision(&state, &path) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
