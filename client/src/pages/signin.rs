//! Sign-in page: email + password exchanged for a bearer token.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::gateway::ApiGateway;
use crate::routes::{HOME_PATH, PASSWORD_RESET_PATH, SIGN_UP_PATH};
use crate::state::auth::AuthContext;

/// Trim the email and require both fields.
pub(crate) fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let gateway = expect_context::<ApiGateway>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_sign_in_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let auth = auth.clone();
        let gateway = gateway.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::sign_in(&gateway, &email_value, &password_value).await {
                Ok(resp) => {
                    auth.login(resp.user, resp.token);
                    navigate(HOME_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    info.set(format!("Sign-in failed: {}", e.user_message()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Admin Console"</h1>
                <p class="auth-card__subtitle">"Sign in"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <div class="auth-links">
                    <a href=SIGN_UP_PATH>"Create an account"</a>
                    <a href=PASSWORD_RESET_PATH>"Forgot password?"</a>
                </div>
            </div>
        </div>
    }
}
