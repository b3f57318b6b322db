//! Password reset request page.

#[cfg(test)]
#[path = "password_reset_test.rs"]
mod password_reset_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::gateway::ApiGateway;
use crate::routes::SIGN_IN_PATH;

/// Shown on success regardless of whether the address exists.
pub(crate) const RESET_SENT_MESSAGE: &str = "If an account exists for that email, a reset link has been sent.";

pub(crate) fn validate_reset_input(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter an email first.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(email.to_owned())
}

#[component]
pub fn PasswordResetPage() -> impl IntoView {
    let gateway = expect_context::<ApiGateway>();

    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_reset_input(&email.get()) {
            Ok(value) => value,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Sending reset link...".to_owned());

        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            match api::request_password_reset(&gateway, &email_value).await {
                Ok(_) => info.set(RESET_SENT_MESSAGE.to_owned()),
                Err(e) => info.set(format!("Reset request failed: {}", e.user_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Admin Console"</h1>
                <p class="auth-card__subtitle">"Reset your password"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Send Reset Link"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <div class="auth-links">
                    <a href=SIGN_IN_PATH>"Back to sign in"</a>
                </div>
            </div>
        </div>
    }
}
