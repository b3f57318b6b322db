//! Sign-up page for new console accounts.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::gateway::ApiGateway;
use crate::net::types::SignUpRequest;
use crate::routes::SIGN_IN_PATH;

pub(crate) const MIN_PASSWORD_LEN: usize = 8;

/// Inputs on the sign-up form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SignUpField {
    FirstName,
    LastName,
    Email,
    Password,
    Confirm,
}

impl SignUpField {
    pub const ALL: [SignUpField; 5] = [Self::FirstName, Self::LastName, Self::Email, Self::Password, Self::Confirm];

    /// Backend field name used for error lookup.
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Password => "password",
            Self::Confirm => "password_confirmation",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password | Self::Confirm => "password",
            Self::FirstName | Self::LastName => "text",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "you@example.edu",
            Self::Password => "Password",
            Self::Confirm => "Confirm password",
        }
    }

    pub fn value(self, form: &SignUpForm) -> &str {
        match self {
            Self::FirstName => &form.first_name,
            Self::LastName => &form.last_name,
            Self::Email => &form.email,
            Self::Password => &form.password,
            Self::Confirm => &form.confirm,
        }
    }

    pub fn slot(self, form: &mut SignUpForm) -> &mut String {
        match self {
            Self::FirstName => &mut form.first_name,
            Self::LastName => &mut form.last_name,
            Self::Email => &mut form.email,
            Self::Password => &mut form.password,
            Self::Confirm => &mut form.confirm,
        }
    }
}

/// Raw form values before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

pub(crate) fn validate_sign_up_input(form: &SignUpForm) -> Result<SignUpRequest, &'static str> {
    let first_name = form.first_name.trim();
    let last_name = form.last_name.trim();
    let email = form.email.trim();
    if first_name.is_empty() || last_name.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err("All fields are required.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if form.password != form.confirm {
        return Err("Passwords do not match.");
    }
    Ok(SignUpRequest {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
    })
}

/// Backend messages for `field`, joined for inline display.
pub(crate) fn field_error_text(error: Option<&ApiError>, field: &str) -> Option<String> {
    let messages = error?.field_errors(field);
    (!messages.is_empty()).then(|| messages.join(" "))
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let gateway = expect_context::<ApiGateway>();

    let form = RwSignal::new(SignUpForm::default());
    let info = RwSignal::new(String::new());
    let error = RwSignal::new(None::<ApiError>);
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_sign_up_input(&form.get()) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(None);
        info.set("Creating account...".to_owned());

        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            match api::sign_up(&gateway, &request).await {
                Ok(ack) => {
                    info.set(ack.message.unwrap_or_else(|| "Account created. You can sign in now.".to_owned()));
                    done.set(true);
                }
                Err(e) => {
                    info.set(format!("Sign-up failed: {}", e.user_message()));
                    error.set(Some(e));
                }
            }
            busy.set(false);
        });
    };

    let render_field = move |field: SignUpField| {
        view! {
            <label class="auth-field">
                <input
                    class="auth-input"
                    type=field.input_type()
                    placeholder=field.placeholder()
                    prop:value=move || form.with(|f| field.value(f).to_owned())
                    on:input=move |ev| form.update(|f| *field.slot(f) = event_target_value(&ev))
                />
                <span class="auth-field__error">
                    {move || error.with(|e| field_error_text(e.as_ref(), field.key())).unwrap_or_default()}
                </span>
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Admin Console"</h1>
                <p class="auth-card__subtitle">"Create an account"</p>
                <form class="auth-form" on:submit=on_submit>
                    {SignUpField::ALL.into_iter().map(render_field).collect_view()}
                    <button class="auth-button" type="submit" disabled=move || busy.get() || done.get()>
                        "Sign Up"
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
