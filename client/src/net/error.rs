//! Failure taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Only [`ApiError::AuthenticationRequired`] and [`ApiError::SessionExpired`]
//! are handled centrally by the gateway (session clear + redirect). Every
//! other variant is returned to the calling screen for presentation.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use serde::Deserialize;

/// Transport-level failure: the backend was never reached or never answered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request could not be assembled (bad header, unserializable body).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// Connectivity failure, timeout, CORS rejection.
    #[error("network failure: {0}")]
    Network(String),
    /// No HTTP stack in this build (server-side rendering).
    #[error("http transport not available on server")]
    Unavailable,
}

/// Error returned by [`crate::net::gateway::ApiGateway`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// No credential at call time; the call was never sent.
    #[error("authentication required")]
    AuthenticationRequired,
    /// The backend rejected the credential with 401.
    #[error("session expired")]
    SessionExpired,
    /// The backend rejected the request for a non-auth reason.
    #[error("{message}")]
    RequestFailed {
        status: u16,
        message: String,
        field_errors: BTreeMap<String, Vec<String>>,
    },
    /// Success status with a body that does not match the expected type.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error(transparent)]
    Network(#[from] TransportError),
}

impl ApiError {
    /// Build a [`ApiError::RequestFailed`] from a non-success response body.
    pub fn request_failed(status: u16, body: &str) -> Self {
        let failure = BackendFailure::parse(body);
        let message = failure
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| request_failed_message(status));
        Self::RequestFailed { status, message, field_errors: failure.errors }
    }

    /// `true` for the kinds that trigger session expiration handling.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::AuthenticationRequired | Self::SessionExpired)
    }

    /// Text suitable for an inline message or toast.
    pub fn user_message(&self) -> String {
        match self {
            Self::AuthenticationRequired | Self::SessionExpired => {
                "Your session has ended. Please sign in again.".to_owned()
            }
            Self::RequestFailed { message, .. } => message.clone(),
            Self::MalformedResponse(_) => "The server sent an unexpected response.".to_owned(),
            Self::Network(_) => "Could not reach the server. Check your connection and retry.".to_owned(),
        }
    }

    /// Messages attached to `field`, if the backend reported any.
    pub fn field_errors(&self, field: &str) -> &[String] {
        match self {
            Self::RequestFailed { field_errors, .. } => field_errors.get(field).map(Vec::as_slice).unwrap_or_default(),
            _ => &[],
        }
    }
}

fn request_failed_message(status: u16) -> String {
    format!("request failed with status {status}")
}

/// Decoded error body: an optional summary plus per-field messages.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BackendFailure {
    pub message: Option<String>,
    pub errors: BTreeMap<String, Vec<String>>,
}

#[derive(Deserialize)]
struct RawFailure {
    #[serde(default, alias = "error", alias = "detail")]
    message: Option<String>,
    #[serde(default)]
    errors: BTreeMap<String, FieldMessages>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FieldMessages {
    One(String),
    Many(Vec<String>),
}

impl BackendFailure {
    /// Parse an error body. Anything unrecognized yields an empty failure.
    pub fn parse(body: &str) -> Self {
        let Ok(raw) = serde_json::from_str::<RawFailure>(body) else {
            return Self::default();
        };
        let errors = raw
            .errors
            .into_iter()
            .map(|(field, messages)| {
                let list = match messages {
                    FieldMessages::One(m) => vec![m],
                    FieldMessages::Many(list) => list,
                };
                (field, list)
            })
            .collect();
        Self { message: raw.message, errors }
    }
}
