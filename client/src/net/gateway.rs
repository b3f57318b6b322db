//! Authenticated request gateway: the single path for identity-bearing calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens never build backend requests themselves. They call
//! [`ApiGateway::request`], which attaches the bearer token from the shared
//! [`AuthContext`], classifies the response, and owns the 401 contract.
//!
//! ERROR HANDLING
//! ==============
//! A missing token or a 401 response clears the session through
//! [`AuthContext::logout`] and hard-redirects to sign-in before the error is
//! returned, so no caller can observe a half-cleared session. Network,
//! request, and parse failures never touch the session.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, TransportError};
use super::transport::{BrowserTransport, HttpRequest, Method, Transport};
use crate::config::ApiConfig;
use crate::routes::SIGN_IN_PATH;
use crate::state::auth::AuthContext;
use crate::util::navigation::{BrowserNavigator, Navigator};

const AUTHORIZATION: &str = "Authorization";
const ACCEPT: &str = "Accept";
const CONTENT_TYPE: &str = "Content-Type";
const JSON: &str = "application/json";

/// Per-call method, extra headers, and JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::get()
    }
}

impl RequestOptions {
    fn with_method(method: Method, body: Option<serde_json::Value>) -> Self {
        Self { method, headers: Vec::new(), body }
    }

    pub fn get() -> Self {
        Self::with_method(Method::Get, None)
    }

    pub fn delete() -> Self {
        Self::with_method(Method::Delete, None)
    }

    pub fn post(body: serde_json::Value) -> Self {
        Self::with_method(Method::Post, Some(body))
    }

    pub fn put(body: serde_json::Value) -> Self {
        Self::with_method(Method::Put, Some(body))
    }

    pub fn patch(body: serde_json::Value) -> Self {
        Self::with_method(Method::Patch, Some(body))
    }

    /// Build options carrying `body` serialized as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidRequest`] if `body` does not serialize.
    pub fn json<T: Serialize>(method: Method, body: &T) -> Result<Self, TransportError> {
        let value = serde_json::to_value(body).map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
        Ok(Self::with_method(method, Some(value)))
    }

    /// Add a caller header. `Authorization` is always overridden by the gateway.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

#[derive(Clone)]
pub struct ApiGateway {
    config: ApiConfig,
    auth: AuthContext,
    transport: Arc<dyn Transport>,
    navigator: Arc<dyn Navigator>,
}

impl std::fmt::Debug for ApiGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiGateway").field("config", &self.config).finish_non_exhaustive()
    }
}

impl ApiGateway {
    pub fn new(
        config: ApiConfig,
        auth: AuthContext,
        transport: Arc<dyn Transport>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self { config, auth, transport, navigator }
    }

    /// Gateway wired to `fetch` and `window.location`.
    pub fn browser(config: ApiConfig, auth: AuthContext) -> Self {
        Self::new(config, auth, Arc::new(BrowserTransport), Arc::new(BrowserNavigator))
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    /// Issue an authenticated call and decode the JSON body as `R`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::AuthenticationRequired`] when no token is held; nothing is sent.
    /// - [`ApiError::SessionExpired`] on HTTP 401.
    /// - [`ApiError::RequestFailed`] on any other non-2xx status.
    /// - [`ApiError::MalformedResponse`] when a 2xx body does not decode.
    /// - [`ApiError::Network`] when no response arrives.
    ///
    /// The first two also clear the session and redirect to sign-in.
    pub async fn request<R: DeserializeOwned>(&self, endpoint: &str, options: RequestOptions) -> Result<R, ApiError> {
        let Some(token) = self.auth.token() else {
            self.expire_session(endpoint, "no token held");
            return Err(ApiError::AuthenticationRequired);
        };

        let request = self.build_request(endpoint, options, Some(&token));
        let response = self.transport.send(request).await?;

        if response.status == 401 {
            self.expire_session(endpoint, "token rejected");
            return Err(ApiError::SessionExpired);
        }
        if !response.is_success() {
            leptos::logging::warn!("{endpoint} failed with status {}", response.status);
            return Err(ApiError::request_failed(response.status, &response.body));
        }
        parse_body(&response.body)
    }

    /// Issue a call that needs no identity (sign-in, sign-up, password reset).
    ///
    /// No token is attached and a 401 is an ordinary
    /// [`ApiError::RequestFailed`]; the session is never touched.
    ///
    /// # Errors
    ///
    /// Same classification as [`ApiGateway::request`] minus the auth variants.
    pub async fn public_request<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<R, ApiError> {
        let request = self.build_request(endpoint, options, None);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::request_failed(response.status, &response.body));
        }
        parse_body(&response.body)
    }

    fn build_request(&self, endpoint: &str, options: RequestOptions, token: Option<&str>) -> HttpRequest {
        let headers = merge_headers(options.headers, token, options.body.is_some());
        HttpRequest {
            method: options.method,
            url: self.config.url_for(endpoint),
            headers,
            body: options.body,
        }
    }

    fn expire_session(&self, endpoint: &str, reason: &str) {
        self.auth.logout();
        self.navigator.hard_redirect(SIGN_IN_PATH);
        leptos::logging::warn!("session cleared on {endpoint}: {reason}");
    }
}

/// Caller headers first, defaults where absent, bearer last and exclusive.
fn merge_headers(caller: Vec<(String, String)>, token: Option<&str>, has_body: bool) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = caller
        .into_iter()
        .filter(|(name, _)| !(token.is_some() && name.eq_ignore_ascii_case(AUTHORIZATION)))
        .collect();
    let has = |headers: &[(String, String)], name: &str| headers.iter().any(|(k, _)| k.eq_ignore_ascii_case(name));

    if !has(&headers, ACCEPT) {
        headers.push((ACCEPT.to_owned(), JSON.to_owned()));
    }
    if has_body && !has(&headers, CONTENT_TYPE) {
        headers.push((CONTENT_TYPE.to_owned(), JSON.to_owned()));
    }
    if let Some(token) = token {
        headers.push((AUTHORIZATION.to_owned(), format!("Bearer {token}")));
    }
    headers
}

/// Decode a 2xx body. A blank body decodes as JSON `null`.
fn parse_body<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    let text = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(text).map_err(|e| ApiError::MalformedResponse(e.to_string()))
}
