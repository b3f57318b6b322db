//! Typed REST endpoints used by the console screens.
//!
//! Auth endpoints go through [`ApiGateway::public_request`]; everything else
//! goes through [`ApiGateway::request`] and inherits its 401 handling.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::gateway::{ApiGateway, RequestOptions};
use super::transport::Method;
use super::types::{Ack, Listing, PasswordResetRequest, Resource, SignInRequest, SignInResponse, SignUpRequest};

pub const SIGN_IN_ENDPOINT: &str = "/auth/login";
pub const SIGN_UP_ENDPOINT: &str = "/auth/register";
pub const PASSWORD_RESET_ENDPOINT: &str = "/auth/password-reset";

fn list_endpoint(resource: Resource, page: u32) -> String {
    format!("{}?page={}", resource.endpoint(), page.max(1))
}

/// Exchange credentials for a token and profile via `POST /auth/login`.
///
/// # Errors
///
/// Returns [`ApiError::RequestFailed`] for rejected credentials.
pub async fn sign_in(gateway: &ApiGateway, email: &str, password: &str) -> Result<SignInResponse, ApiError> {
    let body = SignInRequest { email: email.to_owned(), password: password.to_owned() };
    let options = RequestOptions::json(Method::Post, &body)?;
    gateway.public_request(SIGN_IN_ENDPOINT, options).await
}

/// Register a console account via `POST /auth/register`.
///
/// # Errors
///
/// Returns [`ApiError::RequestFailed`] with field errors on validation failure.
pub async fn sign_up(gateway: &ApiGateway, form: &SignUpRequest) -> Result<Ack, ApiError> {
    let options = RequestOptions::json(Method::Post, form)?;
    gateway.public_request(SIGN_UP_ENDPOINT, options).await
}

/// Ask the backend to email a reset link via `POST /auth/password-reset`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend rejects the address or is unreachable.
pub async fn request_password_reset(gateway: &ApiGateway, email: &str) -> Result<Ack, ApiError> {
    let body = PasswordResetRequest { email: email.to_owned() };
    let options = RequestOptions::json(Method::Post, &body)?;
    gateway.public_request(PASSWORD_RESET_ENDPOINT, options).await
}

/// Fetch one page of a content collection.
///
/// # Errors
///
/// Any [`ApiError`]; auth failures have already redirected to sign-in.
pub async fn list_resource(gateway: &ApiGateway, resource: Resource, page: u32) -> Result<Listing, ApiError> {
    gateway.request(&list_endpoint(resource, page), RequestOptions::get()).await
}
