use futures::executor::block_on;

use super::*;
use crate::net::test_support::{harness, signed_in};
use crate::net::transport::HttpResponse;

#[test]
fn list_endpoint_clamps_page_to_one() {
    assert_eq!(list_endpoint(Resource::Subjects, 0), "/subjects?page=1");
    assert_eq!(list_endpoint(Resource::ExamRoutines, 3), "/exam-routines?page=3");
}

#[test]
fn sign_in_posts_credentials_without_token() {
    let h = harness(vec![Ok(HttpResponse::new(
        200,
        r#"{"token":"tok123","user":{"id":1,"email":"a@b.com","user_type":"admin"}}"#,
    ))]);
    let resp = block_on(sign_in(&h.gateway, "a@b.com", "secret")).unwrap();

    assert_eq!(resp.token, "tok123");
    assert_eq!(resp.user.id, "1");
    let sent = h.transport.last();
    assert_eq!(sent.url, "https://api.example.edu/auth/login");
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.header("Authorization"), None);
    assert_eq!(sent.body, Some(serde_json::json!({ "email": "a@b.com", "password": "secret" })));
}

#[test]
fn sign_in_rejection_surfaces_backend_message() {
    let h = harness(vec![Ok(HttpResponse::new(401, r#"{"message":"Invalid credentials"}"#))]);
    let err = block_on(sign_in(&h.gateway, "a@b.com", "wrong")).unwrap_err();
    assert_eq!(err.user_message(), "Invalid credentials");
    assert!(h.navigator.redirects().is_empty());
}

#[test]
fn sign_in_with_blank_token_is_malformed() {
    let h = harness(vec![Ok(HttpResponse::new(200, r#"{"token":"","user":{"id":1}}"#))]);
    let err = block_on(sign_in(&h.gateway, "a@b.com", "secret")).unwrap_err();
    assert!(matches!(err, ApiError::MalformedResponse(_)));
    assert!(h.navigator.redirects().is_empty());
}

#[test]
fn sign_up_reports_field_errors() {
    let h = harness(vec![Ok(HttpResponse::new(422, r#"{"errors":{"email":["Already registered."]}}"#))]);
    let form = SignUpRequest {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.edu".to_owned(),
        password: "secret123".to_owned(),
    };
    let err = block_on(sign_up(&h.gateway, &form)).unwrap_err();
    assert_eq!(err.field_errors("email"), ["Already registered.".to_owned()]);
    assert_eq!(h.transport.last().url, "https://api.example.edu/auth/register");
}

#[test]
fn password_reset_accepts_empty_ack() {
    let h = harness(vec![Ok(HttpResponse::new(200, "{}"))]);
    let ack = block_on(request_password_reset(&h.gateway, "a@b.com")).unwrap();
    assert_eq!(ack, Ack::default());
    assert_eq!(h.transport.last().body, Some(serde_json::json!({ "email": "a@b.com" })));
}

#[test]
fn list_resource_uses_bearer_and_decodes_listing() {
    let h = signed_in(vec![Ok(HttpResponse::new(200, r#"{"data":[{"id":1,"title":"Physics"}],"total":1}"#))]);
    let listing = block_on(list_resource(&h.gateway, Resource::Subjects, 1)).unwrap();
    assert_eq!(listing.total, Some(1));
    assert_eq!(Listing::item_title(&listing.data[0]), "Physics");
    assert_eq!(h.transport.last().header("Authorization"), Some("Bearer tok123"));
}

#[test]
fn list_resource_signed_out_never_sends() {
    let h = harness(vec![]);
    let err = block_on(list_resource(&h.gateway, Resource::News, 1)).unwrap_err();
    assert_eq!(err, ApiError::AuthenticationRequired);
    assert_eq!(h.transport.calls(), 0);
}
