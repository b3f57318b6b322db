use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_accepts_numeric_and_string_ids() {
    let numeric: User = serde_json::from_value(serde_json::json!({ "id": 42, "email": "a@b.com" })).unwrap();
    assert_eq!(numeric.id, "42");
    let text: User = serde_json::from_value(serde_json::json!({ "id": "u-1" })).unwrap();
    assert_eq!(text.id, "u-1");
}

#[test]
fn user_rejects_non_scalar_id() {
    let result = serde_json::from_value::<User>(serde_json::json!({ "id": { "nested": true } }));
    assert!(result.is_err());
}

#[test]
fn user_preserves_unknown_fields() {
    let raw = serde_json::json!({
        "id": "7",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": "ada@example.edu",
        "user_type": "admin",
        "phone": "555-0100",
    });
    let user: User = serde_json::from_value(raw).unwrap();
    assert_eq!(user.user_type.as_deref(), Some("admin"));
    assert_eq!(user.extra.get("phone"), Some(&serde_json::json!("555-0100")));

    let reparsed: User = serde_json::from_str(&serde_json::to_string(&user).unwrap()).unwrap();
    assert_eq!(reparsed, user);
}

#[test]
fn display_name_prefers_full_name_then_email_then_id() {
    let mut user = User::new("1", "a@b.com");
    assert_eq!(user.display_name(), "a@b.com");
    user.first_name = Some("Ada".to_owned());
    assert_eq!(user.display_name(), "Ada");
    user.last_name = Some(" Lovelace ".to_owned());
    assert_eq!(user.display_name(), "Ada Lovelace");
    user.first_name = None;
    user.last_name = None;
    user.email = None;
    assert_eq!(user.display_name(), "1");
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn sign_in_response_accepts_access_token_alias() {
    let body = serde_json::json!({ "access_token": "tok", "user": { "id": 1 } });
    let parsed: SignInResponse = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.token, "tok");
    assert_eq!(parsed.user.id, "1");
}

#[test]
fn sign_in_response_rejects_blank_token() {
    for token in ["", "   "] {
        let body = serde_json::json!({ "token": token, "user": { "id": 1 } });
        assert!(serde_json::from_value::<SignInResponse>(body).is_err());
    }
}

#[test]
fn sign_in_request_serializes_credentials() {
    let req = SignInRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "email": "a@b.com", "password": "pw" })
    );
}

// =============================================================
// Resource
// =============================================================

#[test]
fn resource_slugs_round_trip() {
    for resource in Resource::ALL {
        assert_eq!(Resource::from_slug(resource.slug()), Some(resource));
    }
    assert_eq!(Resource::from_slug("leads"), None);
}

#[test]
fn resource_paths_are_rooted() {
    assert_eq!(Resource::Subjects.endpoint(), "/subjects");
    assert_eq!(Resource::ExamRoutines.route(), "/exam-routines");
    assert_eq!(Resource::Faqs.label(), "FAQs");
}

// =============================================================
// Listing
// =============================================================

#[test]
fn listing_defaults_missing_data_to_empty() {
    let listing: Listing = serde_json::from_str("{}").unwrap();
    assert!(listing.data.is_empty());
    assert_eq!(listing.total, None);
    assert_eq!(listing.per_page, None);
}

#[test]
fn listing_reads_page_size_under_either_name() {
    let listing: Listing = serde_json::from_str(r#"{"data":[],"total":25,"per_page":10}"#).unwrap();
    assert_eq!(listing.per_page, Some(10));
    let listing: Listing = serde_json::from_str(r#"{"data":[],"limit":20}"#).unwrap();
    assert_eq!(listing.per_page, Some(20));
}

#[test]
fn item_title_uses_first_known_key() {
    assert_eq!(Listing::item_title(&serde_json::json!({ "title": "Open day" })), "Open day");
    assert_eq!(Listing::item_title(&serde_json::json!({ "question": "When?" })), "When?");
    assert_eq!(Listing::item_title(&serde_json::json!({ "id": 9 })), "9");
    assert_eq!(Listing::item_title(&serde_json::json!({})), "untitled");
}
