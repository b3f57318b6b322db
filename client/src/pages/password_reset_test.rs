use super::*;

#[test]
fn validate_reset_input_trims_and_requires_value() {
    assert_eq!(validate_reset_input("  a@b.com  "), Ok("a@b.com".to_owned()));
    assert_eq!(validate_reset_input("   "), Err("Enter an email first."));
}

#[test]
fn validate_reset_input_rejects_non_email() {
    assert_eq!(validate_reset_input("admin"), Err("Enter a valid email address."));
}
