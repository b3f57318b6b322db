use super::*;

#[test]
fn auth_screens_are_public() {
    assert_eq!(classify("/signin"), RouteClass::Public);
    assert_eq!(classify("/signup"), RouteClass::Public);
    assert_eq!(classify("/password-reset"), RouteClass::Public);
}

#[test]
fn everything_else_is_protected() {
    for path in ["/", "/dashboard", "/leads", "/subjects", "/news/create", "/signin/extra"] {
        assert_eq!(classify(path), RouteClass::Protected, "{path}");
    }
}

#[test]
fn classify_ignores_trailing_slash_query_and_fragment() {
    assert!(is_public("/signin/"));
    assert!(is_public("/signin?next=/subjects"));
    assert!(is_public("/signup#form"));
    assert!(!is_public("/?signin"));
}

#[test]
fn empty_path_is_home() {
    assert_eq!(classify(""), RouteClass::Protected);
    assert_eq!(normalize_path(""), HOME_PATH);
    assert_eq!(normalize_path("///"), HOME_PATH);
}

#[test]
fn home_is_not_public() {
    assert!(!PUBLIC_PATHS.contains(&HOME_PATH));
}

#[test]
fn segments_match_paths() {
    assert_eq!(format!("/{SIGN_IN_SEGMENT}"), SIGN_IN_PATH);
    assert_eq!(format!("/{SIGN_UP_SEGMENT}"), SIGN_UP_PATH);
    assert_eq!(format!("/{PASSWORD_RESET_SEGMENT}"), PASSWORD_RESET_PATH);
}
