use super::*;

#[test]
fn new_trims_trailing_slashes_and_whitespace() {
    assert_eq!(ApiConfig::new(" https://api.example.edu/v1/ ").base_url, "https://api.example.edu/v1");
    assert_eq!(ApiConfig::new("https://api.example.edu//").base_url, "https://api.example.edu");
}

#[test]
fn url_for_joins_with_single_slash() {
    let config = ApiConfig::new("https://api.example.edu/v1");
    assert_eq!(config.url_for("/subjects"), "https://api.example.edu/v1/subjects");
    assert_eq!(config.url_for("subjects"), "https://api.example.edu/v1/subjects");
    assert_eq!(config.url_for("news/3?page=2"), "https://api.example.edu/v1/news/3?page=2");
}

#[test]
fn url_for_empty_endpoint_is_base() {
    let config = ApiConfig::new("https://api.example.edu/v1");
    assert_eq!(config.url_for(""), "https://api.example.edu/v1");
    assert_eq!(config.url_for("/"), "https://api.example.edu/v1");
}

#[test]
fn url_for_passes_absolute_urls_through() {
    let config = ApiConfig::new("https://api.example.edu/v1");
    assert_eq!(config.url_for("https://cdn.example.edu/x"), "https://cdn.example.edu/x");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn resolve_without_browser_uses_default() {
    assert_eq!(ApiConfig::resolve(), ApiConfig::default());
}
