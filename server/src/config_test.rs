use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.addr(), "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("HOST", "127.0.0.1"),
        ("PORT", " 8080 "),
        ("ADMIN_API_BASE_URL", "https://api.example.edu/v1/"),
    ]))
    .unwrap();
    assert_eq!(cfg.addr(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    assert_eq!(cfg.api_base_url, "https://api.example.edu/v1");
}

#[test]
fn rejects_invalid_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn rejects_invalid_host() {
    let err = ServerConfig::from_lookup(lookup(&[("HOST", "localhost:1")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost("localhost:1".to_owned()));
}

#[test]
fn rejects_non_http_api_base_url() {
    let err = ServerConfig::from_lookup(lookup(&[("ADMIN_API_BASE_URL", "api.example.edu")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidApiBaseUrl("api.example.edu".to_owned()));
}
