//! Backend location for the request gateway.
//!
//! Resolution order: the `api-base-url` meta tag rendered by the server shell,
//! then the compile-time `ADMIN_API_BASE_URL`, then [`DEFAULT_API_BASE_URL`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Name of the `<meta>` tag carrying the runtime base URL.
pub const API_BASE_URL_META: &str = "api-base-url";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("ADMIN_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    /// Resolve the config for the current environment.
    pub fn resolve() -> Self {
        match read_meta_base_url() {
            Some(url) if !url.trim().is_empty() => Self::new(&url),
            _ => Self::default(),
        }
    }

    /// Join `endpoint` onto the base URL. Absolute URLs pass through.
    pub fn url_for(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.to_owned();
        }
        let path = endpoint.trim_start_matches('/');
        if path.is_empty() {
            return self.base_url.clone();
        }
        format!("{}/{path}", self.base_url)
    }
}

fn read_meta_base_url() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{API_BASE_URL_META}\"]");
        let element = document.query_selector(&selector).ok().flatten()?;
        element.get_attribute("content")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
