//! Full-page navigation used when a session is lost.
//!
//! A hard redirect reloads the document, discarding every mounted component
//! and in-memory signal. Soft route changes go through `leptos_router` instead.

/// Performs document-level redirects.
pub trait Navigator: Send + Sync {
    fn hard_redirect(&self, path: &str);
}

/// Sets `window.location.href`. No-op outside the `hydrate` build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn hard_redirect(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(path) {
                    leptos::logging::warn!("redirect to {path} failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}
