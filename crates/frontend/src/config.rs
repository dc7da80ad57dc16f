//! Injected API configuration.
//!
//! The base URL is not a module constant: `App` builds one `ApiConfig` at
//! mount and provides it through context, so every fetch helper receives
//! its endpoint, timeout and invoice language from one place.

/// Configuration of the REST API boundary
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost:3000/api`
    pub base_url: String,
    /// Per-request deadline; a request that outlives it fails like any
    /// other network error. No retries follow.
    pub timeout_ms: u32,
    /// Language tag forwarded to the invoice generator
    pub language: String,
}

impl ApiConfig {
    /// Derive the API location from the current window, API served on
    /// port 3000 of the same host.
    pub fn from_window() -> Self {
        let base = match web_sys::window() {
            Some(window) => {
                let location = window.location();
                let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
                let hostname = location
                    .hostname()
                    .unwrap_or_else(|_| "127.0.0.1".to_string());
                format!("{}//{}:3000/api", protocol, hostname)
            }
            None => String::new(),
        };
        Self {
            base_url: base,
            timeout_ms: 30_000,
            language: "en".to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
