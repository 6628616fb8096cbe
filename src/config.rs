/// Connection settings for the remote store API
///
/// Configuration is in-code only. The defaults point at the public
/// fake store, which is what the browser talks to out of the box.

use std::time::Duration;

/// Public store used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Catalog client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Store base URL (e.g., "https://fakestoreapi.com")
    pub base_url: String,

    /// Per-request timeout (None = wait for the remote indefinitely)
    pub timeout: Option<Duration>,
}

impl CatalogConfig {
    /// Create a configuration for the given store
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
