//! Configuration types for the Search Console client.

use std::time::Duration;
use url::Url;

/// Base URL of the Search Console API.
pub const DEFAULT_BASE_URL: &str = "https://searchconsole.googleapis.com";

/// Configuration for the Search Console client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API. Overridable for tests and proxies.
    pub base_url: Url,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(30),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"))
    }
}
