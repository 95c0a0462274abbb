//! Main client for the Search Console API.

use crate::api::{SearchAnalyticsApi, SitemapsApi, SitesApi};
use crate::auth::{AccessTokenProvider, AdcTokenProvider};
use crate::config::ClientConfig;
use crate::error::{SearchConsoleError, SearchConsoleResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "SEARCHCONSOLE_BASE_URL";

/// Client for the Search Console API.
///
/// Cheap to clone; concurrent callers share the underlying HTTP client and
/// token provider and need no coordination.
#[derive(Clone)]
pub struct SearchConsoleClient {
    token_provider: Arc<dyn AccessTokenProvider>,
    pub(crate) http: HttpTransport,
}

impl SearchConsoleClient {
    /// Create a new client builder.
    pub fn builder() -> SearchConsoleClientBuilder {
        SearchConsoleClientBuilder::new()
    }

    /// Create a client from ambient configuration: Application Default
    /// Credentials plus an optional `SEARCHCONSOLE_BASE_URL` override.
    pub async fn from_env() -> SearchConsoleResult<Self> {
        let provider = AdcTokenProvider::new().await?;
        let mut builder = Self::builder().token_provider(Arc::new(provider));
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }

    fn from_config(
        config: ClientConfig,
        token_provider: Arc<dyn AccessTokenProvider>,
    ) -> SearchConsoleResult<Self> {
        let http = HttpTransport::new(Arc::new(config))?;

        Ok(Self {
            token_provider,
            http,
        })
    }

    /// Get the sites API.
    pub fn sites(&self) -> SitesApi<'_> {
        SitesApi::new(self)
    }

    /// Get the search-analytics API.
    pub fn searchanalytics(&self) -> SearchAnalyticsApi<'_> {
        SearchAnalyticsApi::new(self)
    }

    /// Get the sitemaps API.
    pub fn sitemaps(&self) -> SitemapsApi<'_> {
        SitemapsApi::new(self)
    }

    /// Acquire a fresh read-scoped token for one API call.
    pub(crate) async fn access_token(&self) -> SearchConsoleResult<String> {
        self.token_provider.access_token().await
    }
}

#[cfg(test)]
impl SearchConsoleClient {
    /// Client wired to a mock server with a fixed token.
    pub(crate) fn for_tests(base_url: &str, token: &str) -> Self {
        Self::builder()
            .base_url(base_url)
            .token_provider(Arc::new(crate::auth::StaticTokenProvider::new(token)))
            .build()
            .unwrap()
    }
}

/// Builder for creating a SearchConsoleClient.
pub struct SearchConsoleClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    token_provider: Option<Arc<dyn AccessTokenProvider>>,
}

impl SearchConsoleClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            token_provider: None,
        }
    }

    /// Override the API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the token provider.
    pub fn token_provider(mut self, provider: Arc<dyn AccessTokenProvider>) -> Self {
        self.token_provider = Some(provider);
        self
    }

    /// Build the client.
    pub fn build(self) -> SearchConsoleResult<SearchConsoleClient> {
        let token_provider = self
            .token_provider
            .ok_or_else(|| SearchConsoleError::Config("token_provider is required".to_string()))?;

        let mut config = match self.base_url {
            Some(raw) => ClientConfig::new(Url::parse(&raw)?),
            None => ClientConfig::default(),
        };
        config.timeout = self.timeout;

        SearchConsoleClient::from_config(config, token_provider)
    }
}

impl Default for SearchConsoleClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
