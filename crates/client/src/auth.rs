//! Credential acquisition for the Search Console API.
//!
//! The actual OAuth2 flows (service-account exchange, metadata server,
//! gcloud user credentials) live in the `gcp_auth` crate; this module only
//! defines the provider seam and the read-only scope.

use crate::error::{SearchConsoleError, SearchConsoleResult};
use std::sync::Arc;

/// OAuth2 scope granting read-only access to Search Console data.
pub const READONLY_SCOPE: &str = "https://www.googleapis.com/auth/webmasters.readonly";

/// Source of short-lived access tokens.
///
/// A token is requested per API call; implementations must hand back a
/// non-expired token, refreshing internally when the cached one is stale.
#[async_trait::async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> SearchConsoleResult<String>;
}

/// Token provider backed by Google Application Default Credentials.
///
/// Resolution order (service-account file via
/// `GOOGLE_APPLICATION_CREDENTIALS`, workload identity, gcloud user
/// credentials) is handled entirely by `gcp_auth`.
pub struct AdcTokenProvider {
    provider: Arc<dyn gcp_auth::TokenProvider>,
}

impl AdcTokenProvider {
    /// Discover ambient credentials.
    ///
    /// Fails with [`SearchConsoleError::Auth`] when no credential source is
    /// configured in the environment.
    pub async fn new() -> SearchConsoleResult<Self> {
        let provider = gcp_auth::provider()
            .await
            .map_err(|e| SearchConsoleError::Auth(e.to_string()))?;
        Ok(Self { provider })
    }
}

#[async_trait::async_trait]
impl AccessTokenProvider for AdcTokenProvider {
    async fn access_token(&self) -> SearchConsoleResult<String> {
        let token = self
            .provider
            .token(&[READONLY_SCOPE])
            .await
            .map_err(|e| SearchConsoleError::Auth(e.to_string()))?;
        Ok(token.as_str().to_string())
    }
}

/// Token provider that always returns the same token.
///
/// Useful in tests and with pre-issued tokens.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait::async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> SearchConsoleResult<String> {
        Ok(self.token.clone())
    }
}
