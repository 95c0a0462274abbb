//! HTTP transport layer for the Search Console client.

use crate::config::ClientConfig;
use crate::error::{SearchConsoleError, SearchConsoleResult};
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;

/// HTTP transport for making API requests.
///
/// Tokens are re-acquired per call, so the bearer token is a per-request
/// argument rather than a default header.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> SearchConsoleResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Build a URL for the given path.
    fn build_url(&self, path: &str) -> SearchConsoleResult<url::Url> {
        self.config
            .base_url
            .join(path)
            .map_err(SearchConsoleError::InvalidUrl)
    }

    /// Turn a non-2xx response into an error, otherwise decode the body.
    async fn decode<T: DeserializeOwned>(response: Response) -> SearchConsoleResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchConsoleError::from_response(status.as_u16(), &body));
        }
        Ok(response.json().await?)
    }

    /// Execute an authenticated GET request.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> SearchConsoleResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request");

        let response = self.client.get(url).bearer_auth(token).send().await?;
        Self::decode(response).await
    }

    /// Execute an authenticated POST request with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> SearchConsoleResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "POST request");

        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }
}
