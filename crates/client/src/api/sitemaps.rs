//! Sitemap-listing endpoint.

use crate::client::SearchConsoleClient;
use crate::error::SearchConsoleResult;
use crate::types::SitemapsListResponse;

/// Sitemaps API for listing submitted sitemaps.
pub struct SitemapsApi<'a> {
    client: &'a SearchConsoleClient,
}

impl<'a> SitemapsApi<'a> {
    pub(crate) fn new(client: &'a SearchConsoleClient) -> Self {
        Self { client }
    }

    /// List sitemaps submitted for a property.
    pub async fn list(&self, site_url: &str) -> SearchConsoleResult<SitemapsListResponse> {
        let token = self.client.access_token().await?;
        let path = format!(
            "/webmasters/v3/sites/{}/sitemaps",
            urlencoding::encode(site_url)
        );
        self.client.http.get(&path, &token).await
    }
}
