//! Search-analytics query endpoint.

use crate::client::SearchConsoleClient;
use crate::error::SearchConsoleResult;
use crate::types::{SearchAnalyticsQuery, SearchAnalyticsResponse};

/// Search-analytics API for querying clicks, impressions, CTR and position.
pub struct SearchAnalyticsApi<'a> {
    client: &'a SearchConsoleClient,
}

impl<'a> SearchAnalyticsApi<'a> {
    pub(crate) fn new(client: &'a SearchConsoleClient) -> Self {
        Self { client }
    }

    /// Run one analytics query against a property.
    ///
    /// The site URL may be a URL-prefix property ("https://example.com/")
    /// or a domain property ("sc-domain:example.com"); either way it is
    /// sent as a single encoded path segment.
    pub async fn query(
        &self,
        site_url: &str,
        query: &SearchAnalyticsQuery,
    ) -> SearchConsoleResult<SearchAnalyticsResponse> {
        let token = self.client.access_token().await?;
        let path = format!(
            "/webmasters/v3/sites/{}/searchAnalytics/query",
            urlencoding::encode(site_url)
        );
        self.client.http.post(&path, &token, query).await
    }
}
