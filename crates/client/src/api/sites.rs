//! Site-listing endpoint.

use crate::client::SearchConsoleClient;
use crate::error::SearchConsoleResult;
use crate::types::SitesListResponse;

/// Sites API for listing verified properties.
pub struct SitesApi<'a> {
    client: &'a SearchConsoleClient,
}

impl<'a> SitesApi<'a> {
    pub(crate) fn new(client: &'a SearchConsoleClient) -> Self {
        Self { client }
    }

    /// List all properties visible to the current credential.
    pub async fn list(&self) -> SearchConsoleResult<SitesListResponse> {
        let token = self.client.access_token().await?;
        self.client.http.get("/webmasters/v3/sites", &token).await
    }
}
