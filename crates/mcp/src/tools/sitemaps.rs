// Sitemap-listing tool

use crate::format::format_sitemaps;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, json_schema_string, Tool};
use anyhow::{Context, Result};
use searchconsole_client::SearchConsoleClient;
use serde::Deserialize;

/// Tool to list submitted sitemaps for a property
pub struct ListSitemapsTool {
    client: SearchConsoleClient,
}

impl ListSitemapsTool {
    pub fn new(client: SearchConsoleClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct ListSitemapsArgs {
    site_url: String,
}

#[async_trait::async_trait]
impl Tool for ListSitemapsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_sitemaps".to_string(),
            description: "Lists submitted sitemaps for a Search Console property.".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "site_url": json_schema_string(
                        "The site URL as it appears in Search Console (e.g. \"https://mychefai.com\" or \"sc-domain:mychefai.com\")"
                    )
                }),
                vec!["site_url"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ListSitemapsArgs =
            serde_json::from_value(arguments).context("Invalid arguments for list_sitemaps")?;

        let response = self.client.sitemaps().list(&args.site_url).await?;
        Ok(CallToolResult::text(format_sitemaps(&response.sitemap)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchconsole_client::StaticTokenProvider;
    use std::sync::Arc;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SearchConsoleClient {
        SearchConsoleClient::builder()
            .base_url(server.uri())
            .token_provider(Arc::new(StaticTokenProvider::new("tok")))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn renders_sitemap_blocks() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(
                "/webmasters/v3/sites/https%3A%2F%2Fexample.com/sitemaps",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "sitemap": [
                    {
                        "path": "https://example.com/sitemap.xml",
                        "lastSubmitted": "2025-01-15T10:00:00Z",
                        "isPending": false,
                        "warnings": "0",
                        "errors": "0"
                    }
                ]
            })))
            .mount(&server)
            .await;

        let tool = ListSitemapsTool::new(client_for(&server));
        let result = tool
            .execute(serde_json::json!({"site_url": "https://example.com"}))
            .await
            .unwrap();

        let text = result.content[0].as_text();
        assert!(text.contains("- https://example.com/sitemap.xml"));
        assert!(text.contains("Last submitted: 2025-01-15T10:00:00Z"));
        assert!(text.contains("Pending: False | Warnings: 0 | Errors: 0"));
    }

    #[tokio::test]
    async fn empty_sitemap_list_returns_fixed_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(
                "/webmasters/v3/sites/https%3A%2F%2Fexample.com/sitemaps",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"sitemap": []})))
            .mount(&server)
            .await;

        let tool = ListSitemapsTool::new(client_for(&server));
        let result = tool
            .execute(serde_json::json!({"site_url": "https://example.com"}))
            .await
            .unwrap();
        assert_eq!(result.content[0].as_text(), "No sitemaps found.");
    }

    #[tokio::test]
    async fn missing_site_url_is_an_argument_error() {
        let server = MockServer::start().await;
        let tool = ListSitemapsTool::new(client_for(&server));
        let result = tool.execute(serde_json::json!({})).await;
        assert!(result.is_err());
    }
}
