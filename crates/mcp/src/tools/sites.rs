// Site-listing tool

use crate::format::format_sites;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, Tool};
use anyhow::Result;
use searchconsole_client::SearchConsoleClient;

/// Tool to list verified Search Console properties
pub struct ListSitesTool {
    client: SearchConsoleClient,
}

impl ListSitesTool {
    pub fn new(client: SearchConsoleClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListSitesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_sites".to_string(),
            description:
                "Lists all verified properties in Google Search Console. Returns site URLs and permission levels."
                    .to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        let response = self.client.sites().list().await?;
        Ok(CallToolResult::text(format_sites(&response.site_entry)))
    }
}
