// Standalone MCP server binary

use anyhow::Result;
use searchconsole_client::SearchConsoleClient;
use searchconsole_mcp::server::McpServer;
use searchconsole_mcp::tools::{
    ListSitemapsTool, ListSitesTool, QuerySearchAnalyticsTool, ToolRegistry,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol; logs must stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Search Console MCP server starting...");

    // Discovers Application Default Credentials; honors SEARCHCONSOLE_BASE_URL.
    let client = SearchConsoleClient::from_env().await?;

    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(ListSitesTool::new(client.clone())));
    registry.register(Arc::new(QuerySearchAnalyticsTool::new(client.clone())));
    registry.register(Arc::new(ListSitemapsTool::new(client)));

    tracing::info!("Registered {} tools", registry.len());

    let server = McpServer::new(registry);
    server.run().await
}
