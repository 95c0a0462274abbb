//! # Search Console client
//!
//! Typed async client for the Google Search Console API, covering the three
//! read-only resources the MCP server exposes: sites, search analytics and
//! sitemaps.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use searchconsole_client::{SearchConsoleClient, SearchConsoleResult};
//!
//! #[tokio::main]
//! async fn main() -> SearchConsoleResult<()> {
//!     // Discovers Application Default Credentials.
//!     let client = SearchConsoleClient::from_env().await?;
//!
//!     let sites = client.sites().list().await?;
//!     for site in sites.site_entry {
//!         println!("{}", site.site_url);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;

// Re-export main client
pub use client::{SearchConsoleClient, SearchConsoleClientBuilder, BASE_URL_ENV};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{SearchConsoleError, SearchConsoleResult};

// Re-export auth seam
pub use auth::{AccessTokenProvider, AdcTokenProvider, StaticTokenProvider, READONLY_SCOPE};

// Re-export request/response types
pub use types::{
    AggregationType, Dimension, DimensionFilter, DimensionFilterGroup, FilterOperator,
    SearchAnalyticsQuery, SearchAnalyticsResponse, SearchAnalyticsRow, SearchType, SiteEntry,
    SitemapsListResponse, Sitemap, SitesListResponse,
};
