//! API endpoint groups, one per upstream resource.

pub mod searchanalytics;
pub mod sitemaps;
pub mod sites;

pub use searchanalytics::SearchAnalyticsApi;
pub use sitemaps::SitemapsApi;
pub use sites::SitesApi;
