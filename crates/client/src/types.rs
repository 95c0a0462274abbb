//! Value objects for Search Console requests and responses.
//!
//! Everything here is a transient, request-scoped view of the upstream JSON.
//! Optional upstream fields get explicit serde defaults so that callers
//! never re-derive them.

use serde::{Deserialize, Serialize};

/// Grouping dimension for search-analytics rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Query,
    Page,
    Date,
    Country,
    Device,
    SearchAppearance,
}

impl Dimension {
    /// Upstream spelling of the dimension.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Page => "page",
            Self::Date => "date",
            Self::Country => "country",
            Self::Device => "device",
            Self::SearchAppearance => "searchAppearance",
        }
    }
}

/// Match operator for a dimension filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOperator {
    /// The upstream default; the only place "contains" is assumed.
    #[default]
    Contains,
    Equals,
    NotContains,
    NotEquals,
    IncludingRegex,
    ExcludingRegex,
}

/// Which search surface to query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchType {
    #[default]
    Web,
    Image,
    Video,
    News,
    Discover,
    GoogleNews,
}

/// How rows for one site are aggregated upstream.
///
/// Omitted from the request entirely when unset, so the API auto-selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AggregationType {
    Auto,
    ByPage,
    ByProperty,
}

/// One filter clause: dimension, operator, match expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionFilter {
    pub dimension: Dimension,
    #[serde(default)]
    pub operator: FilterOperator,
    pub expression: String,
}

/// A set of filter clauses combined with implicit AND semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionFilterGroup {
    pub filters: Vec<DimensionFilter>,
}

/// Request body for the search-analytics query endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAnalyticsQuery {
    pub start_date: String,
    pub end_date: String,
    pub dimensions: Vec<Dimension>,
    pub row_limit: u32,
    pub start_row: u32,
    #[serde(rename = "type")]
    pub search_type: SearchType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation_type: Option<AggregationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_filter_groups: Option<Vec<DimensionFilterGroup>>,
}

/// One analytics result row.
///
/// Clicks and impressions are JSON numbers upstream; metrics absent from a
/// row default to 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchAnalyticsRow {
    #[serde(default)]
    pub keys: Vec<String>,
    #[serde(default)]
    pub clicks: f64,
    #[serde(default)]
    pub impressions: f64,
    #[serde(default)]
    pub ctr: f64,
    #[serde(default)]
    pub position: f64,
}

/// Response of the search-analytics query endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchAnalyticsResponse {
    #[serde(default)]
    pub rows: Vec<SearchAnalyticsRow>,
}

/// A verified Search Console property.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteEntry {
    pub site_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission_level: Option<String>,
}

/// Response of the site-listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitesListResponse {
    #[serde(default)]
    pub site_entry: Vec<SiteEntry>,
}

/// A submitted sitemap.
///
/// Warnings and errors are stringified counts (the upstream API serializes
/// int64 as JSON strings); absent values render as "0".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sitemap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_submitted: Option<String>,
    #[serde(default)]
    pub is_pending: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
}

/// Response of the sitemap-listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SitemapsListResponse {
    #[serde(default)]
    pub sitemap: Vec<Sitemap>,
}
