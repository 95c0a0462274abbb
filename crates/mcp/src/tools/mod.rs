pub mod analytics;
pub mod sitemaps;
pub mod sites;
mod registry;

pub use analytics::QuerySearchAnalyticsTool;
pub use registry::{
    json_schema_array, json_schema_integer, json_schema_object, json_schema_string,
    json_schema_string_enum, Tool, ToolRegistry,
};
pub use sitemaps::ListSitemapsTool;
pub use sites::ListSitesTool;
