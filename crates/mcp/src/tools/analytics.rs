// Search-analytics query tool

use crate::format::format_search_analytics;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_array, json_schema_integer, json_schema_object, json_schema_string,
    json_schema_string_enum, Tool,
};
use anyhow::{Context, Result};
use searchconsole_client::types::{
    AggregationType, Dimension, DimensionFilter, DimensionFilterGroup, SearchAnalyticsQuery,
    SearchType,
};
use searchconsole_client::SearchConsoleClient;
use serde::Deserialize;

/// Upstream bounds on the row window.
const MIN_ROW_LIMIT: i64 = 1;
const MAX_ROW_LIMIT: i64 = 25_000;

/// Tool to query search analytics: clicks, impressions, CTR, position
pub struct QuerySearchAnalyticsTool {
    client: SearchConsoleClient,
}

impl QuerySearchAnalyticsTool {
    pub fn new(client: SearchConsoleClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct QuerySearchAnalyticsArgs {
    site_url: String,
    start_date: String,
    end_date: String,
    #[serde(default)]
    dimensions: Option<Vec<Dimension>>,
    #[serde(default = "default_row_limit")]
    row_limit: i64,
    #[serde(default)]
    start_row: u32,
    #[serde(default)]
    dimension_filters: Option<Vec<DimensionFilter>>,
    #[serde(default)]
    search_type: SearchType,
    #[serde(default)]
    aggregation_type: Option<AggregationType>,
}

fn default_row_limit() -> i64 {
    1000
}

/// Normalize tool arguments into the upstream request body: dimensions
/// default to ["query"], the row limit is clamped into the upstream bounds,
/// filters are wrapped into a single AND group, and the aggregation field
/// stays absent unless supplied so the API auto-selects.
fn build_query(args: &QuerySearchAnalyticsArgs) -> SearchAnalyticsQuery {
    let dimensions = args
        .dimensions
        .clone()
        .unwrap_or_else(|| vec![Dimension::Query]);

    let dimension_filter_groups = match &args.dimension_filters {
        Some(filters) if !filters.is_empty() => Some(vec![DimensionFilterGroup {
            filters: filters.clone(),
        }]),
        _ => None,
    };

    SearchAnalyticsQuery {
        start_date: args.start_date.clone(),
        end_date: args.end_date.clone(),
        dimensions,
        row_limit: args.row_limit.clamp(MIN_ROW_LIMIT, MAX_ROW_LIMIT) as u32,
        start_row: args.start_row,
        search_type: args.search_type,
        aggregation_type: args.aggregation_type,
        dimension_filter_groups,
    }
}

#[async_trait::async_trait]
impl Tool for QuerySearchAnalyticsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "query_search_analytics".to_string(),
            description:
                "Query Google Search Console search analytics data. This is the main keyword research tool. Returns rows with clicks, impressions, CTR, and average position."
                    .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "site_url": json_schema_string(
                        "The site URL as it appears in Search Console (e.g. \"https://mychefai.com\" or \"sc-domain:mychefai.com\")"
                    ),
                    "start_date": json_schema_string("Start date in YYYY-MM-DD format"),
                    "end_date": json_schema_string("End date in YYYY-MM-DD format"),
                    "dimensions": json_schema_array(
                        json_schema_string_enum(
                            "Dimension to group by",
                            &["query", "page", "date", "country", "device", "searchAppearance"],
                        ),
                        "List of dimensions to group by. Defaults to [\"query\"]",
                    ),
                    "row_limit": json_schema_integer("Max rows to return (1-25000, default 1000)"),
                    "start_row": json_schema_integer("Starting row offset for pagination (default 0)"),
                    "dimension_filters": json_schema_array(
                        json_schema_object(
                            serde_json::json!({
                                "dimension": json_schema_string_enum(
                                    "The dimension to filter on",
                                    &["query", "page", "date", "country", "device", "searchAppearance"],
                                ),
                                "operator": json_schema_string_enum(
                                    "Match operator (default \"contains\")",
                                    &["contains", "equals", "notContains", "notEquals", "includingRegex", "excludingRegex"],
                                ),
                                "expression": json_schema_string("The filter value"),
                            }),
                            vec!["dimension", "expression"],
                        ),
                        "Optional list of dimension filters, combined with AND semantics",
                    ),
                    "search_type": json_schema_string_enum(
                        "Type of search results (default \"web\")",
                        &["web", "image", "video", "news", "discover", "googleNews"],
                    ),
                    "aggregation_type": json_schema_string_enum(
                        "How to aggregate results. If omitted, the API auto-selects",
                        &["auto", "byPage", "byProperty"],
                    ),
                }),
                vec!["site_url", "start_date", "end_date"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: QuerySearchAnalyticsArgs = serde_json::from_value(arguments)
            .context("Invalid arguments for query_search_analytics")?;

        let query = build_query(&args);
        let response = self
            .client
            .searchanalytics()
            .query(&args.site_url, &query)
            .await?;

        Ok(CallToolResult::text(format_search_analytics(
            &response.rows,
            &query.dimensions,
            query.start_row,
            query.row_limit,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchconsole_client::types::FilterOperator;
    use searchconsole_client::StaticTokenProvider;
    use std::sync::Arc;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SearchConsoleClient {
        SearchConsoleClient::builder()
            .base_url(server.uri())
            .token_provider(Arc::new(StaticTokenProvider::new("tok")))
            .build()
            .unwrap()
    }

    fn parse_args(value: serde_json::Value) -> QuerySearchAnalyticsArgs {
        serde_json::from_value(value).unwrap()
    }

    fn minimal_args() -> serde_json::Value {
        serde_json::json!({
            "site_url": "https://example.com",
            "start_date": "2025-01-01",
            "end_date": "2025-01-07"
        })
    }

    #[test]
    fn defaults_apply_when_optionals_are_omitted() {
        let args = parse_args(minimal_args());
        let query = build_query(&args);

        assert_eq!(query.dimensions, vec![Dimension::Query]);
        assert_eq!(query.row_limit, 1000);
        assert_eq!(query.start_row, 0);
        assert_eq!(query.search_type, SearchType::Web);
        assert!(query.aggregation_type.is_none());
        assert!(query.dimension_filter_groups.is_none());
    }

    #[test]
    fn null_dimensions_fall_back_to_query() {
        let mut raw = minimal_args();
        raw["dimensions"] = serde_json::Value::Null;
        let query = build_query(&parse_args(raw));
        assert_eq!(query.dimensions, vec![Dimension::Query]);
    }

    #[test]
    fn row_limit_clamps_into_upstream_bounds() {
        let mut raw = minimal_args();
        raw["row_limit"] = serde_json::json!(99999);
        assert_eq!(build_query(&parse_args(raw.clone())).row_limit, 25000);

        raw["row_limit"] = serde_json::json!(-5);
        assert_eq!(build_query(&parse_args(raw.clone())).row_limit, 1);

        raw["row_limit"] = serde_json::json!(500);
        assert_eq!(build_query(&parse_args(raw)).row_limit, 500);
    }

    #[test]
    fn filters_wrap_into_a_single_group() {
        let mut raw = minimal_args();
        raw["dimension_filters"] = serde_json::json!([
            {"dimension": "query", "operator": "contains", "expression": "keto"}
        ]);
        let query = build_query(&parse_args(raw));

        let groups = query.dimension_filter_groups.unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].filters.len(), 1);
        let filter = &groups[0].filters[0];
        assert_eq!(filter.dimension, Dimension::Query);
        assert_eq!(filter.operator, FilterOperator::Contains);
        assert_eq!(filter.expression, "keto");
    }

    #[test]
    fn empty_filter_list_is_dropped() {
        let mut raw = minimal_args();
        raw["dimension_filters"] = serde_json::json!([]);
        let query = build_query(&parse_args(raw));
        assert!(query.dimension_filter_groups.is_none());
    }

    #[test]
    fn filter_operator_defaults_to_contains_in_args() {
        let mut raw = minimal_args();
        raw["dimension_filters"] = serde_json::json!([
            {"dimension": "page", "expression": "/blog"}
        ]);
        let query = build_query(&parse_args(raw));
        let groups = query.dimension_filter_groups.unwrap();
        assert_eq!(groups[0].filters[0].operator, FilterOperator::Contains);
    }

    #[test]
    fn aggregation_type_passes_through_when_set() {
        let mut raw = minimal_args();
        raw["aggregation_type"] = serde_json::json!("byPage");
        let query = build_query(&parse_args(raw));
        assert_eq!(query.aggregation_type, Some(AggregationType::ByPage));

        let body = serde_json::to_value(&query).unwrap();
        assert_eq!(body["aggregationType"], "byPage");
    }

    #[test]
    fn omitted_aggregation_type_is_absent_from_the_body() {
        let query = build_query(&parse_args(minimal_args()));
        let body = serde_json::to_value(&query).unwrap();
        assert!(body.get("aggregationType").is_none());
    }

    #[tokio::test]
    async fn renders_markdown_table_from_upstream_rows() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(
                "/webmasters/v3/sites/https%3A%2F%2Fexample.com/searchAnalytics/query",
            ))
            .and(body_json(serde_json::json!({
                "startDate": "2025-01-01",
                "endDate": "2025-01-07",
                "dimensions": ["query"],
                "rowLimit": 1000,
                "startRow": 0,
                "type": "web"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "rows": [
                    {"keys": ["keto recipes"], "clicks": 120, "impressions": 5000, "ctr": 0.024, "position": 8.3},
                    {"keys": ["easy meals"], "clicks": 80, "impressions": 3000, "ctr": 0.0267, "position": 12.1}
                ]
            })))
            .mount(&server)
            .await;

        let tool = QuerySearchAnalyticsTool::new(client_for(&server));
        let result = tool.execute(minimal_args()).await.unwrap();

        let text = result.content[0].as_text();
        assert!(text.contains("Returned 2 rows (startRow=0, rowLimit=1000)."));
        assert!(text.contains("| Query | Clicks | Impressions | CTR | Position |"));
        assert!(text.contains("| keto recipes | 120 | 5000 | 2.40% | 8.3 |"));
    }

    #[tokio::test]
    async fn clamped_row_limit_is_sent_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(
                "/webmasters/v3/sites/https%3A%2F%2Fexample.com/searchAnalytics/query",
            ))
            .and(body_json(serde_json::json!({
                "startDate": "2025-01-01",
                "endDate": "2025-01-07",
                "dimensions": ["query"],
                "rowLimit": 25000,
                "startRow": 0,
                "type": "web"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"rows": []})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut raw = minimal_args();
        raw["row_limit"] = serde_json::json!(99999);

        let tool = QuerySearchAnalyticsTool::new(client_for(&server));
        let result = tool.execute(raw).await.unwrap();
        assert_eq!(
            result.content[0].as_text(),
            "No data found for the given query."
        );
    }

    #[tokio::test]
    async fn filters_reach_upstream_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(
                "/webmasters/v3/sites/https%3A%2F%2Fexample.com/searchAnalytics/query",
            ))
            .and(body_json(serde_json::json!({
                "startDate": "2025-01-01",
                "endDate": "2025-01-07",
                "dimensions": ["query"],
                "rowLimit": 1000,
                "startRow": 0,
                "type": "web",
                "dimensionFilterGroups": [
                    {"filters": [
                        {"dimension": "query", "operator": "contains", "expression": "keto"}
                    ]}
                ]
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"rows": []})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut raw = minimal_args();
        raw["dimension_filters"] = serde_json::json!([
            {"dimension": "query", "operator": "contains", "expression": "keto"}
        ]);

        let tool = QuerySearchAnalyticsTool::new(client_for(&server));
        let result = tool.execute(raw).await.unwrap();
        assert_eq!(
            result.content[0].as_text(),
            "No data found for the given query."
        );
    }
}
