//! Plain-text rendering of Search Console responses.
//!
//! Pure functions; empty inputs render the fixed "nothing to show" literals
//! so callers never special-case them.

use searchconsole_client::types::{Dimension, SearchAnalyticsRow, Sitemap, SiteEntry};

/// Render the site list as one bullet line per property.
pub fn format_sites(sites: &[SiteEntry]) -> String {
    if sites.is_empty() {
        return "No sites found.".to_string();
    }
    sites
        .iter()
        .map(|site| {
            format!(
                "- {} (permission: {})",
                site.site_url,
                site.permission_level.as_deref().unwrap_or("unknown")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render analytics rows as a summary line plus a Markdown table.
pub fn format_search_analytics(
    rows: &[SearchAnalyticsRow],
    dimensions: &[Dimension],
    start_row: u32,
    row_limit: u32,
) -> String {
    if rows.is_empty() {
        return "No data found for the given query.".to_string();
    }

    let mut lines = vec![
        format!(
            "Returned {} rows (startRow={}, rowLimit={}).",
            rows.len(),
            start_row,
            row_limit
        ),
        String::new(),
    ];

    let dim_headers = dimensions
        .iter()
        .map(|d| capitalize(d.as_str()))
        .collect::<Vec<_>>()
        .join(" | ");
    lines.push(format!(
        "| {} | Clicks | Impressions | CTR | Position |",
        dim_headers
    ));

    let separator = vec!["---"; dimensions.len() + 4].join(" | ");
    lines.push(format!("| {} |", separator));

    for row in rows {
        lines.push(format!(
            "| {} | {} | {} | {:.2}% | {:.1} |",
            row.keys.join(" | "),
            row.clicks,
            row.impressions,
            row.ctr * 100.0,
            row.position
        ));
    }

    lines.join("\n")
}

/// Render sitemaps as three-line blocks.
pub fn format_sitemaps(sitemaps: &[Sitemap]) -> String {
    if sitemaps.is_empty() {
        return "No sitemaps found.".to_string();
    }
    sitemaps
        .iter()
        .map(|sitemap| {
            format!(
                "- {}\n  Last submitted: {}\n  Pending: {} | Warnings: {} | Errors: {}",
                sitemap.path.as_deref().unwrap_or("unknown"),
                sitemap.last_submitted.as_deref().unwrap_or("unknown"),
                if sitemap.is_pending { "True" } else { "False" },
                sitemap.warnings.as_deref().unwrap_or("0"),
                sitemap.errors.as_deref().unwrap_or("0")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// First letter upper, remainder lower ("searchAppearance" -> "Searchappearance").
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
