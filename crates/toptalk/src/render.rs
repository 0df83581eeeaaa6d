//! Rendering of the ranked report for stdout.
//!
//! Two shapes: the classic fixed-width `src / lines / bytes` table, and a
//! JSON document carrying the rows plus the run metadata.

use std::fmt::Write;

use toptalk_core::formatting::format_count;
use toptalk_core::models::{RankMetric, TalkerRow};
use toptalk_data::analysis::AnalysisMetadata;

/// Render the fixed-width table followed by a one-line ingest summary.
pub fn render_table(rows: &[TalkerRow], metadata: &AnalysisMetadata) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{:<20}  {:>12}  {:>16}", "src", "lines", "bytes");
    for row in rows {
        let _ = writeln!(
            out,
            "{:<20}  {:>12}  {:>16}",
            row.source,
            format_count(row.lines),
            format_count(row.bytes)
        );
    }

    let _ = writeln!(
        out,
        "\n{} sources, {} lines read, {} skipped",
        format_count(metadata.distinct_sources as u64),
        format_count(metadata.lines_read),
        format_count(metadata.lines_skipped)
    );

    out
}

/// Render the JSON report document.
pub fn render_json(
    rows: &[TalkerRow],
    metric: RankMetric,
    metadata: &AnalysisMetadata,
) -> anyhow::Result<String> {
    let doc = serde_json::json!({
        "generated_at": metadata.generated_at,
        "metric": metric,
        "rows": rows,
        "lines_read": metadata.lines_read,
        "lines_aggregated": metadata.lines_aggregated,
        "lines_skipped": metadata.lines_skipped,
        "distinct_sources": metadata.distinct_sources,
    });
    Ok(serde_json::to_string_pretty(&doc)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
