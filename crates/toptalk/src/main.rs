mod bootstrap;
mod render;

use anyhow::Result;
use toptalk_core::models::{RankMetric, TalkerRow};
use toptalk_core::settings::Settings;
use toptalk_data::analysis::analyze_input;
use toptalk_data::ranker;

fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("toptalk v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Top: {}, Metric: {}, Format: {}",
        settings.top,
        settings.metric,
        settings.format
    );

    let metric: RankMetric = settings.metric.parse()?;

    // Run the ingestion pipeline over the input file or stdin.
    let analysis = analyze_input(settings.input.as_deref())?;

    // Rank once and convert to output rows.
    let rows: Vec<TalkerRow> = ranker::top_n(&analysis.store, settings.top, metric)
        .into_iter()
        .map(|(source, stat)| TalkerRow {
            source,
            lines: stat.lines,
            bytes: stat.total_bytes,
        })
        .collect();

    match settings.format.as_str() {
        "json" => print!("{}", render::render_json(&rows, metric, &analysis.metadata)?),
        _ => print!("{}", render::render_table(&rows, &analysis.metadata)),
    }

    Ok(())
}
