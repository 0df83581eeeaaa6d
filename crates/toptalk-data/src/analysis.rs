//! Top-level ingestion pipeline for toptalk.
//!
//! Orchestrates input selection, line ingestion and metadata collection,
//! returning an [`AnalysisResult`] ready for ranking and rendering.

use std::io::BufRead;
use std::path::Path;

use chrono::Utc;
use toptalk_core::error::Result;
use tracing::debug;

use crate::reader::{self, IngestStats};
use crate::store::TalkerStore;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the populated store.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisMetadata {
    /// ISO-8601 timestamp when this result was generated.
    pub generated_at: String,
    /// Total lines consumed from the input.
    pub lines_read: u64,
    /// Lines that reached the aggregate store.
    pub lines_aggregated: u64,
    /// Lines without a valid source token.
    pub lines_skipped: u64,
    /// Number of distinct sources seen.
    pub distinct_sources: usize,
    /// Wall-clock seconds spent ingesting the input.
    pub ingest_time_seconds: f64,
}

/// The complete output of [`analyze_input`] / [`analyze_reader`].
#[derive(Debug)]
pub struct AnalysisResult {
    /// The populated aggregate store.
    pub store: TalkerStore,
    /// Metadata about this run.
    pub metadata: AnalysisMetadata,
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Run the full ingestion pipeline.
///
/// Reads from the file at `input` when given, otherwise from stdin. The
/// process runs to end-of-input; ranking happens once, afterwards, on the
/// returned store.
pub fn analyze_input(input: Option<&Path>) -> Result<AnalysisResult> {
    let mut store = TalkerStore::new();

    let ingest_start = std::time::Instant::now();
    let stats = match input {
        Some(path) => reader::ingest_file(path, &mut store)?,
        None => {
            let stdin = std::io::stdin();
            reader::ingest(stdin.lock(), &mut store)?
        }
    };
    let ingest_time = ingest_start.elapsed().as_secs_f64();

    Ok(finish(store, stats, ingest_time))
}

/// Run the pipeline over an arbitrary buffered reader.
///
/// Used when toptalk is embedded and the input is not a file or stdin.
pub fn analyze_reader<R: BufRead>(input: R) -> Result<AnalysisResult> {
    let mut store = TalkerStore::new();

    let ingest_start = std::time::Instant::now();
    let stats = reader::ingest(input, &mut store)?;
    let ingest_time = ingest_start.elapsed().as_secs_f64();

    Ok(finish(store, stats, ingest_time))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Assemble the result from the populated store and the run counters.
fn finish(store: TalkerStore, stats: IngestStats, ingest_time: f64) -> AnalysisResult {
    let metadata = AnalysisMetadata {
        generated_at: Utc::now().to_rfc3339(),
        lines_read: stats.lines_read,
        lines_aggregated: stats.lines_aggregated,
        lines_skipped: stats.lines_skipped,
        distinct_sources: store.len(),
        ingest_time_seconds: ingest_time,
    };

    debug!(
        "Analysis complete: {} distinct sources from {} lines in {:.3}s",
        metadata.distinct_sources, metadata.lines_read, metadata.ingest_time_seconds
    );

    AnalysisResult { store, metadata }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::TempDir;
    use toptalk_core::models::RankMetric;

    use crate::ranker;

    // ── analyze_reader ────────────────────────────────────────────────────────

    #[test]
    fn test_analyze_reader_example_stream() {
        let input = "SRC=10.0.0.1 BYTES=100\n\
                     SRC=10.0.0.2 LEN=50\n\
                     SRC=10.0.0.1 BYTES=20\n\
                     garbage no src\n";

        let result = analyze_reader(Cursor::new(input)).unwrap();

        assert_eq!(result.store.len(), 2);
        let first = result.store.get("10.0.0.1").unwrap();
        assert_eq!(first.lines, 2);
        assert_eq!(first.total_bytes, 120);
        let second = result.store.get("10.0.0.2").unwrap();
        assert_eq!(second.lines, 1);
        assert_eq!(second.total_bytes, 50);

        assert_eq!(result.metadata.lines_read, 4);
        assert_eq!(result.metadata.lines_aggregated, 3);
        assert_eq!(result.metadata.lines_skipped, 1);
        assert_eq!(result.metadata.distinct_sources, 2);
    }

    #[test]
    fn test_analyze_reader_top_by_bytes() {
        let input = "SRC=10.0.0.1 BYTES=100\n\
                     SRC=10.0.0.2 LEN=50\n\
                     SRC=10.0.0.1 BYTES=20\n";

        let result = analyze_reader(Cursor::new(input)).unwrap();
        let rows = ranker::top_n(&result.store, 1, RankMetric::Bytes);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, "10.0.0.1");
        assert_eq!(rows[0].1.lines, 2);
        assert_eq!(rows[0].1.total_bytes, 120);
    }

    #[test]
    fn test_analyze_reader_tie_on_count_orders_by_identifier() {
        let input = "SRC=10.0.0.2 BYTES=1\nSRC=10.0.0.1 BYTES=2\n";

        let result = analyze_reader(Cursor::new(input)).unwrap();
        let rows = ranker::top_n(&result.store, 2, RankMetric::Lines);

        assert_eq!(rows[0].0, "10.0.0.1");
        assert_eq!(rows[1].0, "10.0.0.2");
    }

    #[test]
    fn test_analyze_reader_empty_input() {
        let result = analyze_reader(Cursor::new("")).unwrap();
        assert!(result.store.is_empty());
        assert_eq!(result.metadata.lines_read, 0);
    }

    #[test]
    fn test_metadata_timestamp_is_rfc3339() {
        let result = analyze_reader(Cursor::new("SRC=a\n")).unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&result.metadata.generated_at).is_ok());
    }

    // ── analyze_input ─────────────────────────────────────────────────────────

    #[test]
    fn test_analyze_input_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("traffic.log");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "SRC=edge-1 BYTES=512").unwrap();
        writeln!(file, "SRC=edge-2 BYTES=128").unwrap();
        writeln!(file, "SRC=edge-1 BYTES=512").unwrap();

        let result = analyze_input(Some(&path)).unwrap();

        assert_eq!(result.metadata.distinct_sources, 2);
        assert_eq!(result.store.get("edge-1").unwrap().total_bytes, 1024);
    }

    #[test]
    fn test_analyze_input_missing_file_is_error() {
        let err = analyze_input(Some(Path::new("/tmp/toptalk-missing-input.log")));
        assert!(err.is_err());
    }
}
