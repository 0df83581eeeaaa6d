//! Line ingestion for toptalk.
//!
//! Streams raw log lines from a file or any buffered reader, parses each
//! one and feeds the valid ones into the aggregate store, one line at a
//! time, synchronously.

use std::io::BufRead;
use std::path::Path;

use toptalk_core::error::{Result, ToptalkError};
use toptalk_core::parser;
use tracing::{debug, warn};

use crate::store::TalkerStore;

// ── IngestStats ───────────────────────────────────────────────────────────────

/// Counters describing one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Total lines consumed from the input.
    pub lines_read: u64,
    /// Lines carrying a valid `SRC=` token that reached the store.
    pub lines_aggregated: u64,
    /// Lines without a valid source token, plus undecodable lines.
    pub lines_skipped: u64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Ingest every line from `reader` into `store`.
///
/// Invalid lines are counted and skipped, never an error. Lines that are
/// not valid UTF-8 are skipped as well; any other read error aborts the
/// run. A store growth failure is propagated so the caller knows a sample
/// was not counted. Line length is unbounded.
pub fn ingest<R: BufRead>(reader: R, store: &mut TalkerStore) -> Result<IngestStats> {
    let mut stats = IngestStats::default();

    for line_result in reader.lines() {
        let line = match line_result {
            Ok(l) => l,
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                debug!("Skipping undecodable line: {}", e);
                stats.lines_read += 1;
                stats.lines_skipped += 1;
                continue;
            }
            Err(e) => return Err(ToptalkError::Io(e)),
        };
        stats.lines_read += 1;

        match parser::parse(&line) {
            Some(parsed) => {
                store.add(&parsed.source, parsed.bytes)?;
                stats.lines_aggregated += 1;
            }
            None => stats.lines_skipped += 1,
        }
    }

    debug!(
        "Ingested {} lines: {} aggregated, {} skipped",
        stats.lines_read, stats.lines_aggregated, stats.lines_skipped
    );

    Ok(stats)
}

/// Ingest a log file from disk.
///
/// The open failure carries the offending path in the error.
pub fn ingest_file(path: &Path, store: &mut TalkerStore) -> Result<IngestStats> {
    let file = std::fs::File::open(path).map_err(|source| {
        warn!("Failed to open input {}: {}", path.display(), source);
        ToptalkError::FileRead {
            path: path.to_path_buf(),
            source,
        }
    })?;
    ingest(std::io::BufReader::new(file), store)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
