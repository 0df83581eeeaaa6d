use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ToptalkError;

// ── ParsedLine ────────────────────────────────────────────────────────────────

/// One successfully parsed log line, discarded right after aggregation.
///
/// A line without a usable `SRC=` token never becomes a `ParsedLine`;
/// [`crate::parser::parse`] returns `None` for it instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Value of the first `SRC=` token; never empty.
    pub source: String,
    /// Value of the first `BYTES=` (or `LEN=`) token, 0 when absent or
    /// malformed.
    pub bytes: u64,
}

// ── SourceStat ────────────────────────────────────────────────────────────────

/// Per-source statistics accumulated across a stream of parsed lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceStat {
    /// Number of valid lines attributed to this source.
    pub lines: u64,
    /// Sum of byte counts attributed to this source.
    pub total_bytes: u64,
}

impl SourceStat {
    /// Record one line carrying `bytes` payload bytes.
    ///
    /// The byte total saturates at `u64::MAX` instead of wrapping.
    pub fn record(&mut self, bytes: u64) {
        self.lines += 1;
        self.total_bytes = self.total_bytes.saturating_add(bytes);
    }
}

// ── RankMetric ────────────────────────────────────────────────────────────────

/// Ranking dimension for the top-N view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankMetric {
    /// Order sources by occurrence count.
    Lines,
    /// Order sources by accumulated byte total.
    Bytes,
}

impl RankMetric {
    /// The value of `stat` under this ranking dimension.
    pub fn value_of(self, stat: &SourceStat) -> u64 {
        match self {
            RankMetric::Lines => stat.lines,
            RankMetric::Bytes => stat.total_bytes,
        }
    }
}

impl FromStr for RankMetric {
    type Err = ToptalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lines" => Ok(RankMetric::Lines),
            "bytes" => Ok(RankMetric::Bytes),
            other => Err(ToptalkError::InvalidMetric(other.to_string())),
        }
    }
}

impl fmt::Display for RankMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankMetric::Lines => f.write_str("lines"),
            RankMetric::Bytes => f.write_str("bytes"),
        }
    }
}

// ── TalkerRow ─────────────────────────────────────────────────────────────────

/// One row of the ranked report, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalkerRow {
    /// Source identifier.
    pub source: String,
    /// Occurrence count.
    pub lines: u64,
    /// Accumulated byte total.
    pub bytes: u64,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
