//! Per-source aggregate store.
//!
//! Accumulates occurrence counts and byte totals for an unbounded,
//! a-priori-unknown set of source identifiers.

use std::collections::HashMap;

use toptalk_core::error::Result;
use toptalk_core::models::SourceStat;

/// Accumulator mapping each distinct source identifier to its statistics.
///
/// Backed by a hash map, giving amortized O(1) average insert/update per
/// call. Identifiers are compared byte-for-byte, case-sensitively, with no
/// normalization, and are stored unbounded — long identifiers are never
/// truncated. The store keeps every source it has seen: no eviction, no
/// capacity limit, no TTL. All mutation is single-threaded through
/// `&mut self`.
#[derive(Debug, Default)]
pub struct TalkerStore {
    stats: HashMap<String, SourceStat>,
}

impl TalkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one valid line attributed to `source`.
    ///
    /// Increments the occurrence count and adds `bytes` to the byte total,
    /// creating the entry on first sighting. When the map cannot grow to
    /// take a new entry, the failure is reported as
    /// `ToptalkError::StoreCapacity` instead of silently dropping the
    /// sample.
    pub fn add(&mut self, source: &str, bytes: u64) -> Result<()> {
        if let Some(stat) = self.stats.get_mut(source) {
            stat.record(bytes);
            return Ok(());
        }

        self.stats.try_reserve(1)?;
        let mut stat = SourceStat::default();
        stat.record(bytes);
        self.stats.insert(source.to_string(), stat);
        Ok(())
    }

    /// Number of distinct sources seen so far.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Iterate over all `(source, stat)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SourceStat)> {
        self.stats.iter().map(|(source, stat)| (source.as_str(), stat))
    }

    /// Look up the statistics for one source.
    pub fn get(&self, source: &str) -> Option<&SourceStat> {
        self.stats.get(source)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
