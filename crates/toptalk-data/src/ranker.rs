//! Deterministic top-N ranking over the aggregate store.

use toptalk_core::models::{RankMetric, SourceStat};

use crate::store::TalkerStore;

/// Return the top `n` sources under `metric`.
///
/// The result is sorted descending by the metric value; sources with equal
/// values are ordered ascending by identifier in lexicographic byte order,
/// which makes the output reproducible for any ingestion order. The store
/// is borrowed immutably, so repeated calls over an unchanged store yield
/// identical sequences.
///
/// `n = 0` or an empty store yields an empty vector; an `n` larger than the
/// number of distinct sources yields all of them.
pub fn top_n(store: &TalkerStore, n: usize, metric: RankMetric) -> Vec<(String, SourceStat)> {
    let mut entries: Vec<(String, SourceStat)> = store
        .iter()
        .map(|(source, stat)| (source.to_string(), *stat))
        .collect();

    // The metric travels as data inside the comparator; no global sort state.
    entries.sort_unstable_by(|a, b| {
        metric
            .value_of(&b.1)
            .cmp(&metric.value_of(&a.1))
            .then_with(|| a.0.cmp(&b.0))
    });

    entries.truncate(n);
    entries
}

// ── Tests ─────────────────────────────────────────────────────────────────────
