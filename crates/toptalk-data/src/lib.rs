//! Ingestion and aggregation layer for toptalk.
//!
//! Responsible for streaming raw log lines from the input, accumulating
//! per-source statistics in the aggregate store and producing the
//! deterministically ranked top-N view consumed by the CLI.

pub mod analysis;
pub mod ranker;
pub mod reader;
pub mod store;

pub use toptalk_core as core;
