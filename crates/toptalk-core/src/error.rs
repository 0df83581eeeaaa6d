use std::collections::TryReserveError;
use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the toptalk crates.
///
/// Missing `SRC=` keys and unparsable byte counts are NOT errors — they are
/// ordinary outcomes represented as `None` / default values in the parser.
#[derive(Error, Debug)]
pub enum ToptalkError {
    /// The input file could not be opened or read.
    #[error("Failed to read input {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The aggregate store could not grow to accept another source.
    #[error("Aggregate store cannot grow: {0}")]
    StoreCapacity(#[from] TryReserveError),

    /// A metric name is not one of the recognised ranking metrics.
    #[error("Unknown metric: {0}")]
    InvalidMetric(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the toptalk crates.
pub type Result<T> = std::result::Result<T, ToptalkError>;
