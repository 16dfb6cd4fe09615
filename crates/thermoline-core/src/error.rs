// File: crates/thermoline-core/src/error.rs
// Summary: Typed failures for dataset loading and graph construction.

use thiserror::Error;

/// Load and construction failures. Contract: a dataset that loads always
/// renders; only the conditions below are refused.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The dataset resource could not be read at all.
    #[error("failed to read dataset: {0}")]
    DataFetch(#[from] std::io::Error),

    /// The document is not a JSON array of records.
    #[error("dataset document is not a JSON array: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    /// One record failed to parse (bad date string, non-numeric temperature,
    /// missing field). Carries the index of the offending record.
    #[error("malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    /// Extent/scale computation requested over zero records.
    #[error("dataset contains no records")]
    EmptyDataset,
}
