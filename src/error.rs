//! Error types for loading, configuring and running the classifier.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KnnError>;

#[derive(Error, Debug)]
pub enum KnnError {
    #[error("cannot compute distance between vectors of length {left} and {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid dataset: {0}")]
    Dataset(#[from] DatasetError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Invalid classifier or command-line configuration. Raised before any
/// testing pattern is processed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("k must be at least 1")]
    ZeroK,

    #[error("k = {k} exceeds the training set size ({training_len})")]
    KExceedsTrainingSet { k: usize, training_len: usize },

    #[error("training set is empty")]
    EmptyTrainingSet,

    #[error("training pattern #{index} has no label")]
    UnlabeledTrainingPattern { index: usize },

    #[error("unknown distance metric code {0} (expected 1 = Euclidean, 2 = Manhattan)")]
    UnknownMetric(i64),

    #[error("invalid adaptive distance measure flag {0} (expected 0 or 1)")]
    InvalidAdaptiveFlag(i64),
}

/// Malformed dataset file.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: missing record count on the first line")]
    MissingCount { path: PathBuf },

    #[error("{path}: malformed record count {value:?}")]
    MalformedCount { path: PathBuf, value: String },

    #[error("{path}: expected {expected} records, found {actual}")]
    RecordCountMismatch {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    #[error("{path}:{line}: malformed number {field:?}")]
    MalformedNumber {
        path: PathBuf,
        line: usize,
        field: String,
    },

    #[error("{path}:{line}: missing ';' label field")]
    MissingLabel { path: PathBuf, line: usize },

    #[error("{path}:{line}: record has no vector components")]
    EmptyVector { path: PathBuf, line: usize },
}
