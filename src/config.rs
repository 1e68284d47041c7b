//! Command-line surface and the validated classifier configuration.

use std::path::PathBuf;

use clap::Parser;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::knn::DistanceMetric;
use crate::knn::pattern::Pattern;

/// Classify a testing set with k-nearest neighbors.
///
/// Results are written next to the testing file with a `.result` suffix.
/// Set `RUST_LOG` to adjust logging (default `adaptive_knn=info`).
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "adaptive-knn", version)]
pub struct Cli {
    /// File with the training patterns
    pub training: PathBuf,

    /// File with the testing patterns
    pub testing: PathBuf,

    /// Number of nearest neighbors (must not exceed the number of training patterns)
    pub k: usize,

    /// Distance function: 1 = Euclidean, 2 = Manhattan
    pub metric: i64,

    /// Adaptive distance measure: 1 = on, 0 = off
    pub adaptive: i64,
}

impl Cli {
    /// Validates the numeric selectors into a [`KnnConfig`].
    pub fn knn_config(&self) -> Result<KnnConfig, ConfigError> {
        let metric = DistanceMetric::from_code(self.metric)?;
        let adaptive = match self.adaptive {
            0 => false,
            1 => true,
            other => return Err(ConfigError::InvalidAdaptiveFlag(other)),
        };
        Ok(KnnConfig::new(self.k, metric, adaptive))
    }
}

/// Classifier parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KnnConfig {
    /// Number of nearest neighbors taking part in the vote.
    pub k: usize,
    pub metric: DistanceMetric,
    /// Derive the adaptive distance measure before classifying.
    pub adaptive: bool,
}

impl KnnConfig {
    pub fn new(k: usize, metric: DistanceMetric, adaptive: bool) -> Self {
        Self {
            k,
            metric,
            adaptive,
        }
    }

    /// Checks the configuration against a training set.
    pub fn validate(&self, training: &[Pattern]) -> Result<(), ConfigError> {
        if training.is_empty() {
            return Err(ConfigError::EmptyTrainingSet);
        }
        if self.k == 0 {
            return Err(ConfigError::ZeroK);
        }
        if self.k > training.len() {
            return Err(ConfigError::KExceedsTrainingSet {
                k: self.k,
                training_len: training.len(),
            });
        }
        if let Some(index) = training.iter().position(|p| p.label().is_none()) {
            return Err(ConfigError::UnlabeledTrainingPattern { index });
        }
        Ok(())
    }
}

impl Default for KnnConfig {
    fn default() -> Self {
        Self::new(1, DistanceMetric::default(), false)
    }
}
