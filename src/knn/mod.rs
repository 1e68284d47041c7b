use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use num_traits::Float;

use crate::error::{ConfigError, Result};

pub mod classifier;
pub mod distance;
pub mod pattern;

/// Distance function used both for neighbor ranking and for the adaptive
/// distance measure.
///
/// Euclidean is the default. Numeric selector codes follow the command line
/// convention (1 = Euclidean, 2 = Manhattan); any other code is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DistanceMetric {
    #[default]
    Euclidean,
    Manhattan,
}

impl DistanceMetric {
    pub const EUCLIDEAN_CODE: i64 = 1;
    pub const MANHATTAN_CODE: i64 = 2;

    /// Maps a numeric selector to a metric.
    pub fn from_code(code: i64) -> std::result::Result<Self, ConfigError> {
        match code {
            Self::EUCLIDEAN_CODE => Ok(DistanceMetric::Euclidean),
            Self::MANHATTAN_CODE => Ok(DistanceMetric::Manhattan),
            other => Err(ConfigError::UnknownMetric(other)),
        }
    }

    pub fn code(self) -> i64 {
        match self {
            DistanceMetric::Euclidean => Self::EUCLIDEAN_CODE,
            DistanceMetric::Manhattan => Self::MANHATTAN_CODE,
        }
    }

    /// Distance between two vectors of equal length.
    ///
    /// Fails with [`KnnError::DimensionMismatch`](crate::KnnError::DimensionMismatch)
    /// when the lengths differ.
    pub fn distance<F: Float>(self, a: &[F], b: &[F]) -> Result<F> {
        match self {
            DistanceMetric::Euclidean => distance::euclidean_distance(a, b),
            DistanceMetric::Manhattan => distance::manhattan_distance(a, b),
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceMetric::Euclidean => write!(f, "euclidean"),
            DistanceMetric::Manhattan => write!(f, "manhattan"),
        }
    }
}
