//! k-nearest-neighbor classification with an optional adaptive distance
//! measure.

pub mod config;
pub mod dataset;
pub mod error;
pub mod knn;
#[cfg(feature = "python")]
mod python;

pub use config::{Cli, KnnConfig};
pub use error::{ConfigError, DatasetError, KnnError, Result};
pub use knn::DistanceMetric;
pub use knn::classifier::{Classifier, Neighbor, majority_label};
pub use knn::pattern::{Pattern, PatternKind};
