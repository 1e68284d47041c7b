//! Python bindings, built with the `python` feature.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::KnnConfig;
use crate::error::KnnError;
use crate::knn::DistanceMetric;
use crate::knn::classifier::Classifier;
use crate::knn::distance::{euclidean_distance, manhattan_distance};
use crate::knn::pattern::Pattern;

impl From<KnnError> for PyErr {
    fn from(err: KnnError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Euclidean distance between two vectors of equal length.
#[pyfunction]
#[pyo3(name = "euclidean_distance")]
fn euclidean_distance_py(a: Vec<f64>, b: Vec<f64>) -> PyResult<f64> {
    Ok(euclidean_distance(&a, &b)?)
}

/// Manhattan distance between two vectors of equal length.
#[pyfunction]
#[pyo3(name = "manhattan_distance")]
fn manhattan_distance_py(a: Vec<f64>, b: Vec<f64>) -> PyResult<f64> {
    Ok(manhattan_distance(&a, &b)?)
}

/// Python-friendly representation of DistanceMetric
#[pyclass(name = "DistanceMetric")]
#[derive(Clone)]
enum PyDistanceMetric {
    Euclidean,
    Manhattan,
}

impl From<PyDistanceMetric> for DistanceMetric {
    fn from(val: PyDistanceMetric) -> Self {
        match val {
            PyDistanceMetric::Euclidean => DistanceMetric::Euclidean,
            PyDistanceMetric::Manhattan => DistanceMetric::Manhattan,
        }
    }
}

/// Classifies `testing` vectors against `(vector, label)` training pairs and
/// returns one label per testing vector.
#[pyfunction]
#[pyo3(signature = (training, testing, k, metric, adaptive = false))]
fn classify(
    training: Vec<(Vec<f64>, String)>,
    testing: Vec<Vec<f64>>,
    k: usize,
    metric: PyDistanceMetric,
    adaptive: bool,
) -> PyResult<Vec<String>> {
    let mut training: Vec<Pattern> = training
        .into_iter()
        .map(|(vector, label)| Pattern::training(vector, label))
        .collect();
    let mut testing: Vec<Pattern> = testing
        .into_iter()
        .map(|vector| Pattern::testing(vector, None))
        .collect();

    let config = KnnConfig::new(k, metric.into(), adaptive);
    let mut classifier = Classifier::new(&mut training, &mut testing, config)?;
    let labels = classifier
        .classify()?
        .iter()
        .map(|p| p.label().unwrap_or_default().to_string())
        .collect();
    Ok(labels)
}

#[pymodule]
fn adaptive_knn(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(euclidean_distance_py, m)?)?;
    m.add_function(wrap_pyfunction!(manhattan_distance_py, m)?)?;
    m.add_function(wrap_pyfunction!(classify, m)?)?;
    m.add_class::<PyDistanceMetric>()?;
    Ok(())
}
