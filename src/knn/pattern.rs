//! A single point of a training or testing set.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which set a pattern belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PatternKind {
    Training,
    Testing,
}

/// Represents one data point: a feature vector plus its class labels.
///
/// - `label` is the current class. Training patterns carry it from
///   construction, testing patterns receive it from the classifier.
/// - `correct_label` is the known ground truth, used only for scoring.
///   For training patterns it equals `label`.
///
/// `distance` and `scale` are per-run values written by the classifier on
/// training patterns. `scale` is the adaptive distance measure (1.0 unless
/// it has been derived); `distance` holds the normalized distance to the
/// testing pattern classified last.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pattern {
    kind: PatternKind,
    vector: Vec<f64>,
    label: Option<String>,
    correct_label: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip, default = "unset_distance"))]
    distance: f64,
    #[cfg_attr(feature = "serde", serde(skip, default = "unit_scale"))]
    scale: f64,
}

#[cfg(feature = "serde")]
fn unset_distance() -> f64 {
    f64::MAX
}

#[cfg(feature = "serde")]
fn unit_scale() -> f64 {
    1.0
}

impl Pattern {
    /// Creates a labeled training pattern.
    pub fn training(vector: Vec<f64>, label: impl Into<String>) -> Self {
        let label = label.into();
        Pattern {
            kind: PatternKind::Training,
            vector,
            correct_label: Some(label.clone()),
            label: Some(label),
            distance: f64::MAX,
            scale: 1.0,
        }
    }

    /// Creates a testing pattern with no assigned class yet.
    pub fn testing(vector: Vec<f64>, correct_label: Option<String>) -> Self {
        Pattern {
            kind: PatternKind::Testing,
            vector,
            label: None,
            correct_label,
            distance: f64::MAX,
            scale: 1.0,
        }
    }

    pub fn vector(&self) -> &[f64] {
        &self.vector
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn correct_label(&self) -> Option<&str> {
        self.correct_label.as_deref()
    }

    /// Normalized distance to the most recently classified testing pattern.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Adaptive distance measure, 1.0 when not derived.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Whether the assigned label matches the known correct one.
    /// `None` when there is no correct label to compare against.
    pub fn is_correct(&self) -> Option<bool> {
        self.correct_label
            .as_deref()
            .map(|correct| self.label.as_deref() == Some(correct))
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = Some(label);
    }

    pub(crate) fn set_distance(&mut self, distance: f64) {
        self.distance = distance;
    }

    pub(crate) fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// Clears per-run state so the pattern can take part in a fresh
    /// classification run. Training labels are kept; a testing pattern's
    /// assigned label is dropped.
    pub fn reset(&mut self) {
        self.distance = f64::MAX;
        self.scale = 1.0;
        if self.kind == PatternKind::Testing {
            self.label = None;
        }
    }
}
