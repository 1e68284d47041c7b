//! Exhaustive k-nearest-neighbor classification with an optional adaptive
//! distance measure (ADM).

use ordered_float::OrderedFloat;
use tracing::{debug, info, warn};

use super::pattern::Pattern;
use crate::config::KnnConfig;
use crate::error::{ConfigError, Result};

/// A training pattern ranked against one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Position of the pattern in the training set.
    pub index: usize,
    /// Metric distance divided by the pattern's adaptive scale.
    pub distance: f64,
}

/// The K-Nearest Neighbors classifier.
///
/// Borrows the training and testing sets for its whole lifetime; labels and
/// per-run values it writes are visible to the caller through those same
/// slices once the classifier is dropped.
#[derive(Debug)]
pub struct Classifier<'a> {
    training: &'a mut [Pattern],
    testing: &'a mut [Pattern],
    config: KnnConfig,
}

impl<'a> Classifier<'a> {
    /// Builds a classifier, rejecting an empty or unlabeled training set and
    /// any `k` outside `1..=training.len()`.
    pub fn new(
        training: &'a mut [Pattern],
        testing: &'a mut [Pattern],
        config: KnnConfig,
    ) -> Result<Self> {
        config.validate(training)?;
        Ok(Self {
            training,
            testing,
            config,
        })
    }

    /// Labels every testing pattern with the majority class of its `k`
    /// nearest training patterns and returns the labeled testing set.
    ///
    /// With the adaptive measure enabled, every training pattern's scale is
    /// derived before the first testing pattern is processed; otherwise all
    /// scales are 1.0 and normalized distances equal raw distances.
    ///
    /// Any [`DimensionMismatch`](crate::KnnError::DimensionMismatch) aborts
    /// the run.
    pub fn classify(&mut self) -> Result<&[Pattern]> {
        info!(
            k = self.config.k,
            metric = %self.config.metric,
            adaptive = self.config.adaptive,
            training = self.training.len(),
            testing = self.testing.len(),
            "classifying"
        );

        if self.config.adaptive {
            info!("using adaptive distance measure");
            self.derive_adaptive_measures()?;
        } else {
            for pattern in self.training.iter_mut() {
                pattern.set_scale(1.0);
            }
        }

        for i in 0..self.testing.len() {
            let neighbors = self.rank(self.testing[i].vector())?;
            for neighbor in &neighbors {
                self.training[neighbor.index].set_distance(neighbor.distance);
            }

            let votes = neighbors
                .iter()
                .take(self.config.k)
                .map(|n| {
                    self.training[n.index]
                        .label()
                        .ok_or(ConfigError::UnlabeledTrainingPattern { index: n.index })
                })
                .collect::<std::result::Result<Vec<_>, _>>()?;
            let label = majority_label(votes).ok_or(ConfigError::ZeroK)?.to_string();

            debug!(pattern = i, label = %label, "classified");
            self.testing[i].set_label(label);
        }

        Ok(&*self.testing)
    }

    /// Ranks all training patterns by ascending normalized distance to
    /// `query`. The sort is stable: equal distances keep training-set order.
    pub fn rank(&self, query: &[f64]) -> Result<Vec<Neighbor>> {
        let mut neighbors = self
            .training
            .iter()
            .enumerate()
            .map(|(index, train)| {
                let raw = self.config.metric.distance(query, train.vector())?;
                Ok(Neighbor {
                    index,
                    distance: raw / train.scale(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        neighbors.sort_by_key(|n| OrderedFloat(n.distance));
        Ok(neighbors)
    }

    /// Sets each training pattern's scale to the smallest distance to a
    /// training pattern of a different class.
    ///
    /// A pattern with no foreign-class pattern (single-class training set)
    /// keeps scale 1.0, as does one whose margin is zero. Dividing by a zero
    /// margin would put the pattern infinitely far from every query and give
    /// NaN (0/0) for a query at the same point, which no ordering ranks
    /// meaningfully; with unit scale it competes at its raw distance instead.
    fn derive_adaptive_measures(&mut self) -> Result<()> {
        let metric = self.config.metric;
        let mut scales = Vec::with_capacity(self.training.len());

        for (i, pattern) in self.training.iter().enumerate() {
            let mut margin: Option<OrderedFloat<f64>> = None;
            for other in self.training.iter() {
                if other.label() == pattern.label() {
                    continue;
                }
                let d = OrderedFloat(metric.distance(pattern.vector(), other.vector())?);
                margin = Some(margin.map_or(d, |m| m.min(d)));
            }

            let scale = match margin {
                None => 1.0,
                Some(OrderedFloat(m)) if m > 0.0 => m,
                Some(_) => {
                    warn!(
                        pattern = i,
                        "training pattern coincides with another class; keeping unit scale"
                    );
                    1.0
                }
            };
            scales.push(scale);
        }

        for (pattern, scale) in self.training.iter_mut().zip(scales) {
            pattern.set_scale(scale);
        }
        Ok(())
    }
}

/// Majority vote over neighbor labels given in ascending-distance order.
///
/// Ties go to the label first encountered in `labels`. Tallies are kept in
/// first-seen order for that reason, not in a hash map.
pub fn majority_label<'l, I>(labels: I) -> Option<&'l str>
where
    I: IntoIterator<Item = &'l str>,
{
    let mut tallies: Vec<(&'l str, usize)> = Vec::new();
    for label in labels {
        match tallies.iter_mut().find(|(seen, _)| *seen == label) {
            Some((_, count)) => *count += 1,
            None => tallies.push((label, 1)),
        }
    }

    let mut best: Option<(&'l str, usize)> = None;
    for (label, count) in tallies {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label)
}
