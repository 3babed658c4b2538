//! Inference adapter over the fitted forest.
//!
//! Produces the positive-class probability together with an exact additive
//! attribution vector over the transformed features: one signed log-odds
//! contribution per feature plus a trailing bias term. The decomposition is
//! computed per decision path, so `sigmoid(sum(attributions))` equals the
//! probability up to floating-point rounding — an identity, not an
//! approximation.

use crate::error::{ModelError, Result};
use crate::forest::Forest;
use ndarray::{Array1, ArrayView1};

/// Logistic function mapping a log-odds margin to a probability.
pub fn sigmoid(margin: f64) -> f64 {
    1.0 / (1.0 + (-margin).exp())
}

/// The outcome of scoring one transformed input.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Positive-class probability, in `[0, 1]`.
    pub probability: f64,

    /// Raw margin in log-odds units.
    pub margin: f64,

    /// Per-feature contributions plus a trailing bias term, in log-odds
    /// units. Length is `n_features + 1`.
    pub attributions: Array1<f64>,
}

impl Prediction {
    /// The bias (base-rate) term of the decomposition.
    pub fn bias(&self) -> f64 {
        self.attributions[self.attributions.len() - 1]
    }

    /// The per-feature contributions, bias excluded.
    pub fn feature_attributions(&self) -> ArrayView1<'_, f64> {
        self.attributions.slice(ndarray::s![..self.attributions.len() - 1])
    }
}

/// Scores transformed inputs against a fitted forest.
///
/// Borrows the forest immutably: scoring mutates nothing, so one loaded
/// model can serve any number of concurrent requests without serialization.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    forest: &'a Forest,
}

impl<'a> Scorer<'a> {
    /// Create a scorer over a fitted forest.
    pub const fn new(forest: &'a Forest) -> Self {
        Self { forest }
    }

    /// Feature count the forest expects.
    pub const fn expected_features(&self) -> usize {
        self.forest.n_features
    }

    /// Score one transformed input.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FeatureShapeMismatch`] when the input width
    /// disagrees with the forest. That signals a model/transformer version
    /// mismatch and must abort the request; truncating or reordering would
    /// silently score the wrong profile.
    pub fn score(&self, features: &ArrayView1<'_, f64>) -> Result<Prediction> {
        let n = self.forest.n_features;
        if features.len() != n {
            return Err(ModelError::FeatureShapeMismatch {
                expected: n,
                actual: features.len(),
            });
        }

        let mut contributions = vec![0.0; n];
        let mut margin = self.forest.base_margin;
        let mut bias = self.forest.base_margin;

        for tree in &self.forest.trees {
            margin += tree.accumulate_contributions(features, &mut contributions);
            bias += tree.root_value();
        }
        contributions.push(bias);
        let attributions = Array1::from_vec(contributions);

        let probability = sigmoid(margin);
        tracing::debug!(margin, probability, "scored transformed input");

        Ok(Prediction {
            probability,
            margin,
            attributions,
        })
    }
}
