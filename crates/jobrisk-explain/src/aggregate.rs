//! Folding per-feature contributions back onto survey variables.

use crate::parse::original_variable;
use jobrisk_survey::Field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The aggregated contribution of one survey variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorContribution {
    /// Presentation label of the variable.
    pub label: String,

    /// Summed log-odds contribution of every transformed feature that parses
    /// back to this variable. Positive values increase the predicted risk.
    pub contribution: f64,
}

impl fmt::Display for FactorContribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:+.4}", self.label, self.contribution)
    }
}

/// Aggregate an attribution vector onto survey variables.
///
/// Drops the trailing bias entry, parses every remaining feature name back
/// to its originating variable, maps identifiers to presentation labels
/// (identifiers outside the survey dictionary keep their raw spelling, so
/// nothing is dropped), groups and sums. One-hot fan-out collapses here:
/// however many dummy columns a categorical field expanded into, active or
/// zero-valued, the result carries a single entry for it.
///
/// The output is sorted ascending by contribution — most risk-decreasing
/// factor first — with ties broken by label so the ordering is total and
/// deterministic.
///
/// # Panics
///
/// Panics if `attributions` is not exactly one longer than `names`; the
/// scorer always produces the trailing bias term.
pub fn aggregate(names: &[String], attributions: &[f64]) -> Vec<FactorContribution> {
    assert_eq!(
        attributions.len(),
        names.len() + 1,
        "attribution vector must carry one entry per feature plus a bias term"
    );

    let mut grouped: BTreeMap<String, f64> = BTreeMap::new();
    for (name, value) in names.iter().zip(attributions) {
        let identifier = original_variable(name);
        let label = Field::from_id(identifier).map_or(identifier, |field| field.label());
        *grouped.entry(label.to_string()).or_insert(0.0) += value;
    }

    let mut factors: Vec<FactorContribution> = grouped
        .into_iter()
        .map(|(label, contribution)| FactorContribution {
            label,
            contribution,
        })
        .collect();

    factors.sort_by(|a, b| {
        a.contribution
            .partial_cmp(&b.contribution)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.label.cmp(&b.label))
    });

    factors
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_one_hot_fan_out_folds() {
        let names = names(&[
            "cat__gndr_1",
            "cat__gndr_2",
            "cat__gndr_9",
            "num__agea",
        ]);
        // Inactive dummies carry zero but still belong to the group.
        let attributions = [0.0, -0.25, 0.0, 0.4, -1.1];

        let factors = aggregate(&names, &attributions);
        assert_eq!(factors.len(), 2);

        let gender = factors.iter().find(|f| f.label == "Gender").unwrap();
        assert_relative_eq!(gender.contribution, -0.25, epsilon = 1e-12);

        let age = factors.iter().find(|f| f.label == "Age").unwrap();
        assert_relative_eq!(age.contribution, 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_conservation() {
        let names = names(&[
            "cat__gndr_1",
            "cat__gndr_2",
            "cat__hlthhmp_1",
            "cat__hlthhmp_3",
            "num__agea",
        ]);
        let attributions = [0.05, -0.2, 0.3, -0.1, 0.15, -1.4];
        let bias = attributions[attributions.len() - 1];

        let factors = aggregate(&names, &attributions);
        let total: f64 = factors.iter().map(|f| f.contribution).sum();
        assert_relative_eq!(
            total + bias,
            attributions.iter().sum::<f64>(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_sorted_ascending_with_label_tie_break() {
        let names = names(&[
            "num__agea",
            "num__hhmmb",
            "cat__gndr_2",
            "cat__dscrgrp_1",
        ]);
        // agea and hhmmb tie; Age must come before Household size.
        let attributions = [0.2, 0.2, -0.5, 0.7, 0.0];

        let factors = aggregate(&names, &attributions);
        let labels: Vec<&str> = factors.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Gender", "Age", "Household size", "Discrimination group"]
        );
    }

    #[test]
    fn test_unknown_identifier_keeps_raw_spelling() {
        let names = names(&["cat__mystery_1", "oddball"]);
        let attributions = [0.1, 0.2, 0.0];

        let factors = aggregate(&names, &attributions);
        let labels: Vec<&str> = factors.iter().map(|f| f.label.as_str()).collect();
        assert!(labels.contains(&"mystery"));
        assert!(labels.contains(&"oddball"));
    }

    #[test]
    fn test_empty_names() {
        let factors = aggregate(&[], &[0.3]);
        assert!(factors.is_empty());
    }

    #[test]
    #[should_panic(expected = "bias term")]
    fn test_missing_bias_panics() {
        let names = names(&["num__agea"]);
        aggregate(&names, &[0.1]);
    }

    #[test]
    fn test_deterministic() {
        let names = names(&["cat__gndr_1", "cat__gndr_2", "num__agea"]);
        let attributions = [0.0, -0.2, 0.4, -1.0];
        assert_eq!(
            aggregate(&names, &attributions),
            aggregate(&names, &attributions)
        );
    }
}
