//! Integration tests for attribution aggregation and report rendering.

use approx::assert_relative_eq;
use jobrisk_explain::{AttributionReport, aggregate};

/// Feature names the way a real transformer emits them: one-hot fan-out for
/// categoricals, pass-through for numerics.
fn feature_names() -> Vec<String> {
    [
        "cat__gndr_1",
        "cat__gndr_2",
        "cat__gndr_9",
        "cat__dscrgrp_1",
        "cat__dscrgrp_2",
        "cat__dscrgrp_9",
        "cat__eisced_1",
        "cat__eisced_6",
        "cat__eisced_55",
        "num__agea",
        "num__hhmmb",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

#[test]
fn test_full_aggregation_workflow() {
    let names = feature_names();
    // One contribution per feature plus the trailing bias.
    let attributions = [
        0.02, -0.3, 0.0, // gndr
        0.0, -0.05, 0.01, // dscrgrp
        0.0, -0.4, 0.0, // eisced
        0.25, -0.1, // agea, hhmmb
        -1.6, // bias
    ];
    let bias = attributions[attributions.len() - 1];

    let factors = aggregate(&names, &attributions);

    // One entry per original variable, however many dummies it expanded to.
    assert_eq!(factors.len(), 5);

    let gender = factors.iter().find(|f| f.label == "Gender").unwrap();
    assert_relative_eq!(gender.contribution, 0.02 - 0.3, epsilon = 1e-12);

    // Conservation: aggregated total plus bias equals the full vector sum.
    let total: f64 = factors.iter().map(|f| f.contribution).sum();
    assert_relative_eq!(
        total + bias,
        attributions.iter().sum::<f64>(),
        epsilon = 1e-12
    );

    // Ascending order for the bar chart.
    for pair in factors.windows(2) {
        assert!(pair[0].contribution <= pair[1].contribution);
    }

    let report = AttributionReport::new(0.08, bias, factors);
    let table = report.to_ascii_table();
    assert!(table.contains("8.00%"));
    assert!(table.contains("Your education"));

    let markdown = report.to_markdown();
    assert!(markdown.contains("| Gender |"));
}
