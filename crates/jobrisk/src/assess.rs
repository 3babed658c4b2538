//! End-to-end scoring of one submission.

use jobrisk_explain::{AttributionReport, aggregate};
use jobrisk_model::{ModelArtifact, Result, Scorer};
use jobrisk_survey::{RawProfile, encode};

/// Score a raw submission against a loaded model artifact.
///
/// Runs the full pipeline: category encoding, feature transformation,
/// forest scoring with exact per-feature attribution, and aggregation of
/// contributions back onto survey variables. The caller is expected to have
/// validated the submission with [`jobrisk_survey::validate`] first; the
/// pipeline itself is total over whatever it is given.
///
/// The artifact is borrowed read-only, so one loaded model can serve any
/// number of concurrent assessments.
///
/// # Errors
///
/// Returns [`jobrisk_model::ModelError::FeatureShapeMismatch`] if the
/// artifact's transformer and forest disagree on the feature layout; that is
/// a configuration defect, not a bad submission.
pub fn assess(artifact: &ModelArtifact, profile: &RawProfile) -> Result<AttributionReport> {
    let encoded = encode(profile);
    let features = artifact.transformer.transform(&encoded);

    let scorer = Scorer::new(&artifact.forest);
    let prediction = scorer.score(&features.view())?;

    let names = artifact.feature_names();
    let factors = aggregate(&names, &prediction.attributions.to_vec());

    tracing::debug!(
        probability = prediction.probability,
        factors = factors.len(),
        "assessed submission"
    );

    Ok(AttributionReport::new(
        prediction.probability,
        prediction.bias(),
        factors,
    ))
}
