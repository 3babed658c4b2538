//! The versioned model artifact bundle.
//!
//! A single serialized file combines the fitted feature transformer and the
//! gradient-boosted forest, so the two can never drift apart. The bundle is
//! loaded once at process start; a missing, corrupt or structurally invalid
//! artifact fails startup immediately instead of surfacing on the first
//! request.

use crate::error::{ModelError, Result};
use crate::forest::Forest;
use crate::transform::FeatureTransformer;
use chrono::NaiveDate;
use jobrisk_survey::Field;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A loaded, validated model bundle.
///
/// Immutable after load; requests share it read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Artifact format version.
    pub format_version: u32,

    /// Identifier of the training run that produced this bundle.
    pub model_id: String,

    /// Date the model was fitted.
    pub trained_at: NaiveDate,

    /// The fitted feature transformer.
    pub transformer: FeatureTransformer,

    /// The fitted classifier.
    pub forest: Forest,
}

impl ModelArtifact {
    /// The artifact format version this build understands.
    pub const SUPPORTED_FORMAT_VERSION: u32 = 1;

    /// Load and validate an artifact from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let artifact = Self::from_json(&raw)?;
        tracing::info!(
            model_id = %artifact.model_id,
            trained_at = %artifact.trained_at,
            features = artifact.forest.n_features,
            trees = artifact.forest.trees.len(),
            path = %path.display(),
            "loaded model artifact"
        );
        Ok(artifact)
    }

    /// Deserialize and validate an artifact from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        let artifact: Self = serde_json::from_str(json)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Transformed feature names, in scoring order.
    pub fn feature_names(&self) -> Vec<String> {
        self.transformer.feature_names()
    }

    /// Structural checks run once at load time.
    fn validate(&self) -> Result<()> {
        if self.format_version != Self::SUPPORTED_FORMAT_VERSION {
            return Err(ModelError::UnsupportedVersion {
                found: self.format_version,
                supported: Self::SUPPORTED_FORMAT_VERSION,
            });
        }

        self.forest.validate().map_err(ModelError::Malformed)?;

        // Transformer and forest ship together; their widths disagreeing
        // means the bundle mixes incompatible versions.
        let width = self.transformer.width();
        if width != self.forest.n_features {
            return Err(ModelError::FeatureShapeMismatch {
                expected: self.forest.n_features,
                actual: width,
            });
        }

        for field in self.transformer.source_fields() {
            if Field::from_id(field).is_none() {
                return Err(ModelError::Malformed(format!(
                    "transformer references unknown survey field {field:?}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact_json() -> String {
        r#"{
            "format_version": 1,
            "model_id": "ess-unemployment-2024.1",
            "trained_at": "2024-11-02",
            "transformer": {
                "blocks": [
                    {
                        "kind": "one_hot",
                        "id": "cat",
                        "columns": [
                            {"field": "gndr", "categories": ["1", "2", "9"]}
                        ]
                    },
                    {"kind": "numeric", "id": "num", "fields": ["agea"]}
                ]
            },
            "forest": {
                "base_margin": -1.5,
                "n_features": 4,
                "trees": [
                    {
                        "nodes": [
                            {
                                "type": "split",
                                "feature": 3,
                                "threshold": 40.0,
                                "left": 1,
                                "right": 2,
                                "value": 0.02
                            },
                            {"type": "leaf", "value": -0.2},
                            {"type": "leaf", "value": 0.3}
                        ]
                    }
                ]
            }
        }"#
        .to_string()
    }

    #[test]
    fn test_from_json_round_trip() {
        let artifact = ModelArtifact::from_json(&artifact_json()).unwrap();
        assert_eq!(artifact.model_id, "ess-unemployment-2024.1");
        assert_eq!(artifact.forest.trees.len(), 1);
        assert_eq!(
            artifact.feature_names(),
            vec!["cat__gndr_1", "cat__gndr_2", "cat__gndr_9", "num__agea"]
        );

        let json = serde_json::to_string(&artifact).unwrap();
        let back = ModelArtifact::from_json(&json).unwrap();
        assert_eq!(artifact, back);
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let json = artifact_json().replace("\"format_version\": 1", "\"format_version\": 2");
        assert!(matches!(
            ModelArtifact::from_json(&json).unwrap_err(),
            ModelError::UnsupportedVersion {
                found: 2,
                supported: 1
            }
        ));
    }

    #[test]
    fn test_width_mismatch_rejected() {
        let json = artifact_json().replace("\"n_features\": 4", "\"n_features\": 7");
        assert!(matches!(
            ModelArtifact::from_json(&json).unwrap_err(),
            ModelError::FeatureShapeMismatch {
                expected: 7,
                actual: 4
            }
        ));
    }

    #[test]
    fn test_unknown_survey_field_rejected() {
        let json = artifact_json().replace("\"gndr\"", "\"zzz\"");
        assert!(matches!(
            ModelArtifact::from_json(&json).unwrap_err(),
            ModelError::Malformed(_)
        ));
    }

    #[test]
    fn test_corrupt_json_rejected() {
        assert!(matches!(
            ModelArtifact::from_json("{not json").unwrap_err(),
            ModelError::Json(_)
        ));
    }

    #[test]
    fn test_missing_file_fails_load() {
        assert!(matches!(
            ModelArtifact::load("/nonexistent/model.json").unwrap_err(),
            ModelError::Io(_)
        ));
    }
}
