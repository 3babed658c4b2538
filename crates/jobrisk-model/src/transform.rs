//! Feature transformation of encoded profiles.
//!
//! The transformer description ships inside the model artifact and mirrors the
//! column layout the classifier was trained on: one-hot blocks expand each
//! categorical field into one column per known category, numeric blocks pass
//! values through. Column order is fixed by the artifact, so the produced
//! names and values are stable and positionally aligned across calls.
//!
//! Feature names follow the `<blockId>__<field>_<category>` convention for
//! one-hot columns and `<blockId>__<field>` for numeric pass-throughs; the
//! attribution aggregator parses names back with the same grammar.

use jobrisk_survey::{EncodedProfile, Field};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Separator between the block id and the rest of a feature name.
pub const BLOCK_SEPARATOR: &str = "__";

/// One categorical source column and its known categories, in training order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneHotColumn {
    /// Survey field identifier (e.g. `gndr`).
    pub field: String,

    /// Category codes seen at training time, one output column per entry.
    pub categories: Vec<String>,
}

/// A transformer block: a group of columns sharing an output name prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// One-hot expansion of categorical fields.
    OneHot {
        /// Block id, the prefix of every produced feature name.
        id: String,
        /// Source columns in output order.
        columns: Vec<OneHotColumn>,
    },

    /// Numeric pass-through fields.
    Numeric {
        /// Block id, the prefix of every produced feature name.
        id: String,
        /// Source fields in output order.
        fields: Vec<String>,
    },
}

/// The fitted feature transformer, deserialized from the model artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureTransformer {
    /// Blocks in output order.
    pub blocks: Vec<Block>,
}

impl FeatureTransformer {
    /// Number of output features.
    pub fn width(&self) -> usize {
        self.blocks
            .iter()
            .map(|block| match block {
                Block::OneHot { columns, .. } => {
                    columns.iter().map(|c| c.categories.len()).sum::<usize>()
                }
                Block::Numeric { fields, .. } => fields.len(),
            })
            .sum()
    }

    /// Survey field identifiers referenced by the transformer, in order.
    pub fn source_fields(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for block in &self.blocks {
            match block {
                Block::OneHot { columns, .. } => {
                    out.extend(columns.iter().map(|c| c.field.as_str()));
                }
                Block::Numeric { fields, .. } => out.extend(fields.iter().map(String::as_str)),
            }
        }
        out
    }

    /// Output feature names, positionally aligned with [`Self::transform`].
    pub fn feature_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.width());
        for block in &self.blocks {
            match block {
                Block::OneHot { id, columns } => {
                    for column in columns {
                        for category in &column.categories {
                            names.push(format!(
                                "{id}{BLOCK_SEPARATOR}{}_{category}",
                                column.field
                            ));
                        }
                    }
                }
                Block::Numeric { id, fields } => {
                    for field in fields {
                        names.push(format!("{id}{BLOCK_SEPARATOR}{field}"));
                    }
                }
            }
        }
        names
    }

    /// Expand an encoded profile into the numeric vector the forest expects.
    ///
    /// Deterministic for a fixed artifact. A code outside a column's known
    /// categories activates no dummy (the whole group stays zero), matching
    /// how unknown categories were handled at training time. A validated
    /// submission always carries the numeric fields; an absent one
    /// contributes 0.0 so the transform stays total.
    pub fn transform(&self, profile: &EncodedProfile) -> Array1<f64> {
        let mut values = Vec::with_capacity(self.width());
        for block in &self.blocks {
            match block {
                Block::OneHot { columns, .. } => {
                    for column in columns {
                        let active = Field::from_id(&column.field)
                            .and_then(|f| profile.get(f))
                            .map(ToString::to_string);
                        for category in &column.categories {
                            let hit = active.as_deref() == Some(category.as_str());
                            values.push(if hit { 1.0 } else { 0.0 });
                        }
                    }
                }
                Block::Numeric { fields, .. } => {
                    for field in fields {
                        let value = Field::from_id(field)
                            .and_then(|f| profile.get(f))
                            .and_then(|v| {
                                v.as_number()
                                    .or_else(|| v.as_code().and_then(|c| c.parse().ok()))
                            })
                            .unwrap_or(0.0);
                        values.push(value);
                    }
                }
            }
        }
        Array1::from_vec(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobrisk_survey::{EncodedValue, Field};

    fn transformer() -> FeatureTransformer {
        FeatureTransformer {
            blocks: vec![
                Block::OneHot {
                    id: "cat".to_string(),
                    columns: vec![
                        OneHotColumn {
                            field: "gndr".to_string(),
                            categories: vec!["1".to_string(), "2".to_string(), "9".to_string()],
                        },
                        OneHotColumn {
                            field: "dscrgrp".to_string(),
                            categories: vec!["1".to_string(), "2".to_string(), "9".to_string()],
                        },
                    ],
                },
                Block::Numeric {
                    id: "num".to_string(),
                    fields: vec!["agea".to_string(), "hhmmb".to_string()],
                },
            ],
        }
    }

    fn profile() -> EncodedProfile {
        let mut p = EncodedProfile::new();
        p.set(Field::Gender, EncodedValue::Code("2".to_string()));
        p.set(Field::DiscriminatedGroup, EncodedValue::Code("2".to_string()));
        p.set(Field::Age, EncodedValue::Number(30.0));
        p.set(Field::HouseholdSize, EncodedValue::Number(1.0));
        p
    }

    #[test]
    fn test_width_and_alignment() {
        let t = transformer();
        assert_eq!(t.width(), 8);

        let names = t.feature_names();
        let values = t.transform(&profile());
        assert_eq!(names.len(), values.len());
    }

    #[test]
    fn test_feature_name_convention() {
        let names = transformer().feature_names();
        assert_eq!(
            names,
            vec![
                "cat__gndr_1",
                "cat__gndr_2",
                "cat__gndr_9",
                "cat__dscrgrp_1",
                "cat__dscrgrp_2",
                "cat__dscrgrp_9",
                "num__agea",
                "num__hhmmb",
            ]
        );
    }

    #[test]
    fn test_one_hot_expansion() {
        let values = transformer().transform(&profile());
        assert_eq!(
            values.to_vec(),
            vec![0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 30.0, 1.0]
        );
    }

    #[test]
    fn test_unknown_code_activates_nothing() {
        let mut p = profile();
        p.set(Field::Gender, EncodedValue::Code("42".to_string()));

        let values = transformer().transform(&p);
        assert_eq!(&values.to_vec()[..3], &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_missing_numeric_is_zero() {
        let mut p = profile();
        let t = transformer();
        p = {
            let mut q = EncodedProfile::new();
            for (field, value) in p.iter() {
                if field != Field::Age {
                    q.set(field, value.clone());
                }
            }
            q
        };
        assert_eq!(t.transform(&p)[6], 0.0);
    }

    #[test]
    fn test_determinism() {
        let t = transformer();
        let p = profile();
        assert_eq!(t.transform(&p), t.transform(&p));
        assert_eq!(t.feature_names(), t.feature_names());
    }

    #[test]
    fn test_source_fields() {
        assert_eq!(
            transformer().source_fields(),
            vec!["gndr", "dscrgrp", "agea", "hhmmb"]
        );
    }
}
