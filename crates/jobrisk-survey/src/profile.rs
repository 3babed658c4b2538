//! Raw and encoded submission profiles.

use crate::field::Field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Sentinel the questionnaire uses for an unselected dropdown.
///
/// A submission containing this value for any field must be rejected by
/// [`crate::validate::validate`] before it reaches the encoder.
pub const SELECT_SENTINEL: &str = "-- Select --";

/// A single raw answer, as entered by the respondent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// A numeric answer (age, household size).
    Number(f64),

    /// A label chosen from a dropdown.
    Text(String),
}

impl RawValue {
    /// Returns the text label, if this is a text answer.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// A raw submission: one answer per questionnaire field.
///
/// Created per submission and discarded after scoring. Completeness is not
/// enforced here; callers run [`crate::validate::validate`] first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawProfile {
    answers: BTreeMap<Field, RawValue>,
}

impl RawProfile {
    /// Create an empty profile.
    pub const fn new() -> Self {
        Self {
            answers: BTreeMap::new(),
        }
    }

    /// Set an answer, replacing any previous one.
    pub fn set(&mut self, field: Field, value: impl Into<RawValue>) -> &mut Self {
        self.answers.insert(field, value.into());
        self
    }

    /// Get the answer for a field.
    pub fn get(&self, field: Field) -> Option<&RawValue> {
        self.answers.get(&field)
    }

    /// Iterate over the answers in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &RawValue)> {
        self.answers.iter().map(|(f, v)| (*f, v))
    }
}

/// A single encoded answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EncodedValue {
    /// A numeric pass-through value.
    Number(f64),

    /// A categorical code or pass-through label.
    Code(String),
}

impl EncodedValue {
    /// Returns the categorical code, if this is a categorical value.
    pub fn as_code(&self) -> Option<&str> {
        match self {
            Self::Code(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// Returns the numeric value, if this is a numeric value.
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Code(_) => None,
        }
    }
}

impl fmt::Display for EncodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Code(s) => write!(f, "{s}"),
        }
    }
}

/// An encoded submission: one model code per questionnaire field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedProfile {
    values: BTreeMap<Field, EncodedValue>,
}

impl EncodedProfile {
    /// Create an empty encoded profile.
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Set the encoded value for a field.
    pub fn set(&mut self, field: Field, value: EncodedValue) {
        self.values.insert(field, value);
    }

    /// Get the encoded value for a field.
    pub fn get(&self, field: Field) -> Option<&EncodedValue> {
        self.values.get(&field)
    }

    /// Iterate over the encoded values in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &EncodedValue)> {
        self.values.iter().map(|(f, v)| (*f, v))
    }

    /// Number of encoded fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the profile holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
