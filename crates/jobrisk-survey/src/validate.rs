//! Submission completeness validation.
//!
//! The encoder is deliberately permissive; this check is the strict gate the
//! form layer runs before encoding. All offending fields are reported
//! together, not just the first.

use crate::field::Field;
use crate::profile::{RawProfile, RawValue, SELECT_SENTINEL};
use crate::regions;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Accepted age range, in years.
pub const AGE_RANGE: RangeInclusive<f64> = 15.0..=100.0;

/// Accepted household size range.
pub const HOUSEHOLD_RANGE: RangeInclusive<f64> = 1.0..=20.0;

/// A submission the form layer must reject before encoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// One or more required fields are absent or left at the unselected
    /// sentinel.
    #[error("required fields missing or unselected: {}", .0.join(", "))]
    Incomplete(Vec<String>),

    /// A numeric answer is outside its accepted range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Presentation label of the offending field.
        field: &'static str,
        /// Lower bound of the accepted range.
        min: f64,
        /// Upper bound of the accepted range.
        max: f64,
        /// The submitted value.
        value: f64,
    },

    /// The submitted country is not in the model's country list.
    #[error("unknown country: {0}")]
    UnknownCountry(String),

    /// The submitted region does not belong to the submitted country.
    #[error("region {region:?} is not in the region list for {country}")]
    RegionMismatch {
        /// The submitted country.
        country: String,
        /// The submitted region.
        region: String,
    },
}

/// Whether an answer counts as given.
fn is_answered(value: Option<&RawValue>) -> bool {
    match value {
        None => false,
        Some(RawValue::Number(_)) => true,
        Some(RawValue::Text(s)) => !s.is_empty() && s != SELECT_SENTINEL,
    }
}

fn check_range(
    value: Option<&RawValue>,
    range: &RangeInclusive<f64>,
    label: &'static str,
) -> Result<(), ValidationError> {
    if let Some(RawValue::Number(n)) = value {
        if !range.contains(n) {
            return Err(ValidationError::OutOfRange {
                field: label,
                min: *range.start(),
                max: *range.end(),
                value: *n,
            });
        }
    }
    Ok(())
}

/// Validate a raw submission before encoding.
///
/// Checks, in order: every field answered (all missing fields collected into
/// one error), numeric answers in range, country known, and the region
/// consistent with the country. The region/country cross-check is enforced
/// here rather than in the encoder so that the encoder's inputs stay exactly
/// what the form layer approved.
///
/// # Examples
///
/// ```
/// use jobrisk_survey::{validate, RawProfile, ValidationError};
///
/// let err = validate(&RawProfile::new()).unwrap_err();
/// assert!(matches!(err, ValidationError::Incomplete(_)));
/// ```
pub fn validate(profile: &RawProfile) -> Result<(), ValidationError> {
    let missing: Vec<String> = Field::all()
        .into_iter()
        .filter(|field| !is_answered(profile.get(*field)))
        .map(|field| field.label().to_string())
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::Incomplete(missing));
    }

    check_range(profile.get(Field::Age), &AGE_RANGE, Field::Age.label())?;
    check_range(
        profile.get(Field::HouseholdSize),
        &HOUSEHOLD_RANGE,
        Field::HouseholdSize.label(),
    )?;

    // Both answered at this point.
    let country = profile
        .get(Field::Country)
        .and_then(RawValue::as_text)
        .unwrap_or_default();
    let region = profile
        .get(Field::Region)
        .and_then(RawValue::as_text)
        .unwrap_or_default();

    if regions::regions(country).is_none() {
        return Err(ValidationError::UnknownCountry(country.to_string()));
    }
    if !regions::region_belongs_to(country, region) {
        return Err(ValidationError::RegionMismatch {
            country: country.to_string(),
            region: region.to_string(),
        });
    }

    Ok(())
}
