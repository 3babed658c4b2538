//! Category encoding of raw submissions.
//!
//! [`encode`] is total: it never fails, for any input. Labels outside a
//! field's enumeration table resolve to that table's fallback code. Changing
//! this to a hard error would alter model inputs relative to how the model
//! was trained, so the fallback stays.

use crate::categories::{
    AreaType, EducationLevel, Gender, HealthLimitation, Industry, MaritalStatus, Occupation,
    OrganizationType, UnionMembership, YesNo,
};
use crate::field::Field;
use crate::profile::{EncodedProfile, EncodedValue, RawProfile, RawValue};

/// Look up a label in a table, falling back to the table's designated code.
fn code_or_fallback(
    value: Option<&RawValue>,
    lookup: impl Fn(&str) -> Option<&'static str>,
    fallback: &'static str,
) -> EncodedValue {
    let code = value
        .and_then(RawValue::as_text)
        .and_then(lookup)
        .unwrap_or(fallback);
    EncodedValue::Code(code.to_string())
}

/// Pass a text answer through unchanged.
fn pass_through(value: Option<&RawValue>) -> Option<EncodedValue> {
    value
        .and_then(RawValue::as_text)
        .map(|s| EncodedValue::Code(s.to_string()))
}

/// Pass a numeric answer through unchanged.
///
/// Range validation is the caller's job; a text answer that parses as a
/// number is accepted for robustness.
fn pass_number(value: Option<&RawValue>) -> Option<EncodedValue> {
    match value {
        Some(RawValue::Number(n)) => Some(EncodedValue::Number(*n)),
        Some(RawValue::Text(s)) => s.trim().parse::<f64>().ok().map(EncodedValue::Number),
        None => None,
    }
}

/// Encode a raw submission into the fixed codes the model was trained on.
///
/// Total over any input: unmapped or missing categorical labels resolve to
/// the field's fallback code, numeric fields and the country, region and
/// occupation labels pass through unchanged.
///
/// # Examples
///
/// ```
/// use jobrisk_survey::{encode, Field, RawProfile};
///
/// let mut profile = RawProfile::new();
/// profile.set(Field::Gender, "Female");
///
/// let encoded = encode(&profile);
/// assert_eq!(encoded.get(Field::Gender).unwrap().as_code(), Some("2"));
/// ```
pub fn encode(raw: &RawProfile) -> EncodedProfile {
    let mut out = EncodedProfile::new();

    for field in Field::all() {
        let value = raw.get(field);
        let encoded = match field {
            Field::Age | Field::HouseholdSize => pass_number(value),
            Field::Country | Field::Region => pass_through(value),
            // Occupation is one-hot encoded on its label downstream; pass the
            // label through rather than re-coding it.
            Field::Occupation => value.and_then(RawValue::as_text).map(|s| {
                let canonical = Occupation::from_label(s).map_or(s, |c| c.label());
                EncodedValue::Code(canonical.to_string())
            }),
            Field::Gender => Some(code_or_fallback(
                value,
                |l| Gender::from_label(l).map(|c| c.code()),
                Gender::FALLBACK_CODE,
            )),
            Field::MaritalStatus => Some(code_or_fallback(
                value,
                |l| MaritalStatus::from_label(l).map(|c| c.code()),
                MaritalStatus::FALLBACK_CODE,
            )),
            Field::BornInCountry | Field::FatherBornInCountry | Field::MotherBornInCountry => {
                Some(code_or_fallback(
                    value,
                    |l| YesNo::from_label(l).map(|c| c.code()),
                    YesNo::FALLBACK_CODE,
                ))
            }
            Field::AreaType => Some(code_or_fallback(
                value,
                |l| AreaType::from_label(l).map(|c| c.code()),
                AreaType::FALLBACK_CODE,
            )),
            Field::Education | Field::FatherEducation | Field::MotherEducation => {
                Some(code_or_fallback(
                    value,
                    |l| EducationLevel::from_label(l).map(|c| c.code()),
                    EducationLevel::FALLBACK_CODE,
                ))
            }
            Field::Industry => Some(code_or_fallback(
                value,
                |l| Industry::from_label(l).map(|c| c.code()),
                Industry::FALLBACK_CODE,
            )),
            Field::OrganizationType => Some(code_or_fallback(
                value,
                |l| OrganizationType::from_label(l).map(|c| c.code()),
                OrganizationType::FALLBACK_CODE,
            )),
            Field::UnionMembership => Some(code_or_fallback(
                value,
                |l| UnionMembership::from_label(l).map(|c| c.code()),
                UnionMembership::FALLBACK_CODE,
            )),
            Field::HealthLimitation => Some(code_or_fallback(
                value,
                |l| HealthLimitation::from_label(l).map(|c| c.code()),
                HealthLimitation::FALLBACK_CODE,
            )),
            Field::DiscriminatedGroup => Some(code_or_fallback(
                value,
                |l| YesNo::from_label(l).map(|c| c.code()),
                YesNo::FALLBACK_CODE,
            )),
        };

        if let Some(encoded) = encoded {
            out.set(field, encoded);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn complete_profile() -> RawProfile {
        let mut p = RawProfile::new();
        p.set(Field::Gender, "Female")
            .set(Field::Age, 30.0)
            .set(Field::MaritalStatus, "Never married")
            .set(Field::HouseholdSize, 1.0)
            .set(Field::Country, "Germany")
            .set(Field::Region, "Berlin")
            .set(Field::BornInCountry, "Yes")
            .set(Field::FatherBornInCountry, "Yes")
            .set(Field::MotherBornInCountry, "Yes")
            .set(Field::AreaType, "Big city")
            .set(Field::Education, "Bachelor")
            .set(Field::FatherEducation, "Bachelor")
            .set(Field::MotherEducation, "Bachelor")
            .set(Field::Occupation, "Professionals")
            .set(Field::Industry, "Information and communication")
            .set(Field::OrganizationType, "Private firm")
            .set(Field::UnionMembership, "No")
            .set(Field::HealthLimitation, "No")
            .set(Field::DiscriminatedGroup, "No");
        p
    }

    fn code_of(encoded: &EncodedProfile, field: Field) -> &str {
        encoded.get(field).unwrap().as_code().unwrap()
    }

    #[test]
    fn test_reference_profile_codes() {
        let encoded = encode(&complete_profile());

        assert_eq!(code_of(&encoded, Field::Gender), "2");
        assert_eq!(code_of(&encoded, Field::MaritalStatus), "6");
        assert_eq!(code_of(&encoded, Field::BornInCountry), "1");
        assert_eq!(code_of(&encoded, Field::FatherBornInCountry), "1");
        assert_eq!(code_of(&encoded, Field::MotherBornInCountry), "1");
        assert_eq!(code_of(&encoded, Field::Education), "6");
        assert_eq!(code_of(&encoded, Field::FatherEducation), "6");
        assert_eq!(code_of(&encoded, Field::MotherEducation), "6");
        assert_eq!(code_of(&encoded, Field::AreaType), "1");
        assert_eq!(code_of(&encoded, Field::Occupation), "Professionals");
        assert_eq!(code_of(&encoded, Field::Industry), "8");
        assert_eq!(code_of(&encoded, Field::OrganizationType), "4");
        assert_eq!(code_of(&encoded, Field::UnionMembership), "3");
        assert_eq!(code_of(&encoded, Field::HealthLimitation), "3");
        assert_eq!(code_of(&encoded, Field::DiscriminatedGroup), "2");
        assert_eq!(code_of(&encoded, Field::Country), "Germany");
        assert_eq!(code_of(&encoded, Field::Region), "Berlin");

        assert_eq!(
            encoded.get(Field::Age).unwrap().as_number(),
            Some(30.0)
        );
        assert_eq!(
            encoded.get(Field::HouseholdSize).unwrap().as_number(),
            Some(1.0)
        );
    }

    #[test]
    fn test_determinism() {
        let profile = complete_profile();
        assert_eq!(encode(&profile), encode(&profile));
    }

    #[rstest]
    #[case(Field::Gender, "Nonbinary", "9")]
    #[case(Field::MaritalStatus, "It's complicated", "9")]
    #[case(Field::Education, "PhD", "55")]
    #[case(Field::Industry, "Space mining", "15")]
    #[case(Field::OrganizationType, "Co-op", "6")]
    #[case(Field::UnionMembership, "Maybe", "9")]
    #[case(Field::HealthLimitation, "Sometimes", "9")]
    #[case(Field::AreaType, "Houseboat", "9")]
    #[case(Field::DiscriminatedGroup, "Unsure", "9")]
    fn test_unrecognized_label_falls_back(
        #[case] field: Field,
        #[case] label: &str,
        #[case] expected: &str,
    ) {
        let mut profile = complete_profile();
        profile.set(field, label);

        let encoded = encode(&profile);
        assert_eq!(code_of(&encoded, field), expected);
    }

    #[test]
    fn test_missing_categorical_falls_back() {
        let encoded = encode(&RawProfile::new());
        assert_eq!(code_of(&encoded, Field::Gender), "9");
        assert_eq!(code_of(&encoded, Field::Education), "55");
    }

    #[test]
    fn test_numeric_text_parses() {
        let mut profile = complete_profile();
        profile.set(Field::Age, "42");

        let encoded = encode(&profile);
        assert_eq!(encoded.get(Field::Age).unwrap().as_number(), Some(42.0));
    }

    #[test]
    fn test_unparseable_numeric_omitted() {
        let mut profile = complete_profile();
        profile.set(Field::Age, "forty-two");

        let encoded = encode(&profile);
        assert_eq!(encoded.get(Field::Age), None);
    }

    #[test]
    fn test_never_panics_on_empty_profile() {
        let encoded = encode(&RawProfile::new());
        // All categorical fields encode to their fallback; numerics are absent.
        assert!(encoded.get(Field::Age).is_none());
        assert!(encoded.get(Field::Gender).is_some());
    }
}
