//! Questionnaire field identifiers.
//!
//! Every submission answers the same closed set of fields. Field identifiers
//! follow the European Social Survey variable names, which is also what the
//! model pipeline's transformed feature names embed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of questionnaire fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Field {
    /// Gender
    Gender,

    /// Age in years
    Age,

    /// Marital status
    MaritalStatus,

    /// Number of people in the household
    HouseholdSize,

    /// Country of residence
    Country,

    /// Region within the country of residence
    Region,

    /// Born in the country of residence
    BornInCountry,

    /// Father born in the country of residence
    FatherBornInCountry,

    /// Mother born in the country of residence
    MotherBornInCountry,

    /// Type of area lived in
    AreaType,

    /// Respondent's highest education level
    Education,

    /// Father's highest education level
    FatherEducation,

    /// Mother's highest education level
    MotherEducation,

    /// Main occupation category
    Occupation,

    /// Industry of the main job
    Industry,

    /// Type of organization worked for
    OrganizationType,

    /// Trade union membership
    UnionMembership,

    /// Hampered in daily activities by illness or disability
    HealthLimitation,

    /// Member of a group discriminated against
    DiscriminatedGroup,
}

impl Field {
    /// Returns all fields, in questionnaire order.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Gender,
            Self::Age,
            Self::MaritalStatus,
            Self::HouseholdSize,
            Self::Country,
            Self::Region,
            Self::BornInCountry,
            Self::FatherBornInCountry,
            Self::MotherBornInCountry,
            Self::AreaType,
            Self::Education,
            Self::FatherEducation,
            Self::MotherEducation,
            Self::Occupation,
            Self::Industry,
            Self::OrganizationType,
            Self::UnionMembership,
            Self::HealthLimitation,
            Self::DiscriminatedGroup,
        ]
    }

    /// Returns the survey variable identifier used in model feature names.
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Gender => "gndr",
            Self::Age => "agea",
            Self::MaritalStatus => "maritalb",
            Self::HouseholdSize => "hhmmb",
            Self::Country => "cntry",
            Self::Region => "region",
            Self::BornInCountry => "brncntr",
            Self::FatherBornInCountry => "facntr",
            Self::MotherBornInCountry => "mocntr",
            Self::AreaType => "domicil",
            Self::Education => "eisced",
            Self::FatherEducation => "eiscedf",
            Self::MotherEducation => "eiscedm",
            Self::Occupation => "isco08",
            Self::Industry => "nacer2",
            Self::OrganizationType => "tporgwk",
            Self::UnionMembership => "mbtru",
            Self::HealthLimitation => "hlthhmp",
            Self::DiscriminatedGroup => "dscrgrp",
        }
    }

    /// Returns the human-readable label used when presenting results.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Gender => "Gender",
            Self::Age => "Age",
            Self::MaritalStatus => "Marital status",
            Self::HouseholdSize => "Household size",
            Self::Country => "Country",
            Self::Region => "Region",
            Self::BornInCountry => "Born in country",
            Self::FatherBornInCountry => "Father born in country",
            Self::MotherBornInCountry => "Mother born in country",
            Self::AreaType => "Type of area",
            Self::Education => "Your education",
            Self::FatherEducation => "Father's education",
            Self::MotherEducation => "Mother's education",
            Self::Occupation => "Occupation",
            Self::Industry => "Industry",
            Self::OrganizationType => "Type of organization",
            Self::UnionMembership => "Membership in trade union",
            Self::HealthLimitation => "Health limitation",
            Self::DiscriminatedGroup => "Discrimination group",
        }
    }

    /// Parse a field from its survey variable identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|f| f.id() == id)
    }

    /// Whether the field carries a numeric answer rather than a category.
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Age | Self::HouseholdSize)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl From<Field> for String {
    fn from(field: Field) -> Self {
        field.id().to_string()
    }
}

impl TryFrom<String> for Field {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_id(&value).ok_or_else(|| format!("unknown field identifier: {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields() {
        assert_eq!(Field::all().len(), 19);
    }

    #[test]
    fn test_from_id_round_trip() {
        for field in Field::all() {
            assert_eq!(Field::from_id(field.id()), Some(field));
        }
    }

    #[test]
    fn test_from_id_unknown() {
        assert_eq!(Field::from_id("not_a_field"), None);
    }

    #[test]
    fn test_labels_nonempty_and_unique() {
        let labels: Vec<&str> = Field::all().iter().map(|f| f.label()).collect();
        for label in &labels {
            assert!(!label.is_empty());
        }
        let mut deduped = labels.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), labels.len());
    }

    #[test]
    fn test_numeric_fields() {
        assert!(Field::Age.is_numeric());
        assert!(Field::HouseholdSize.is_numeric());
        assert!(!Field::Region.is_numeric());
    }
}
