//! Enumeration tables mapping questionnaire answers to model codes.
//!
//! Each table is a closed enum with the category code the model pipeline was
//! trained on. Tables are data, not control flow: the encoder only ever does
//! a label lookup followed by a code lookup, so every table can be tested on
//! its own and swapped per model version.
//!
//! Every table designates a fallback code for answers it does not recognize.
//! Encoding must stay total: an unmapped label resolves to the fallback
//! instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Yes/no answers (born-in-country questions, discriminated-group question).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    /// Yes
    Yes,

    /// No
    No,

    /// Other / no answer
    Other,
}

impl YesNo {
    /// Code for answers outside the table.
    pub const FALLBACK_CODE: &'static str = "9";

    /// Returns all categories.
    pub fn all() -> Vec<Self> {
        vec![Self::Yes, Self::No, Self::Other]
    }

    /// Returns the model code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Yes => "1",
            Self::No => "2",
            Self::Other => "9",
        }
    }

    /// Returns the questionnaire label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Other => "Other/No answer",
        }
    }

    /// Parse a category from its questionnaire label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.label() == label)
    }
}

/// Gender categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male
    Male,

    /// Female
    Female,

    /// Other / no answer
    Other,
}

impl Gender {
    /// Code for answers outside the table.
    pub const FALLBACK_CODE: &'static str = "9";

    /// Returns all categories.
    pub fn all() -> Vec<Self> {
        vec![Self::Male, Self::Female, Self::Other]
    }

    /// Returns the model code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Male => "1",
            Self::Female => "2",
            Self::Other => "9",
        }
    }

    /// Returns the questionnaire label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other/No answer",
        }
    }

    /// Parse a category from its questionnaire label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.label() == label)
    }
}

/// Highest education level, on the harmonized ordinal scale.
///
/// Codes 1 through 7 are ordered from least to most education; the scale has
/// a separate out-of-band code for "other / no answer".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    /// Less than lower secondary
    LessThanLowerSecondary,

    /// Lower secondary
    LowerSecondary,

    /// Upper secondary, lower tier
    UpperSecondaryLower,

    /// Upper secondary, upper tier
    UpperSecondaryUpper,

    /// Advanced vocational / sub-degree
    AdvancedVocational,

    /// Bachelor
    Bachelor,

    /// Master
    Master,

    /// Other / no answer
    Other,
}

impl EducationLevel {
    /// Code for answers outside the table.
    pub const FALLBACK_CODE: &'static str = "55";

    /// Returns all categories.
    pub fn all() -> Vec<Self> {
        vec![
            Self::LessThanLowerSecondary,
            Self::LowerSecondary,
            Self::UpperSecondaryLower,
            Self::UpperSecondaryUpper,
            Self::AdvancedVocational,
            Self::Bachelor,
            Self::Master,
            Self::Other,
        ]
    }

    /// Returns the model code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::LessThanLowerSecondary => "1",
            Self::LowerSecondary => "2",
            Self::UpperSecondaryLower => "3",
            Self::UpperSecondaryUpper => "4",
            Self::AdvancedVocational => "5",
            Self::Bachelor => "6",
            Self::Master => "7",
            Self::Other => "55",
        }
    }

    /// Returns the questionnaire label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::LessThanLowerSecondary => "Less than lower secondary",
            Self::LowerSecondary => "Lower secondary",
            Self::UpperSecondaryLower => "Upper secondary (lower tier)",
            Self::UpperSecondaryUpper => "Upper secondary (upper tier)",
            Self::AdvancedVocational => "Advanced vocational/sub-degree",
            Self::Bachelor => "Bachelor",
            Self::Master => "Master",
            Self::Other => "Other/No answer",
        }
    }

    /// Parse a category from its questionnaire label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.label() == label)
    }
}

/// Marital status categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaritalStatus {
    /// Married
    Married,

    /// Registered civil union
    CivilUnion,

    /// Separated
    Separated,

    /// Divorced
    Divorced,

    /// Widowed
    Widowed,

    /// Never married
    NeverMarried,

    /// Other / no answer
    Other,
}

impl MaritalStatus {
    /// Code for answers outside the table.
    pub const FALLBACK_CODE: &'static str = "9";

    /// Returns all categories.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Married,
            Self::CivilUnion,
            Self::Separated,
            Self::Divorced,
            Self::Widowed,
            Self::NeverMarried,
            Self::Other,
        ]
    }

    /// Returns the model code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Married => "1",
            Self::CivilUnion => "2",
            Self::Separated => "3",
            Self::Divorced => "4",
            Self::Widowed => "5",
            Self::NeverMarried => "6",
            Self::Other => "9",
        }
    }

    /// Returns the questionnaire label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Married => "Married",
            Self::CivilUnion => "Registered civil union",
            Self::Separated => "Separated",
            Self::Divorced => "Divorced",
            Self::Widowed => "Widowed",
            Self::NeverMarried => "Never married",
            Self::Other => "Other/No answer",
        }
    }

    /// Parse a category from its questionnaire label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.label() == label)
    }
}

/// Industry of the main job (NACE rev. 2 top-level groupings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    /// Agriculture, forestry, fishing
    Agriculture,

    /// Mining and quarrying
    Mining,

    /// Manufacturing
    Manufacturing,

    /// Energy, water supply, waste
    Energy,

    /// Construction
    Construction,

    /// Trade and transport
    TradeTransport,

    /// Accommodation and food service
    Accommodation,

    /// Information and communication
    Information,

    /// Financial and insurance
    Financial,

    /// Real estate
    RealEstate,

    /// Professional, scientific, technical services
    Professional,

    /// Administrative and support services
    Administrative,

    /// Public administration, education, health
    PublicAdministration,

    /// Arts, entertainment, recreation
    Arts,

    /// Other services
    OtherServices,
}

impl Industry {
    /// Code for answers outside the table. The industry list carries no
    /// explicit "no answer" category, so unmapped answers land in the
    /// residual services group.
    pub const FALLBACK_CODE: &'static str = "15";

    /// Returns all categories.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Agriculture,
            Self::Mining,
            Self::Manufacturing,
            Self::Energy,
            Self::Construction,
            Self::TradeTransport,
            Self::Accommodation,
            Self::Information,
            Self::Financial,
            Self::RealEstate,
            Self::Professional,
            Self::Administrative,
            Self::PublicAdministration,
            Self::Arts,
            Self::OtherServices,
        ]
    }

    /// Returns the model code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Agriculture => "1",
            Self::Mining => "2",
            Self::Manufacturing => "3",
            Self::Energy => "4",
            Self::Construction => "5",
            Self::TradeTransport => "6",
            Self::Accommodation => "7",
            Self::Information => "8",
            Self::Financial => "9",
            Self::RealEstate => "10",
            Self::Professional => "11",
            Self::Administrative => "12",
            Self::PublicAdministration => "13",
            Self::Arts => "14",
            Self::OtherServices => "15",
        }
    }

    /// Returns the questionnaire label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Agriculture => "Agriculture, forestry, fishing",
            Self::Mining => "Mining and quarrying",
            Self::Manufacturing => "Manufacturing",
            Self::Energy => "Energy, water supply, waste",
            Self::Construction => "Construction",
            Self::TradeTransport => "Trade and transport",
            Self::Accommodation => "Accommodation and food service",
            Self::Information => "Information and communication",
            Self::Financial => "Financial and insurance",
            Self::RealEstate => "Real estate",
            Self::Professional => "Professional, scientific, technical services",
            Self::Administrative => "Administrative and support services",
            Self::PublicAdministration => "Public administration, education, health",
            Self::Arts => "Arts, entertainment, recreation",
            Self::OtherServices => "Other services",
        }
    }

    /// Parse a category from its questionnaire label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.label() == label)
    }
}

/// Type of organization worked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrganizationType {
    /// Central or local government
    Government,

    /// Other public sector (education, health)
    OtherPublicSector,

    /// State-owned enterprise
    StateOwned,

    /// Private firm
    PrivateFirm,

    /// Self-employed
    SelfEmployed,

    /// Other
    Other,
}

impl OrganizationType {
    /// Code for answers outside the table.
    pub const FALLBACK_CODE: &'static str = "6";

    /// Returns all categories.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Government,
            Self::OtherPublicSector,
            Self::StateOwned,
            Self::PrivateFirm,
            Self::SelfEmployed,
            Self::Other,
        ]
    }

    /// Returns the model code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Government => "1",
            Self::OtherPublicSector => "2",
            Self::StateOwned => "3",
            Self::PrivateFirm => "4",
            Self::SelfEmployed => "5",
            Self::Other => "6",
        }
    }

    /// Returns the questionnaire label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Government => "Central or local government",
            Self::OtherPublicSector => "Other public sector (education, health)",
            Self::StateOwned => "State-owned enterprise",
            Self::PrivateFirm => "Private firm",
            Self::SelfEmployed => "Self-employed",
            Self::Other => "Other",
        }
    }

    /// Parse a category from its questionnaire label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.label() == label)
    }
}

/// Trade union membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnionMembership {
    /// Yes, currently
    Current,

    /// Yes, previously
    Previous,

    /// No
    No,

    /// Other / no answer
    Other,
}

impl UnionMembership {
    /// Code for answers outside the table.
    pub const FALLBACK_CODE: &'static str = "9";

    /// Returns all categories.
    pub fn all() -> Vec<Self> {
        vec![Self::Current, Self::Previous, Self::No, Self::Other]
    }

    /// Returns the model code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Current => "1",
            Self::Previous => "2",
            Self::No => "3",
            Self::Other => "9",
        }
    }

    /// Returns the questionnaire label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Current => "Yes, currently",
            Self::Previous => "Yes, previously",
            Self::No => "No",
            Self::Other => "Other/No answer",
        }
    }

    /// Parse a category from its questionnaire label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.label() == label)
    }
}

/// Hampered in daily activities by illness, disability or mental problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthLimitation {
    /// Yes, a lot
    ALot,

    /// Yes, to some extent
    SomeExtent,

    /// No
    No,

    /// Other / no answer
    Other,
}

impl HealthLimitation {
    /// Code for answers outside the table.
    pub const FALLBACK_CODE: &'static str = "9";

    /// Returns all categories.
    pub fn all() -> Vec<Self> {
        vec![Self::ALot, Self::SomeExtent, Self::No, Self::Other]
    }

    /// Returns the model code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ALot => "1",
            Self::SomeExtent => "2",
            Self::No => "3",
            Self::Other => "9",
        }
    }

    /// Returns the questionnaire label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ALot => "Yes, a lot",
            Self::SomeExtent => "Yes, to some extent",
            Self::No => "No",
            Self::Other => "Other/No answer",
        }
    }

    /// Parse a category from its questionnaire label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.label() == label)
    }
}

/// Type of area lived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaType {
    /// Big city
    BigCity,

    /// Suburb or outskirts of a big city
    Suburb,

    /// Town or small city
    Town,

    /// Village or countryside
    Village,

    /// Farm or home in the countryside
    Farm,

    /// Other / no answer
    Other,
}

impl AreaType {
    /// Code for answers outside the table.
    pub const FALLBACK_CODE: &'static str = "9";

    /// Returns all categories.
    pub fn all() -> Vec<Self> {
        vec![
            Self::BigCity,
            Self::Suburb,
            Self::Town,
            Self::Village,
            Self::Farm,
            Self::Other,
        ]
    }

    /// Returns the model code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BigCity => "1",
            Self::Suburb => "2",
            Self::Town => "3",
            Self::Village => "4",
            Self::Farm => "5",
            Self::Other => "9",
        }
    }

    /// Returns the questionnaire label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::BigCity => "Big city",
            Self::Suburb => "Suburb/outskirts",
            Self::Town => "Town/small city",
            Self::Village => "Village/countryside",
            Self::Farm => "Farm/home in countryside",
            Self::Other => "Other/No answer",
        }
    }

    /// Parse a category from its questionnaire label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.label() == label)
    }
}

/// Main occupation category (ISCO-08 major groups).
///
/// Occupation is not re-coded: the model pipeline was trained on the labels
/// themselves, so the encoder passes the canonical label through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupation {
    /// Armed forces
    ArmedForces,

    /// Managers
    Managers,

    /// Professionals
    Professionals,

    /// Technicians
    Technicians,

    /// Clerical support
    ClericalSupport,

    /// Service and sales
    ServiceSales,

    /// Skilled agricultural
    SkilledAgricultural,

    /// Craft and trades
    CraftTrades,

    /// Plant and machine operators
    PlantOperators,

    /// Elementary occupations
    Elementary,
}

impl Occupation {
    /// Returns all categories.
    pub fn all() -> Vec<Self> {
        vec![
            Self::ArmedForces,
            Self::Managers,
            Self::Professionals,
            Self::Technicians,
            Self::ClericalSupport,
            Self::ServiceSales,
            Self::SkilledAgricultural,
            Self::CraftTrades,
            Self::PlantOperators,
            Self::Elementary,
        ]
    }

    /// Returns the questionnaire label, which is also the model code.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ArmedForces => "Armed forces",
            Self::Managers => "Managers",
            Self::Professionals => "Professionals",
            Self::Technicians => "Technicians",
            Self::ClericalSupport => "Clerical support",
            Self::ServiceSales => "Service and sales",
            Self::SkilledAgricultural => "Skilled agricultural",
            Self::CraftTrades => "Craft and trades",
            Self::PlantOperators => "Plant and machine operators",
            Self::Elementary => "Elementary occupations",
        }
    }

    /// Parse a category from its questionnaire label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Occupation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_table_sizes() {
        assert_eq!(YesNo::all().len(), 3);
        assert_eq!(Gender::all().len(), 3);
        assert_eq!(EducationLevel::all().len(), 8);
        assert_eq!(MaritalStatus::all().len(), 7);
        assert_eq!(Industry::all().len(), 15);
        assert_eq!(OrganizationType::all().len(), 6);
        assert_eq!(UnionMembership::all().len(), 4);
        assert_eq!(HealthLimitation::all().len(), 4);
        assert_eq!(AreaType::all().len(), 6);
        assert_eq!(Occupation::all().len(), 10);
    }

    #[rstest]
    #[case("Yes", "1")]
    #[case("No", "2")]
    #[case("Other/No answer", "9")]
    fn test_yes_no_codes(#[case] label: &str, #[case] code: &str) {
        assert_eq!(YesNo::from_label(label).unwrap().code(), code);
    }

    #[rstest]
    #[case("Less than lower secondary", "1")]
    #[case("Upper secondary (upper tier)", "4")]
    #[case("Bachelor", "6")]
    #[case("Master", "7")]
    #[case("Other/No answer", "55")]
    fn test_education_codes(#[case] label: &str, #[case] code: &str) {
        assert_eq!(EducationLevel::from_label(label).unwrap().code(), code);
    }

    #[rstest]
    #[case("Married", "1")]
    #[case("Never married", "6")]
    fn test_marital_codes(#[case] label: &str, #[case] code: &str) {
        assert_eq!(MaritalStatus::from_label(label).unwrap().code(), code);
    }

    #[rstest]
    #[case("Agriculture, forestry, fishing", "1")]
    #[case("Information and communication", "8")]
    #[case("Other services", "15")]
    fn test_industry_codes(#[case] label: &str, #[case] code: &str) {
        assert_eq!(Industry::from_label(label).unwrap().code(), code);
    }

    #[test]
    fn test_label_round_trip() {
        for c in Gender::all() {
            assert_eq!(Gender::from_label(c.label()), Some(c));
        }
        for c in OrganizationType::all() {
            assert_eq!(OrganizationType::from_label(c.label()), Some(c));
        }
        for c in UnionMembership::all() {
            assert_eq!(UnionMembership::from_label(c.label()), Some(c));
        }
        for c in HealthLimitation::all() {
            assert_eq!(HealthLimitation::from_label(c.label()), Some(c));
        }
        for c in AreaType::all() {
            assert_eq!(AreaType::from_label(c.label()), Some(c));
        }
        for c in Occupation::all() {
            assert_eq!(Occupation::from_label(c.label()), Some(c));
        }
    }

    #[test]
    fn test_unknown_labels_reject() {
        assert_eq!(Gender::from_label("Unknown"), None);
        assert_eq!(MaritalStatus::from_label("It's complicated"), None);
        assert_eq!(Industry::from_label(""), None);
    }

    #[test]
    fn test_codes_unique_within_table() {
        let mut codes: Vec<&str> = Industry::all().iter().map(|c| c.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), Industry::all().len());
    }
}
