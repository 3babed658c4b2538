#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/jobrisk/jobrisk/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod categories;
pub mod encode;
pub mod field;
pub mod profile;
pub mod regions;
pub mod validate;

// Re-export main types
pub use categories::{
    AreaType, EducationLevel, Gender, HealthLimitation, Industry, MaritalStatus, Occupation,
    OrganizationType, UnionMembership, YesNo,
};
pub use encode::encode;
pub use field::Field;
pub use profile::{EncodedProfile, EncodedValue, RawProfile, RawValue, SELECT_SENTINEL};
pub use validate::{ValidationError, validate};
