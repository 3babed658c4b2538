#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/jobrisk/jobrisk/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod assess;

// Re-export main types from sub-crates
pub use jobrisk_explain as explain;
pub use jobrisk_model as model;
pub use jobrisk_survey as survey;

pub use assess::assess;
pub use jobrisk_explain::AttributionReport;
pub use jobrisk_model::ModelArtifact;
pub use jobrisk_survey::{Field, RawProfile, validate};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
