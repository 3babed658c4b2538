#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/jobrisk/jobrisk/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod export;
pub mod parse;
pub mod report;

// Re-export main types
pub use aggregate::{FactorContribution, aggregate};
pub use export::{ExportError, ExportFormat, export_report};
pub use parse::original_variable;
pub use report::AttributionReport;
