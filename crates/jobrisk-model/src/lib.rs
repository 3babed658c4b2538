#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/jobrisk/jobrisk/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod artifact;
pub mod error;
pub mod forest;
pub mod score;
pub mod transform;

// Re-export main types
pub use artifact::ModelArtifact;
pub use error::{ModelError, Result};
pub use forest::{Forest, Node, Tree};
pub use score::{Prediction, Scorer, sigmoid};
pub use transform::{Block, FeatureTransformer, OneHotColumn};
