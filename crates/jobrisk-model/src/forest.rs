//! Gradient-boosted tree ensemble.
//!
//! The forest is the fitted classifier from the model artifact: a bias
//! margin plus a sequence of binary regression trees whose leaf values are
//! additive in log-odds space. Every node, internal ones included, stores
//! its training-time expected margin; that is what makes the per-path
//! contribution decomposition in [`crate::score`] exact rather than
//! approximate.

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

/// A node of a decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// An internal split node.
    Split {
        /// Index of the transformed feature tested at this node.
        feature: usize,
        /// Values strictly below the threshold descend left.
        threshold: f64,
        /// Index of the left child within the tree's node list.
        left: usize,
        /// Index of the right child within the tree's node list.
        right: usize,
        /// Expected margin of training examples reaching this node.
        value: f64,
    },

    /// A terminal leaf node.
    Leaf {
        /// Margin contribution of this leaf, in log-odds units.
        value: f64,
    },
}

impl Node {
    /// Expected margin at this node.
    pub const fn value(&self) -> f64 {
        match self {
            Self::Split { value, .. } | Self::Leaf { value } => *value,
        }
    }
}

/// A single regression tree. Node 0 is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    /// Nodes in index order; children always come after their parent.
    pub nodes: Vec<Node>,
}

impl Tree {
    /// Expected margin at the root, before any feature is consulted.
    pub fn root_value(&self) -> f64 {
        self.nodes[0].value()
    }

    /// Margin of the leaf this input descends to.
    pub fn leaf_margin(&self, x: &ArrayView1<'_, f64>) -> f64 {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    ..
                } => {
                    index = if x[*feature] < *threshold { *left } else { *right };
                }
            }
        }
    }

    /// Descend to the leaf, adding each split's change in expected margin to
    /// the contribution of the feature that caused it.
    ///
    /// Returns the leaf margin. The identity
    /// `root_value + sum(deltas) == leaf_margin` holds exactly.
    pub fn accumulate_contributions(
        &self,
        x: &ArrayView1<'_, f64>,
        contributions: &mut [f64],
    ) -> f64 {
        let mut index = 0;
        let mut current = self.nodes[0].value();
        loop {
            match &self.nodes[index] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    ..
                } => {
                    index = if x[*feature] < *threshold { *left } else { *right };
                    let next = self.nodes[index].value();
                    contributions[*feature] += next - current;
                    current = next;
                }
            }
        }
    }

    /// Check node indices against the tree and feature-space shape.
    pub(crate) fn validate(&self, tree_index: usize, n_features: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err(format!("tree {tree_index} has no nodes"));
        }
        for (i, node) in self.nodes.iter().enumerate() {
            if let Node::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                if *feature >= n_features {
                    return Err(format!(
                        "tree {tree_index} node {i} splits on feature {feature}, \
                         but the model has {n_features} features"
                    ));
                }
                // Children strictly after the parent guarantees termination.
                if *left <= i || *right <= i || *left >= self.nodes.len() || *right >= self.nodes.len()
                {
                    return Err(format!(
                        "tree {tree_index} node {i} has out-of-order child indices \
                         ({left}, {right})"
                    ));
                }
            }
        }
        Ok(())
    }
}

/// A fitted gradient-boosted binary classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forest {
    /// Margin independent of all features, in log-odds units.
    pub base_margin: f64,

    /// Width of the transformed feature space the forest was trained on.
    pub n_features: usize,

    /// Trees in boosting order.
    pub trees: Vec<Tree>,
}

impl Forest {
    /// Raw margin (log-odds) for a transformed input.
    pub fn margin(&self, x: &ArrayView1<'_, f64>) -> f64 {
        self.base_margin + self.trees.iter().map(|t| t.leaf_margin(x)).sum::<f64>()
    }

    /// Check structural integrity of every tree.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.n_features == 0 {
            return Err("forest declares zero features".to_string());
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(i, self.n_features)?;
        }
        Ok(())
    }
}
