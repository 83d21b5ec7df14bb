//! Marker sets - the derived prior-art search combinations

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Markers derived from the persisted graph
///
/// Serializes as the `"Markers"` section of the case document. Heads with no
/// qualifying branch (every path from them has a single node) are absent
/// from `branches`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerSet {
    /// All node ids, in graph insertion order
    #[serde(rename = "Combinations", default)]
    pub combinations: Vec<String>,

    /// Head node ids (in-degree zero), in graph insertion order
    #[serde(rename = "Heads", default)]
    pub heads: Vec<String>,

    /// Head id -> rendered marker strings for its maximal branches
    #[serde(rename = "Branches", default)]
    pub branches: BTreeMap<String, Vec<String>>,
}

impl MarkerSet {
    /// True if the graph contributed nothing
    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty() && self.heads.is_empty() && self.branches.is_empty()
    }
}
