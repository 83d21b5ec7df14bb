//! Node color palette and per-case color assignment

use crate::claim::ClaimOrdinal;
use std::collections::BTreeMap;

/// Fixed cyclic palette; claims draw colors from it in first-use order
pub const PALETTE: [&str; 16] = [
    "red",
    "orange",
    "lime",
    "turquoise",
    "hotpink",
    "khaki",
    "blue",
    "green",
    "yellow",
    "violet",
    "coral",
    "pink",
    "steelblue",
    "salmon",
    "tomato",
    "springgreen",
];

/// Color for nodes added by hand in the graph editor
pub const MANUAL_NODE_COLOR: &str = "yellow";

/// Palette color for a 0-based index, cycling past the end
pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Assigns one palette color per claim, stable across calls
///
/// The next-color index is explicit state threaded through one graph build;
/// every node first introduced by the same claim gets that claim's color.
#[derive(Debug, Default)]
pub struct ColorAssigner {
    claim_colors: BTreeMap<u32, &'static str>,
    next: usize,
}

impl ColorAssigner {
    /// Create an assigner starting at the first palette color
    pub fn new() -> Self {
        Self::default()
    }

    /// Color for a claim, assigning the next palette color on first use
    pub fn color_for_claim(&mut self, claim: ClaimOrdinal) -> &'static str {
        if let Some(color) = self.claim_colors.get(&claim.value()) {
            return color;
        }
        let color = color_for(self.next);
        self.next += 1;
        self.claim_colors.insert(claim.value(), color);
        color
    }
}
