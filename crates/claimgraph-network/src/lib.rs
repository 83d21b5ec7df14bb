//! Claimgraph Network Layer
//!
//! Builds the directed feature graph from the global role table and derives
//! marker combinations from the persisted (possibly hand-edited) graph.
//!
//! The two halves are deliberately independent: the builder runs once per
//! save of the claim text, while markers are regenerated from whatever graph
//! the case document currently holds.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod markers;

pub use builder::build_graph;
pub use markers::{find_heads, format_markers, generate_markers, MARKER_TAG};
