//! Claimgraph Domain Layer
//!
//! This crate contains the core domain model for claimgraph: the value
//! objects that flow through the claim-to-graph pipeline and the persisted
//! structures they serialize to.
//!
//! ## Key Concepts
//!
//! - **Claim**: one numbered line of user-submitted claim text
//! - **Feature**: a noun-phrase string extracted from a claim, deduplicated
//!   in first-appearance order
//! - **ClaimRow / GlobalTable**: the per-position role decomposition
//!   (introduced / referenced / connective) across all claims
//! - **Graph**: the directed feature graph as explicit node and edge lists,
//!   user-editable after initial construction
//! - **MarkerSet**: head nodes and rendered branch combinations derived
//!   from the persisted graph
//!
//! ## Architecture
//!
//! Pipeline logic lives in other crates; this crate holds the shapes and the
//! invariant-preserving mutations (graph edits, lane padding, dedup).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod claim;
pub mod feature;
pub mod graph;
pub mod markers;
pub mod palette;
pub mod row;

// Re-exports for convenience
pub use claim::{Claim, ClaimOrdinal};
pub use feature::{is_display_feature, FeatureList};
pub use graph::{Edge, Graph, GraphError, Node};
pub use markers::MarkerSet;
pub use palette::{color_for, ColorAssigner, MANUAL_NODE_COLOR, PALETTE};
pub use row::{ClaimRow, ConcatenatedFrame, GlobalTable, Lanes};
