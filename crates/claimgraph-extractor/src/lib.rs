//! Claimgraph Extractor
//!
//! Turns raw claim text into the row-oriented decomposition the graph
//! builder consumes:
//!
//! 1. **Chunk extraction** ([`chunking`]) - noun-chunk features, deduplicated
//!    in first-appearance order
//! 2. **Segmentation** ([`segment`]) - the claim split at feature boundaries,
//!    boundary artifacts cleaned
//! 3. **Role classification** ([`classify`]) - each segment assigned to the
//!    introduced / referenced / connective lane, embedded features surfaced
//! 4. **Table assembly** ([`pipeline`]) - per-claim lanes concatenated into
//!    the global table
//!
//! Every stage is total over degenerate input: empty text yields empty,
//! well-typed output, and a failure in one claim never prevents the other
//! claims from being processed.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chunking;
pub mod classify;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod segment;

pub use chunking::{extract_features, Chunk, ChunkDetector, RuleChunker, Token, TokenCategory};
pub use classify::classify_segments;
pub use config::ExtractorConfig;
pub use error::ExtractError;
pub use pipeline::{clean_claim_text, highlight_features, Pipeline, PipelineRun};
pub use segment::{clean_segments, split_claim};
