//! Pipeline orchestration: claims in, features and global table out

use crate::chunking::{extract_features, ChunkDetector, RuleChunker};
use crate::config::ExtractorConfig;
use crate::classify::classify_segments;
use crate::error::ExtractError;
use crate::segment::{clean_segments, split_claim};
use claimgraph_domain::{Claim, FeatureList, GlobalTable};
use regex::{NoExpand, Regex};
use tracing::{debug, info, warn};

/// Strip parenthetical content and collapse whitespace
///
/// A `(` with no matching `)` is kept literally. Whitespace runs collapse to
/// single spaces and the ends are trimmed.
pub fn clean_claim_text(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('(') {
        cleaned.push_str(&rest[..open]);
        match rest[open..].find(')') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                cleaned.push_str(&rest[open..]);
                rest = "";
                break;
            }
        }
    }
    cleaned.push_str(rest);

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Bracket every feature occurrence in the claim text for display
///
/// Word-boundary matches only, so "a frame" does not fire inside
/// "a framework".
pub fn highlight_features(text: &str, features: &FeatureList) -> String {
    let mut highlighted = text.to_string();
    for feature in features.iter() {
        let pattern = format!(r"\b{}\b", regex::escape(feature));
        let re = match Regex::new(&pattern) {
            Ok(re) => re,
            Err(_) => continue,
        };
        let replacement = format!("[{}]", feature);
        highlighted = re
            .replace_all(&highlighted, NoExpand(&replacement))
            .into_owned();
    }
    highlighted
}

/// Result of one full pipeline run over a submission
#[derive(Debug, Clone, Default)]
pub struct PipelineRun {
    /// Cleaned claims, in submission order
    pub claims: Vec<Claim>,

    /// Raw feature list per claim, parallel to `claims`
    pub features: Vec<FeatureList>,

    /// Global role table across all claims
    pub table: GlobalTable,
}

/// The claim-to-table pipeline
///
/// Recomputes everything from scratch on every run; there is no incremental
/// state beyond the configuration and the chunk detector.
pub struct Pipeline<D: ChunkDetector> {
    detector: D,
    config: ExtractorConfig,
}

impl Pipeline<RuleChunker> {
    /// Pipeline with the built-in rule chunker and default configuration
    pub fn with_defaults() -> Self {
        Self {
            detector: RuleChunker::new(),
            config: ExtractorConfig::default(),
        }
    }
}

impl<D: ChunkDetector> Pipeline<D> {
    /// Create a pipeline with a specific detector and configuration
    pub fn new(detector: D, config: ExtractorConfig) -> Result<Self, ExtractError> {
        config.validate().map_err(ExtractError::Config)?;
        Ok(Self { detector, config })
    }

    /// Run the full pipeline over a submission
    ///
    /// Each claim is cleaned, chunked, segmented, classified, and appended
    /// to the global table in submission order. A segmentation failure in
    /// one claim is logged and that claim contributes nothing; the other
    /// claims are unaffected.
    pub fn run(&self, claims: &[Claim]) -> PipelineRun {
        info!(claims = claims.len(), "running claim pipeline");

        let mut run = PipelineRun::default();
        for claim in claims {
            let cleaned = clean_claim_text(&claim.text);
            let features = extract_features(&cleaned, &self.detector, &self.config);

            let segments = match split_claim(&cleaned, &features) {
                Ok(segments) => segments,
                Err(e) => {
                    warn!(claim = %claim.ordinal, error = %e, "segmentation failed; skipping claim");
                    run.claims.push(Claim::new(claim.ordinal, cleaned));
                    run.features.push(features);
                    continue;
                }
            };

            let mut segments = clean_segments(segments);
            if segments.is_empty() {
                // Downstream stages expect at least one position
                segments.push(String::new());
            }

            let lanes = classify_segments(&segments, &features);
            let rows = lanes.into_rows(claim.ordinal);
            debug!(claim = %claim.ordinal, rows = rows.len(), "claim decomposed");

            run.claims.push(Claim::new(claim.ordinal, cleaned));
            run.features.push(features);
            run.table.push_claim(rows);
        }

        info!(rows = run.table.len(), "pipeline complete");
        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimgraph_domain::ClaimOrdinal;

    #[test]
    fn test_clean_claim_text() {
        assert_eq!(
            clean_claim_text("A widget (10) comprising  a frame (20a, 20b)."),
            "A widget comprising a frame ."
        );
        // Unmatched parenthesis is left in place
        assert_eq!(clean_claim_text("a frame (10"), "a frame (10");
        assert_eq!(clean_claim_text(""), "");
    }

    #[test]
    fn test_clean_claim_text_first_close_wins() {
        assert_eq!(clean_claim_text("x (a (b) y"), "x y");
    }

    #[test]
    fn test_example_claim_end_to_end() {
        let claims = Claim::from_submission(
            "1. A widget comprising a frame and a handle attached to the frame.",
        );
        let run = Pipeline::with_defaults().run(&claims);

        assert_eq!(run.features.len(), 1);
        let features: Vec<_> = run.features[0].iter().collect();
        assert_eq!(features, ["A widget", "a frame", "a handle", "the frame"]);

        let rows = run.table.rows();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].introduced, "widget");
        assert_eq!(rows[1].connective, "comprising");
        assert_eq!(rows[2].introduced, "frame");
        assert_eq!(rows[3].connective, "and");
        assert_eq!(rows[4].introduced, "handle");
        assert_eq!(rows[5].connective, "attached to");
        assert_eq!(rows[6].referenced, "frame");
        assert!(rows.iter().all(|r| r.claim == ClaimOrdinal::new(1)));
    }

    #[test]
    fn test_lane_exclusivity_end_to_end() {
        let claims = Claim::from_submission(
            "1. A widget comprising a frame.\n2. The widget of claim 1 wherein a grip covers the frame.",
        );
        let run = Pipeline::with_defaults().run(&claims);
        for row in run.table.rows() {
            let non_empty = [&row.introduced, &row.referenced, &row.connective]
                .iter()
                .filter(|cell| !cell.is_empty())
                .count();
            assert!(non_empty <= 1);
        }
    }

    #[test]
    fn test_empty_submission_contributes_nothing() {
        let run = Pipeline::with_defaults().run(&[]);
        assert!(run.claims.is_empty());
        assert!(run.table.is_empty());
    }

    #[test]
    fn test_degenerate_claim_contributes_no_rows() {
        // A claim that cleans down to nothing still yields a feature entry
        let claims = vec![Claim::new(ClaimOrdinal::new(1), "(10)")];
        let run = Pipeline::with_defaults().run(&claims);
        assert_eq!(run.claims.len(), 1);
        assert!(run.features[0].is_empty());
        assert!(run.table.is_empty());
    }

    #[test]
    fn test_claim_major_row_order() {
        let claims = Claim::from_submission("1. A widget.\n2. A frame.");
        let run = Pipeline::with_defaults().run(&claims);
        let ordinals: Vec<u32> = run.table.rows().iter().map(|r| r.claim.value()).collect();
        let mut sorted = ordinals.clone();
        sorted.sort_unstable();
        assert_eq!(ordinals, sorted);
    }

    #[test]
    fn test_highlight_features() {
        let features: FeatureList = ["a frame"].into_iter().collect();
        assert_eq!(
            highlight_features("with a frame inside a framework", &features),
            "with [a frame] inside a framework"
        );
    }
}
