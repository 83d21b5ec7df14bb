//! Role classification of claim segments
//!
//! Each segment lands in exactly one of three lanes based on its leading
//! word; a post-pass surfaces features lexically embedded in connective
//! segments as their own introduced positions.

use claimgraph_domain::{FeatureList, Lanes};

const INTRODUCED_PREFIXES: [&str; 4] = ["A ", "a ", "An ", "an "];
const REFERENCED_PREFIXES: [&str; 3] = ["The ", "the ", "said "];

fn after_first_word(segment: &str) -> String {
    segment
        .split_once(' ')
        .map(|(_, rest)| rest.to_string())
        .unwrap_or_default()
}

/// Classify cleaned segments into the three role lanes
///
/// - indefinite-article segments join the introduced lane (article stripped)
/// - "the"/"said" segments join the referenced lane (leading word stripped)
/// - everything else joins the connective lane verbatim
///
/// Exactly one lane is non-empty per original segment; the other two hold
/// empty placeholders so positions stay aligned. The embedded-feature
/// post-pass then splits connective rows in place: the first feature
/// (declaration order) found as a substring is inserted as a new introduced
/// row right after, the connective rewritten with the feature text removed.
/// One feature is surfaced per connective entry; the scan resumes after the
/// inserted row.
pub fn classify_segments(segments: &[String], features: &FeatureList) -> Lanes {
    let mut introduced = Vec::with_capacity(segments.len());
    let mut referenced = Vec::with_capacity(segments.len());
    let mut connective = Vec::with_capacity(segments.len());

    for segment in segments {
        let is_introduced = INTRODUCED_PREFIXES.iter().any(|p| segment.starts_with(p));
        let is_referenced = REFERENCED_PREFIXES.iter().any(|p| segment.starts_with(p));

        introduced.push(if is_introduced {
            after_first_word(segment)
        } else {
            String::new()
        });
        referenced.push(if is_referenced {
            after_first_word(segment)
        } else {
            String::new()
        });
        connective.push(if is_introduced || is_referenced {
            String::new()
        } else {
            segment.clone()
        });
    }

    // Surface embedded features out of connective entries
    let mut i = 0;
    while i < connective.len() {
        for feature in features.iter() {
            if connective[i].contains(feature) {
                introduced.insert(i + 1, feature.to_string());
                referenced.insert(i + 1, String::new());
                connective.insert(i + 1, String::new());
                connective[i] = connective[i].replace(feature, "").trim().to_string();
                i += 1;
                break;
            }
        }
        i += 1;
    }

    Lanes {
        introduced,
        referenced,
        connective,
    }
}
