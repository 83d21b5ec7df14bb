//! Claim segmentation at feature boundaries

use crate::error::ExtractError;
use claimgraph_domain::FeatureList;
use regex::Regex;

/// Split a cleaned claim into segments at feature boundaries
///
/// Builds one alternation pattern over the verbatim feature strings
/// (declaration order, standard leftmost-match semantics) and splits the
/// claim on it, keeping each match as its own segment. Blank segments are
/// dropped. An empty feature list returns the whole claim as one segment.
pub fn split_claim(text: &str, features: &FeatureList) -> Result<Vec<String>, ExtractError> {
    let text = text.trim();

    if features.is_empty() {
        return Ok(vec![text.to_string()]);
    }

    let pattern = features
        .iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    let re = Regex::new(&pattern).map_err(|e| ExtractError::Pattern(e.to_string()))?;

    let mut segments = Vec::new();
    let mut push = |s: &str| {
        let s = s.trim();
        if !s.is_empty() {
            segments.push(s.to_string());
        }
    };

    let mut last = 0;
    for m in re.find_iter(text) {
        push(&text[last..m.start()]);
        push(m.as_str());
        last = m.end();
    }
    push(&text[last..]);

    Ok(segments)
}

/// True for a leading claim numeral segment: digits optionally followed by
/// dots ("1", "12.", "3..")
fn is_claim_numeral(segment: &str) -> bool {
    let digits = segment.chars().take_while(|c| c.is_ascii_digit()).count();
    digits > 0 && segment.chars().skip(digits).all(|c| c == '.')
}

/// Clean boundary artifacts from a segment sequence, in order:
///
/// (a) drop a leading claim-numeral segment;
/// (b) drop a trailing segment that is exactly "." or ",";
/// (c) strip one leading `,`/`:`/`;` plus following whitespace from every
///     remaining segment.
pub fn clean_segments(mut segments: Vec<String>) -> Vec<String> {
    if segments.is_empty() {
        return segments;
    }

    if is_claim_numeral(&segments[0]) {
        segments.remove(0);
    }

    if matches!(segments.last().map(String::as_str), Some(".") | Some(",")) {
        segments.pop();
    }

    for segment in &mut segments {
        if let Some(rest) = segment
            .strip_prefix(',')
            .or_else(|| segment.strip_prefix(':'))
            .or_else(|| segment.strip_prefix(';'))
        {
            *segment = rest.trim_start().to_string();
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(features: &[&str]) -> FeatureList {
        features.iter().copied().collect()
    }

    #[test]
    fn test_split_example_claim() {
        let features = list(&["A widget", "a frame", "a handle", "the frame"]);
        let segments = split_claim(
            "1. A widget comprising a frame and a handle attached to the frame.",
            &features,
        )
        .unwrap();
        assert_eq!(
            segments,
            [
                "1.",
                "A widget",
                "comprising",
                "a frame",
                "and",
                "a handle",
                "attached to",
                "the frame",
                "."
            ]
        );
    }

    #[test]
    fn test_split_no_features_returns_whole_claim() {
        let segments = split_claim("A method of doing things.", &FeatureList::new()).unwrap();
        assert_eq!(segments, ["A method of doing things."]);
    }

    #[test]
    fn test_split_empty_text() {
        let segments = split_claim("", &FeatureList::new()).unwrap();
        assert_eq!(segments, [""]);
        // With features, blank segments are dropped entirely
        let segments = split_claim("", &list(&["a frame"])).unwrap();
        assert!(segments.is_empty());
    }

    #[test]
    fn test_split_coverage() {
        // Concatenating segments (modulo whitespace) reproduces the input
        let text = "2. The widget of claim 1 wherein a grip surrounds the handle.";
        let features = list(&["The widget", "a grip", "the handle"]);
        let segments = split_claim(text, &features).unwrap();

        let rebuilt: String = segments.join("").split_whitespace().collect();
        let original: String = text.split_whitespace().collect();
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn test_clean_drops_leading_numeral() {
        let cleaned = clean_segments(vec!["1.".into(), "A widget".into()]);
        assert_eq!(cleaned, ["A widget"]);
        let cleaned = clean_segments(vec!["12".into(), "A widget".into()]);
        assert_eq!(cleaned, ["A widget"]);
        // Not a numeral: left alone
        let cleaned = clean_segments(vec!["1a.".into(), "A widget".into()]);
        assert_eq!(cleaned, ["1a.", "A widget"]);
    }

    #[test]
    fn test_clean_drops_trailing_punctuation_segment() {
        let cleaned = clean_segments(vec!["a frame".into(), ".".into()]);
        assert_eq!(cleaned, ["a frame"]);
        let cleaned = clean_segments(vec!["a frame".into(), ",".into()]);
        assert_eq!(cleaned, ["a frame"]);
        let cleaned = clean_segments(vec!["a frame".into(), "..".into()]);
        assert_eq!(cleaned, ["a frame", ".."]);
    }

    #[test]
    fn test_clean_strips_one_leading_connective_mark() {
        let cleaned = clean_segments(vec![
            ", wherein".into(),
            ": including".into(),
            ";; twice".into(),
        ]);
        assert_eq!(cleaned, ["wherein", "including", "; twice"]);
    }

    #[test]
    fn test_clean_can_empty_the_list() {
        let cleaned = clean_segments(vec!["3.".into(), ".".into()]);
        assert!(cleaned.is_empty());
    }

    #[test]
    fn test_feature_with_regex_metacharacters() {
        // Parenthetical text is normally stripped upstream, but escaping must
        // hold for any verbatim feature string
        let features = list(&["a (first) frame"]);
        let segments = split_claim("includes a (first) frame here", &features).unwrap();
        assert_eq!(segments, ["includes", "a (first) frame", "here"]);
    }
}
