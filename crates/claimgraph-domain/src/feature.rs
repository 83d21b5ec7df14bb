//! Feature lists - ordered, deduplicated noun-phrase strings

use serde::{Deserialize, Serialize};

/// True if a feature belongs in the *editable* feature table shown to the
/// user. Anaphoric phrases ("the ...", "said ...") are hidden from that view
/// but stay in the raw feature list, where the segmenter and graph builder
/// still need them as antecedents.
pub fn is_display_feature(feature: &str) -> bool {
    let lower = feature.to_lowercase();
    !(lower.starts_with("the ") || lower.starts_with("said "))
}

/// An ordered list of distinct feature strings for one claim
///
/// Insertion deduplicates by exact string equality and preserves
/// first-appearance order. Empty strings are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureList(Vec<String>);

impl FeatureList {
    /// Create an empty feature list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a feature, keeping the first occurrence of duplicates
    ///
    /// Returns true if the feature was newly added.
    pub fn push(&mut self, feature: impl Into<String>) -> bool {
        let feature = feature.into();
        if feature.is_empty() || self.0.contains(&feature) {
            return false;
        }
        self.0.push(feature);
        true
    }

    /// Number of distinct features
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no features were extracted
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exact-string membership test
    pub fn contains(&self, feature: &str) -> bool {
        self.0.iter().any(|f| f == feature)
    }

    /// Iterate features in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Borrow the features as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Features for the editable view, with "the "/"said " phrases excluded
    pub fn display_features(&self) -> Vec<String> {
        self.0
            .iter()
            .filter(|f| is_display_feature(f))
            .cloned()
            .collect()
    }
}

impl FromIterator<String> for FeatureList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut list = FeatureList::new();
        for feature in iter {
            list.push(feature);
        }
        list
    }
}

impl<'a> FromIterator<&'a str> for FeatureList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_dedups_preserving_order() {
        let mut list = FeatureList::new();
        assert!(list.push("a widget"));
        assert!(list.push("a frame"));
        assert!(!list.push("a widget"));
        assert!(list.push("the frame"));

        let features: Vec<_> = list.iter().collect();
        assert_eq!(features, ["a widget", "a frame", "the frame"]);
    }

    #[test]
    fn test_push_rejects_empty() {
        let mut list = FeatureList::new();
        assert!(!list.push(""));
        assert!(list.is_empty());
    }

    #[test]
    fn test_display_filter() {
        assert!(is_display_feature("a widget"));
        assert!(is_display_feature("second member"));
        assert!(!is_display_feature("the frame"));
        assert!(!is_display_feature("The frame"));
        assert!(!is_display_feature("said handle"));
        // Only the leading word counts
        assert!(is_display_feature("a theory"));
        assert!(is_display_feature("theory"));
    }

    #[test]
    fn test_display_features_keeps_raw_list_intact() {
        let list: FeatureList = ["a widget", "the frame", "said handle"]
            .into_iter()
            .collect();
        assert_eq!(list.display_features(), ["a widget"]);
        assert_eq!(list.len(), 3);
    }
}
