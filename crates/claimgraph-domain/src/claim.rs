//! Claim module - the numbered unit of submitted text

use serde::{Deserialize, Serialize};
use std::fmt;

/// 1-based claim number
///
/// Claims are keyed `Cl_<n>` in the persisted case document; this newtype
/// owns that round-trip so the key format lives in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimOrdinal(u32);

impl ClaimOrdinal {
    /// Create a new ordinal (must be >= 1)
    ///
    /// # Examples
    ///
    /// ```
    /// use claimgraph_domain::ClaimOrdinal;
    ///
    /// let first = ClaimOrdinal::new(1);
    /// assert_eq!(first.key(), "Cl_1");
    /// ```
    pub fn new(n: u32) -> Self {
        assert!(n >= 1, "claim ordinals are 1-based");
        Self(n)
    }

    /// Get the raw 1-based number
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Render the case-document key for this claim (`Cl_<n>`)
    pub fn key(&self) -> String {
        format!("Cl_{}", self.0)
    }

    /// Parse an ordinal from a `Cl_<n>` case-document key
    pub fn from_key(key: &str) -> Result<Self, String> {
        let suffix = key
            .strip_prefix("Cl_")
            .ok_or_else(|| format!("Invalid claim key: {}", key))?;
        let n: u32 = suffix
            .parse()
            .map_err(|_| format!("Invalid claim number in key: {}", key))?;
        if n == 0 {
            return Err(format!("Claim numbers are 1-based: {}", key));
        }
        Ok(Self(n))
    }

    /// Parse an ordinal from a bare decimal string, as stored in the
    /// `Cl_nr` column. Unparseable input falls back to claim 1 rather than
    /// failing the load.
    pub fn from_column_value(s: &str) -> Self {
        match s.trim().parse::<u32>() {
            Ok(n) if n >= 1 => Self(n),
            _ => Self(1),
        }
    }
}

impl fmt::Display for ClaimOrdinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One claim as submitted by the user
///
/// Claims are immutable once extracted from the submission text; a
/// re-submission replaces the whole set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    /// 1-based position within the submission
    pub ordinal: ClaimOrdinal,

    /// Raw claim text (one line of the submission)
    pub text: String,
}

impl Claim {
    /// Create a claim from an ordinal and its text
    pub fn new(ordinal: ClaimOrdinal, text: impl Into<String>) -> Self {
        Self {
            ordinal,
            text: text.into(),
        }
    }

    /// Split multi-line submission text into claims, one per non-blank line
    ///
    /// Lines are trimmed; blank lines are skipped. Ordinals count the
    /// surviving lines, so blank separator lines do not shift numbering.
    pub fn from_submission(text: &str) -> Vec<Claim> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(i, line)| Claim::new(ClaimOrdinal::new(i as u32 + 1), line))
            .collect()
    }
}
