//! Row-oriented claim decomposition tables
//!
//! A segmented claim becomes three parallel lanes (introduced / referenced /
//! connective); lanes become [`ClaimRow`]s tagged with the claim ordinal;
//! rows from all claims concatenate into the [`GlobalTable`] the graph
//! builder consumes. The persisted column-wise shape is
//! [`ConcatenatedFrame`].

use crate::claim::ClaimOrdinal;
use serde::{Deserialize, Serialize};

/// One position within a segmented claim
///
/// At most one of the three text cells is non-empty under normal operation;
/// row order encodes textual left-to-right position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimRow {
    /// Feature introduced at this position ("a"/"an" segment, article stripped)
    pub introduced: String,

    /// Connective text at this position (verbatim segment)
    pub connective: String,

    /// Back-reference at this position ("the"/"said" segment, article stripped)
    pub referenced: String,

    /// Owning claim
    pub claim: ClaimOrdinal,
}

impl ClaimRow {
    /// Row introducing a feature
    pub fn introduced(feature: impl Into<String>, claim: ClaimOrdinal) -> Self {
        Self {
            introduced: feature.into(),
            connective: String::new(),
            referenced: String::new(),
            claim,
        }
    }

    /// Row referencing an antecedent feature
    pub fn referenced(feature: impl Into<String>, claim: ClaimOrdinal) -> Self {
        Self {
            introduced: String::new(),
            connective: String::new(),
            referenced: feature.into(),
            claim,
        }
    }

    /// Row carrying connective text
    pub fn connective(text: impl Into<String>, claim: ClaimOrdinal) -> Self {
        Self {
            introduced: String::new(),
            connective: text.into(),
            referenced: String::new(),
            claim,
        }
    }

    /// True if all three text cells are blank
    pub fn is_blank(&self) -> bool {
        self.introduced.trim().is_empty()
            && self.connective.trim().is_empty()
            && self.referenced.trim().is_empty()
    }
}

/// Three parallel role lanes for one claim, prior to row assembly
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lanes {
    /// Introduced-feature lane
    pub introduced: Vec<String>,
    /// Referenced-feature lane
    pub referenced: Vec<String>,
    /// Connective-text lane
    pub connective: Vec<String>,
}

impl Lanes {
    /// Pad all three lanes with empty strings to the longest lane's length
    ///
    /// This is the single padding step; nothing downstream pads again.
    pub fn pad_to_max(&mut self) {
        let max = self.max_len();
        pad_with_empty(&mut self.introduced, max);
        pad_with_empty(&mut self.referenced, max);
        pad_with_empty(&mut self.connective, max);
    }

    /// Length of the longest lane
    pub fn max_len(&self) -> usize {
        self.introduced
            .len()
            .max(self.referenced.len())
            .max(self.connective.len())
    }

    /// Assemble rows tagged with the claim ordinal, dropping positions where
    /// all three lanes are blank and resetting to contiguous order
    pub fn into_rows(mut self, claim: ClaimOrdinal) -> Vec<ClaimRow> {
        self.pad_to_max();
        let len = self.max_len();
        let mut rows = Vec::with_capacity(len);
        for i in 0..len {
            let row = ClaimRow {
                introduced: self.introduced[i].clone(),
                connective: self.connective[i].clone(),
                referenced: self.referenced[i].clone(),
                claim,
            };
            if !row.is_blank() {
                rows.push(row);
            }
        }
        rows
    }
}

fn pad_with_empty(lane: &mut Vec<String>, len: usize) {
    while lane.len() < len {
        lane.push(String::new());
    }
}

/// Ordered concatenation of all claims' rows - the sole input to graph
/// construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalTable {
    rows: Vec<ClaimRow>,
}

impl GlobalTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one claim's rows (claim-major order is the caller's submission
    /// order; within-claim order is preserved)
    pub fn push_claim(&mut self, rows: Vec<ClaimRow>) {
        self.rows.extend(rows);
    }

    /// All rows in global order
    pub fn rows(&self) -> &[ClaimRow] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if no claim contributed any row
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Convert to the persisted column-wise shape
    pub fn to_frame(&self) -> ConcatenatedFrame {
        ConcatenatedFrame {
            introduced: self.rows.iter().map(|r| r.introduced.clone()).collect(),
            connective: self.rows.iter().map(|r| r.connective.clone()).collect(),
            referenced: self.rows.iter().map(|r| r.referenced.clone()).collect(),
            claim_numbers: self.rows.iter().map(|r| r.claim.to_string()).collect(),
        }
    }

    /// Rebuild from the persisted column-wise shape
    ///
    /// Columns of unequal length (possible after manual JSON edits) are
    /// padded with empty strings; unparseable claim numbers fall back to
    /// claim 1.
    pub fn from_frame(frame: &ConcatenatedFrame) -> Self {
        let max = frame
            .introduced
            .len()
            .max(frame.connective.len())
            .max(frame.referenced.len())
            .max(frame.claim_numbers.len());

        let cell = |col: &[String], i: usize| col.get(i).cloned().unwrap_or_default();

        let mut rows = Vec::with_capacity(max);
        for i in 0..max {
            rows.push(ClaimRow {
                introduced: cell(&frame.introduced, i),
                connective: cell(&frame.connective, i),
                referenced: cell(&frame.referenced, i),
                claim: ClaimOrdinal::from_column_value(&cell(&frame.claim_numbers, i)),
            });
        }
        Self { rows }
    }
}

/// Persisted column-wise form of the global table
///
/// Serializes as the `"Concatenated DataFrame"` section of the case
/// document: four parallel arrays, with claim numbers stored as decimal
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcatenatedFrame {
    /// Introduced-feature column
    #[serde(rename = "a_list", default)]
    pub introduced: Vec<String>,

    /// Connective-text column
    #[serde(rename = "prep_list", default)]
    pub connective: Vec<String>,

    /// Referenced-feature column
    #[serde(rename = "the_list", default)]
    pub referenced: Vec<String>,

    /// Claim-number column (decimal strings)
    #[serde(rename = "Cl_nr", default)]
    pub claim_numbers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cl(n: u32) -> ClaimOrdinal {
        ClaimOrdinal::new(n)
    }

    #[test]
    fn test_pad_to_max() {
        let mut lanes = Lanes {
            introduced: vec!["widget".into()],
            referenced: vec![],
            connective: vec!["comprising".into(), "and".into(), "with".into()],
        };
        lanes.pad_to_max();
        assert_eq!(lanes.introduced.len(), 3);
        assert_eq!(lanes.referenced.len(), 3);
        assert_eq!(lanes.connective.len(), 3);
        assert_eq!(lanes.introduced[1], "");
    }

    #[test]
    fn test_into_rows_drops_blank_positions() {
        let lanes = Lanes {
            introduced: vec!["widget".into(), "".into(), "frame".into()],
            referenced: vec!["".into(), "".into(), "".into()],
            connective: vec!["".into(), "  ".into(), "".into()],
        };
        let rows = lanes.into_rows(cl(1));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].introduced, "widget");
        assert_eq!(rows[1].introduced, "frame");
    }

    #[test]
    fn test_row_lane_exclusivity_constructors() {
        let row = ClaimRow::referenced("frame", cl(2));
        assert!(row.introduced.is_empty());
        assert!(row.connective.is_empty());
        assert_eq!(row.referenced, "frame");
        assert_eq!(row.claim, cl(2));
    }

    #[test]
    fn test_frame_round_trip() {
        let mut table = GlobalTable::new();
        table.push_claim(vec![
            ClaimRow::introduced("widget", cl(1)),
            ClaimRow::connective("comprising", cl(1)),
            ClaimRow::introduced("frame", cl(1)),
        ]);
        table.push_claim(vec![ClaimRow::referenced("widget", cl(2))]);

        let frame = table.to_frame();
        assert_eq!(frame.claim_numbers, ["1", "1", "1", "2"]);

        let rebuilt = GlobalTable::from_frame(&frame);
        assert_eq!(rebuilt, table);
    }

    #[test]
    fn test_from_frame_ragged_columns() {
        let frame = ConcatenatedFrame {
            introduced: vec!["widget".into(), "frame".into()],
            connective: vec!["comprising".into()],
            referenced: vec![],
            claim_numbers: vec!["1".into(), "oops".into()],
        };
        let table = GlobalTable::from_frame(&frame);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1].introduced, "frame");
        assert_eq!(table.rows()[1].connective, "");
        // Unparseable claim number degrades to claim 1
        assert_eq!(table.rows()[1].claim, cl(1));
    }

    #[test]
    fn test_frame_json_keys() {
        let table = GlobalTable::new();
        let json = serde_json::to_value(table.to_frame()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("a_list"));
        assert!(obj.contains_key("prep_list"));
        assert!(obj.contains_key("the_list"));
        assert!(obj.contains_key("Cl_nr"));
    }
}
