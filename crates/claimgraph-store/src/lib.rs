//! Claimgraph Storage Layer
//!
//! One JSON case document per case identifier, stored at
//! `<data_dir>/<CASE>/Summary_<CASE>.json`. The document is the single
//! interchange format: the extractor writes claims, feature tables, and the
//! concatenated role table into it; the graph editor reads and writes the
//! `Network` section; marker generation writes `Markers`.
//!
//! Reads degrade instead of failing: a missing file is an empty case and an
//! unparseable file is treated as empty with a warning. Only writes can
//! error.

#![warn(missing_docs)]
#![warn(clippy::all)]

use claimgraph_domain::{Claim, ClaimOrdinal, ConcatenatedFrame, FeatureList, Graph, MarkerSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur persisting a case document
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The persisted per-case document
///
/// Field names are pinned to the on-disk JSON keys. Unknown keys survive a
/// load/save round trip via the `extra` catch-all, so sections written by
/// other tools are never dropped by a partial update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseDocument {
    /// Cleaned claim text, keyed `Cl_<n>`
    #[serde(rename = "User Entered Claims")]
    pub claims: BTreeMap<String, String>,

    /// Raw extracted features per claim, keyed `Cl_<n>`
    #[serde(rename = "Feature Table")]
    pub feature_table: BTreeMap<String, Vec<String>>,

    /// User-editable feature view per claim, keyed `Cl_<n>`
    #[serde(rename = "Edited Feature Table")]
    pub edited_feature_table: BTreeMap<String, Vec<String>>,

    /// Column-wise global role table
    #[serde(rename = "Concatenated DataFrame")]
    pub table: ConcatenatedFrame,

    /// The feature graph, absent until first built
    #[serde(rename = "Network", skip_serializing_if = "Option::is_none")]
    pub network: Option<Graph>,

    /// Derived markers, absent until first generated
    #[serde(rename = "Markers", skip_serializing_if = "Option::is_none")]
    pub markers: Option<MarkerSet>,

    /// Free-text summary field
    #[serde(rename = "Independent Claims")]
    pub independent_claims: String,

    /// Free-text summary field (problem to be solved)
    #[serde(rename = "Ptbs")]
    pub ptbs: String,

    /// Free-text summary field
    #[serde(rename = "Technical Effect")]
    pub technical_effect: String,

    /// Free-text summary field
    #[serde(rename = "Solution")]
    pub solution: String,

    /// Free-text summary field
    #[serde(rename = "Keywords")]
    pub keywords: String,

    /// Free-text summary field
    #[serde(rename = "Classes")]
    pub classes: String,

    /// Free-text summary field
    #[serde(rename = "Unity")]
    pub unity: String,

    /// Free-text summary field
    #[serde(rename = "Remarks")]
    pub remarks: String,

    /// Free-text summary field
    #[serde(rename = "Prior Art")]
    pub prior_art: String,

    /// Free-text summary field
    #[serde(rename = "Nr. Claims")]
    pub nr_claims: String,

    /// Case date, DD-MM-YYYY
    #[serde(rename = "Date")]
    pub date: String,

    /// Path to the application image adjacent to the document
    #[serde(rename = "Appl. Image")]
    pub appl_image: String,

    /// Unrecognized keys, preserved verbatim across round trips
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl CaseDocument {
    /// Replace the claim and feature sections from a pipeline run
    ///
    /// `claims` and `features` are parallel. The edited feature table is
    /// re-seeded with the display-filtered view ("the "/"said " features
    /// hidden); raw features stay in the feature table for the segmenter
    /// and graph builder.
    pub fn set_claims(&mut self, claims: &[Claim], features: &[FeatureList]) {
        self.claims.clear();
        self.feature_table.clear();
        self.edited_feature_table.clear();

        for (claim, feature_list) in claims.iter().zip(features) {
            let key = claim.ordinal.key();
            self.claims.insert(key.clone(), claim.text.clone());
            self.feature_table
                .insert(key.clone(), feature_list.as_slice().to_vec());
            self.edited_feature_table
                .insert(key, feature_list.display_features());
        }
        self.nr_claims = claims.len().to_string();
    }

    /// Claims in ordinal order, reconstructed from the keyed map
    ///
    /// Keys that do not parse as `Cl_<n>` are skipped with a warning.
    pub fn claims_in_order(&self) -> Vec<Claim> {
        let mut claims: Vec<Claim> = self
            .claims
            .iter()
            .filter_map(|(key, text)| match ClaimOrdinal::from_key(key) {
                Ok(ordinal) => Some(Claim::new(ordinal, text.clone())),
                Err(e) => {
                    warn!(key, error = %e, "skipping malformed claim key");
                    None
                }
            })
            .collect();
        claims.sort_by_key(|c| c.ordinal);
        claims
    }

    /// Raw feature list for one claim (empty if absent)
    pub fn features_for(&self, ordinal: ClaimOrdinal) -> FeatureList {
        self.feature_table
            .get(&ordinal.key())
            .map(|features| features.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

/// Filesystem-backed store of case documents
pub struct CaseStore {
    data_dir: PathBuf,
}

impl CaseStore {
    /// Create a store rooted at the given data directory
    ///
    /// Nothing is created until the first save.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Normalized case identifier (uppercased)
    fn case_id(case: &str) -> String {
        case.trim().to_uppercase()
    }

    /// Path of the case document for a case identifier
    pub fn document_path(&self, case: &str) -> PathBuf {
        let id = Self::case_id(case);
        self.data_dir.join(&id).join(format!("Summary_{}.json", id))
    }

    /// Load a case document
    ///
    /// A missing file is an empty case; an unparseable file is treated as
    /// empty with a warning. Neither is an error.
    pub fn load(&self, case: &str) -> CaseDocument {
        let path = self.document_path(case);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => return CaseDocument::default(),
        };
        match serde_json::from_str(&raw) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "malformed case document; starting empty");
                CaseDocument::default()
            }
        }
    }

    /// Save a case document, creating the case directory if needed
    pub fn save(&self, case: &str, doc: &CaseDocument) -> Result<(), StoreError> {
        let path = self.document_path(case);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(doc)?;
        fs::write(&path, json)?;
        info!(path = %path.display(), "case document saved");
        Ok(())
    }

    /// Root data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
