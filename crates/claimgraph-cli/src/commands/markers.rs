//! Markers command - derive marker combinations from the stored graph.

use crate::error::{CliError, Result};
use claimgraph_network::{format_markers, generate_markers};
use claimgraph_store::CaseStore;

/// Execute the markers command
///
/// Markers are recomputed from whatever graph the document currently holds,
/// including hand edits, then printed and persisted.
pub fn execute_markers(case: &str, store: &CaseStore) -> Result<()> {
    let mut doc = store.load(case);

    let graph = doc.network.as_ref().ok_or_else(|| {
        CliError::Message(
            "no graph for this case yet; run `extract` or `network build` first".to_string(),
        )
    })?;

    let markers = generate_markers(graph);
    println!("{}", format_markers(&markers));

    doc.markers = Some(markers);
    store.save(case, &doc)?;
    Ok(())
}
