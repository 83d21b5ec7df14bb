//! Show command - print sections of the case document.

use crate::cli::{ShowArgs, ShowSection};
use crate::error::Result;
use claimgraph_extractor::highlight_features;
use claimgraph_network::format_markers;
use claimgraph_store::CaseStore;

/// Execute the show command
pub fn execute_show(args: ShowArgs, case: &str, store: &CaseStore) -> Result<()> {
    let doc = store.load(case);

    match args.section {
        ShowSection::Claims => {
            for claim in doc.claims_in_order() {
                let features = doc.features_for(claim.ordinal);
                println!("{}. {}", claim.ordinal, highlight_features(&claim.text, &features));
            }
        }
        ShowSection::Features => {
            println!("Feature Table:");
            println!("{}", serde_json::to_string_pretty(&doc.feature_table)?);
            println!("Edited Feature Table:");
            println!("{}", serde_json::to_string_pretty(&doc.edited_feature_table)?);
        }
        ShowSection::Table => {
            println!("{}", serde_json::to_string_pretty(&doc.table)?);
        }
        ShowSection::Network => match &doc.network {
            Some(graph) => println!("{}", serde_json::to_string_pretty(graph)?),
            None => println!("No graph built for this case yet"),
        },
        ShowSection::Markers => match &doc.markers {
            Some(markers) => println!("{}", format_markers(markers)),
            None => println!("No markers generated for this case yet"),
        },
    }
    Ok(())
}
