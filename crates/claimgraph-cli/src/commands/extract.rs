//! Extract command - run the claim pipeline and persist its output.

use crate::cli::ExtractArgs;
use crate::error::{CliError, Result};
use claimgraph_domain::Claim;
use claimgraph_extractor::Pipeline;
use claimgraph_network::build_graph;
use claimgraph_store::CaseStore;
use std::io::Read;
use tracing::info;

/// Execute the extract command
///
/// Reads claim text (one claim per line) from the given file or stdin, runs
/// the extraction pipeline, and replaces the claim, feature, and table
/// sections of the case document. An existing graph is left untouched so
/// hand edits survive re-extraction; the graph is built automatically only
/// when the document has none yet.
pub fn execute_extract(args: ExtractArgs, case: &str, store: &CaseStore) -> Result<()> {
    let submission = match args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let claims = Claim::from_submission(&submission);
    if claims.is_empty() {
        return Err(CliError::Message("no claims found in input".to_string()));
    }

    let pipeline = Pipeline::with_defaults();
    let run = pipeline.run(&claims);

    let mut doc = store.load(case);
    doc.set_claims(&run.claims, &run.features);
    doc.table = run.table.to_frame();
    if doc.network.is_none() {
        doc.network = Some(build_graph(&run.table));
    } else {
        info!("keeping existing graph; run `network build --force` to rebuild");
    }
    store.save(case, &doc)?;

    println!(
        "Extracted {} claim(s), {} table row(s)",
        run.claims.len(),
        run.table.rows().len()
    );
    Ok(())
}
