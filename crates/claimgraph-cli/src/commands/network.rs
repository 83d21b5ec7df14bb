//! Network command - build the feature graph or apply hand edits.

use crate::cli::{NetworkAction, NetworkArgs};
use crate::error::{CliError, Result};
use claimgraph_domain::{GlobalTable, MANUAL_NODE_COLOR};
use claimgraph_network::build_graph;
use claimgraph_store::CaseStore;

/// Execute the network command
///
/// Every action loads the document, mutates the `Network` section, and saves
/// the document back. Edit actions require a graph-bearing document only in
/// the sense that an empty graph rejects edge endpoints that do not exist.
pub fn execute_network(args: NetworkArgs, case: &str, store: &CaseStore) -> Result<()> {
    let mut doc = store.load(case);

    match args.action {
        NetworkAction::Build { force } => {
            if doc.network.is_some() && !force {
                return Err(CliError::Message(
                    "a graph already exists for this case; pass --force to rebuild and discard edits"
                        .to_string(),
                ));
            }
            let table = GlobalTable::from_frame(&doc.table);
            let graph = build_graph(&table);
            println!(
                "Built graph: {} node(s), {} edge(s)",
                graph.nodes.len(),
                graph.edges.len()
            );
            doc.network = Some(graph);
        }
        NetworkAction::AddNode { id } => {
            let mut graph = doc.network.take().unwrap_or_default();
            graph.add_node(&id, MANUAL_NODE_COLOR)?;
            println!("Added node '{}'", id);
            doc.network = Some(graph);
        }
        NetworkAction::DelNode { id } => {
            let mut graph = doc.network.take().unwrap_or_default();
            graph.remove_node(&id)?;
            println!("Deleted node '{}'", id);
            doc.network = Some(graph);
        }
        NetworkAction::AddEdge { from, to, label } => {
            let mut graph = doc.network.take().unwrap_or_default();
            graph.add_edge(&from, &to, &label)?;
            println!("Added edge '{}' -> '{}'", from, to);
            doc.network = Some(graph);
        }
        NetworkAction::DelEdge { from, to } => {
            let mut graph = doc.network.take().unwrap_or_default();
            graph.remove_edge(&from, &to)?;
            println!("Deleted edge '{}' -> '{}'", from, to);
            doc.network = Some(graph);
        }
    }

    store.save(case, &doc)?;
    Ok(())
}
