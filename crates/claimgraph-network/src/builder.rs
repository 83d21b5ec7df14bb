//! Graph construction from the global role table

use claimgraph_domain::{ClaimRow, ColorAssigner, GlobalTable, Graph};
use tracing::{debug, info};

fn has_text(cell: &str) -> bool {
    !cell.trim().is_empty()
}

/// Antecedent lookup: the referenced string must equal some introduced value
/// anywhere in the table
fn find_antecedent<'a>(rows: &'a [ClaimRow], referenced: &str) -> Option<&'a str> {
    rows.iter()
        .find(|r| r.introduced == referenced)
        .map(|r| r.introduced.as_str())
}

/// Build the initial feature graph from the global table
///
/// Nodes are the distinct introduced feature strings, colored by the claim
/// of first appearance (one palette color per claim, assigned in first-use
/// order). Edges come from windows of three consecutive rows starting at
/// each index `i`:
///
/// - Case A: row `i` introduces, row `i+2` introduces without referencing ->
///   edge from row `i`'s feature to row `i+2`'s feature;
/// - Case B (only when row `i` introduces nothing): row `i` references and
///   row `i+2` introduces -> edge from the referenced antecedent's node, if
///   one exists, to row `i+2`'s feature.
///
/// Either way the edge label is row `i+1`'s connective text. Windows that
/// match neither case, and Case B lookups that find no antecedent, add
/// nothing. Parallel edges from distinct windows are kept.
pub fn build_graph(table: &GlobalTable) -> Graph {
    let mut graph = Graph::new();
    let mut colors = ColorAssigner::new();
    let rows = table.rows();

    for row in rows {
        if has_text(&row.introduced) && !graph.contains_node(&row.introduced) {
            let color = colors.color_for_claim(row.claim);
            graph.ensure_node(&row.introduced, color);
        }
    }

    for i in 0..rows.len().saturating_sub(2) {
        let label = rows[i + 1].connective.clone();

        let endpoints = if has_text(&rows[i].introduced) {
            if !has_text(&rows[i + 2].referenced) && has_text(&rows[i + 2].introduced) {
                Some((rows[i].introduced.as_str(), rows[i + 2].introduced.as_str()))
            } else {
                None
            }
        } else if has_text(&rows[i].referenced) && has_text(&rows[i + 2].introduced) {
            find_antecedent(rows, &rows[i].referenced)
                .map(|source| (source, rows[i + 2].introduced.as_str()))
        } else {
            None
        };

        match endpoints {
            Some((source, target)) => {
                // Endpoints are introduced features, so both nodes exist
                if let Err(e) = graph.add_edge(source, target, label) {
                    debug!(window = i, error = %e, "edge skipped");
                }
            }
            None => debug!(window = i, "no edge for window"),
        }
    }

    info!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "graph built"
    );
    graph
}
