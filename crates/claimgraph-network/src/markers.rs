//! Marker generation from the persisted graph

use claimgraph_domain::{Graph, MarkerSet};
use std::collections::BTreeMap;
use tracing::info;

/// Literal tag prefixed to every rendered marker string
pub const MARKER_TAG: &str = "10UG";

/// Head nodes: in-degree zero, in graph insertion order
pub fn find_heads(graph: &Graph) -> Vec<String> {
    graph
        .nodes
        .iter()
        .filter(|n| graph.in_degree(&n.id) == 0)
        .map(|n| n.id.clone())
        .collect()
}

/// Enumerate all maximal simple paths from `start`
///
/// Depth-first: a path extends by any successor not already on it (cycle
/// avoidance), and is recorded only when no successor can extend it further
/// and it spans more than one node. Worst-case exponential in branching
/// factor; claim graphs are small.
fn find_branches(graph: &Graph, start: &str) -> Vec<Vec<String>> {
    let mut branches = Vec::new();
    let mut path = vec![start.to_string()];
    dfs(graph, &mut path, &mut branches);
    branches
}

fn dfs(graph: &Graph, path: &mut Vec<String>, branches: &mut Vec<Vec<String>>) {
    let current = path.last().cloned().unwrap_or_default();
    let mut extended = false;

    for neighbor in graph.neighbors(&current) {
        if path.iter().any(|n| n == neighbor) {
            continue;
        }
        extended = true;
        path.push(neighbor.to_string());
        dfs(graph, path, branches);
        path.pop();
    }

    if !extended && path.len() > 1 {
        branches.push(path.clone());
    }
}

fn render_branch(branch: &[String]) -> String {
    format!("{} ({})", MARKER_TAG, branch.join(", "))
}

/// Derive the marker set from the persisted graph
///
/// `combinations` lists every node id in insertion order; `heads` the
/// in-degree-zero nodes; `branches` maps each head with at least one
/// qualifying branch to its rendered marker strings. An empty graph yields
/// an empty set.
pub fn generate_markers(graph: &Graph) -> MarkerSet {
    let heads = find_heads(graph);

    let mut branches = BTreeMap::new();
    for head in &heads {
        let rendered: Vec<String> = find_branches(graph, head)
            .iter()
            .map(|branch| render_branch(branch))
            .collect();
        if !rendered.is_empty() {
            branches.insert(head.clone(), rendered);
        }
    }

    let markers = MarkerSet {
        combinations: graph.node_ids(),
        heads,
        branches,
    };
    info!(
        combinations = markers.combinations.len(),
        heads = markers.heads.len(),
        "markers generated"
    );
    markers
}

/// Render a marker set as the sectioned plain-text report
pub fn format_markers(markers: &MarkerSet) -> String {
    const SEPARATOR: &str = "\n---   ---   ---   --- \n\n";

    let mut out = String::new();

    out.push_str("Combinations\n\n");
    out.push_str(&markers.combinations.join("\n"));
    out.push('\n');
    out.push_str(SEPARATOR);

    out.push_str("Heads\n\n");
    out.push_str(&markers.heads.join("\n"));
    out.push('\n');
    out.push_str(SEPARATOR);

    out.push_str("Branches\n\n");
    for (head, branches) in &markers.branches {
        out.push_str(head);
        out.push_str(":\n");
        out.push_str(&branches.join("\n"));
        out.push('\n');
    }
    out.push_str(SEPARATOR);

    out.trim().to_string()
}
