//! Static analysis of a flow graph.
//!
//! Every check runs on every call and each is independent of the others;
//! order only affects message ordering. A graph with only warnings may still
//! be published by the caller.

pub mod issue;

pub use issue::*;

use crate::flow::{FlowGraph, NodeKind};
use crate::pipes;
use crate::traverse;
use ahash::AHashSet;
use itertools::Itertools;

/// Run all structural checks against a graph snapshot.
pub fn validate_flow(graph: &FlowGraph) -> Vec<Issue> {
    let mut issues = Vec::new();

    check_start_count(graph, &mut issues);
    check_edge_endpoints(graph, &mut issues);
    check_default_edges(graph, &mut issues);
    check_option_counts(graph, &mut issues);
    check_source_handles(graph, &mut issues);
    check_pipe_references(graph, &mut issues);

    // Reachability checks only make sense relative to a unique start node.
    let start_count = graph.nodes.iter().filter(|n| n.kind.is_start()).count();
    if start_count == 1
        && let Some(start) = graph.start_node()
    {
        let reachable: AHashSet<String> = traverse::downstream(graph, &start.id)
            .into_iter()
            .collect();
        check_end_reachable(graph, &reachable, &mut issues);
        check_orphans(graph, &start.id, &reachable, &mut issues);
        check_cycles(graph, &start.id, &reachable, &mut issues);
    }

    issues
}

fn check_start_count(graph: &FlowGraph, issues: &mut Vec<Issue>) {
    let starts: Vec<&str> = graph
        .nodes
        .iter()
        .filter(|n| n.kind.is_start())
        .map(|n| n.id.as_str())
        .collect();
    match starts.len() {
        0 => issues.push(Issue::error(None, "The flow has no start node")),
        1 => {}
        _ => {
            for &id in &starts[1..] {
                issues.push(Issue::error(
                    Some(id),
                    "The flow has more than one start node",
                ));
            }
        }
    }
}

fn check_edge_endpoints(graph: &FlowGraph, issues: &mut Vec<Issue>) {
    let ids = graph.node_ids();
    for edge in &graph.edges {
        if !ids.contains(&edge.source) {
            issues.push(Issue::error(
                None,
                format!(
                    "Edge '{}' starts at missing node '{}'",
                    edge.id, edge.source
                ),
            ));
        }
        if !ids.contains(&edge.target) {
            issues.push(Issue::error(
                None,
                format!("Edge '{}' ends at missing node '{}'", edge.id, edge.target),
            ));
        }
    }
}

/// A source node may carry at most one default edge; anything more is
/// ambiguous and is flagged rather than silently auto-resolved.
fn check_default_edges(graph: &FlowGraph, issues: &mut Vec<Issue>) {
    let default_counts = graph
        .edges
        .iter()
        .filter(|e| e.is_default())
        .counts_by(|e| e.source.as_str());

    for (source, count) in default_counts.into_iter().sorted() {
        if count > 1 {
            issues.push(Issue::error(
                Some(source),
                format!("Node has {} default edges; at most one is allowed", count),
            ));
        }
    }
}

fn check_option_counts(graph: &FlowGraph, issues: &mut Vec<Issue>) {
    for node in &graph.nodes {
        if let NodeKind::Question(data) = &node.kind
            && data.question_type.has_options()
            && data.options.len() < 2
        {
            issues.push(Issue::error(
                Some(node.id.as_str()),
                format!(
                    "Question needs at least 2 options, but has {}",
                    data.options.len()
                ),
            ));
        }
    }
}

fn check_source_handles(graph: &FlowGraph, issues: &mut Vec<Issue>) {
    for edge in &graph.edges {
        let Some(handle) = &edge.source_handle else {
            continue;
        };
        let Some(node) = graph.node(&edge.source) else {
            continue; // already reported as a dangling endpoint
        };
        let known = node
            .question_data()
            .is_some_and(|data| data.options.iter().any(|opt| opt.id == *handle));
        if !known {
            issues.push(Issue::error(
                Some(edge.source.as_str()),
                format!(
                    "Edge '{}' branches on option '{}', which does not exist on its source node",
                    edge.id, handle
                ),
            ));
        }
    }
}

fn check_pipe_references(graph: &FlowGraph, issues: &mut Vec<Issue>) {
    let ids = graph.node_ids();
    for node in &graph.nodes {
        for text in node.kind.text_fields() {
            for missing in pipes::find_broken_references(text, &ids) {
                issues.push(Issue::warning(
                    Some(node.id.as_str()),
                    format!("Text references the answer of missing node '{}'", missing),
                ));
            }
        }
    }
}

fn check_end_reachable(graph: &FlowGraph, reachable: &AHashSet<String>, issues: &mut Vec<Issue>) {
    let end_reached = graph
        .nodes
        .iter()
        .any(|n| n.kind.is_end() && reachable.contains(&n.id));
    if !end_reached {
        issues.push(Issue::error(
            None,
            "No end node is reachable from the start node",
        ));
    }
}

fn check_orphans(
    graph: &FlowGraph,
    start_id: &str,
    reachable: &AHashSet<String>,
    issues: &mut Vec<Issue>,
) {
    for node in &graph.nodes {
        if node.kind.is_question() && node.id != start_id && !reachable.contains(&node.id) {
            issues.push(Issue::warning(
                Some(node.id.as_str()),
                "Question is not reachable from the start node",
            ));
        }
    }
}

/// A reachable cycle is a legitimate authoring choice (loop-back screens),
/// so it is flagged but never forbidden.
fn check_cycles(
    graph: &FlowGraph,
    start_id: &str,
    reachable: &AHashSet<String>,
    issues: &mut Vec<Issue>,
) {
    for node in &graph.nodes {
        if node.id != start_id && !reachable.contains(&node.id) {
            continue;
        }
        let loops_back = traverse::downstream(graph, &node.id)
            .iter()
            .any(|id| *id == node.id);
        if loops_back {
            issues.push(Issue::warning(
                Some(node.id.as_str()),
                "The flow contains a cycle: this node can reach itself",
            ));
            return;
        }
    }
}
