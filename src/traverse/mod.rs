//! Generic reachability queries over a flow graph.
//!
//! All traversals are breadth-first closures over the edge list with a
//! visited set, so cyclic graphs terminate. The seed node itself appears in a
//! result only when some path leads back to it.

use crate::flow::{FlowGraph, NodeKind};
use ahash::AHashSet;
use std::collections::VecDeque;

/// Which closure `connected_branch` computes around a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchMode {
    Downstream,
    Upstream,
    Both,
}

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Reverse,
}

/// All node ids reachable from `node_id` by following edges forward, in
/// breadth-first visit order. Includes `node_id` itself only if a cycle
/// leads back to it.
pub fn downstream(graph: &FlowGraph, node_id: &str) -> Vec<String> {
    bfs_closure(graph, node_id, Direction::Forward)
}

/// All node ids that can reach `node_id` by following edges forward, in
/// breadth-first visit order over the reversed graph.
pub fn upstream(graph: &FlowGraph, node_id: &str) -> Vec<String> {
    bfs_closure(graph, node_id, Direction::Reverse)
}

/// The node plus its closure in the requested direction, used by the editor
/// to highlight a branch.
pub fn connected_branch(graph: &FlowGraph, node_id: &str, mode: BranchMode) -> Vec<String> {
    let mut branch = vec![node_id.to_string()];
    let mut seen: AHashSet<String> = branch.iter().cloned().collect();

    let closures = match mode {
        BranchMode::Downstream => vec![downstream(graph, node_id)],
        BranchMode::Upstream => vec![upstream(graph, node_id)],
        BranchMode::Both => vec![downstream(graph, node_id), upstream(graph, node_id)],
    };
    for closure in closures {
        for id in closure {
            if seen.insert(id.clone()) {
                branch.push(id);
            }
        }
    }
    branch
}

/// Question nodes upstream of `node_id`, deduplicated across converging
/// paths. These are the answers a screen is allowed to reference.
pub fn ancestor_question_nodes(graph: &FlowGraph, node_id: &str) -> Vec<String> {
    upstream(graph, node_id)
        .into_iter()
        .filter(|id| {
            graph
                .node(id)
                .is_some_and(|n| matches!(n.kind, NodeKind::Question(_)))
        })
        .collect()
}

fn bfs_closure<'a>(graph: &'a FlowGraph, node_id: &'a str, direction: Direction) -> Vec<String> {
    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut order: Vec<String> = Vec::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    // The seed is deliberately not pre-visited: a back-edge may legitimately
    // bring it into its own closure.
    enqueue_neighbors(graph, node_id, direction, &mut queue);

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current.to_string());
        enqueue_neighbors(graph, current, direction, &mut queue);
    }
    order
}

fn enqueue_neighbors<'a>(
    graph: &'a FlowGraph,
    node_id: &'a str,
    direction: Direction,
    queue: &mut VecDeque<&'a str>,
) {
    match direction {
        Direction::Forward => {
            queue.extend(graph.outgoing(node_id).map(|e| e.target.as_str()));
        }
        Direction::Reverse => {
            queue.extend(graph.incoming(node_id).map(|e| e.source.as_str()));
        }
    }
}
