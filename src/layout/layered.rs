//! Full layered auto-arrange: a Sugiyama-style rank/order/coordinate pass.
//!
//! Ranks come from longest-path distance to a root, node order within a rank
//! from barycenter sweeps, coordinates from fixed node dimensions plus the
//! configured gaps. Prior positions are ignored and overwritten. The output
//! is deterministic: ties always break on node id.

use super::{LayeredOptions, LayoutDirection};
use crate::flow::{FlowGraph, FlowNode};
use ahash::AHashMap;

const BARYCENTER_SWEEPS: usize = 2;

/// Recompute every node position from scratch. Disconnected subgraphs are
/// ranked from their own roots.
pub fn layout_layered(graph: &FlowGraph, options: &LayeredOptions) -> Vec<FlowNode> {
    if graph.nodes.is_empty() {
        return Vec::new();
    }

    let adjacency = Adjacency::build(graph);
    let ranks = assign_ranks(&adjacency);
    let mut rank_order = bucket_by_rank(&ranks, &adjacency);
    for _ in 0..BARYCENTER_SWEEPS {
        for r in 1..rank_order.len() {
            reorder_rank(&mut rank_order, &adjacency, r, Sweep::Forward);
        }
        for r in (0..rank_order.len().saturating_sub(1)).rev() {
            reorder_rank(&mut rank_order, &adjacency, r, Sweep::Backward);
        }
    }

    place(graph, &rank_order, options)
}

struct Adjacency {
    /// successors[u] = sorted, deduplicated indices v with an edge u -> v.
    successors: Vec<Vec<usize>>,
    predecessors: Vec<Vec<usize>>,
    ids: Vec<String>,
}

impl Adjacency {
    fn build(graph: &FlowGraph) -> Self {
        let n = graph.nodes.len();
        let index_of: AHashMap<&str, usize> = graph
            .nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id.as_str(), i))
            .collect();

        let mut successors = vec![Vec::new(); n];
        let mut predecessors = vec![Vec::new(); n];
        for edge in &graph.edges {
            if let (Some(&u), Some(&v)) = (
                index_of.get(edge.source.as_str()),
                index_of.get(edge.target.as_str()),
            ) && u != v
            {
                successors[u].push(v);
                predecessors[v].push(u);
            }
        }
        for list in successors.iter_mut().chain(predecessors.iter_mut()) {
            list.sort_unstable();
            list.dedup();
        }

        Self {
            successors,
            predecessors,
            ids: graph.nodes.iter().map(|node| node.id.clone()).collect(),
        }
    }

    fn len(&self) -> usize {
        self.ids.len()
    }
}

enum Sweep {
    Forward,
    Backward,
}

/// Longest-path layering over a Kahn traversal. Roots (in-degree 0) sit at
/// rank 0; every other node sits one past its deepest predecessor. Nodes the
/// sweep never reaches (cycle members with no acyclic entry) are placed one
/// rank past the deepest ranked node.
fn assign_ranks(adjacency: &Adjacency) -> Vec<usize> {
    let n = adjacency.len();
    let mut in_degree: Vec<usize> = adjacency.predecessors.iter().map(Vec::len).collect();

    let mut queue: Vec<usize> = (0..n).filter(|&v| in_degree[v] == 0).collect();
    queue.sort_by(|a, b| adjacency.ids[*a].cmp(&adjacency.ids[*b]));

    let mut ranks = vec![0usize; n];
    let mut visited = vec![false; n];
    let mut head = 0;
    while head < queue.len() {
        let u = queue[head];
        head += 1;
        visited[u] = true;
        for &v in &adjacency.successors[u] {
            ranks[v] = ranks[v].max(ranks[u] + 1);
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                queue.push(v);
            }
        }
    }

    if visited.iter().any(|&seen| !seen) {
        let overflow = ranks
            .iter()
            .zip(&visited)
            .filter(|&(_, &seen)| seen)
            .map(|(&r, _)| r)
            .max()
            .unwrap_or(0)
            + 1;
        for (v, rank) in ranks.iter_mut().enumerate() {
            if !visited[v] {
                *rank = overflow;
            }
        }
    }

    ranks
}

fn bucket_by_rank(ranks: &[usize], adjacency: &Adjacency) -> Vec<Vec<usize>> {
    let max_rank = ranks.iter().copied().max().unwrap_or(0);
    let mut buckets = vec![Vec::new(); max_rank + 1];
    for (v, &r) in ranks.iter().enumerate() {
        buckets[r].push(v);
    }
    for bucket in &mut buckets {
        bucket.sort_by(|a, b| adjacency.ids[*a].cmp(&adjacency.ids[*b]));
    }
    buckets
}

/// Reorder one rank by the barycenter of each node's neighbors in the
/// adjacent rank. Nodes with no neighbors there keep to the end, ties break
/// on node id.
fn reorder_rank(rank_order: &mut [Vec<usize>], adjacency: &Adjacency, r: usize, sweep: Sweep) {
    let (reference, neighbors_of): (&[usize], &Vec<Vec<usize>>) = match sweep {
        Sweep::Forward => (&rank_order[r - 1], &adjacency.predecessors),
        Sweep::Backward => (&rank_order[r + 1], &adjacency.successors),
    };

    let mut slot = vec![usize::MAX; adjacency.len()];
    for (i, &v) in reference.iter().enumerate() {
        slot[v] = i;
    }

    let mut scored: Vec<(usize, f64)> = rank_order[r]
        .iter()
        .map(|&v| {
            let positions: Vec<f64> = neighbors_of[v]
                .iter()
                .filter(|&&nb| slot[nb] != usize::MAX)
                .map(|&nb| slot[nb] as f64)
                .collect();
            let center = if positions.is_empty() {
                f64::MAX
            } else {
                positions.iter().sum::<f64>() / positions.len() as f64
            };
            (v, center)
        })
        .collect();

    scored.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| adjacency.ids[a.0].cmp(&adjacency.ids[b.0]))
    });
    for (i, (v, _)) in scored.into_iter().enumerate() {
        rank_order[r][i] = v;
    }
}

/// Turn rank/slot assignments into coordinates, centering each rank against
/// the widest one.
fn place(graph: &FlowGraph, rank_order: &[Vec<usize>], options: &LayeredOptions) -> Vec<FlowNode> {
    let (primary_size, secondary_size) = match options.direction {
        LayoutDirection::TopToBottom => (options.node_size.height, options.node_size.width),
        LayoutDirection::LeftToRight => (options.node_size.width, options.node_size.height),
    };
    let rank_step = primary_size + options.rank_gap;
    let slot_step = secondary_size + options.node_gap;

    let span_of = |count: usize| -> f64 {
        if count == 0 {
            0.0
        } else {
            count as f64 * secondary_size + (count - 1) as f64 * options.node_gap
        }
    };
    let max_span = rank_order
        .iter()
        .map(|rank| span_of(rank.len()))
        .fold(0.0_f64, f64::max);

    let mut nodes = graph.nodes.clone();
    for (r, rank_nodes) in rank_order.iter().enumerate() {
        let shift = (max_span - span_of(rank_nodes.len())) / 2.0;
        for (slot, &v) in rank_nodes.iter().enumerate() {
            let primary = r as f64 * rank_step;
            let secondary = slot as f64 * slot_step + shift;
            let (x, y) = match options.direction {
                LayoutDirection::TopToBottom => (secondary, primary),
                LayoutDirection::LeftToRight => (primary, secondary),
            };
            nodes[v].position.x = x;
            nodes[v].position.y = y;
        }
    }
    nodes
}
