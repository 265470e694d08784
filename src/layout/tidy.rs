//! Incremental tidy pass: resolve overlaps after manual drags without
//! relocating the whole canvas.
//!
//! Nodes are visited in reading order along the configured direction. Each
//! node is pushed until it clears every node placed before it, coordinates
//! snap to the grid, and a final primary-axis-only pass resolves any
//! collisions the snapping reintroduced. The pass is idempotent on already
//! tidy, already snapped input.

use super::{LayoutDirection, TidyOptions};
use crate::flow::FlowNode;

/// Resolve bounding-box overlaps and snap every coordinate to the grid.
/// Prior positions are preserved except where an overlap forces a push.
pub fn layout_tidy(nodes: &[FlowNode], options: &TidyOptions) -> Vec<FlowNode> {
    let mut tidied: Vec<FlowNode> = nodes.to_vec();
    if tidied.len() <= 1 {
        for node in &mut tidied {
            snap_node(node, options.grid_size);
        }
        return tidied;
    }

    let order = reading_order(&tidied, options);

    // First pass: push overlapping nodes apart on whichever axis needs the
    // larger clearance.
    resolve_pass(&mut tidied, &order, options, PushMode::EitherAxis);

    for node in &mut tidied {
        snap_node(node, options.grid_size);
    }

    // Snapping can pull neighbors back together; the remainder advances
    // along the primary axis only, in grid-multiple steps, so positions stay
    // snapped.
    resolve_pass(&mut tidied, &order, options, PushMode::PrimaryAxis);

    tidied
}

#[derive(Clone, Copy, PartialEq)]
enum PushMode {
    EitherAxis,
    PrimaryAxis,
}

/// Reading order: coarse bucket along the primary axis, exact secondary
/// coordinate as tiebreak, node id as the final tiebreak.
fn reading_order(nodes: &[FlowNode], options: &TidyOptions) -> Vec<usize> {
    let bucket_span = match options.direction {
        LayoutDirection::TopToBottom => options.node_size.height,
        LayoutDirection::LeftToRight => options.node_size.width,
    };

    let mut order: Vec<usize> = (0..nodes.len()).collect();
    order.sort_by(|&a, &b| {
        let (pa, sa) = split_axes(&nodes[a], options.direction);
        let (pb, sb) = split_axes(&nodes[b], options.direction);
        let bucket_a = (pa / bucket_span).floor() as i64;
        let bucket_b = (pb / bucket_span).floor() as i64;
        bucket_a
            .cmp(&bucket_b)
            .then_with(|| sa.partial_cmp(&sb).unwrap_or(std::cmp::Ordering::Equal))
            .then_with(|| nodes[a].id.cmp(&nodes[b].id))
    });
    order
}

/// Primary and secondary coordinates of a node for the given direction.
fn split_axes(node: &FlowNode, direction: LayoutDirection) -> (f64, f64) {
    match direction {
        LayoutDirection::TopToBottom => (node.position.y, node.position.x),
        LayoutDirection::LeftToRight => (node.position.x, node.position.y),
    }
}

fn resolve_pass(nodes: &mut [FlowNode], order: &[usize], options: &TidyOptions, mode: PushMode) {
    for i in 1..order.len() {
        // Re-scan from the top after every push: clearing one neighbor can
        // collide with another already-placed node.
        'rescan: loop {
            for &j in &order[..i] {
                let current = order[i];
                if overlaps(&nodes[j], &nodes[current], options) {
                    push_apart(nodes, j, current, options, mode);
                    continue 'rescan;
                }
            }
            break;
        }
    }
}

fn overlaps(a: &FlowNode, b: &FlowNode, options: &TidyOptions) -> bool {
    let dx = (a.position.x - b.position.x).abs();
    let dy = (a.position.y - b.position.y).abs();
    dx < options.node_size.width + options.min_gap && dy < options.node_size.height + options.min_gap
}

/// Push the later node (`b`) clear of the earlier one (`a`). The push goes
/// along the axis needing the larger displacement; ties fall downward in
/// vertical layouts and to the cross axis in horizontal ones, which both
/// amount to preferring the y axis.
fn push_apart(
    nodes: &mut [FlowNode],
    a: usize,
    b: usize,
    options: &TidyOptions,
    mode: PushMode,
) {
    let clear_x = nodes[a].position.x + options.node_size.width + options.min_gap
        - nodes[b].position.x;
    let clear_y = nodes[a].position.y + options.node_size.height + options.min_gap
        - nodes[b].position.y;

    match mode {
        PushMode::EitherAxis => {
            if clear_y >= clear_x {
                nodes[b].position.y += clear_y;
            } else {
                nodes[b].position.x += clear_x;
            }
        }
        PushMode::PrimaryAxis => {
            let grid = options.grid_size;
            match options.direction {
                LayoutDirection::TopToBottom => {
                    nodes[b].position.y += snap_up(clear_y, grid);
                }
                LayoutDirection::LeftToRight => {
                    nodes[b].position.x += snap_up(clear_x, grid);
                }
            }
        }
    }
}

fn snap_node(node: &mut FlowNode, grid: f64) {
    node.position.x = snap(node.position.x, grid);
    node.position.y = snap(node.position.y, grid);
}

/// Nearest multiple of the grid unit.
fn snap(value: f64, grid: f64) -> f64 {
    if grid <= 0.0 {
        return value;
    }
    (value / grid).round() * grid
}

/// Smallest grid multiple that covers `value`.
fn snap_up(value: f64, grid: f64) -> f64 {
    if grid <= 0.0 {
        return value;
    }
    (value / grid).ceil() * grid
}
