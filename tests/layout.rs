//! Tests for the two layout algorithms.
mod common;
use keiro::prelude::*;

fn overlapping(nodes: &[FlowNode], options: &TidyOptions) -> bool {
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            let dx = (a.position.x - b.position.x).abs();
            let dy = (a.position.y - b.position.y).abs();
            if dx < options.node_size.width + options.min_gap
                && dy < options.node_size.height + options.min_gap
            {
                return true;
            }
        }
    }
    false
}

fn positions(nodes: &[FlowNode]) -> Vec<(String, f64, f64)> {
    nodes
        .iter()
        .map(|n| (n.id.clone(), n.position.x, n.position.y))
        .collect()
}

#[test]
fn test_layered_ranks_follow_edges_top_to_bottom() {
    let graph = common::branching_flow();
    let arranged = layout_layered(&graph, &LayeredOptions::default());
    let y_of = |id: &str| {
        arranged
            .iter()
            .find(|n| n.id == id)
            .map(|n| n.position.y)
            .unwrap()
    };

    assert!(y_of("start") < y_of("q1"));
    assert!(y_of("q1") < y_of("q2"));
    assert!(y_of("q2") < y_of("end-a"));
    assert_eq!(y_of("end-a"), y_of("end-b"));
}

#[test]
fn test_layered_horizontal_uses_x_as_primary_axis() {
    let graph = common::branching_flow();
    let options = LayeredOptions {
        direction: LayoutDirection::LeftToRight,
        ..LayeredOptions::default()
    };
    let arranged = layout_layered(&graph, &options);
    let x_of = |id: &str| {
        arranged
            .iter()
            .find(|n| n.id == id)
            .map(|n| n.position.x)
            .unwrap()
    };
    assert!(x_of("start") < x_of("q1"));
    assert!(x_of("q1") < x_of("q2"));
}

#[test]
fn test_layered_overwrites_prior_positions_deterministically() {
    let mut graph = common::branching_flow();
    for node in &mut graph.nodes {
        node.position = Position::new(9999.0, -42.0);
    }
    let first = layout_layered(&graph, &LayeredOptions::default());
    let second = layout_layered(&graph, &LayeredOptions::default());
    assert_eq!(positions(&first), positions(&second));
    assert!(first.iter().any(|n| n.position.x != 9999.0));
}

#[test]
fn test_layered_ranks_disconnected_subgraph_from_its_own_root() {
    let mut graph = common::branching_flow();
    graph
        .nodes
        .push(FlowNode::question("island-a", QuestionType::ShortText));
    graph
        .nodes
        .push(FlowNode::question("island-b", QuestionType::ShortText));
    graph
        .edges
        .push(FlowEdge::link("e-island", "island-a", "island-b"));

    let arranged = layout_layered(&graph, &LayeredOptions::default());
    let y_of = |id: &str| {
        arranged
            .iter()
            .find(|n| n.id == id)
            .map(|n| n.position.y)
            .unwrap()
    };
    // island-a has no predecessors, so it sits at rank 0 like the start node.
    assert_eq!(y_of("island-a"), y_of("start"));
    assert!(y_of("island-a") < y_of("island-b"));
}

#[test]
fn test_layered_terminates_on_cycle() {
    let graph = common::cyclic_flow();
    let arranged = layout_layered(&graph, &LayeredOptions::default());
    assert_eq!(arranged.len(), graph.nodes.len());
}

#[test]
fn test_layered_empty_graph_is_noop() {
    let graph = FlowGraph::default();
    assert!(layout_layered(&graph, &LayeredOptions::default()).is_empty());
}

#[test]
fn test_tidy_resolves_fully_coincident_nodes() {
    let options = TidyOptions::default();
    let tidied = layout_tidy(&common::coincident_nodes(5), &options);
    assert!(!overlapping(&tidied, &options));
}

#[test]
fn test_tidy_snaps_to_grid() {
    let options = TidyOptions::default();
    let nodes = vec![
        FlowNode::question("q1", QuestionType::ShortText).at(13.7, 99.2),
        FlowNode::question("q2", QuestionType::ShortText).at(13.9, 101.0),
        FlowNode::question("q3", QuestionType::ShortText).at(700.3, 98.6),
    ];
    let tidied = layout_tidy(&nodes, &options);
    for node in &tidied {
        let x_rem = node.position.x % options.grid_size;
        let y_rem = node.position.y % options.grid_size;
        assert_eq!(x_rem, 0.0, "x of {} not on grid", node.id);
        assert_eq!(y_rem, 0.0, "y of {} not on grid", node.id);
    }
    assert!(!overlapping(&tidied, &options));
}

#[test]
fn test_tidy_is_idempotent() {
    let options = TidyOptions::default();
    let first = layout_tidy(&common::coincident_nodes(4), &options);
    let second = layout_tidy(&first, &options);
    assert_eq!(positions(&first), positions(&second));
}

#[test]
fn test_tidy_leaves_already_tidy_nodes_alone() {
    let options = TidyOptions::default();
    // Far apart and already grid-aligned.
    let nodes = vec![
        FlowNode::question("q1", QuestionType::ShortText).at(0.0, 0.0),
        FlowNode::question("q2", QuestionType::ShortText).at(0.0, 480.0),
        FlowNode::question("q3", QuestionType::ShortText).at(480.0, 0.0),
    ];
    let tidied = layout_tidy(&nodes, &options);
    assert_eq!(positions(&tidied), positions(&nodes));
}

#[test]
fn test_tidy_degenerate_inputs() {
    let options = TidyOptions::default();
    assert!(layout_tidy(&[], &options).is_empty());

    let single = vec![FlowNode::question("q1", QuestionType::ShortText).at(13.0, 29.0)];
    let tidied = layout_tidy(&single, &options);
    assert_eq!(tidied[0].position, Position::new(16.0, 32.0));
}

#[test]
fn test_tidy_horizontal_direction() {
    let options = TidyOptions {
        direction: LayoutDirection::LeftToRight,
        ..TidyOptions::default()
    };
    let tidied = layout_tidy(&common::coincident_nodes(4), &options);
    assert!(!overlapping(&tidied, &options));
    let second = layout_tidy(&tidied, &options);
    assert_eq!(positions(&tidied), positions(&second));
}
