//! Common test utilities for building flow graphs.
use keiro::prelude::*;

/// A 4-node linear flow with one branch point:
///
/// `start -> q1 (short text) -> q2 (single choice: Red/Blue)`,
/// with `Red -> end-a` on an explicit per-option edge and a default edge to
/// `end-b`.
#[allow(dead_code)]
pub fn branching_flow() -> FlowGraph {
    FlowGraph::new(
        vec![
            FlowNode::start("start"),
            FlowNode::question("q1", QuestionType::ShortText).with_text("What is your name?"),
            FlowNode::question("q2", QuestionType::SingleChoice)
                .with_text("Hi {{q1:Name}}, favorite color?")
                .with_options(vec![
                    ChoiceOption::new("opt-red", "Red").with_points(10.0),
                    ChoiceOption::new("opt-blue", "Blue").with_points(5.0),
                ]),
            FlowNode::end("end-a"),
            FlowNode::end("end-b"),
        ],
        vec![
            FlowEdge::link("e1", "start", "q1"),
            FlowEdge::link("e2", "q1", "q2"),
            FlowEdge::link("e3", "q2", "end-a").with_handle("opt-red"),
            FlowEdge::link("e4", "q2", "end-b"),
        ],
    )
}

/// A diamond: `start -> q1`, `start -> q2`, `q1 -> q3`, `q2 -> q3`,
/// `q3 -> end`.
#[allow(dead_code)]
pub fn diamond_flow() -> FlowGraph {
    FlowGraph::new(
        vec![
            FlowNode::start("start"),
            FlowNode::question("q1", QuestionType::ShortText),
            FlowNode::question("q2", QuestionType::ShortText),
            FlowNode::question("q3", QuestionType::ShortText),
            FlowNode::end("end"),
        ],
        vec![
            FlowEdge::link("e1", "start", "q1"),
            FlowEdge::link("e2", "start", "q2"),
            FlowEdge::link("e3", "q1", "q3"),
            FlowEdge::link("e4", "q2", "q3"),
            FlowEdge::link("e5", "q3", "end"),
        ],
    )
}

/// A flow with a loop-back: `start -> q1 <-> q2`, plus `q2 -> end`.
#[allow(dead_code)]
pub fn cyclic_flow() -> FlowGraph {
    FlowGraph::new(
        vec![
            FlowNode::start("start"),
            FlowNode::question("q1", QuestionType::ShortText),
            FlowNode::question("q2", QuestionType::ShortText),
            FlowNode::end("end"),
        ],
        vec![
            FlowEdge::link("e1", "start", "q1"),
            FlowEdge::link("e2", "q1", "q2"),
            FlowEdge::link(
                "e3",
                "q2",
                "q1",
            )
            .with_condition(ConditionKind::Equals, serde_json::json!("again")),
            FlowEdge::link("e4", "q2", "end"),
        ],
    )
}

/// A question routed by numeric conditions:
/// `q1 > 5 -> end-high`, default `-> end-low`.
#[allow(dead_code)]
pub fn numeric_flow() -> FlowGraph {
    FlowGraph::new(
        vec![
            FlowNode::start("start"),
            FlowNode::question("q1", QuestionType::Number).with_text("Pick a number"),
            FlowNode::end("end-high"),
            FlowNode::end("end-low"),
        ],
        vec![
            FlowEdge::link("e1", "start", "q1"),
            FlowEdge::link("e2", "q1", "end-high")
                .with_condition(ConditionKind::GreaterThan, serde_json::json!(5)),
            FlowEdge::link("e3", "q1", "end-low"),
        ],
    )
}

/// Nodes stacked on the same canvas position, for tidy-layout tests.
#[allow(dead_code)]
pub fn coincident_nodes(count: usize) -> Vec<FlowNode> {
    (0..count)
        .map(|i| FlowNode::question(format!("q{}", i + 1), QuestionType::ShortText).at(100.0, 100.0))
        .collect()
}
