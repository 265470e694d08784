//! Unit tests for the graph model and answer values.
mod common;
use keiro::prelude::*;

#[test]
fn test_answer_value_display() {
    assert_eq!(AnswerValue::from("Ana").to_string(), "Ana");
    assert_eq!(AnswerValue::from(42.0).to_string(), "42");
    assert_eq!(AnswerValue::from(2.5).to_string(), "2.5");
    assert_eq!(
        AnswerValue::Selection(vec!["Red".to_string(), "Blue".to_string()]).to_string(),
        "Red, Blue"
    );
}

#[test]
fn test_answer_value_as_number() {
    assert_eq!(AnswerValue::from(7.0).as_number(), Some(7.0));
    assert_eq!(AnswerValue::from(" 7 ").as_number(), Some(7.0));
    assert_eq!(AnswerValue::from("seven").as_number(), None);
    assert_eq!(
        AnswerValue::Selection(vec!["7".to_string()]).as_number(),
        Some(7.0)
    );
    assert_eq!(
        AnswerValue::Selection(vec!["7".to_string(), "8".to_string()]).as_number(),
        None
    );
}

#[test]
fn test_answer_value_selects() {
    let selection = AnswerValue::Selection(vec!["Red".to_string(), "Blue".to_string()]);
    assert!(selection.selects("Red"));
    assert!(!selection.selects("Green"));
    assert!(AnswerValue::from("Red").selects("Red"));
    assert!(AnswerValue::from(3.0).selects("3"));
}

#[test]
fn test_question_type_predicates() {
    assert!(QuestionType::SingleChoice.has_options());
    assert!(QuestionType::MultiChoice.has_options());
    assert!(QuestionType::Dropdown.has_options());
    assert!(!QuestionType::ShortText.has_options());
    assert!(!QuestionType::YesNo.has_options());

    assert!(QuestionType::Rating.is_scaled());
    assert!(QuestionType::Nps.is_scaled());
    assert!(QuestionType::Number.is_scaled());
    assert!(!QuestionType::Email.is_scaled());
}

#[test]
fn test_question_defaults_are_consistent() {
    let node = FlowNode::question("q1", QuestionType::SingleChoice);
    let data = node.question_data().unwrap();
    assert_eq!(data.options.len(), 2);
    assert_ne!(data.options[0].id, data.options[1].id);

    let rating = FlowNode::question("q2", QuestionType::Rating);
    let data = rating.question_data().unwrap();
    assert!(data.options.is_empty());
    assert_eq!(data.min, Some(1.0));
    assert_eq!(data.max, Some(5.0));

    let nps = FlowNode::question("q3", QuestionType::Nps);
    let data = nps.question_data().unwrap();
    assert_eq!((data.min, data.max), (Some(0.0), Some(10.0)));
}

#[test]
fn test_default_edge_detection() {
    assert!(FlowEdge::link("e1", "a", "b").is_default());
    assert!(!FlowEdge::link("e2", "a", "b").with_handle("opt-1").is_default());
    assert!(
        !FlowEdge::link("e3", "a", "b")
            .with_condition(ConditionKind::Equals, serde_json::json!("x"))
            .is_default()
    );
}

#[test]
fn test_points_for_answer() {
    let graph = common::branching_flow();
    let data = graph.node("q2").unwrap().question_data().unwrap();

    assert_eq!(data.points_for(&AnswerValue::from("Red")), 10.0);
    assert_eq!(data.points_for(&AnswerValue::from("opt-blue")), 5.0);
    assert_eq!(
        data.points_for(&AnswerValue::Selection(vec![
            "Red".to_string(),
            "Blue".to_string()
        ])),
        15.0
    );
    assert_eq!(data.points_for(&AnswerValue::from("Green")), 0.0);
}

#[test]
fn test_graph_json_round_trip() {
    let graph = common::branching_flow();
    let json = graph.to_json().unwrap();
    let parsed = FlowGraph::from_json(&json).unwrap();
    assert_eq!(parsed, graph);
}

#[test]
fn test_answer_value_untagged_json() {
    let number: AnswerValue = serde_json::from_str("7.5").unwrap();
    assert_eq!(number, AnswerValue::Number(7.5));

    let text: AnswerValue = serde_json::from_str("\"Red\"").unwrap();
    assert_eq!(text, AnswerValue::Text("Red".to_string()));

    let selection: AnswerValue = serde_json::from_str("[\"Red\",\"Blue\"]").unwrap();
    assert_eq!(
        selection,
        AnswerValue::Selection(vec!["Red".to_string(), "Blue".to_string()])
    );
}

#[test]
fn test_issue_display() {
    let error = Issue::error(Some("q1"), "Question needs at least 2 options, but has 1");
    assert!(error.to_string().contains("error"));
    assert!(error.to_string().contains("q1"));

    let warning = Issue::warning(None, "The flow contains a cycle");
    assert!(warning.to_string().starts_with("warning"));
    assert!(!warning.is_blocking());
}
