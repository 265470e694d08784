//! The runtime transition function.
//!
//! Given the current position and the respondent's answer, [`next_node`]
//! computes where the flow goes next. The function is pure: path history, the
//! answer map, and any running score live with the caller, which simply calls
//! again for the next step.

use crate::flow::{AnswerValue, ConditionKind, EdgeCondition, FlowGraph, NodeKind};

/// Where a routing step landed. `Terminal` is the sentinel for both normal
/// completion (end node, no outgoing edges) and a runtime dead end; the
/// router never panics or errors mid-session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Next(String),
    Terminal,
}

impl RouteOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RouteOutcome::Terminal)
    }

    pub fn node_id(&self) -> Option<&str> {
        match self {
            RouteOutcome::Next(id) => Some(id),
            RouteOutcome::Terminal => None,
        }
    }
}

/// Compute the node that follows `current_id` for the given answer.
///
/// Edge selection precedence, over the outgoing edges of the current node:
/// 1. the edge whose `source_handle` matches the chosen option, for
///    option-bearing questions;
/// 2. the first condition edge, in declared array order, whose condition
///    matches the answer;
/// 3. the default edge;
/// 4. otherwise the traversal is a dead end and the current node acts as the
///    de facto terminal screen.
pub fn next_node(
    current_id: &str,
    graph: &FlowGraph,
    answer: Option<&AnswerValue>,
) -> RouteOutcome {
    let Some(node) = graph.node(current_id) else {
        return RouteOutcome::Terminal;
    };
    if node.kind.is_end() {
        return RouteOutcome::Terminal;
    }
    let outgoing: Vec<_> = graph.outgoing(current_id).collect();
    if outgoing.is_empty() {
        return RouteOutcome::Terminal;
    }

    // 1. Per-option branching.
    if let (NodeKind::Question(data), Some(answer)) = (&node.kind, answer)
        && data.question_type.has_options()
    {
        for edge in &outgoing {
            let Some(handle) = &edge.source_handle else {
                continue;
            };
            let chosen = data
                .options
                .iter()
                .find(|opt| opt.id == *handle)
                .is_some_and(|opt| answer.selects(&opt.id) || answer.selects(&opt.label));
            if chosen {
                return RouteOutcome::Next(edge.target.clone());
            }
        }
    }

    // 2. Condition edges, first match wins.
    if let Some(answer) = answer {
        for edge in &outgoing {
            if let Some(condition) = &edge.condition
                && condition_matches(condition, answer)
            {
                return RouteOutcome::Next(edge.target.clone());
            }
        }
    }

    // 3. The default edge.
    if let Some(edge) = outgoing.iter().find(|e| e.is_default()) {
        return RouteOutcome::Next(edge.target.clone());
    }

    // 4. Dead end.
    RouteOutcome::Terminal
}

/// The single source of truth for cross-type condition comparisons.
///
/// Numeric predicates skip (never error on) answers that cannot be coerced
/// to a number, falling through to the next candidate edge.
pub fn condition_matches(condition: &EdgeCondition, answer: &AnswerValue) -> bool {
    match condition.kind {
        ConditionKind::Equals => answer_equals(condition, answer),
        ConditionKind::NotEquals => !answer_equals(condition, answer),
        ConditionKind::Contains => {
            let needle = condition.value_text();
            match answer {
                AnswerValue::Selection(items) => items.iter().any(|item| *item == needle),
                other => other.as_text().contains(&needle),
            }
        }
        ConditionKind::GreaterThan => match (answer.as_number(), condition.value_number()) {
            (Some(a), Some(b)) => a > b,
            _ => false,
        },
        ConditionKind::LessThan => match (answer.as_number(), condition.value_number()) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        },
    }
}

/// Equality is a membership test for selection answers and a string compare
/// for everything else.
fn answer_equals(condition: &EdgeCondition, answer: &AnswerValue) -> bool {
    let expected = condition.value_text();
    match answer {
        AnswerValue::Selection(items) => items.iter().any(|item| *item == expected),
        other => other.as_text() == expected,
    }
}
