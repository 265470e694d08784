//! # Keiro - Flow Graph Engine for Branching Questionnaires
//!
//! **Keiro** is the core engine behind a branching-questionnaire builder: a
//! directed graph of screens that authors edit and respondents walk one
//! answer at a time. The engine covers the graph data model, the structural
//! validator that gatekeeps publishing, reachability queries, the
//! deterministic runtime router, answer piping into screen text, and two
//! complementary layout algorithms for the visual editor.
//!
//! Every function is pure and synchronous: each call receives a whole
//! nodes/edges snapshot and returns new values. Respondent state (current
//! node, answer history, running score) lives with the caller, which simply
//! calls again for the next step.
//!
//! ## Core Workflow
//!
//! 1.  **Build a graph**: construct [`flow::FlowNode`]s and
//!     [`flow::FlowEdge`]s (or convert an external format via
//!     [`flow::IntoFlowGraph`]) into a [`flow::FlowGraph`].
//! 2.  **Validate**: run [`validate::validate_flow`]. Error-severity issues
//!     block publishing; warnings are surfaced but do not block.
//! 3.  **Walk**: call [`route::next_node`] per respondent answer, rendering
//!     each screen's text through [`pipes::resolve_pipes`].
//! 4.  **Arrange**: keep the editor canvas legible with
//!     [`layout::layout_layered`] (full auto-arrange) or
//!     [`layout::layout_tidy`] (incremental overlap resolution).
//!
//! ## Quick Start
//!
//! ```rust
//! use keiro::prelude::*;
//!
//! let graph = FlowGraph::new(
//!     vec![
//!         FlowNode::start("start"),
//!         FlowNode::question("q1", QuestionType::SingleChoice).with_options(vec![
//!             ChoiceOption::new("opt-red", "Red"),
//!             ChoiceOption::new("opt-blue", "Blue"),
//!         ]),
//!         FlowNode::end("end-a"),
//!         FlowNode::end("end-b"),
//!     ],
//!     vec![
//!         FlowEdge::link("e1", "start", "q1"),
//!         FlowEdge::link("e2", "q1", "end-a").with_handle("opt-red"),
//!         FlowEdge::link("e3", "q1", "end-b"),
//!     ],
//! );
//!
//! // Publishable: no error-severity issues.
//! assert!(!has_blocking(&validate_flow(&graph)));
//!
//! // "Red" takes the explicit per-option edge, anything else the default.
//! let answer = AnswerValue::from("Red");
//! assert_eq!(
//!     next_node("q1", &graph, Some(&answer)),
//!     RouteOutcome::Next("end-a".to_string()),
//! );
//! ```

pub mod error;
pub mod flow;
pub mod layout;
pub mod pipes;
pub mod prelude;
pub mod route;
pub mod traverse;
pub mod validate;
