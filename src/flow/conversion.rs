use super::definition::FlowGraph;
use crate::error::FlowConversionError;

/// A trait for external graph producers that can be converted into a Keiro
/// [`FlowGraph`].
///
/// This is the extension point for feeding the engine from other formats: a
/// persisted editor document, an imported template, or a generated candidate
/// flow. Whatever the producer, the result is just another graph and must be
/// run through [`crate::validate::validate_flow`] before being treated as
/// publishable.
///
/// # Example
///
/// ```rust,no_run
/// use keiro::prelude::*;
/// use keiro::error::FlowConversionError;
///
/// struct ImportedQuestion { id: String, prompt: String }
/// struct ImportedForm { questions: Vec<ImportedQuestion> }
///
/// impl IntoFlowGraph for ImportedForm {
///     fn into_flow_graph(self) -> std::result::Result<FlowGraph, FlowConversionError> {
///         let mut nodes = vec![FlowNode::start("start")];
///         let mut edges = Vec::new();
///         let mut previous = "start".to_string();
///         for q in self.questions {
///             nodes.push(FlowNode::question(&q.id, QuestionType::ShortText).with_text(q.prompt));
///             edges.push(FlowEdge::link(format!("e-{}", q.id), &previous, &q.id));
///             previous = q.id;
///         }
///         nodes.push(FlowNode::end("end"));
///         edges.push(FlowEdge::link("e-end", previous, "end"));
///         Ok(FlowGraph::new(nodes, edges))
///     }
/// }
/// ```
pub trait IntoFlowGraph {
    /// Consumes the object and converts it into a Keiro-compatible graph.
    fn into_flow_graph(self) -> Result<FlowGraph, FlowConversionError>;
}
