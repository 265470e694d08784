//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions from the keiro
//! crate. Import this module to get the core surface without importing each
//! item individually.

// Graph model
pub use crate::flow::{
    AnswerValue, ChoiceOption, ConditionKind, EdgeCondition, EndData, FlowEdge, FlowGraph,
    FlowNode, IntoFlowGraph, NodeKind, Position, QuestionData, QuestionType, StartData,
};

// Validation
pub use crate::validate::{Issue, Severity, has_blocking, validate_flow};

// Traversal
pub use crate::traverse::{
    BranchMode, ancestor_question_nodes, connected_branch, downstream, upstream,
};

// Routing
pub use crate::route::{RouteOutcome, condition_matches, next_node};

// Answer piping
pub use crate::pipes::{DEFAULT_FALLBACK, display_text, find_broken_references, resolve_pipes};

// Layout
pub use crate::layout::{
    LayeredOptions, LayoutDirection, NodeSize, TidyOptions, layout_layered, layout_tidy,
};

// Error types
pub use crate::error::{FlowConversionError, FlowJsonError};

// Collections commonly used with this crate
pub use ahash::{AHashMap, AHashSet};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
