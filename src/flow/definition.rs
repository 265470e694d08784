use crate::error::FlowJsonError;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fs;

/// A 2D canvas position. The engine treats it as the top-left corner of a
/// node's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single screen in the assessment graph: start, question, or end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(default)]
    pub position: Position,
}

/// The screen variant and its type-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum NodeKind {
    Start(StartData),
    Question(QuestionData),
    End(EndData),
}

/// Intro screen payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub button_label: String,
}

/// Question screen payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionData {
    pub question_type: QuestionType,
    #[serde(default)]
    pub text: String,
    /// Present only for option-bearing question types.
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
    /// Lower bound for scaled question types (rating, NPS, number).
    #[serde(default)]
    pub min: Option<f64>,
    /// Upper bound for scaled question types.
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub min_label: Option<String>,
    #[serde(default)]
    pub max_label: Option<String>,
}

/// A selectable option on an option-bearing question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub id: String,
    pub label: String,
    /// Point value added to the running score when this option is chosen.
    #[serde(default)]
    pub points: Option<f64>,
}

impl ChoiceOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            points: None,
        }
    }

    /// A numbered placeholder option, used when constructing a fresh
    /// option-bearing question.
    pub fn placeholder(n: usize) -> Self {
        Self::new(format!("opt-{}", n), format!("Option {}", n))
    }

    pub fn with_points(mut self, points: f64) -> Self {
        self.points = Some(points);
        self
    }
}

/// Outro screen payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub show_score: bool,
    #[serde(default)]
    pub redirect_url: Option<String>,
}

/// The closed set of question types the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    SingleChoice,
    MultiChoice,
    ShortText,
    LongText,
    Rating,
    YesNo,
    Number,
    Email,
    Dropdown,
    Date,
    Nps,
}

impl QuestionType {
    /// Whether this type carries an explicit options list that edges may
    /// branch on per option.
    pub fn has_options(&self) -> bool {
        matches!(
            self,
            QuestionType::SingleChoice | QuestionType::MultiChoice | QuestionType::Dropdown
        )
    }

    /// Whether this type produces a numeric answer on a bounded scale.
    pub fn is_scaled(&self) -> bool {
        matches!(
            self,
            QuestionType::Rating | QuestionType::Nps | QuestionType::Number
        )
    }
}

/// A directed transition between two nodes, optionally gated by a per-option
/// handle or a condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Option id on the source question, for per-option branching.
    #[serde(default)]
    pub source_handle: Option<String>,
    #[serde(default)]
    pub condition: Option<EdgeCondition>,
}

impl FlowEdge {
    pub fn link(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            source_handle: None,
            condition: None,
        }
    }

    pub fn with_handle(mut self, option_id: impl Into<String>) -> Self {
        self.source_handle = Some(option_id.into());
        self
    }

    pub fn with_condition(mut self, kind: ConditionKind, value: serde_json::Value) -> Self {
        self.condition = Some(EdgeCondition { kind, value });
        self
    }

    /// The fallback transition for its source node: neither a handle nor a
    /// condition.
    pub fn is_default(&self) -> bool {
        self.source_handle.is_none() && self.condition.is_none()
    }
}

/// A predicate evaluated against a respondent's answer to choose an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeCondition {
    #[serde(rename = "type")]
    pub kind: ConditionKind,
    pub value: serde_json::Value,
}

impl EdgeCondition {
    /// The condition value as comparison text. JSON strings compare by their
    /// content, everything else by its JSON rendering.
    pub fn value_text(&self) -> String {
        match &self.value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// The condition value coerced to a number, if possible.
    pub fn value_number(&self) -> Option<f64> {
        match &self.value {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// The supported condition predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    Equals,
    NotEquals,
    Contains,
    GreaterThan,
    LessThan,
}

/// A whole-array snapshot of an assessment graph.
///
/// Every edit produces a new nodes/edges pair; the engine never mutates a
/// graph in place and holds no state between calls.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl FlowGraph {
    pub fn new(nodes: Vec<FlowNode>, edges: Vec<FlowEdge>) -> Self {
        Self { nodes, edges }
    }

    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// The first start node, if any. Multiplicity is the validator's concern.
    pub fn start_node(&self) -> Option<&FlowNode> {
        self.nodes
            .iter()
            .find(|n| matches!(n.kind, NodeKind::Start(_)))
    }

    /// Outgoing edges of a node, in declared array order.
    pub fn outgoing<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a FlowEdge> {
        self.edges.iter().filter(move |e| e.source == id)
    }

    /// Incoming edges of a node, in declared array order.
    pub fn incoming<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a FlowEdge> {
        self.edges.iter().filter(move |e| e.target == id)
    }

    pub fn node_ids(&self) -> AHashSet<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    /// Parse a graph from its persisted JSON shape.
    pub fn from_json(json: &str) -> Result<Self, FlowJsonError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a graph from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, FlowJsonError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Render the graph into its persisted JSON shape.
    pub fn to_json(&self) -> Result<String, FlowJsonError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FlowNode {
    /// A start node with consistent intro defaults.
    pub fn start(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Start(StartData {
                title: "Welcome".to_string(),
                description: String::new(),
                button_label: "Start".to_string(),
            }),
            position: Position::default(),
        }
    }

    /// A question node with type-appropriate defaults. Option-bearing types
    /// start with exactly 2 placeholder options; scaled types get their
    /// conventional bounds. Construction never fails.
    pub fn question(id: impl Into<String>, question_type: QuestionType) -> Self {
        let options = if question_type.has_options() {
            vec![ChoiceOption::placeholder(1), ChoiceOption::placeholder(2)]
        } else {
            Vec::new()
        };
        let (min, max) = match question_type {
            QuestionType::Rating => (Some(1.0), Some(5.0)),
            QuestionType::Nps => (Some(0.0), Some(10.0)),
            _ => (None, None),
        };
        Self {
            id: id.into(),
            kind: NodeKind::Question(QuestionData {
                question_type,
                text: String::new(),
                options,
                min,
                max,
                min_label: None,
                max_label: None,
            }),
            position: Position::default(),
        }
    }

    /// An end node with consistent outro defaults.
    pub fn end(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::End(EndData {
                title: "Thank you".to_string(),
                description: String::new(),
                show_score: false,
                redirect_url: None,
            }),
            position: Position::default(),
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Position::new(x, y);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        match &mut self.kind {
            NodeKind::Start(data) => data.title = text.into(),
            NodeKind::Question(data) => data.text = text.into(),
            NodeKind::End(data) => data.title = text.into(),
        }
        self
    }

    pub fn with_options(mut self, options: Vec<ChoiceOption>) -> Self {
        if let NodeKind::Question(data) = &mut self.kind {
            data.options = options;
        }
        self
    }

    pub fn question_data(&self) -> Option<&QuestionData> {
        match &self.kind {
            NodeKind::Question(data) => Some(data),
            _ => None,
        }
    }
}

impl NodeKind {
    pub fn is_start(&self) -> bool {
        matches!(self, NodeKind::Start(_))
    }

    pub fn is_question(&self) -> bool {
        matches!(self, NodeKind::Question(_))
    }

    pub fn is_end(&self) -> bool {
        matches!(self, NodeKind::End(_))
    }

    /// All author-editable text fields, used for pipe-token scanning.
    pub fn text_fields(&self) -> Vec<&str> {
        match self {
            NodeKind::Start(data) => vec![data.title.as_str(), data.description.as_str()],
            NodeKind::Question(data) => vec![data.text.as_str()],
            NodeKind::End(data) => vec![data.title.as_str(), data.description.as_str()],
        }
    }
}
