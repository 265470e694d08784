use super::definition::QuestionData;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A respondent's answer at the engine boundary: never a free-form dynamic
/// value, always one of these three shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Numeric answer (number, rating, NPS).
    Number(f64),
    /// Single text answer (short/long text, email, date, yes/no, single choice).
    Text(String),
    /// Multiple selected texts (multi choice).
    Selection(Vec<String>),
}

impl AnswerValue {
    /// The answer as display text. Selections join with `, `; whole numbers
    /// drop their fractional part.
    pub fn as_text(&self) -> String {
        match self {
            AnswerValue::Text(s) => s.clone(),
            AnswerValue::Selection(items) => items.join(", "),
            AnswerValue::Number(n) => format_number(*n),
        }
    }

    /// The answer coerced to a number. Text parses after trimming; a
    /// single-element selection parses its element; anything else is `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            AnswerValue::Text(s) => s.trim().parse().ok(),
            AnswerValue::Selection(items) => match items.as_slice() {
                [only] => only.trim().parse().ok(),
                _ => None,
            },
        }
    }

    /// Whether the answer carries no usable value.
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Text(s) => s.is_empty(),
            AnswerValue::Selection(items) => items.is_empty(),
            AnswerValue::Number(_) => false,
        }
    }

    /// Whether the answer selects the given text: equality for text and
    /// number answers, membership for selections.
    pub fn selects(&self, value: &str) -> bool {
        match self {
            AnswerValue::Text(s) => s == value,
            AnswerValue::Selection(items) => items.iter().any(|item| item == value),
            AnswerValue::Number(n) => format_number(*n) == value,
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_text())
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(value: Vec<String>) -> Self {
        AnswerValue::Selection(value)
    }
}

/// Render a number without a trailing `.0` for whole values.
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl QuestionData {
    /// Sum of the point values of the options this answer selects, matched by
    /// option id or label. Point values live on the node data; the caller
    /// keeps the running total.
    pub fn points_for(&self, answer: &AnswerValue) -> f64 {
        self.options
            .iter()
            .filter(|opt| answer.selects(&opt.id) || answer.selects(&opt.label))
            .filter_map(|opt| opt.points)
            .sum()
    }
}
