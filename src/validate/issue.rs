use serde::{Deserialize, Serialize};
use std::fmt;

/// How severe a validation finding is. Errors block publishing; warnings are
/// surfaced to the author but do not block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// A single validation finding, returned as data rather than thrown, so the
/// caller decides what blocks a publish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub node_id: Option<String>,
    pub message: String,
}

impl Issue {
    pub fn error(node_id: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            node_id: node_id.map(str::to_string),
            message: message.into(),
        }
    }

    pub fn warning(node_id: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            node_id: node_id.map(str::to_string),
            message: message.into(),
        }
    }

    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        match &self.node_id {
            Some(id) => write!(f, "{} [{}]: {}", label, id, self.message),
            None => write!(f, "{}: {}", label, self.message),
        }
    }
}

/// Whether any issue in the list blocks publishing.
pub fn has_blocking(issues: &[Issue]) -> bool {
    issues.iter().any(Issue::is_blocking)
}
