//! Answer piping: `{{nodeId:label}}` tokens in screen text.
//!
//! Tokens let later screens reference earlier answers. All three functions
//! share one compiled pattern and are stateless, so repeated calls on the
//! same string behave identically. Malformed tokens (missing the colon
//! separator) are left untouched everywhere.

use crate::flow::AnswerValue;
use ahash::{AHashMap, AHashSet};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Substituted for tokens whose answer is missing or empty.
pub const DEFAULT_FALLBACK: &str = "...";

/// `{{nodeId:label}}` — the id runs to the first colon, the label to the
/// closing braces.
static PIPE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}:]+):([^{}]*)\}\}").expect("pipe token pattern"));

/// Replace every well-formed token with the current answer for its node.
/// Selections join with `, `, numbers stringify, missing or empty answers
/// become `fallback`.
pub fn resolve_pipes(
    text: &str,
    answers_by_node_id: &AHashMap<String, AnswerValue>,
    fallback: &str,
) -> String {
    PIPE_TOKEN
        .replace_all(text, |caps: &Captures| {
            let node_id = caps[1].trim();
            match answers_by_node_id.get(node_id) {
                Some(answer) if !answer.is_empty() => answer.as_text(),
                _ => fallback.to_string(),
            }
        })
        .into_owned()
}

/// The editor-facing transform: tokens render as `@label`, with no live data.
pub fn display_text(text: &str) -> String {
    PIPE_TOKEN
        .replace_all(text, |caps: &Captures| format!("@{}", caps[2].trim()))
        .into_owned()
}

/// Node ids referenced by tokens that no longer exist in the graph, in order
/// of first appearance and without duplicates.
pub fn find_broken_references(text: &str, existing_node_ids: &AHashSet<String>) -> Vec<String> {
    let mut seen: AHashSet<String> = AHashSet::new();
    let mut broken = Vec::new();
    for caps in PIPE_TOKEN.captures_iter(text) {
        let node_id = caps[1].trim();
        if !existing_node_ids.contains(node_id) && seen.insert(node_id.to_string()) {
            broken.push(node_id.to_string());
        }
    }
    broken
}
