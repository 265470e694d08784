//! Tests for answer piping.
use keiro::prelude::*;

fn answers(entries: &[(&str, AnswerValue)]) -> AHashMap<String, AnswerValue> {
    entries
        .iter()
        .map(|(id, answer)| (id.to_string(), answer.clone()))
        .collect()
}

#[test]
fn test_resolve_basic_token() {
    let answers = answers(&[("q1", AnswerValue::from("Ana"))]);
    assert_eq!(
        resolve_pipes("Hi {{q1:Name}}", &answers, DEFAULT_FALLBACK),
        "Hi Ana"
    );
}

#[test]
fn test_missing_answer_uses_fallback() {
    let answers = answers(&[]);
    assert_eq!(
        resolve_pipes("Hi {{q1:Name}}", &answers, DEFAULT_FALLBACK),
        "Hi ..."
    );
    assert_eq!(
        resolve_pipes("Hi {{q1:Name}}", &answers, "friend"),
        "Hi friend"
    );
}

#[test]
fn test_empty_answer_uses_fallback() {
    let answers = answers(&[
        ("q1", AnswerValue::from("")),
        ("q2", AnswerValue::Selection(vec![])),
    ]);
    assert_eq!(
        resolve_pipes("{{q1:A}} / {{q2:B}}", &answers, DEFAULT_FALLBACK),
        "... / ..."
    );
}

#[test]
fn test_selection_joins_and_number_stringifies() {
    let answers = answers(&[
        (
            "q1",
            AnswerValue::Selection(vec!["Red".to_string(), "Blue".to_string()]),
        ),
        ("q2", AnswerValue::from(8.0)),
    ]);
    assert_eq!(
        resolve_pipes("Colors: {{q1:Colors}}, score {{q2:Score}}", &answers, "..."),
        "Colors: Red, Blue, score 8"
    );
}

#[test]
fn test_malformed_tokens_left_untouched() {
    let answers = answers(&[("q1", AnswerValue::from("Ana"))]);
    // No colon separator: not a token.
    assert_eq!(
        resolve_pipes("Hi {{q1}}", &answers, DEFAULT_FALLBACK),
        "Hi {{q1}}"
    );
    assert_eq!(display_text("Hi {{q1}}"), "Hi {{q1}}");
    assert!(find_broken_references("Hi {{q1}}", &AHashSet::new()).is_empty());
}

#[test]
fn test_display_text_renders_labels() {
    assert_eq!(
        display_text("Hi {{q1:Name}}, you chose {{q2:Color}}"),
        "Hi @Name, you chose @Color"
    );
}

#[test]
fn test_find_broken_references_deduplicates() {
    let existing: AHashSet<String> = ["q1".to_string()].into_iter().collect();
    let broken = find_broken_references(
        "{{q1:A}} {{q2:B}} {{q3:C}} {{q2:B again}}",
        &existing,
    );
    assert_eq!(broken, vec!["q2", "q3"]);
}

#[test]
fn test_repeated_calls_are_stateless() {
    let answers = answers(&[("q1", AnswerValue::from("Ana"))]);
    let text = "{{q1:Name}} and {{q1:Name}}";
    let first = resolve_pipes(text, &answers, DEFAULT_FALLBACK);
    let second = resolve_pipes(text, &answers, DEFAULT_FALLBACK);
    assert_eq!(first, "Ana and Ana");
    assert_eq!(first, second);
}
