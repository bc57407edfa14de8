//! Field ranking, match quality, and result limits.

use docsift::{search, ContextSelection, FieldType, SearchOutcome};

use crate::common::{docs_site, titles_only};

fn ids(outcome: &SearchOutcome) -> Vec<(u32, FieldType)> {
    outcome
        .results()
        .iter()
        .map(|r| (r.document.id, r.kind))
        .collect()
}

#[test]
fn test_both_tokens_outrank_either_alone() {
    let bundle = titles_only(&["Hello World", "World Peace", "Hello"]);
    let outcome = search(&bundle, "hello world", &ContextSelection::Everywhere, 10);

    let results = outcome.results();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].document.id, 0);
    assert_eq!(results[0].score, 200.0);
    // Ties keep encounter order: "hello" is scanned before "world".
    assert_eq!(results[1].document.id, 2);
    assert_eq!(results[2].document.id, 1);
    assert_eq!(results[1].score, results[2].score);
}

#[test]
fn test_title_beats_heading_beats_content() {
    let outcome = search(&docs_site(), "cache", &ContextSelection::Everywhere, 10);
    assert_eq!(
        ids(&outcome),
        vec![
            (100, FieldType::Title),
            (10, FieldType::Heading),
            (110, FieldType::Content),
            (20, FieldType::Content),
            (501, FieldType::Content),
        ]
    );
}

#[test]
fn test_heading_outranks_content_even_with_better_match() {
    // "install" is an exact heading match and a prefix content match.
    let outcome = search(&docs_site(), "install", &ContextSelection::Everywhere, 10);
    let results = outcome.results();
    assert_eq!(results.len(), 2);
    assert_eq!((results[0].document.id, results[0].kind), (11, FieldType::Heading));
    assert_eq!(results[0].score, 10.0);
    assert_eq!((results[1].document.id, results[1].kind), (21, FieldType::Content));
    assert_eq!(results[1].score, 0.5);
}

#[test]
fn test_prefix_matches_score_half() {
    let outcome = search(&docs_site(), "cach", &ContextSelection::Everywhere, 10);
    let titles: Vec<_> = outcome
        .results()
        .iter()
        .filter(|r| r.kind == FieldType::Title)
        .collect();
    assert_eq!(titles.len(), 2);
    assert!(titles.iter().all(|r| r.score == 50.0));
    // "caching" extends "cach", and is recorded as the matched term.
    let guide = titles.iter().find(|r| r.document.id == 1).unwrap();
    assert!(guide.matched_terms.contains("caching"));
    assert!(guide.matched_tokens.contains("cach"));
}

#[test]
fn test_prefix_requires_token_to_be_shorter() {
    // "caching" does not start with "cache".
    let outcome = search(&docs_site(), "cache", &ContextSelection::Everywhere, 10);
    assert!(outcome.results().iter().all(|r| r.document.id != 1));
}

#[test]
fn test_within_kind_higher_score_first() {
    let bundle = titles_only(&["Rust", "Rust Rust guide", "Rusty"]);
    let outcome = search(&bundle, "rust guide", &ContextSelection::Everywhere, 10);
    let order: Vec<u32> = outcome.results().iter().map(|r| r.document.id).collect();
    assert_eq!(order[0], 1);
    let scores: Vec<f64> = outcome.results().iter().map(|r| r.score).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_limit_truncates_after_ranking() {
    let titles = vec!["Page"; 150];
    let bundle = titles_only(&titles);

    let outcome = search(&bundle, "page", &ContextSelection::Everywhere, 100);
    assert_eq!(outcome.results().len(), 100);

    let few = search(&bundle, "page", &ContextSelection::Everywhere, 3);
    let order: Vec<u32> = few.results().iter().map(|r| r.document.id).collect();
    assert_eq!(order, vec![0, 1, 2]);
}

#[test]
fn test_zero_limit_returns_empty_results() {
    let outcome = search(&docs_site(), "cache", &ContextSelection::Everywhere, 0);
    assert_eq!(outcome, SearchOutcome::Results(Vec::new()));
}

#[test]
fn test_punctuation_query_is_idle() {
    let bundle = docs_site();
    assert!(search(&bundle, "", &ContextSelection::Everywhere, 10).is_idle());
    assert!(search(&bundle, " ?! ", &ContextSelection::Everywhere, 10).is_idle());
}

#[test]
fn test_no_hits_is_not_idle() {
    let outcome = search(&docs_site(), "zebra", &ContextSelection::Everywhere, 10);
    assert!(!outcome.is_idle());
    assert!(outcome.results().is_empty());
}

#[test]
fn test_repeated_tokens_count_once() {
    let bundle = titles_only(&["Hello"]);
    let once = search(&bundle, "hello", &ContextSelection::Everywhere, 10);
    let twice = search(&bundle, "hello HELLO hello", &ContextSelection::Everywhere, 10);
    assert_eq!(once.results()[0].score, twice.results()[0].score);
}
