//! The host-facing session: rendering, deep links, and stale queries.

use std::sync::Arc;

use docsift::testing::{make_doc, IndexBuilder};
use docsift::{FieldType, IndexBundle, Markers, SearchConfig, SearchSession};

use crate::common::{docs_site, session, titles_only};

#[test]
fn test_hello_world_title_markup() {
    let session = session(titles_only(&["Hello World"]));
    let outcome = session.search("hello world");
    let result = &outcome.results()[0];
    assert_eq!(
        session.render_title(result),
        "<mark>Hello</mark> <mark>World</mark>"
    );
}

#[test]
fn test_stemmed_title_highlights_the_query_prefix() {
    let titles = IndexBuilder::new(FieldType::Title)
        .unindexed(make_doc(1, "Getting Started"))
        .stem(1, "get", 0, 7)
        .stem(1, "start", 8, 15)
        .build();
    let session = session(IndexBundle::new().with_global(vec![titles]));

    let outcome = session.search("start");
    let results = outcome.results();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].document.id, 1);
    assert_eq!(session.render_title(&results[0]), "Getting <mark>Start</mark>ed");
}

#[test]
fn test_content_excerpt_is_windowed() {
    let session = session(docs_site());
    let outcome = session.search("cache");
    let content = outcome
        .results()
        .iter()
        .find(|r| r.document.id == 20)
        .unwrap();
    assert_eq!(
        session.render_excerpt(content),
        "The <mark>cache</mark> stores rendered pages so repeated reques…"
    );
    assert_eq!(session.render_title(content), "Caching Guide");
}

#[test]
fn test_heading_excerpt_and_title() {
    let session = session(docs_site());
    let outcome = session.search("cache");
    let heading = outcome
        .results()
        .iter()
        .find(|r| r.kind == FieldType::Heading)
        .unwrap();
    assert_eq!(
        session.render_excerpt(heading),
        "<mark>Cache</mark> invalidation"
    );
    assert_eq!(heading.display_path(), vec!["Caching Guide".to_string()]);
}

#[test]
fn test_deep_link_carries_tokens_and_anchor() {
    let session = session(docs_site());
    let outcome = session.search("cache invalidation");
    let heading = outcome
        .results()
        .iter()
        .find(|r| r.kind == FieldType::Heading)
        .unwrap();
    assert_eq!(
        session.deep_link(heading),
        "/docs/1?_highlight=cache&_highlight=invalidation#section-10"
    );
}

#[test]
fn test_custom_markers_and_param() {
    let config = SearchConfig {
        markers: Markers {
            open: "**".to_string(),
            close: "**".to_string(),
            ellipsis: "...".to_string(),
        },
        highlight_param: "hl".to_string(),
        ..SearchConfig::default()
    };
    let session = SearchSession::new(Arc::new(titles_only(&["Hello World"])), config);
    let outcome = session.search("world");
    let result = &outcome.results()[0];
    assert_eq!(session.render_title(result), "Hello **World**");
    assert_eq!(session.deep_link(result), "/p/0?hl=world");
}

#[test]
fn test_only_latest_ticket_commits() {
    let session = session(docs_site());
    let slow = session.begin();
    let fast = session.begin();

    let fast_outcome = session.search("cache");
    let slow_outcome = session.search("cach");

    assert!(session.commit(fast, fast_outcome).is_some());
    assert!(session.commit(slow, slow_outcome).is_none());
}

#[test]
fn test_results_survive_bundle_replacement() {
    let mut session = session(docs_site());
    let outcome = session.search("cache");
    session.replace_bundle(Arc::new(titles_only(&["Other"])));

    let heading = outcome
        .results()
        .iter()
        .find(|r| r.kind == FieldType::Heading)
        .unwrap();
    assert_eq!(session.render_excerpt(heading), "<mark>Cache</mark> invalidation");
    assert!(session.search("cache").results().is_empty());
}
