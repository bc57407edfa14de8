//! Excerpts built from search results.

use std::sync::Arc;

use docsift::highlight::{excerpt_for, highlight_window};
use docsift::testing::{make_child, IndexBuilder};
use docsift::{
    FieldType, IndexBundle, MatchRange, SearchConfig, SearchResult, SearchSession, Segment,
};

use crate::common::session;

/// A page with one content record whose text is indexed word by word.
fn page_with_content(text: &str) -> IndexBundle {
    IndexBundle::new().with_global(vec![
        IndexBuilder::new(FieldType::Title)
            .page(1, "Performance", "/perf")
            .build(),
        IndexBuilder::new(FieldType::Content).child(5, 1, text).build(),
    ])
}

/// A page whose content record is indexed under stems only.
fn stemmed_bundle() -> IndexBundle {
    IndexBundle::new().with_global(vec![
        IndexBuilder::new(FieldType::Title)
            .page(1, "Performance", "/perf")
            .build(),
        IndexBuilder::new(FieldType::Content)
            .unindexed(make_child(5, 1, "Caches were running hot"))
            .stem(5, "cach", 0, 6)
            .stem(5, "run", 12, 19)
            .build(),
    ])
}

fn first_content(session: &SearchSession, query: &str) -> SearchResult {
    session
        .search(query)
        .into_results()
        .into_iter()
        .find(|r| r.kind == FieldType::Content)
        .expect("a content hit")
}

#[test]
fn test_stem_offsets_mark_the_inflected_word() {
    let session = session(stemmed_bundle());

    let result = first_content(&session, "run");
    assert_eq!(
        session.render_excerpt(&result),
        "Caches were <mark>running</mark> hot"
    );

    let result = first_content(&session, "cach");
    assert_eq!(
        session.render_excerpt(&result),
        "<mark>Caches</mark> were running hot"
    );
}

#[test]
fn test_token_longer_than_stem_does_not_match() {
    let session = session(stemmed_bundle());
    assert!(session.search("running").results().is_empty());
}

#[test]
fn test_content_text_is_escaped() {
    let session = session(page_with_content("Use <cache> & friends"));
    let result = first_content(&session, "cache");
    assert_eq!(
        session.render_excerpt(&result),
        "Use &lt;<mark>cache</mark>&gt; &amp; friends"
    );
}

#[test]
fn test_long_content_is_cut_on_both_sides() {
    let text = format!(
        "{}needle{}",
        "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda ",
        " mu nu xi omicron pi rho sigma tau upsilon phi chi psi omega"
    );
    let session = session(page_with_content(&text));
    let result = first_content(&session, "needle");
    let excerpt = session.excerpt(&result);

    let segments = excerpt.segments();
    assert_eq!(segments.first(), Some(&Segment::Ellipsis));
    assert_eq!(segments.last(), Some(&Segment::Ellipsis));
    assert_eq!(excerpt.marked().collect::<Vec<_>>(), vec!["needle"]);
    assert_eq!(excerpt.visible_len(), 50);

    let markup = session.render_excerpt(&result);
    assert!(markup.starts_with('…'));
    assert!(markup.ends_with('…'));
    assert!(markup.contains("<mark>needle</mark>"));
}

#[test]
fn test_window_prefers_the_densest_cluster() {
    let text = format!(
        "cache {}cache cache cache{}",
        "filler ".repeat(20),
        " tail".repeat(10)
    );
    let config = SearchConfig {
        excerpt_budget: 30,
        ..SearchConfig::default()
    };
    let session = SearchSession::new(Arc::new(page_with_content(&text)), config);
    let result = first_content(&session, "cache");
    let excerpt = session.excerpt(&result);

    assert_eq!(excerpt.marked().count(), 3);
    assert_eq!(excerpt.segments().first(), Some(&Segment::Ellipsis));
}

#[test]
fn test_window_never_cuts_a_match() {
    // The densest cluster sits at 30..56; a centered window of 20 would
    // start inside the first range.
    let text: String = std::iter::repeat('x').take(100).collect();
    let ranges = [
        MatchRange::new(30, 46),
        MatchRange::new(50, 52),
        MatchRange::new(54, 56),
    ];
    let excerpt = highlight_window(&text, &ranges, 20);
    let marked: Vec<usize> = excerpt.marked().map(|m| m.chars().count()).collect();
    assert_eq!(marked, vec![16, 2, 2]);
    assert!(excerpt.visible_len() <= 20 + 16);
}

#[test]
fn test_posting_without_positions_falls_back_to_plain_text() {
    let text = "This paragraph is long enough that the plain excerpt has to cut it short.";
    let bundle = IndexBundle::new().with_global(vec![
        IndexBuilder::new(FieldType::Title)
            .page(1, "Performance", "/perf")
            .build(),
        IndexBuilder::new(FieldType::Content)
            .unindexed(make_child(5, 1, text))
            .posting(5, "paragraph")
            .build(),
    ]);
    let session = session(bundle);
    let result = first_content(&session, "paragraph");
    let excerpt = session.excerpt(&result);

    assert_eq!(excerpt.marked().count(), 0);
    assert_eq!(excerpt.visible_len(), 50);
    assert_eq!(excerpt.segments().last(), Some(&Segment::Ellipsis));
    assert!(text.starts_with(&excerpt.text()));
}

#[test]
fn test_title_results_highlight_their_own_title() {
    let session = session(page_with_content("unrelated words"));
    let result = session.search("perf").into_results().remove(0);
    assert_eq!(result.kind, FieldType::Title);
    assert_eq!(
        excerpt_for(&result, 50).marked().collect::<Vec<_>>(),
        vec!["Perf"]
    );
}

#[test]
fn test_excerpt_serializes_as_tagged_segments() {
    let session = session(page_with_content("warm the cache"));
    let result = first_content(&session, "cache");
    let json = serde_json::to_value(session.excerpt(&result)).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "kind": "plain", "text": "warm the " },
            { "kind": "marked", "text": "cache" },
        ])
    );
}
