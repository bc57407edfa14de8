//! Links that carry matched tokens to the destination page.

use docsift::deep_link::{tokens_from_query, with_highlight_params, DEFAULT_HIGHLIGHT_PARAM};
use docsift::highlight::highlight_exact;
use docsift::{FieldType, Markers};

use crate::common::{docs_site, session};

fn query_of(link: &str) -> &str {
    let after = link.split_once('?').map_or("", |(_, q)| q);
    after.split_once('#').map_or(after, |(q, _)| q)
}

#[test]
fn test_destination_highlights_from_link_tokens() {
    let session = session(docs_site());
    let outcome = session.search("cache invalidation");
    let heading = outcome
        .results()
        .iter()
        .find(|r| r.kind == FieldType::Heading)
        .unwrap();
    let link = session.deep_link(heading);

    let tokens = tokens_from_query(query_of(&link), DEFAULT_HIGHLIGHT_PARAM);
    assert_eq!(tokens, vec!["cache", "invalidation"]);

    let destination = highlight_exact("Cache invalidation is hard.", &tokens);
    assert_eq!(
        destination.to_markup(&Markers::default()),
        "<mark>Cache</mark> <mark>invalidation</mark> is hard."
    );
}

#[test]
fn test_non_ascii_tokens_survive_the_round_trip() {
    let link = with_highlight_params("/docs/intl", None, ["北京", "café", "a b"], "_highlight");
    assert!(link.is_ascii());
    assert_eq!(
        tokens_from_query(query_of(&link), "_highlight"),
        vec!["北京", "café", "a b"]
    );
}

#[test]
fn test_other_parameters_are_ignored() {
    let tokens = tokens_from_query("?page=2&_highlight=cache&sort=asc", "_highlight");
    assert_eq!(tokens, vec!["cache"]);
}

#[test]
fn test_existing_query_and_fragment_are_kept() {
    let link = with_highlight_params("/search?lang=en#top", None, ["cache"], "_highlight");
    assert_eq!(link, "/search?lang=en&_highlight=cache#top");

    let link = with_highlight_params("/search#top", Some("install"), ["cache"], "_highlight");
    assert_eq!(link, "/search?_highlight=cache#install");
}

#[test]
fn test_title_links_have_no_anchor() {
    let session = session(docs_site());
    let outcome = session.search("glossary");
    let title = &outcome.results()[0];
    assert_eq!(session.deep_link(title), "/glossary?_highlight=glossary");
}
