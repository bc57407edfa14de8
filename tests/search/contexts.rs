//! Context scoping: which indexes a search covers.

use std::sync::Arc;

use docsift::testing::IndexBuilder;
use docsift::{
    search, ContextPath, ContextSelection, FieldType, IndexBundle, SearchConfig, SearchSession,
};

use crate::common::docs_site;

fn hit_ids(bundle: &IndexBundle, query: &str, selection: &ContextSelection) -> Vec<u32> {
    let mut ids: Vec<u32> = search(bundle, query, selection, 100)
        .results()
        .iter()
        .map(|r| r.document.id)
        .collect();
    ids.sort_unstable();
    ids
}

#[test]
fn test_everywhere_unions_all_contexts_and_global() {
    let ids = hit_ids(&docs_site(), "cache", &ContextSelection::Everywhere);
    assert_eq!(ids, vec![10, 20, 100, 110, 501]);
}

#[test]
fn test_scoped_context_excludes_other_contexts() {
    let ids = hit_ids(&docs_site(), "cache", &ContextSelection::Scoped("docs".into()));
    assert_eq!(ids, vec![10, 20, 501]);

    let ids = hit_ids(&docs_site(), "cache", &ContextSelection::Scoped("blog".into()));
    assert_eq!(ids, vec![100, 110, 501]);
}

#[test]
fn test_unknown_context_searches_global_only() {
    let ids = hit_ids(&docs_site(), "cache", &ContextSelection::Scoped("wiki".into()));
    assert_eq!(ids, vec![501]);
}

#[test]
fn test_selection_parsing() {
    assert_eq!(ContextSelection::parse(""), ContextSelection::Everywhere);
    assert_eq!(ContextSelection::parse("everywhere"), ContextSelection::Everywhere);
    assert_eq!(
        ContextSelection::parse("docs"),
        ContextSelection::Scoped("docs".to_string())
    );
}

#[test]
fn test_content_page_resolves_within_its_own_context() {
    // Both contexts have a page 1; each content hit must own its own.
    let bundle = IndexBundle::new()
        .with_context(
            "v1",
            vec![
                IndexBuilder::new(FieldType::Title)
                    .page(1, "Old Routing", "/v1/routing")
                    .build(),
                IndexBuilder::new(FieldType::Content)
                    .child(2, 1, "routes are matched in order")
                    .build(),
            ],
        )
        .with_context(
            "v2",
            vec![
                IndexBuilder::new(FieldType::Title)
                    .page(1, "New Routing", "/v2/routing")
                    .build(),
                IndexBuilder::new(FieldType::Content)
                    .child(3, 1, "routes are matched by specificity")
                    .build(),
            ],
        );

    let outcome = search(&bundle, "matched", &ContextSelection::Everywhere, 10);
    let owners: Vec<(u32, &str)> = outcome
        .results()
        .iter()
        .map(|r| (r.document.id, r.owner().title.as_str()))
        .collect();
    assert_eq!(owners, vec![(2, "Old Routing"), (3, "New Routing")]);
}

#[test]
fn test_global_content_can_belong_to_a_context_page() {
    let bundle = IndexBundle::new()
        .with_context(
            "docs",
            vec![IndexBuilder::new(FieldType::Title)
                .page(7, "Deploying", "/docs/deploy")
                .build()],
        )
        .with_global(vec![IndexBuilder::new(FieldType::Content)
            .child(70, 7, "shared deployment checklist")
            .build()]);

    let outcome = search(&bundle, "checklist", &ContextSelection::Scoped("docs".into()), 10);
    let results = outcome.results();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].owner().title, "Deploying");
}

fn owner_urls(bundle: &IndexBundle, query: &str, selection: &ContextSelection) -> Vec<String> {
    search(bundle, query, selection, 10)
        .results()
        .iter()
        .map(|r| r.owner().url.clone())
        .collect()
}

#[test]
fn test_context_content_never_owned_by_another_context() {
    // Blog paragraph points at page 7, which only docs publishes.
    let bundle = IndexBundle::new()
        .with_context(
            "blog",
            vec![IndexBuilder::new(FieldType::Content)
                .child(110, 7, "notes on cache eviction")
                .build()],
        )
        .with_context(
            "docs",
            vec![IndexBuilder::new(FieldType::Title)
                .page(7, "Deploying", "/docs/deploy")
                .build()],
        );

    assert!(owner_urls(&bundle, "eviction", &ContextSelection::Everywhere).is_empty());
    assert!(owner_urls(&bundle, "eviction", &ContextSelection::Scoped("blog".into())).is_empty());
}

#[test]
fn test_context_content_can_belong_to_a_global_page() {
    let bundle = IndexBundle::new()
        .with_context(
            "docs",
            vec![IndexBuilder::new(FieldType::Content)
                .child(12, 500, "see the eviction entry")
                .build()],
        )
        .with_global(vec![IndexBuilder::new(FieldType::Title)
            .page(500, "Glossary", "/glossary")
            .build()]);

    assert_eq!(
        owner_urls(&bundle, "eviction", &ContextSelection::Everywhere),
        vec!["/glossary"]
    );
}

#[test]
fn test_ambiguous_global_content_is_dropped() {
    // Page 7 exists in both contexts; a global paragraph cannot choose.
    let bundle = IndexBundle::new()
        .with_context(
            "blog",
            vec![IndexBuilder::new(FieldType::Title)
                .page(7, "Release Post", "/blog/post")
                .build()],
        )
        .with_context(
            "docs",
            vec![IndexBuilder::new(FieldType::Title)
                .page(7, "Deploying", "/docs/deploy")
                .build()],
        )
        .with_global(vec![IndexBuilder::new(FieldType::Content)
            .child(70, 7, "shared deployment checklist")
            .build()]);

    assert!(owner_urls(&bundle, "checklist", &ContextSelection::Everywhere).is_empty());
    assert_eq!(
        owner_urls(&bundle, "checklist", &ContextSelection::Scoped("docs".into())),
        vec!["/docs/deploy"]
    );
    assert_eq!(
        owner_urls(&bundle, "checklist", &ContextSelection::Scoped("blog".into())),
        vec!["/blog/post"]
    );
}

#[test]
fn test_orphaned_content_is_dropped() {
    let bundle = IndexBundle::new().with_global(vec![IndexBuilder::new(FieldType::Content)
        .child(5, 404, "nobody owns this paragraph")
        .build()]);
    let outcome = search(&bundle, "paragraph", &ContextSelection::Everywhere, 10);
    assert!(outcome.results().is_empty());
}

#[test]
fn test_session_scoped_by_pathname() {
    let config = SearchConfig {
        context_paths: vec![
            ContextPath {
                prefix: "/docs".to_string(),
                context: "docs".to_string(),
            },
            ContextPath {
                prefix: "/blog".to_string(),
                context: "blog".to_string(),
            },
        ],
        ..SearchConfig::default()
    };
    let bundle = Arc::new(docs_site());

    let session = SearchSession::for_path(Arc::clone(&bundle), config.clone(), "/blog/2024/post");
    assert_eq!(session.context(), &ContextSelection::Scoped("blog".to_string()));
    let ids: Vec<u32> = session
        .search("cache")
        .results()
        .iter()
        .map(|r| r.document.id)
        .collect();
    assert!(ids.contains(&100));
    assert!(!ids.contains(&20));

    // "/blogroll" is not under "/blog".
    let session = SearchSession::for_path(bundle, config, "/blogroll");
    assert_eq!(session.context(), &ContextSelection::Everywhere);
}

#[test]
fn test_switching_context_changes_results() {
    let mut session = SearchSession::new(Arc::new(docs_site()), SearchConfig::default());
    let everywhere = session.search("cache").results().len();
    session.set_context(ContextSelection::Scoped("docs".into()));
    let docs = session.search("cache").results().len();
    assert!(docs < everywhere);
}
