//! The same record published in more than one index appears once.

use docsift::testing::IndexBuilder;
use docsift::{search, ContextSelection, FieldType, IndexBundle};

fn mirrored_bundle() -> IndexBundle {
    // Page 1 is published in both contexts with slightly different text.
    IndexBundle::new()
        .with_context(
            "a",
            vec![IndexBuilder::new(FieldType::Title)
                .page(1, "Cache", "/a/cache")
                .build()],
        )
        .with_context(
            "b",
            vec![IndexBuilder::new(FieldType::Title)
                .page(1, "Cache layer", "/b/cache")
                .build()],
        )
}

#[test]
fn test_same_id_and_kind_merges_into_one_result() {
    let outcome = search(
        &mirrored_bundle(),
        "cache layer",
        &ContextSelection::Everywhere,
        10,
    );
    let results = outcome.results();
    assert_eq!(results.len(), 1);

    let merged = &results[0];
    // Highest score of the duplicates wins.
    assert_eq!(merged.score, 200.0);
    // Tokens are the union over every duplicate.
    let tokens: Vec<&str> = merged.matched_tokens.iter().map(String::as_str).collect();
    assert_eq!(tokens, vec!["cache", "layer"]);
    // The first encounter supplies the record.
    assert_eq!(merged.document.url, "/a/cache");
}

#[test]
fn test_same_id_different_kind_stays_separate() {
    let bundle = IndexBundle::new().with_global(vec![
        IndexBuilder::new(FieldType::Title)
            .page(1, "Cache", "/cache")
            .build(),
        IndexBuilder::new(FieldType::Heading)
            .child(1, 1, "Cache tips")
            .build(),
    ]);
    let outcome = search(&bundle, "cache", &ContextSelection::Everywhere, 10);
    let kinds: Vec<FieldType> = outcome.results().iter().map(|r| r.kind).collect();
    assert_eq!(kinds, vec![FieldType::Title, FieldType::Heading]);
}

#[test]
fn test_no_duplicate_keys_in_large_overlap() {
    let index = || {
        let mut builder = IndexBuilder::new(FieldType::Title);
        for id in 0..20 {
            builder = builder.page(id, "shared title", &format!("/p/{}", id));
        }
        builder.build()
    };
    let bundle = IndexBundle::new()
        .with_context("x", vec![index()])
        .with_context("y", vec![index()])
        .with_global(vec![index()]);

    let outcome = search(&bundle, "shared", &ContextSelection::Everywhere, 100);
    let mut ids: Vec<u32> = outcome.results().iter().map(|r| r.document.id).collect();
    assert_eq!(ids.len(), 20);
    ids.dedup();
    assert_eq!(ids.len(), 20);
}
