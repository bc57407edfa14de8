// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Evaluate tokens against every index in scope.
//!
//! For each token we range-scan the index's sorted terms: the term equal to
//! the token is an exact hit, every longer term starting with it is a prefix
//! hit. A document matches if any token hits, and accumulates score from
//! every (token, term) pair that does.
//!
//! Output carries borrowed references into the bundle; nothing is cloned
//! until the merger has thrown the duplicates away.

use std::collections::{BTreeSet, HashMap};
use tracing::warn;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::index::{IndexScope, ScopedIndex};
use crate::scoring::{field_weight, term_contribution, MatchKind};
use crate::types::{DocumentRecord, FieldType, PositionMetadata};

/// One document field that matched, before deduplication.
#[derive(Debug, Clone)]
pub struct RawHit<'a> {
    pub context: Option<&'a str>,
    pub document: &'a DocumentRecord,
    pub kind: FieldType,
    /// Owning page; `None` for title hits.
    pub page: Option<&'a DocumentRecord>,
    pub matched_tokens: BTreeSet<String>,
    pub matched_terms: BTreeSet<String>,
    pub metadata: Option<&'a PositionMetadata>,
    pub score: f64,
}

/// Evaluate `tokens` against every index in `scope`.
///
/// Hits come out grouped by index in scope order and, within an index, in the
/// order documents were first hit. The merger relies on that order for
/// deterministic tie-breaking.
pub fn search_raw<'a>(scope: &IndexScope<'a>, tokens: &[String]) -> Vec<RawHit<'a>> {
    let tokens = unique_tokens(tokens);
    if tokens.is_empty() {
        return Vec::new();
    }

    #[cfg(feature = "parallel")]
    let per_index: Vec<Vec<RawHit<'a>>> = scope
        .indexes()
        .par_iter()
        .map(|scoped| search_index(scope, *scoped, &tokens))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let per_index: Vec<Vec<RawHit<'a>>> = scope
        .indexes()
        .iter()
        .map(|scoped| search_index(scope, *scoped, &tokens))
        .collect();

    per_index.into_iter().flatten().collect()
}

/// Drop repeated tokens, keeping first occurrences in order.
fn unique_tokens(tokens: &[String]) -> Vec<&str> {
    let mut seen = BTreeSet::new();
    tokens
        .iter()
        .map(String::as_str)
        .filter(|t| !t.is_empty() && seen.insert(*t))
        .collect()
}

fn search_index<'a>(
    scope: &IndexScope<'a>,
    scoped: ScopedIndex<'a>,
    tokens: &[&str],
) -> Vec<RawHit<'a>> {
    let index = scoped.index;
    let kind = index.field();
    let mut hits: Vec<RawHit<'a>> = Vec::new();
    let mut slots: HashMap<u32, usize> = HashMap::new();

    for &token in tokens {
        for (term, postings) in index.prefixed(token) {
            let match_kind = MatchKind::classify(token, term);
            for posting in postings {
                let slot = match slots.get(&posting.doc_id) {
                    Some(&slot) => slot,
                    None => {
                        // Validated at construction: every posting has a document.
                        let Some(document) = index.document(posting.doc_id) else {
                            continue;
                        };
                        hits.push(RawHit {
                            context: scoped.context,
                            document,
                            kind,
                            page: None,
                            matched_tokens: BTreeSet::new(),
                            matched_terms: BTreeSet::new(),
                            metadata: index.positions(posting.doc_id),
                            score: 0.0,
                        });
                        slots.insert(posting.doc_id, hits.len() - 1);
                        hits.len() - 1
                    }
                };
                let hit = &mut hits[slot];
                hit.score += term_contribution(posting.term_frequency, match_kind);
                hit.matched_tokens.insert(token.to_string());
                hit.matched_terms.insert(term.to_string());
            }
        }
    }

    let weight = field_weight(kind);
    hits.into_iter()
        .filter_map(|mut hit| {
            hit.score *= weight;
            match kind {
                FieldType::Title => Some(hit),
                FieldType::Heading | FieldType::Content => {
                    let page = hit
                        .document
                        .parent
                        .and_then(|parent| scope.page(hit.context, parent));
                    if page.is_none() {
                        warn!(
                            doc_id = hit.document.id,
                            parent = ?hit.document.parent,
                            field = kind.as_str(),
                            "dropping hit with no resolvable page"
                        );
                    }
                    hit.page = Some(page?);
                    Some(hit)
                }
            }
        })
        .collect()
}
