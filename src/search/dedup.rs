// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result deduplication and final ordering.
//!
//! One (document, field) pair should appear at most once in the result list.
//! The same document can be hit twice when it is published in more than one
//! index in scope (a context set and the global set, say). Those hits merge:
//! token and term sets union, the score is the max, and the position in
//! encounter order is whatever the first hit fixed.
//!
//! A document hit in *different* fields (its title and a heading on it) stays
//! as separate results. Those are different things to click on.
//!
//! **Invariant**: no two results share `(document.id, kind)`.
//!
//! **Verified by**: `prop_results_unique_and_ranked` (tests/property.rs)

use std::collections::HashMap;

use super::searcher::RawHit;
use crate::contracts::check_results_ranked;
use crate::scoring::ranking::compare_results;
use crate::types::{FieldType, SearchResult};

/// Collapses raw hits into unique, ranked results.
///
/// ```
/// use docsift::search::ResultMerger;
///
/// let merger = ResultMerger::new();
/// assert!(merger.into_sorted(10).is_empty());
/// ```
#[derive(Debug, Default)]
pub struct ResultMerger {
    /// `(document id, field)` to position in `results`.
    slots: HashMap<(u32, FieldType), usize>,
    /// Unique results in encounter order.
    results: Vec<SearchResult>,
}

impl ResultMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one raw hit.
    pub fn merge(&mut self, hit: RawHit<'_>) {
        let key = (hit.document.id, hit.kind);
        match self.slots.get(&key) {
            Some(&slot) => {
                let existing = &mut self.results[slot];
                existing.matched_tokens.extend(hit.matched_tokens);
                existing.matched_terms.extend(hit.matched_terms);
                if hit.score > existing.score {
                    existing.score = hit.score;
                }
                if existing.page.is_none() {
                    existing.page = hit.page.cloned();
                }
                if existing.metadata.is_empty() {
                    if let Some(metadata) = hit.metadata {
                        existing.metadata = metadata.clone();
                    }
                }
            }
            None => {
                self.slots.insert(key, self.results.len());
                self.results.push(SearchResult {
                    document: hit.document.clone(),
                    kind: hit.kind,
                    page: hit.page.cloned(),
                    matched_tokens: hit.matched_tokens,
                    matched_terms: hit.matched_terms,
                    metadata: hit.metadata.cloned().unwrap_or_default(),
                    score: hit.score,
                });
            }
        }
    }

    /// Equivalent to calling `merge()` for each hit.
    pub fn merge_all<'a>(&mut self, hits: impl IntoIterator<Item = RawHit<'a>>) {
        for hit in hits {
            self.merge(hit);
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Sort by `compare_results()` and keep the first `limit`.
    ///
    /// The sort is stable, so ties stay in encounter order.
    pub fn into_sorted(self, limit: usize) -> Vec<SearchResult> {
        let mut results = self.results;
        results.sort_by(compare_results);
        results.truncate(limit);
        check_results_ranked(&results, limit);
        results
    }
}
