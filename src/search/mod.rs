// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: tokens in, ranked results out.
//!
//! Two stages. The searcher walks every index in scope and emits raw,
//! field-tagged hits with no ordering promise. The merger then collapses
//! duplicates, ranks, and truncates. Both are synchronous and allocation-light;
//! the expensive part of a keystroke is rendering, not this.

pub mod dedup;
pub mod searcher;

pub use dedup::ResultMerger;
pub use searcher::{search_raw, RawHit};

use crate::index::IndexBundle;
use crate::tokenize::tokenize;
use crate::types::{ContextSelection, SearchResult};

/// Default cap on the number of results.
pub const DEFAULT_LIMIT: usize = 100;

/// What a query produced.
///
/// `Idle` means the query had no tokens, so no search ran. Hosts usually
/// keep showing their placeholder rather than a "no results" message.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Idle,
    Results(Vec<SearchResult>),
}

impl SearchOutcome {
    pub fn is_idle(&self) -> bool {
        matches!(self, SearchOutcome::Idle)
    }

    /// Results, empty when idle.
    pub fn results(&self) -> &[SearchResult] {
        match self {
            SearchOutcome::Idle => &[],
            SearchOutcome::Results(results) => results,
        }
    }

    pub fn into_results(self) -> Vec<SearchResult> {
        match self {
            SearchOutcome::Idle => Vec::new(),
            SearchOutcome::Results(results) => results,
        }
    }
}

/// Tokenize `query` with the bundle's dictionary and search.
pub fn search(
    bundle: &IndexBundle,
    query: &str,
    selection: &ContextSelection,
    limit: usize,
) -> SearchOutcome {
    let tokens = tokenize(query, bundle.dictionary());
    if tokens.is_empty() {
        return SearchOutcome::Idle;
    }
    SearchOutcome::Results(search_tokens(bundle, &tokens, selection, limit))
}

/// Search with already-tokenized input.
pub fn search_tokens(
    bundle: &IndexBundle,
    tokens: &[String],
    selection: &ContextSelection,
    limit: usize,
) -> Vec<SearchResult> {
    let scope = bundle.scope(selection);
    let mut merger = ResultMerger::new();
    merger.merge_all(search_raw(&scope, tokens));
    merger.into_sorted(limit)
}
