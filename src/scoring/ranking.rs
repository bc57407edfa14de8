// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! The ranking is bucketed by field, not by raw score. A title result with
//! score 50 beats a content result with score 500. Scores only break ties
//! inside a bucket, and whatever is still tied keeps its encounter order
//! (callers sort with a stable sort), so the same query over the same bundle
//! always produces the same list.

use crate::types::SearchResult;
use std::cmp::Ordering;

/// Compare two search results for ranking.
///
/// Sort order:
/// 1. **Field** - Title, then Heading, then Content
/// 2. **Score** - descending, within the same field
///
/// Equal results compare `Equal`; use with `sort_by` (stable) to fall back to
/// encounter order.
pub fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    a.kind
        .cmp(&b.kind)
        .then_with(|| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal))
}
