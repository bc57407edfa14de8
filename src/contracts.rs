// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the search and highlight pipelines.
//!
//! Debug-mode assertions that the rest of the crate calls at the seams where
//! an invariant is established. Zero-cost in release builds.
//!
//! | Contract                  | Checked at                              |
//! |---------------------------|-----------------------------------------|
//! | field weight ordering     | compile time                            |
//! | `check_results_ranked`    | `ResultMerger::into_sorted`             |
//! | `check_ranges_normalized` | `map_positions`, `highlight_exact`      |
//! | `check_window_bounds`     | `highlight_window`                      |

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

/// Field weights must stay strictly ordered. If this fails the crate won't build.
const _: () = {
    use crate::scoring::{CONTENT_WEIGHT, HEADING_WEIGHT, TITLE_WEIGHT};
    assert!(TITLE_WEIGHT > HEADING_WEIGHT);
    assert!(HEADING_WEIGHT > CONTENT_WEIGHT);
    assert!(CONTENT_WEIGHT > 0.0);
};

use std::collections::HashSet;

use crate::scoring::ranking::compare_results;
use crate::types::{MatchRange, SearchResult};
use std::cmp::Ordering;

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Results are unique by `(id, kind)`, ranked, and within `limit`.
///
/// # Panics (debug builds only)
/// Panics on a duplicate key, an out-of-order pair, or too many results.
#[inline]
pub fn check_results_ranked(results: &[SearchResult], limit: usize) {
    debug_assert!(
        results.len() <= limit,
        "{} results exceed limit {}",
        results.len(),
        limit
    );
    if cfg!(debug_assertions) {
        let mut seen = HashSet::with_capacity(results.len());
        for r in results {
            debug_assert!(
                seen.insert((r.document.id, r.kind)),
                "duplicate result: document {} in {}",
                r.document.id,
                r.kind.as_str()
            );
        }
        for pair in results.windows(2) {
            debug_assert!(
                compare_results(&pair[0], &pair[1]) != Ordering::Greater,
                "results out of order: {} ({}) before {} ({})",
                pair[0].document.id,
                pair[0].score,
                pair[1].document.id,
                pair[1].score
            );
        }
    }
}

// ============================================================================
// RANGE CONTRACTS
// ============================================================================

/// Ranges are non-empty, sorted, disjoint, non-adjacent, and inside `len`.
///
/// # Panics (debug builds only)
/// Panics if any range violates the above.
#[inline]
pub fn check_ranges_normalized(ranges: &[MatchRange], len: usize) {
    if cfg!(debug_assertions) {
        for r in ranges {
            debug_assert!(!r.is_empty(), "empty range {:?}", r);
            debug_assert!(r.end <= len, "range {:?} exceeds text length {}", r, len);
        }
        for pair in ranges.windows(2) {
            debug_assert!(
                pair[0].end < pair[1].start,
                "ranges overlap or touch: {:?} then {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}

/// A window never cuts a range and shows at most `budget + longest` chars.
///
/// # Panics (debug builds only)
/// Panics if `window` bisects one of `ranges` or is wider than allowed.
#[inline]
pub fn check_window_bounds(window: MatchRange, ranges: &[MatchRange], budget: usize) {
    if cfg!(debug_assertions) {
        let longest = ranges.iter().map(MatchRange::len).max().unwrap_or(0);
        debug_assert!(
            window.len() <= budget + longest,
            "window {:?} wider than budget {} + longest range {}",
            window,
            budget,
            longest
        );
        for r in ranges {
            debug_assert!(
                !r.bisected_by(window.start) && !r.bisected_by(window.end),
                "window {:?} cuts range {:?}",
                window,
                r
            );
        }
    }
}
