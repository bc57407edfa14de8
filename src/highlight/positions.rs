// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Project index terms back onto literal field text.
//!
//! The index stores stems ("start" for "Started"), so the query never tells us
//! where in the text to put a marker. Position metadata does: the build
//! recorded, for every stem it emitted, the code-point span it came from.

use std::collections::BTreeSet;
use tracing::trace;

use crate::contracts::check_ranges_normalized;
use crate::types::{MatchRange, PositionMetadata};

/// Code-point ranges in `text` covered by any of `terms`.
///
/// Output is sorted, non-overlapping and non-adjacent; touching spans are
/// merged. Entries pointing past the end of `text` are skipped.
pub fn map_positions(
    text: &str,
    metadata: &PositionMetadata,
    terms: &BTreeSet<String>,
) -> Vec<MatchRange> {
    let len = text.chars().count();
    let ranges: Vec<MatchRange> = metadata
        .entries()
        .iter()
        .filter(|entry| terms.contains(&entry.term))
        .map(|entry| MatchRange::new(entry.start as usize, entry.end as usize))
        .collect();
    normalize_ranges(ranges, len)
}

/// Drop empty or out-of-bounds ranges, then sort and merge.
pub fn normalize_ranges(mut ranges: Vec<MatchRange>, len: usize) -> Vec<MatchRange> {
    ranges.retain(|r| {
        let keep = !r.is_empty() && r.end <= len;
        if !keep {
            trace!(start = r.start, end = r.end, len, "skipping stale position");
        }
        keep
    });
    ranges.sort_unstable();

    let mut merged: Vec<MatchRange> = Vec::with_capacity(ranges.len());
    for r in ranges {
        match merged.last_mut() {
            Some(last) if r.start <= last.end => last.end = last.end.max(r.end),
            _ => merged.push(r),
        }
    }
    check_ranges_normalized(&merged, len);
    merged
}
