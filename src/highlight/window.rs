// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Windowed mode: a budget-sized snippet around the densest matches.
//!
//! Content fields are long; results show a short window. We pick the cluster
//! of consecutive ranges that fits in the budget with the most ranges in it,
//! center the window on that cluster, then push any edge that would cut a
//! range outward so every visible match is shown whole.

use crate::contracts::check_window_bounds;
use crate::types::MatchRange;

use super::excerpt::Excerpt;
use super::positions::normalize_ranges;

/// Highlight `ranges` inside a window of about `budget` characters.
///
/// With no usable ranges this is the plain excerpt. Visible text never exceeds
/// `budget` plus the longest range.
pub fn highlight_window(text: &str, ranges: &[MatchRange], budget: usize) -> Excerpt {
    let chars: Vec<char> = text.chars().collect();
    let ranges = normalize_ranges(ranges.to_vec(), chars.len());
    if ranges.is_empty() {
        return Excerpt::plain(text, budget);
    }
    let window = select_window(chars.len(), &ranges, budget);
    check_window_bounds(window, &ranges, budget);
    Excerpt::build(&chars, window, &ranges)
}

/// Pick the window for normalized `ranges` over a text of `len` code points.
pub(crate) fn select_window(len: usize, ranges: &[MatchRange], budget: usize) -> MatchRange {
    if len <= budget {
        return MatchRange::new(0, len);
    }
    let (first, last) = densest_cluster(ranges, budget);
    let cluster_start = ranges[first].start;
    let cluster_end = ranges[last].end;
    let span = cluster_end - cluster_start;
    if span >= budget {
        return MatchRange::new(cluster_start, cluster_end);
    }

    let slack = budget - span;
    let before = (slack / 2).min(cluster_start);
    let after = (slack - before).min(len - cluster_end);
    let before = (slack - after).min(cluster_start);
    let mut start = cluster_start - before;
    let mut end = cluster_end + after;

    if let Some(r) = ranges.iter().find(|r| r.bisected_by(start)) {
        let overshoot = start - r.start;
        start = r.start;
        end = (end - overshoot).max(cluster_end);
    }
    if let Some(r) = ranges.iter().find(|r| r.bisected_by(end)) {
        end = r.end;
    }
    MatchRange::new(start, end)
}

/// Indices of the first and last range of the best cluster.
///
/// A cluster is a run of consecutive ranges whose overall span fits in
/// `budget`. Most ranges wins; ties go to the earliest.
fn densest_cluster(ranges: &[MatchRange], budget: usize) -> (usize, usize) {
    let mut best = (0, 0);
    let mut best_count = 0;
    let mut left = 0;
    for right in 0..ranges.len() {
        while left < right && ranges[right].end - ranges[left].start > budget {
            left += 1;
        }
        let count = right - left + 1;
        if count > best_count {
            best_count = count;
            best = (left, right);
        }
    }
    best
}
