// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact mode: mark every occurrence of every token, no windowing.
//!
//! Used for short fields (titles, headings) and for the destination page of a
//! deep link, where all we have is the token list.

use crate::contracts::check_ranges_normalized;
use crate::tokenize::fold_char;
use crate::types::MatchRange;

use super::excerpt::Excerpt;

/// Highlight every case-insensitive occurrence of `tokens` in `text`.
///
/// ```
/// use docsift::highlight::{highlight_exact, Markers};
///
/// let excerpt = highlight_exact("Getting Started", ["start"]);
/// assert_eq!(excerpt.to_markup(&Markers::default()), "Getting <mark>Start</mark>ed");
/// ```
pub fn highlight_exact<I, S>(text: &str, tokens: I) -> Excerpt
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let chars: Vec<char> = text.chars().collect();
    let ranges = exact_ranges(&chars, tokens);
    Excerpt::build(&chars, MatchRange::new(0, chars.len()), &ranges)
}

/// Ranges for every non-overlapping token occurrence, longest tokens first.
///
/// A shorter token never claims characters a longer one already marked, so
/// "cache" and "cach" over "caches" produce one span, not nested ones.
pub(crate) fn exact_ranges<I, S>(chars: &[char], tokens: I) -> Vec<MatchRange>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let folded: Vec<char> = chars.iter().copied().map(fold_char).collect();

    let mut needles: Vec<Vec<char>> = tokens
        .into_iter()
        .map(|t| t.as_ref().chars().map(fold_char).collect::<Vec<char>>())
        .filter(|t| !t.is_empty())
        .collect();
    needles.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    needles.dedup();

    let mut marked = vec![false; folded.len()];
    for needle in &needles {
        let width = needle.len();
        let mut i = 0;
        while i + width <= folded.len() {
            if folded[i..i + width] == needle[..] && !marked[i..i + width].contains(&true) {
                marked[i..i + width].fill(true);
                i += width;
            } else {
                i += 1;
            }
        }
    }

    // Runs of marked characters; adjacent token hits become one span.
    let mut ranges = Vec::new();
    let mut start = None;
    for (i, &m) in marked.iter().enumerate() {
        match (m, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                ranges.push(MatchRange::new(s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        ranges.push(MatchRange::new(s, marked.len()));
    }
    check_ranges_normalized(&ranges, chars.len());
    ranges
}
