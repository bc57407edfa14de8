// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rendered excerpts as data.
//!
//! The renderer never builds markup directly. It produces an `Excerpt`, a
//! flat list of plain, marked and ellipsis segments, and markup is a final
//! projection of that list. Tests and the terminal front end read segments;
//! browsers get `to_markup`.

use serde::{Deserialize, Serialize};

use super::escape::escape_into;
use crate::types::MatchRange;

/// One piece of an excerpt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Segment {
    Plain(String),
    Marked(String),
    /// Text was cut here.
    Ellipsis,
}

/// Marker strings wrapped around highlighted spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Markers {
    pub open: String,
    pub close: String,
    pub ellipsis: String,
}

impl Default for Markers {
    fn default() -> Self {
        Markers {
            open: "<mark>".to_string(),
            close: "</mark>".to_string(),
            ellipsis: "\u{2026}".to_string(),
        }
    }
}

/// A highlighted snippet of some field text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Excerpt {
    segments: Vec<Segment>,
}

impl Excerpt {
    /// The first `budget` characters of `text`, unhighlighted.
    pub fn plain(text: &str, budget: usize) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let end = budget.min(chars.len());
        Self::build(&chars, MatchRange::new(0, end), &[])
    }

    /// Slice `window` out of `chars`, marking every range that lies inside it.
    ///
    /// Ranges must be sorted and disjoint. Ranges straddling the window edge
    /// are left unmarked; callers pick windows that never cut a range.
    pub(crate) fn build(chars: &[char], window: MatchRange, ranges: &[MatchRange]) -> Self {
        let mut segments = Vec::new();
        if window.start > 0 {
            segments.push(Segment::Ellipsis);
        }

        let mut cursor = window.start;
        for r in ranges
            .iter()
            .filter(|r| r.start >= window.start && r.end <= window.end)
        {
            if r.start > cursor {
                segments.push(Segment::Plain(chars[cursor..r.start].iter().collect()));
            }
            segments.push(Segment::Marked(chars[r.start..r.end].iter().collect()));
            cursor = r.end;
        }
        if window.end > cursor {
            segments.push(Segment::Plain(chars[cursor..window.end].iter().collect()));
        }

        if window.end < chars.len() {
            segments.push(Segment::Ellipsis);
        }
        Excerpt { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Highlighted spans, in order.
    pub fn marked(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Marked(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Visible text without markers or ellipses.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Plain(text) | Segment::Marked(text) => Some(text.as_str()),
                Segment::Ellipsis => None,
            })
            .collect()
    }

    /// Visible characters, ellipses excluded.
    pub fn visible_len(&self) -> usize {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Plain(text) | Segment::Marked(text) => text.chars().count(),
                Segment::Ellipsis => 0,
            })
            .sum()
    }

    /// Escaped markup with `markers` around highlighted spans.
    ///
    /// Only segment text is escaped; marker strings are inserted verbatim.
    pub fn to_markup(&self, markers: &Markers) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Plain(text) => escape_into(&mut out, text),
                Segment::Marked(text) => {
                    out.push_str(&markers.open);
                    escape_into(&mut out, text);
                    out.push_str(&markers.close);
                }
                Segment::Ellipsis => out.push_str(&markers.ellipsis),
            }
        }
        out
    }
}
