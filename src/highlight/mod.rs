// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighting: turn a result into a marked-up snippet.
//!
//! Two modes. Exact mode scans short text for the query tokens directly.
//! Windowed mode takes code-point ranges from position metadata and cuts a
//! budget-sized excerpt around the densest cluster. Everything here is pure:
//! the same result and budget always render the same bytes.

mod escape;
mod exact;
mod excerpt;
mod positions;
mod window;

pub use escape::escape_html;
pub use exact::highlight_exact;
pub use excerpt::{Excerpt, Markers, Segment};
pub use positions::{map_positions, normalize_ranges};
pub use window::highlight_window;

use crate::types::{FieldType, SearchResult};

/// Default excerpt budget, in characters.
pub const DEFAULT_EXCERPT_BUDGET: usize = 50;

/// The excerpt shown under a result.
///
/// Titles and headings are short, so they are highlighted whole with the
/// matched tokens. Content gets a window over the ranges its metadata maps
/// to, or the plain opening text when nothing maps.
pub fn excerpt_for(result: &SearchResult, budget: usize) -> Excerpt {
    let text = &result.document.title;
    match result.kind {
        FieldType::Title | FieldType::Heading => highlight_exact(text, &result.matched_tokens),
        FieldType::Content => {
            let ranges = map_positions(text, &result.metadata, &result.highlight_terms());
            if ranges.is_empty() {
                Excerpt::plain(text, budget)
            } else {
                highlight_window(text, &ranges, budget)
            }
        }
    }
}

/// The owning page's title with matched tokens highlighted.
pub fn title_for(result: &SearchResult) -> Excerpt {
    highlight_exact(&result.owner().title, &result.matched_tokens)
}

pub fn render_excerpt(result: &SearchResult, budget: usize, markers: &Markers) -> String {
    excerpt_for(result, budget).to_markup(markers)
}

pub fn render_title(result: &SearchResult, markers: &Markers) -> String {
    title_for(result).to_markup(markers)
}
