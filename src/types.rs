// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks shared by the index, the searcher and the renderer.
//!
//! Documents, postings and position metadata arrive from the external index
//! build. Everything here is plain data: the invariants that tie the pieces
//! together (postings point at known documents, positions at known records)
//! are enforced once, when a `WrappedIndex` is constructed.
//!
//! # Offsets
//!
//! Every offset in this crate counts Unicode scalar values (code points), not
//! bytes. The index build produces code-point offsets and the renderer slices
//! by code point, so the unit never changes between the two.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which field of a page a match landed in.
///
/// Title matches beat heading matches beat content matches, always. The
/// derived `Ord` follows declaration order (Title < Heading < Content), which
/// is also rank order: smaller sorts first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Title,
    Heading,
    Content,
}

impl FieldType {
    /// Lowercase name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Title => "title",
            FieldType::Heading => "heading",
            FieldType::Content => "content",
        }
    }

    /// Numeric tag used on the wire and in the JS binding (0 = title).
    pub fn to_u8(self) -> u8 {
        match self {
            FieldType::Title => 0,
            FieldType::Heading => 1,
            FieldType::Content => 2,
        }
    }
}

/// One searchable record: a page, a heading on a page, or a paragraph.
///
/// `title` holds the indexed field text. For a page that is the page title,
/// for a heading the heading text, for content the paragraph itself. Heading
/// and content records name their owning page through `parent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: u32,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    #[serde(default)]
    pub breadcrumb: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<u32>,
}

/// A term occurrence summary for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    pub doc_id: u32,
    /// How many times the term occurs in the document's field.
    #[serde(default = "default_term_frequency", rename = "tf")]
    pub term_frequency: u32,
}

fn default_term_frequency() -> u32 {
    1
}

/// Where a stemmed term sits in the original field text.
///
/// Serialized as a compact `[term, start, end]` triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, u32, u32)", into = "(String, u32, u32)")]
pub struct TermPosition {
    pub term: String,
    pub start: u32,
    pub end: u32,
}

impl From<(String, u32, u32)> for TermPosition {
    fn from((term, start, end): (String, u32, u32)) -> Self {
        TermPosition { term, start, end }
    }
}

impl From<TermPosition> for (String, u32, u32) {
    fn from(p: TermPosition) -> Self {
        (p.term, p.start, p.end)
    }
}

/// Ordered `(stemmedTerm, start, end)` entries for one document field.
///
/// This is the bridge between normalized index terms and literal text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionMetadata(pub Vec<TermPosition>);

impl PositionMetadata {
    pub fn new(entries: Vec<TermPosition>) -> Self {
        PositionMetadata(entries)
    }

    pub fn entries(&self) -> &[TermPosition] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A half-open `[start, end)` code-point range in some field text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchRange {
    pub start: usize,
    pub end: usize,
}

impl MatchRange {
    pub fn new(start: usize, end: usize) -> Self {
        MatchRange { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// True when `offset` falls strictly inside the range, so cutting there
    /// would split it.
    #[inline]
    pub fn bisected_by(&self, offset: usize) -> bool {
        self.start < offset && offset < self.end
    }
}

/// Which indexes a search covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "name")]
pub enum ContextSelection {
    /// Every context-scoped index plus the global set.
    #[default]
    Everywhere,
    /// One named context plus the global set.
    Scoped(String),
}

impl ContextSelection {
    /// Parse a CLI/host value: empty or `"everywhere"` selects everything.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "everywhere" => ContextSelection::Everywhere,
            name => ContextSelection::Scoped(name.to_string()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            ContextSelection::Everywhere => None,
            ContextSelection::Scoped(name) => Some(name),
        }
    }
}

/// A ranked search result.
///
/// `page` is the owning top-level document. It is `None` exactly when
/// `kind == FieldType::Title`, because a title result is its own page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub document: DocumentRecord,
    pub kind: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<DocumentRecord>,
    /// Query tokens that hit this record. Never empty.
    pub matched_tokens: BTreeSet<String>,
    /// Index terms the tokens matched (equal to a token, or extending it).
    pub matched_terms: BTreeSet<String>,
    pub metadata: PositionMetadata,
    pub score: f64,
}

impl SearchResult {
    /// The page this result belongs to: `page` for headings and content,
    /// the document itself for titles.
    pub fn owner(&self) -> &DocumentRecord {
        match self.kind {
            FieldType::Title => &self.document,
            FieldType::Heading | FieldType::Content => self.page.as_ref().unwrap_or(&self.document),
        }
    }

    /// Breadcrumb of the owning page, followed by the page title for heading
    /// and content results.
    pub fn display_path(&self) -> Vec<String> {
        let owner = self.owner();
        let mut path = owner.breadcrumb.clone();
        match self.kind {
            FieldType::Title => {}
            FieldType::Heading | FieldType::Content => path.push(owner.title.clone()),
        }
        path
    }

    /// Matched tokens as a flat list, for carrying highlighting across
    /// navigation.
    pub fn deep_link_tokens(&self) -> Vec<String> {
        self.matched_tokens.iter().cloned().collect()
    }

    /// Tokens and index terms together; everything the position mapper
    /// should look for.
    pub fn highlight_terms(&self) -> BTreeSet<String> {
        self.matched_tokens
            .iter()
            .chain(self.matched_terms.iter())
            .cloned()
            .collect()
    }

    /// Destination URL including the anchor, if any.
    pub fn target_url(&self) -> String {
        match &self.document.anchor {
            Some(anchor) if !anchor.is_empty() => format!("{}#{}", self.document.url, anchor),
            _ => self.document.url.clone(),
        }
    }
}
