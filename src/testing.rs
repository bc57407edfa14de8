// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::collections::{BTreeMap, HashMap};

use crate::index::WrappedIndex;
use crate::types::{DocumentRecord, FieldType, PositionMetadata, Posting, TermPosition};

/// Create a page record with default fields.
pub fn make_doc(id: u32, title: &str) -> DocumentRecord {
    DocumentRecord {
        id,
        title: title.to_string(),
        url: format!("/docs/{}", id),
        anchor: None,
        breadcrumb: Vec::new(),
        section_title: None,
        parent: None,
    }
}

/// Create a heading or content record owned by page `parent`.
pub fn make_child(id: u32, parent: u32, text: &str) -> DocumentRecord {
    DocumentRecord {
        id,
        title: text.to_string(),
        url: format!("/docs/{}", parent),
        anchor: Some(format!("section-{}", id)),
        breadcrumb: Vec::new(),
        section_title: None,
        parent: Some(parent),
    }
}

/// Builds a `WrappedIndex` the way a site build would, minus the stemmer.
///
/// `document`/`page`/`child` index every word of the record text verbatim
/// (lowercased, split on non-alphanumerics). `stem` records an extra term at
/// explicit code-point offsets, for tests that need stems differing from
/// the literal text or segmented CJK words.
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    field: FieldType,
    documents: Vec<DocumentRecord>,
    terms: BTreeMap<String, Vec<Posting>>,
    positions: HashMap<u32, Vec<TermPosition>>,
}

impl IndexBuilder {
    pub fn new(field: FieldType) -> Self {
        IndexBuilder {
            field,
            documents: Vec::new(),
            terms: BTreeMap::new(),
            positions: HashMap::new(),
        }
    }

    /// Add a top-level page and index its title words.
    pub fn page(self, id: u32, title: &str, url: &str) -> Self {
        let mut doc = make_doc(id, title);
        doc.url = url.to_string();
        self.document(doc)
    }

    /// Add a heading/content record for page `parent` and index its words.
    pub fn child(self, id: u32, parent: u32, text: &str) -> Self {
        self.document(make_child(id, parent, text))
    }

    /// Add an arbitrary record and index its words.
    pub fn document(mut self, doc: DocumentRecord) -> Self {
        let id = doc.id;
        let words = split_words(&doc.title);
        self.documents.push(doc);
        for (word, start, end) in words {
            self.record(id, word, start, end);
        }
        self
    }

    /// Add a record without indexing anything.
    pub fn unindexed(mut self, doc: DocumentRecord) -> Self {
        self.documents.push(doc);
        self
    }

    /// Record `term` for document `id` at `[start, end)`.
    pub fn stem(mut self, id: u32, term: &str, start: u32, end: u32) -> Self {
        self.record(id, term.to_string(), start, end);
        self
    }

    /// Record `term` as a posting only, with no position metadata.
    pub fn posting(mut self, id: u32, term: &str) -> Self {
        bump(self.terms.entry(term.to_string()).or_default(), id);
        self
    }

    fn record(&mut self, id: u32, term: String, start: u32, end: u32) {
        bump(self.terms.entry(term.clone()).or_default(), id);
        self.positions
            .entry(id)
            .or_default()
            .push(TermPosition { term, start, end });
    }

    pub fn build(self) -> WrappedIndex {
        let positions = self
            .positions
            .into_iter()
            .map(|(id, mut entries)| {
                entries.sort_by_key(|p| (p.start, p.end));
                (id, PositionMetadata::new(entries))
            })
            .collect();
        WrappedIndex::new(self.field, self.documents, self.terms, positions)
            .expect("IndexBuilder produced an invalid index")
    }
}

fn bump(postings: &mut Vec<Posting>, doc_id: u32) {
    match postings.iter_mut().find(|p| p.doc_id == doc_id) {
        Some(p) => p.term_frequency += 1,
        None => postings.push(Posting {
            doc_id,
            term_frequency: 1,
        }),
    }
}

/// Lowercased alphanumeric runs with their code-point offsets.
pub fn split_words(text: &str) -> Vec<(String, u32, u32)> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut start = 0u32;
    let mut pos = 0u32;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if current.is_empty() {
                start = pos;
            }
            current.extend(c.to_lowercase());
        } else if !current.is_empty() {
            words.push((std::mem::take(&mut current), start, pos));
        }
        pos += 1;
    }
    if !current.is_empty() {
        words.push((current, start, pos));
    }
    words
}
