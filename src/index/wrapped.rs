// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One inverted index over one field type.
//!
//! Terms live in a `BTreeMap`, so a prefix lookup is a range scan starting at
//! the prefix and stopping at the first term that no longer starts with it.
//! Same idea as binary-searching a sorted vocabulary, minus the bookkeeping.
//!
//! # Wire Format
//!
//! ```text
//! {
//!   "field": "title" | "heading" | "content",
//!   "documents": [DocumentRecord, ...],
//!   "terms": { "<stemmed term>": [{ "docId": u32, "tf": u32 }, ...], ... },
//!   "positions": { "<docId>": [["<stemmed term>", start, end], ...], ... }
//! }
//! ```
//!
//! Decoding goes through `WrappedIndex::new`, so a malformed index never
//! makes it into a bundle.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;

use crate::error::BundleError;
use crate::types::{DocumentRecord, FieldType, PositionMetadata, Posting};

/// An inverted index over one field (`title`, `heading` or `content`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "WrappedIndexWire", into = "WrappedIndexWire")]
pub struct WrappedIndex {
    field: FieldType,
    documents: Vec<DocumentRecord>,
    /// doc id → position in `documents`
    slots: HashMap<u32, usize>,
    terms: BTreeMap<String, Vec<Posting>>,
    positions: HashMap<u32, PositionMetadata>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WrappedIndexWire {
    field: FieldType,
    #[serde(default)]
    documents: Vec<DocumentRecord>,
    #[serde(default)]
    terms: BTreeMap<String, Vec<Posting>>,
    #[serde(default)]
    positions: BTreeMap<u32, PositionMetadata>,
}

impl TryFrom<WrappedIndexWire> for WrappedIndex {
    type Error = BundleError;

    fn try_from(wire: WrappedIndexWire) -> Result<Self, Self::Error> {
        WrappedIndex::new(
            wire.field,
            wire.documents,
            wire.terms,
            wire.positions.into_iter().collect(),
        )
    }
}

impl From<WrappedIndex> for WrappedIndexWire {
    fn from(index: WrappedIndex) -> Self {
        WrappedIndexWire {
            field: index.field,
            documents: index.documents,
            terms: index.terms,
            positions: index.positions.into_iter().collect(),
        }
    }
}

impl WrappedIndex {
    /// Build and validate an index.
    ///
    /// Rejects duplicate document ids, postings or positions that point at
    /// unknown documents, and position entries that end before they start.
    /// Positions that run past the end of the text are NOT rejected here:
    /// that is stale metadata, and the position mapper skips it per entry.
    pub fn new(
        field: FieldType,
        documents: Vec<DocumentRecord>,
        terms: BTreeMap<String, Vec<Posting>>,
        positions: HashMap<u32, PositionMetadata>,
    ) -> Result<Self, BundleError> {
        let name = field.as_str();

        let mut slots = HashMap::with_capacity(documents.len());
        for (slot, doc) in documents.iter().enumerate() {
            if slots.insert(doc.id, slot).is_some() {
                return Err(BundleError::DuplicateDocument {
                    field: name,
                    doc_id: doc.id,
                });
            }
        }

        for (term, postings) in &terms {
            if let Some(bad) = postings.iter().find(|p| !slots.contains_key(&p.doc_id)) {
                return Err(BundleError::UnknownPostingDocument {
                    field: name,
                    term: term.clone(),
                    doc_id: bad.doc_id,
                });
            }
        }

        for (doc_id, meta) in &positions {
            if !slots.contains_key(doc_id) {
                return Err(BundleError::UnknownPositionDocument {
                    field: name,
                    doc_id: *doc_id,
                });
            }
            if let Some(bad) = meta.entries().iter().find(|p| p.start > p.end) {
                return Err(BundleError::InvertedPosition {
                    field: name,
                    doc_id: *doc_id,
                    term: bad.term.clone(),
                    start: bad.start,
                    end: bad.end,
                });
            }
        }

        Ok(WrappedIndex {
            field,
            documents,
            slots,
            terms,
            positions,
        })
    }

    pub fn field(&self) -> FieldType {
        self.field
    }

    pub fn documents(&self) -> &[DocumentRecord] {
        &self.documents
    }

    pub fn document(&self, id: u32) -> Option<&DocumentRecord> {
        self.slots.get(&id).map(|&slot| &self.documents[slot])
    }

    /// Position metadata for a document, if the build recorded any.
    pub fn positions(&self, id: u32) -> Option<&PositionMetadata> {
        self.positions.get(&id)
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Postings for exactly this term.
    pub fn exact(&self, term: &str) -> Option<&[Posting]> {
        self.terms.get(term).map(Vec::as_slice)
    }

    /// Every term starting with `prefix` (including `prefix` itself), in
    /// lexicographic order.
    pub fn prefixed<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a [Posting])> + 'a {
        self.terms
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(term, _)| term.starts_with(prefix))
            .map(|(term, postings)| (term.as_str(), postings.as_slice()))
    }
}
