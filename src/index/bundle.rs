// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Every index for one (version, context), decoded and validated as a unit.
//!
//! A bundle is immutable once built. When the reader navigates to another
//! version or context, the caller swaps in a different bundle; nothing here
//! ever mutates a bundle that someone else may be reading.
//!
//! # Wire Format
//!
//! ```text
//! {
//!   "contexts": { "<context>": [WrappedIndex, ...], ... },
//!   "global": [WrappedIndex, ...],          // always searched, may be absent
//!   "dictionary": ["北京", "大学", ...]     // optional
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::dictionary::SegmentationDictionary;
use super::wrapped::WrappedIndex;
use crate::error::LoadError;
use crate::types::{ContextSelection, DocumentRecord, FieldType};

/// The complete set of field-partitioned indexes for one (version, context).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexBundle {
    #[serde(default)]
    contexts: BTreeMap<String, Vec<WrappedIndex>>,
    #[serde(default)]
    global: Vec<WrappedIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dictionary: Option<SegmentationDictionary>,
    /// CRC32 of the bytes this bundle was decoded from; 0 if built in memory.
    #[serde(skip)]
    fingerprint: u32,
}

/// An index together with the context it was published under.
#[derive(Debug, Clone, Copy)]
pub struct ScopedIndex<'a> {
    /// `None` for the global set.
    pub context: Option<&'a str>,
    pub index: &'a WrappedIndex,
}

/// The indexes a single search evaluates, in encounter order.
#[derive(Debug, Clone)]
pub struct IndexScope<'a> {
    indexes: Vec<ScopedIndex<'a>>,
}

impl<'a> IndexScope<'a> {
    pub fn indexes(&self) -> &[ScopedIndex<'a>] {
        &self.indexes
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    /// Find the top-level page `id` for a heading or content hit.
    ///
    /// A context hit resolves against its own context, then the global set;
    /// never another named context, since ids are only unique per context.
    /// A global hit resolves against the global set, then against a context
    /// only when exactly one context in scope has that page.
    pub fn page(&self, context: Option<&str>, id: u32) -> Option<&'a DocumentRecord> {
        let in_context = |wanted: Option<&str>| {
            self.indexes
                .iter()
                .filter(|s| s.index.field() == FieldType::Title && s.context == wanted)
                .find_map(|s| s.index.document(id))
        };
        if let Some(page) = in_context(context) {
            return Some(page);
        }
        if context.is_some() {
            return in_context(None);
        }

        let mut owners = self
            .indexes
            .iter()
            .filter(|s| s.index.field() == FieldType::Title)
            .filter_map(|s| Some((s.context?, s.index.document(id)?)));
        let (owner_context, page) = owners.next()?;
        if owners.any(|(other, _)| other != owner_context) {
            debug!(id, "global hit's page exists in several contexts");
            return None;
        }
        Some(page)
    }
}

/// Per-index counts for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleStats {
    pub context: Option<String>,
    pub field: FieldType,
    pub documents: usize,
    pub terms: usize,
}

impl IndexBundle {
    /// An empty bundle. Searching it returns nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the indexes for one named context.
    pub fn with_context(mut self, name: impl Into<String>, indexes: Vec<WrappedIndex>) -> Self {
        self.contexts.entry(name.into()).or_default().extend(indexes);
        self
    }

    /// Add indexes that every search includes, whatever the context.
    pub fn with_global(mut self, indexes: Vec<WrappedIndex>) -> Self {
        self.global.extend(indexes);
        self
    }

    pub fn with_dictionary(mut self, dictionary: SegmentationDictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Decode a bundle from its JSON wire form.
    ///
    /// The bundle's fingerprint is the CRC32 of `bytes`, so two loads of the
    /// same artifact compare equal without walking the indexes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, LoadError> {
        let mut bundle: IndexBundle = serde_json::from_slice(bytes)?;
        bundle.fingerprint = crc32fast::hash(bytes);
        Ok(bundle)
    }

    pub fn dictionary(&self) -> Option<&SegmentationDictionary> {
        self.dictionary.as_ref()
    }

    pub fn fingerprint(&self) -> u32 {
        self.fingerprint
    }

    /// Names of the context-scoped index sets, sorted.
    pub fn context_names(&self) -> impl Iterator<Item = &str> {
        self.contexts.keys().map(String::as_str)
    }

    fn all_indexes(&self) -> impl Iterator<Item = (Option<&str>, &[WrappedIndex])> {
        self.contexts
            .iter()
            .map(|(name, indexes)| (Some(name.as_str()), indexes.as_slice()))
            .chain(std::iter::once((None, self.global.as_slice())))
    }

    /// Resolve which indexes a search covers.
    ///
    /// `Everywhere` unions every context plus the global set. A named context
    /// gets that context plus the global set; an unknown name gets only the
    /// global set.
    pub fn scope(&self, selection: &ContextSelection) -> IndexScope<'_> {
        let mut indexes = Vec::new();
        match selection {
            ContextSelection::Everywhere => {
                for (name, set) in &self.contexts {
                    indexes.extend(set.iter().map(|index| ScopedIndex {
                        context: Some(name.as_str()),
                        index,
                    }));
                }
            }
            ContextSelection::Scoped(name) => match self.contexts.get_key_value(name) {
                Some((name, set)) => {
                    indexes.extend(set.iter().map(|index| ScopedIndex {
                        context: Some(name.as_str()),
                        index,
                    }));
                }
                None => debug!(context = %name, "unknown search context, using global indexes only"),
            },
        }
        indexes.extend(self.global.iter().map(|index| ScopedIndex {
            context: None,
            index,
        }));
        IndexScope { indexes }
    }

    /// Document and term counts for every index.
    pub fn stats(&self) -> Vec<BundleStats> {
        self.all_indexes()
            .flat_map(|(context, indexes)| {
                indexes.iter().map(move |index| BundleStats {
                    context: context.map(str::to_string),
                    field: index.field(),
                    documents: index.documents().len(),
                    terms: index.term_count(),
                })
            })
            .collect()
    }
}
