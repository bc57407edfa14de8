// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! `BundleError` is a structural problem with index data: something the build
//! step produced that cannot be searched safely. `LoadError` wraps everything
//! that can go wrong acquiring a bundle. Both are `Clone` because a single
//! failed load is handed to every caller that was waiting on it.

use std::path::PathBuf;
use thiserror::Error;

/// Invariant violations found while constructing an index bundle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BundleError {
    /// A posting points at a document the index does not carry.
    #[error("{field} index: term '{term}' posts to unknown document {doc_id}")]
    UnknownPostingDocument {
        field: &'static str,
        term: String,
        doc_id: u32,
    },
    /// Two documents in one index share an id.
    #[error("{field} index: duplicate document id {doc_id}")]
    DuplicateDocument { field: &'static str, doc_id: u32 },
    /// Position metadata keyed by a document the index does not carry.
    #[error("{field} index: positions recorded for unknown document {doc_id}")]
    UnknownPositionDocument { field: &'static str, doc_id: u32 },
    /// A position entry that ends before it starts.
    #[error("{field} index: document {doc_id} has inverted position {start}..{end} for '{term}'")]
    InvertedPosition {
        field: &'static str,
        doc_id: u32,
        term: String,
        start: u32,
        end: u32,
    },
}

/// Failure to acquire an index bundle.
///
/// No partially decoded bundle is ever returned alongside one of these.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {message}")]
    Io { path: PathBuf, message: String },
    #[error("no index bundle found at {0}")]
    NotFound(PathBuf),
    #[error("failed to decompress {path}: {message}")]
    Decompress { path: PathBuf, message: String },
    #[error("malformed index bundle: {0}")]
    Parse(String),
    #[error("invalid index bundle: {0}")]
    Invalid(#[from] BundleError),
    /// Raised by host-provided loaders (network, JS fetch, ...).
    #[error("transport error: {0}")]
    Transport(String),
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        LoadError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}
