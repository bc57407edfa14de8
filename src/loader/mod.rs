// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bundle acquisition.
//!
//! A `BundleLoader` fetches and decodes one bundle; the host decides how
//! (filesystem, HTTP, a JS `fetch`). `BundleCache` sits in front of a loader
//! and makes acquisition idempotent: concurrent requests for the same key
//! share one load, and a refresh never drops the bundle readers already hold.

mod cache;
mod fs;

pub use cache::BundleCache;
pub use fs::FsLoader;

use futures::future::BoxFuture;

use crate::error::LoadError;
use crate::index::IndexBundle;
use crate::types::ContextSelection;

/// Which bundle to load: one documentation version, one context selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BundleKey {
    pub version: String,
    pub context: ContextSelection,
}

impl BundleKey {
    pub fn new(version: impl Into<String>, context: ContextSelection) -> Self {
        BundleKey {
            version: version.into(),
            context,
        }
    }

    /// Artifact file stem: `search-index` or `search-index-<context>`.
    pub fn file_stem(&self) -> String {
        match self.context.name() {
            None => "search-index".to_string(),
            Some(name) => format!("search-index-{}", name),
        }
    }
}

/// Loads one bundle.
///
/// Returned futures must be lazy: no work before the first poll. The cache
/// calls `load` while holding its lock and relies on that.
pub trait BundleLoader: Send + Sync + 'static {
    fn load(&self, key: &BundleKey) -> BoxFuture<'static, Result<IndexBundle, LoadError>>;
}

impl<F> BundleLoader for F
where
    F: Fn(&BundleKey) -> BoxFuture<'static, Result<IndexBundle, LoadError>> + Send + Sync + 'static,
{
    fn load(&self, key: &BundleKey) -> BoxFuture<'static, Result<IndexBundle, LoadError>> {
        self(key)
    }
}
