// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Every field has a default, so `{}` is a valid config file and hosts only
//! spell out what they change.
//!
//! ```json
//! {
//!   "limit": 20,
//!   "excerptBudget": 80,
//!   "markers": { "open": "<b>", "close": "</b>" },
//!   "contextPaths": [{ "prefix": "/blog", "context": "blog" }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::deep_link::DEFAULT_HIGHLIGHT_PARAM;
use crate::highlight::{Markers, DEFAULT_EXCERPT_BUDGET};
use crate::search::DEFAULT_LIMIT;
use crate::types::ContextSelection;

/// Maps a URL path prefix to a search context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextPath {
    pub prefix: String,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    /// Maximum number of results per query.
    pub limit: usize,
    /// Characters of content shown around matches.
    pub excerpt_budget: usize,
    pub markers: Markers,
    /// Query parameter carrying tokens across a deep link.
    pub highlight_param: String,
    pub context_paths: Vec<ContextPath>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            limit: DEFAULT_LIMIT,
            excerpt_budget: DEFAULT_EXCERPT_BUDGET,
            markers: Markers::default(),
            highlight_param: DEFAULT_HIGHLIGHT_PARAM.to_string(),
            context_paths: Vec::new(),
        }
    }
}

impl SearchConfig {
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// The context a page at `pathname` belongs to.
    ///
    /// The longest configured prefix wins. Prefixes match whole path segments,
    /// so `/blog` covers `/blog` and `/blog/post` but not `/blogroll`.
    pub fn context_for_path(&self, pathname: &str) -> ContextSelection {
        self.context_paths
            .iter()
            .filter(|cp| path_has_prefix(pathname, &cp.prefix))
            .max_by_key(|cp| cp.prefix.len())
            .map(|cp| ContextSelection::Scoped(cp.context.clone()))
            .unwrap_or_default()
    }
}

fn path_has_prefix(pathname: &str, prefix: &str) -> bool {
    match pathname.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || prefix.ends_with('/') || rest.starts_with('/'),
        None => false,
    }
}
