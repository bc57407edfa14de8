// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The host-facing search surface.
//!
//! A `SearchSession` pairs one loaded bundle with a config and a context
//! selection. Hosts typing into a search box call `begin()` for every
//! keystroke, run the query (possibly after an async bundle load), and
//! `commit()` the results: only the newest ticket commits, so a slow query
//! can never overwrite a faster, later one.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use docsift::{IndexBundle, SearchConfig, SearchSession};
//!
//! let session = SearchSession::new(Arc::new(IndexBundle::new()), SearchConfig::default());
//! let ticket = session.begin();
//! let outcome = session.search("cache");
//! assert!(session.commit(ticket, outcome).is_some());
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::SearchConfig;
use crate::deep_link::with_highlight_params;
use crate::highlight::{self, Excerpt};
use crate::index::IndexBundle;
use crate::search::{self, SearchOutcome};
use crate::types::{ContextSelection, SearchResult};

/// Identifies one query in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryTicket(u64);

/// Issues tickets; only the most recently issued one is current.
#[derive(Debug, Default)]
pub struct QueryClock {
    latest: AtomicU64,
}

impl QueryClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> QueryTicket {
        QueryTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_current(&self, ticket: QueryTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }
}

#[derive(Debug)]
pub struct SearchSession {
    bundle: Arc<IndexBundle>,
    config: SearchConfig,
    context: ContextSelection,
    clock: QueryClock,
}

impl SearchSession {
    /// A session searching everywhere.
    pub fn new(bundle: Arc<IndexBundle>, config: SearchConfig) -> Self {
        SearchSession {
            bundle,
            config,
            context: ContextSelection::Everywhere,
            clock: QueryClock::new(),
        }
    }

    /// A session scoped to whatever context `pathname` belongs to.
    pub fn for_path(bundle: Arc<IndexBundle>, config: SearchConfig, pathname: &str) -> Self {
        let context = config.context_for_path(pathname);
        Self::new(bundle, config).with_context(context)
    }

    pub fn with_context(mut self, context: ContextSelection) -> Self {
        self.context = context;
        self
    }

    pub fn set_context(&mut self, context: ContextSelection) {
        self.context = context;
    }

    pub fn context(&self) -> &ContextSelection {
        &self.context
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn bundle(&self) -> &Arc<IndexBundle> {
        &self.bundle
    }

    /// Swap in a newly loaded bundle. Results already handed out keep their
    /// own copies and stay valid.
    pub fn replace_bundle(&mut self, bundle: Arc<IndexBundle>) {
        self.bundle = bundle;
    }

    pub fn search(&self, query: &str) -> SearchOutcome {
        search::search(&self.bundle, query, &self.context, self.config.limit)
    }

    /// Start a new query, superseding every earlier ticket.
    pub fn begin(&self) -> QueryTicket {
        self.clock.issue()
    }

    /// `Some(value)` if `ticket` is still the newest query, `None` if a later
    /// one has started.
    pub fn commit<T>(&self, ticket: QueryTicket, value: T) -> Option<T> {
        self.clock.is_current(ticket).then_some(value)
    }

    pub fn excerpt(&self, result: &SearchResult) -> Excerpt {
        highlight::excerpt_for(result, self.config.excerpt_budget)
    }

    pub fn render_excerpt(&self, result: &SearchResult) -> String {
        highlight::render_excerpt(result, self.config.excerpt_budget, &self.config.markers)
    }

    pub fn render_title(&self, result: &SearchResult) -> String {
        highlight::render_title(result, &self.config.markers)
    }

    /// Result URL carrying the matched tokens for destination highlighting.
    pub fn deep_link(&self, result: &SearchResult) -> String {
        with_highlight_params(
            &result.document.url,
            result.document.anchor.as_deref(),
            result.deep_link_tokens(),
            &self.config.highlight_param,
        )
    }
}
