// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client-side search and highlighting for documentation sites.
//!
//! The site build produces field-partitioned inverted indexes (titles,
//! headings, content) along with position metadata that maps every stemmed
//! term back to its span in the original text. This crate takes those indexes
//! and a reader's query, and returns ranked results with highlighted excerpts
//! drawn from the literal text. That includes scripts with no spaces between
//! words.
//!
//! # Architecture
//!
//! ```text
//! query ──▶ tokenize ──▶ search::searcher ──▶ search::dedup ──▶ Vec<SearchResult>
//!              │               │                    │
//!          dictionary      IndexBundle          scoring::ranking
//!                              ▲
//!                     loader::BundleCache
//!
//! SearchResult ──▶ highlight::positions ──▶ highlight::{exact, window} ──▶ markup
//! ```
//!
//! # Module Map
//!
//! | Module      | Role                                                   |
//! |-------------|--------------------------------------------------------|
//! | `types`     | Records, postings, position metadata, results          |
//! | `index`     | `WrappedIndex`, `IndexBundle`, segmentation dictionary |
//! | `tokenize`  | Query text to tokens, run-by-run across scripts        |
//! | `search`    | Multi-index evaluation, dedup, truncation              |
//! | `scoring`   | Field weights, match quality, result ordering          |
//! | `highlight` | Position mapping, exact and windowed excerpts          |
//! | `loader`    | Async bundle loading and caching                       |
//! | `session`   | Host-facing surface and query supersession             |
//! | `contracts` | Debug-build invariant checks                           |
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use docsift::testing::IndexBuilder;
//! use docsift::{FieldType, IndexBundle, SearchConfig, SearchSession};
//!
//! let titles = IndexBuilder::new(FieldType::Title)
//!     .page(1, "Hello World", "/docs/hello")
//!     .build();
//! let bundle = IndexBundle::new().with_global(vec![titles]);
//! let session = SearchSession::new(Arc::new(bundle), SearchConfig::default());
//!
//! let outcome = session.search("hello world");
//! let top = &outcome.results()[0];
//! assert_eq!(session.render_title(top), "<mark>Hello</mark> <mark>World</mark>");
//! ```

pub mod config;
pub mod contracts;
pub mod deep_link;
pub mod error;
pub mod highlight;
pub mod index;
pub mod loader;
pub mod scoring;
pub mod search;
pub mod session;
pub mod testing;
pub mod tokenize;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{ContextPath, SearchConfig};
pub use error::{BundleError, LoadError};
pub use highlight::{Excerpt, Markers, Segment};
pub use index::{IndexBundle, SegmentationDictionary, WrappedIndex};
pub use loader::{BundleCache, BundleKey, BundleLoader, FsLoader};
pub use search::{search, SearchOutcome};
pub use session::{QueryClock, QueryTicket, SearchSession};
pub use tokenize::tokenize;
pub use types::{
    ContextSelection, DocumentRecord, FieldType, MatchRange, PositionMetadata, Posting,
    SearchResult, TermPosition,
};
