// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The searchable side of the world: field-partitioned inverted indexes.
//!
//! A bundle holds one `WrappedIndex` per (context, field). Indexes arrive
//! prebuilt from the site build; this module only decodes and validates them,
//! then answers exact and prefix term lookups.
//!
//! - **wrapped**: one inverted index over one field type
//! - **bundle**: every index for one (version, context), plus the dictionary
//! - **dictionary**: word list for segmenting scripts without spaces

mod bundle;
mod dictionary;
mod wrapped;

pub use bundle::{BundleStats, IndexBundle, IndexScope, ScopedIndex};
pub use dictionary::SegmentationDictionary;
pub use wrapped::WrappedIndex;
