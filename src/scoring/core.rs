// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind raw hit scores.
//!
//! A raw score is `field weight × Σ (term frequency × match quality)` over
//! every (query token, index term) pair that hit the document. Exact term
//! matches count fully; prefix matches (the reader is still typing) count
//! half.
//!
//! # Constants
//!
//! | Field   | Weight |
//! |---------|--------|
//! | Title   | 100.0  |
//! | Heading | 10.0   |
//! | Content | 1.0    |
//!
//! Ranking sorts by field first, so the weights never have to outvote term
//! frequency on their own. They still keep raw scores comparable when the
//! same document shows up in more than one field.

use crate::types::FieldType;

/// Weight for Title field hits.
pub const TITLE_WEIGHT: f64 = 100.0;

/// Weight for Heading field hits.
pub const HEADING_WEIGHT: f64 = 10.0;

/// Weight for Content field hits.
pub const CONTENT_WEIGHT: f64 = 1.0;

/// Match quality when the index term equals the query token.
pub const EXACT_MATCH_QUALITY: f64 = 1.0;

/// Match quality when the index term merely starts with the query token.
pub const PREFIX_MATCH_QUALITY: f64 = 0.5;

/// Fixed weight by field type: Title (100) > Heading (10) > Content (1).
pub fn field_weight(field: FieldType) -> f64 {
    match field {
        FieldType::Title => TITLE_WEIGHT,
        FieldType::Heading => HEADING_WEIGHT,
        FieldType::Content => CONTENT_WEIGHT,
    }
}

/// Quality of one token → term match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Prefix,
}

impl MatchKind {
    pub fn classify(token: &str, term: &str) -> Self {
        if token == term {
            MatchKind::Exact
        } else {
            MatchKind::Prefix
        }
    }

    pub fn quality(self) -> f64 {
        match self {
            MatchKind::Exact => EXACT_MATCH_QUALITY,
            MatchKind::Prefix => PREFIX_MATCH_QUALITY,
        }
    }
}

/// Contribution of one (token, term, posting) triple to a document's score,
/// before the field weight is applied.
#[inline]
pub fn term_contribution(term_frequency: u32, kind: MatchKind) -> f64 {
    f64::from(term_frequency.max(1)) * kind.quality()
}
