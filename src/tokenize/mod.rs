// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query tokenization: raw text in, lowercase tokens out.
//!
//! Latin-style scripts split on anything that isn't a word character. Scripts
//! written without spaces (Han, kana, Thai and friends) can't be split that
//! way, so each such run is segmented against the bundle's dictionary with
//! maximal munch. Mixed input is handled run by run.
//!
//! No stemming happens here. The index was stemmed at build time by a
//! language-specific algorithm we don't have; guessing at it would produce
//! tokens that look plausible and match nothing. Tokens are matched against
//! stems as exact terms or prefixes, and anything else is a miss.

mod script;
mod segment;

pub use script::{fold_char, CharClass};
pub use segment::segment;

use crate::index::SegmentationDictionary;
use script::classify;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Split a query into tokens, preserving order and duplicates.
///
/// An empty result means "nothing to search for", which callers must keep
/// distinct from "searched and found nothing".
///
/// # Example
///
/// ```
/// use docsift::tokenize::tokenize;
///
/// assert_eq!(tokenize("Hello, World", None), vec!["hello", "world"]);
/// ```
pub fn tokenize(query: &str, dictionary: Option<&SegmentationDictionary>) -> Vec<String> {
    let chars = compose(query);
    let mut tokens = Vec::new();
    let mut run: Vec<char> = Vec::new();
    let mut run_class = CharClass::Separator;

    for c in chars {
        let class = classify(c);
        if class != run_class {
            flush(&run, run_class, dictionary, &mut tokens);
            run.clear();
            run_class = class;
        }
        if class != CharClass::Separator {
            run.push(fold_char(c));
        }
    }
    flush(&run, run_class, dictionary, &mut tokens);

    tokens
}

fn flush(
    run: &[char],
    class: CharClass,
    dictionary: Option<&SegmentationDictionary>,
    tokens: &mut Vec<String>,
) {
    if run.is_empty() {
        return;
    }
    match class {
        CharClass::Word => tokens.push(run.iter().collect()),
        CharClass::Unspaced => tokens.extend(segment(run, dictionary)),
        CharClass::Separator => {}
    }
}

#[cfg(feature = "unicode-normalization")]
fn compose(query: &str) -> Vec<char> {
    query.nfc().collect()
}

#[cfg(not(feature = "unicode-normalization"))]
fn compose(query: &str) -> Vec<char> {
    query.chars().collect()
}
