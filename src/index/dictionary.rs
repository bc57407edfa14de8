// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word list for segmenting scripts that don't put spaces between words.
//!
//! Shipped alongside the index by the site build (typically the words that
//! actually occur in the indexed Chinese/Japanese text). Serialized as a plain
//! JSON array of strings.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A set of known words plus the length (in chars) of the longest one, which
/// bounds how far maximal munch has to look ahead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SegmentationDictionary {
    words: HashSet<String>,
    longest: usize,
}

impl SegmentationDictionary {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dict = SegmentationDictionary::default();
        for word in words {
            dict.insert(word.into());
        }
        dict
    }

    fn insert(&mut self, word: String) {
        let len = word.chars().count();
        if len == 0 {
            return;
        }
        self.longest = self.longest.max(len);
        self.words.insert(word);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Length in chars of the longest entry (0 when empty).
    pub fn longest(&self) -> usize {
        self.longest
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<Vec<String>> for SegmentationDictionary {
    fn from(words: Vec<String>) -> Self {
        SegmentationDictionary::new(words)
    }
}

impl From<SegmentationDictionary> for Vec<String> {
    fn from(dict: SegmentationDictionary) -> Self {
        let mut words: Vec<String> = dict.words.into_iter().collect();
        words.sort();
        words
    }
}
