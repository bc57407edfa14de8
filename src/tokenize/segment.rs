// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Maximal munch segmentation.
//!
//! At each position take the longest dictionary word that starts there; if
//! none does, emit the single character and move on. Greedy, so "北京大学"
//! with both "北京大学" and "北京" in the dictionary yields one token, not two.

use crate::index::SegmentationDictionary;

/// Segment a run of unspaced-script characters.
///
/// Without a dictionary (or with an empty one) every character becomes its
/// own token.
pub fn segment(run: &[char], dictionary: Option<&SegmentationDictionary>) -> Vec<String> {
    let dictionary = match dictionary {
        Some(d) if !d.is_empty() => d,
        _ => return run.iter().map(char::to_string).collect(),
    };

    let mut tokens = Vec::new();
    let mut candidate = String::new();
    let mut i = 0;

    while i < run.len() {
        let longest = dictionary.longest().min(run.len() - i);
        let mut taken = 1;
        for len in (2..=longest).rev() {
            candidate.clear();
            candidate.extend(&run[i..i + len]);
            if dictionary.contains(&candidate) {
                taken = len;
                break;
            }
        }
        tokens.push(run[i..i + taken].iter().collect());
        i += taken;
    }

    tokens
}
