// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character classes for tokenization.
//!
//! Three buckets are enough: characters that form space-delimited words,
//! characters from scripts written without spaces, and everything else.

/// How the tokenizer treats a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Part of a space-delimited word (letters, digits, `_`, combining marks).
    Word,
    /// A script with no spaces between words; needs segmentation.
    Unspaced,
    /// Whitespace and punctuation.
    Separator,
}

pub(crate) fn classify(c: char) -> CharClass {
    if is_script_punctuation(c) {
        CharClass::Separator
    } else if is_unspaced(c) {
        CharClass::Unspaced
    } else if c.is_alphanumeric() || c == '_' || is_combining_mark(c) {
        CharClass::Word
    } else {
        CharClass::Separator
    }
}

/// Punctuation that sits inside the script blocks matched below.
fn is_script_punctuation(c: char) -> bool {
    matches!(c,
        '\u{0964}' | '\u{0965}' |     // । ॥ danda, double danda
        '\u{0E5A}' | '\u{0E5B}' |     // Thai angkhankhu, khomut
        '\u{104A}' | '\u{104B}' |     // Myanmar section marks
        '\u{17D4}'..='\u{17D6}' |     // Khmer khan, bariyoosan, camnuc pii kuuh
        '\u{30A0}' |                  // ゠ katakana-hiragana double hyphen
        '\u{30FB}'                    // ・ katakana middle dot
    )
}

/// Han, kana, and the Southeast Asian scripts that don't separate words.
fn is_unspaced(c: char) -> bool {
    matches!(c,
        '\u{3005}' |                  // 々 ideographic iteration mark
        '\u{3040}'..='\u{30FF}' |     // Hiragana, Katakana
        '\u{31F0}'..='\u{31FF}' |     // Katakana phonetic extensions
        '\u{3400}'..='\u{4DBF}' |     // CJK Extension A
        '\u{4E00}'..='\u{9FFF}' |     // CJK Unified Ideographs
        '\u{F900}'..='\u{FAFF}' |     // CJK Compatibility Ideographs
        '\u{FF66}'..='\u{FF9F}' |     // Halfwidth Katakana
        '\u{20000}'..='\u{2EBEF}' |   // CJK Extensions B-F
        '\u{0E00}'..='\u{0E7F}' |     // Thai
        '\u{0E80}'..='\u{0EFF}' |     // Lao
        '\u{1000}'..='\u{109F}' |     // Myanmar
        '\u{1780}'..='\u{17FF}'       // Khmer
    )
}

/// Marks that attach to the preceding letter and must not split a word.
///
/// Indic vowel signs and viramas are marks, not letters, so without this a
/// Devanagari or Telugu word would shatter into pieces.
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{0900}'..='\u{0DFF}' |  // Indic scripts (Devanagari through Sinhala)
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Lowercase one character without changing the character count.
///
/// `char::to_lowercase` can expand (`İ` becomes `i̇`), which would shift
/// every code-point offset after it. Characters whose lowercase form isn't a
/// single char are left as they are; highlighting depends on the text and
/// its folded form lining up one-to-one.
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
