// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Carry matched tokens to the destination page.
//!
//! A result link gets one `?_highlight=<token>` parameter per matched token,
//! placed before the `#anchor`. The destination page reads them back with
//! `tokens_from_query` and highlights its own text in exact mode.

use std::borrow::Cow;

/// Query parameter name used when the config does not override it.
pub const DEFAULT_HIGHLIGHT_PARAM: &str = "_highlight";

/// `url` plus one `param=<token>` pair per token, then `#anchor`.
///
/// Existing query strings on `url` are kept. Tokens are percent-encoded.
///
/// ```
/// use docsift::deep_link::with_highlight_params;
///
/// let link = with_highlight_params("/docs/cache", Some("eviction"), ["lru", "cache"], "_highlight");
/// assert_eq!(link, "/docs/cache?_highlight=lru&_highlight=cache#eviction");
/// ```
pub fn with_highlight_params<I, S>(url: &str, anchor: Option<&str>, tokens: I, param: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (base, fragment) = match url.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (url, None),
    };

    let mut link = base.to_string();
    let mut separator = if base.contains('?') { '&' } else { '?' };
    let name = urlencoding::encode(param);
    for token in tokens {
        let token = token.as_ref();
        if token.is_empty() {
            continue;
        }
        link.push(separator);
        link.push_str(&name);
        link.push('=');
        link.push_str(&urlencoding::encode(token));
        separator = '&';
    }

    if let Some(anchor) = anchor.filter(|a| !a.is_empty()).or(fragment) {
        link.push('#');
        link.push_str(anchor);
    }
    link
}

/// Recover tokens from a query string (with or without the leading `?`).
///
/// Values that fail to decode are skipped.
pub fn tokens_from_query(query: &str, param: &str) -> Vec<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let query = query.split_once('#').map_or(query, |(q, _)| q);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .filter(|(name, _)| decode(name).as_deref() == Some(param))
        .filter_map(|(_, value)| decode(value))
        .filter(|value| !value.is_empty())
        .map(Cow::into_owned)
        .collect()
}

fn decode(value: &str) -> Option<Cow<'_, str>> {
    if value.contains('+') {
        let spaced = value.replace('+', " ");
        urlencoding::decode(&spaced)
            .ok()
            .map(|v| Cow::Owned(v.into_owned()))
    } else {
        urlencoding::decode(value).ok()
    }
}
