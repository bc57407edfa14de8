// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings.
//!
//! `DocSearch` wraps a `SearchSession` over a JSON bundle the page has
//! already fetched. The last result list is kept so the widget can ask for
//! excerpts and titles by index as rows scroll into view, without shipping
//! the position metadata to JavaScript.

use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use std::sync::Arc;
use wasm_bindgen::prelude::*;

use crate::config::SearchConfig;
use crate::index::IndexBundle;
use crate::session::SearchSession;
use crate::types::{ContextSelection, SearchResult};

/// One result row for TypeScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultRow {
    id: u32,
    kind: &'static str,
    url: String,
    title: String,
    path: Vec<String>,
    tokens: Vec<String>,
    score: f64,
}

impl From<&SearchResult> for ResultRow {
    fn from(result: &SearchResult) -> Self {
        ResultRow {
            id: result.document.id,
            kind: result.kind.as_str(),
            url: result.target_url(),
            title: result.document.title.clone(),
            path: result.display_path(),
            tokens: result.deep_link_tokens(),
            score: result.score,
        }
    }
}

#[wasm_bindgen]
pub struct DocSearch {
    session: SearchSession,
    last: Vec<SearchResult>,
}

#[wasm_bindgen]
impl DocSearch {
    /// Decode `bundle_json` and scope searches to `context` (empty or
    /// `"everywhere"` for all). `config` is an optional `SearchConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(bundle_json: &[u8], context: &str, config: JsValue) -> Result<DocSearch, JsValue> {
        let bundle = IndexBundle::from_json_slice(bundle_json).map_err(|e| e.to_string())?;
        let config: SearchConfig = if config.is_undefined() || config.is_null() {
            SearchConfig::default()
        } else {
            from_value(config).map_err(|e| e.to_string())?
        };
        let session = SearchSession::new(Arc::new(bundle), config)
            .with_context(ContextSelection::parse(context));
        Ok(DocSearch {
            session,
            last: Vec::new(),
        })
    }

    /// Run a query. Returns `null` when the query has no tokens, otherwise an
    /// array of result rows.
    #[wasm_bindgen]
    pub fn search(&mut self, query: &str) -> Result<JsValue, JsValue> {
        let outcome = self.session.search(query);
        if outcome.is_idle() {
            self.last.clear();
            return Ok(JsValue::NULL);
        }
        self.last = outcome.into_results();
        let rows: Vec<ResultRow> = self.last.iter().map(ResultRow::from).collect();
        to_value(&rows).map_err(|e| e.to_string().into())
    }

    /// Highlighted excerpt markup for row `index` of the last search.
    #[wasm_bindgen(js_name = renderExcerpt)]
    pub fn render_excerpt(&self, index: usize) -> Option<String> {
        self.last.get(index).map(|r| self.session.render_excerpt(r))
    }

    /// Highlighted page title markup for row `index` of the last search.
    #[wasm_bindgen(js_name = renderTitle)]
    pub fn render_title(&self, index: usize) -> Option<String> {
        self.last.get(index).map(|r| self.session.render_title(r))
    }

    /// Result URL with highlight parameters for row `index`.
    #[wasm_bindgen(js_name = deepLink)]
    pub fn deep_link(&self, index: usize) -> Option<String> {
        self.last.get(index).map(|r| self.session.deep_link(r))
    }

    #[wasm_bindgen(js_name = setContext)]
    pub fn set_context(&mut self, context: &str) {
        self.session.set_context(ContextSelection::parse(context));
    }

    /// CRC32 of the bundle bytes; compare across reloads.
    #[wasm_bindgen]
    pub fn fingerprint(&self) -> u32 {
        self.session.bundle().fingerprint()
    }
}
