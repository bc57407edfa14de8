// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use futures::executor::block_on;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use docsift::highlight::title_for;
use docsift::{
    BundleCache, BundleKey, ContextSelection, FsLoader, IndexBundle, SearchConfig, SearchOutcome,
    SearchResult, SearchSession,
};

mod cli;
use cli::display::{self, kind_badge, paint_excerpt, row, score_value, section_bot, section_top};
use cli::{Cli, Commands};

fn main() {
    init_tracing();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{} {:#}", display::error_label(), err);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("DOCSIFT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Commands::Search {
            root,
            query,
            version,
            context,
            limit,
            budget,
            json,
        } => {
            let mut config = config;
            if let Some(limit) = limit {
                config.limit = limit;
            }
            if let Some(budget) = budget {
                config.excerpt_budget = budget;
            }
            let selection = selection(context.as_deref());
            let bundle = load_bundle(&root, &version, &selection)?;
            let session = SearchSession::new(bundle, config).with_context(selection);
            run_search(&session, &query, json)
        }
        Commands::Inspect {
            root,
            version,
            context,
        } => {
            let bundle = load_bundle(&root, &version, &selection(context.as_deref()))?;
            inspect(&bundle);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    let Some(path) = path else {
        return Ok(SearchConfig::default());
    };
    let bytes =
        std::fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    SearchConfig::from_json_slice(&bytes)
        .with_context(|| format!("parsing config {}", path.display()))
}

fn selection(context: Option<&str>) -> ContextSelection {
    context.map(ContextSelection::parse).unwrap_or_default()
}

fn load_bundle(
    root: &Path,
    version: &str,
    selection: &ContextSelection,
) -> Result<Arc<IndexBundle>> {
    let cache = BundleCache::new(FsLoader::new(root));
    let key = BundleKey::new(version, selection.clone());
    let path = cache.loader().bundle_path(&key);
    block_on(cache.get(&key)).with_context(|| format!("loading bundle {}", path.display()))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonResult<'a> {
    #[serde(flatten)]
    result: &'a SearchResult,
    title_markup: String,
    excerpt_markup: String,
    link: String,
}

fn run_search(session: &SearchSession, query: &str, json: bool) -> Result<()> {
    let outcome = session.search(query);
    if json {
        let rows: Option<Vec<JsonResult<'_>>> = match &outcome {
            SearchOutcome::Idle => None,
            SearchOutcome::Results(results) => Some(
                results
                    .iter()
                    .map(|result| JsonResult {
                        result,
                        title_markup: session.render_title(result),
                        excerpt_markup: session.render_excerpt(result),
                        link: session.deep_link(result),
                    })
                    .collect(),
            ),
        };
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let results = match outcome {
        SearchOutcome::Idle => {
            println!("Nothing to search for in {:?}.", query);
            return Ok(());
        }
        SearchOutcome::Results(results) => results,
    };

    section_top(&format!("{} results for {:?}", results.len(), query));
    for (i, result) in results.iter().enumerate() {
        row(&format!(
            " {:>3}  {} {}  {}",
            i + 1,
            kind_badge(result.kind),
            score_value(result.score),
            paint_excerpt(&title_for(result))
        ));
        let path = result.display_path();
        if !path.is_empty() {
            row(&format!("      {}", display::themed(display::GRAY, &[], &path.join(" › "))));
        }
        row(&format!("      {}", paint_excerpt(&session.excerpt(result))));
        row(&format!("      {}", display::themed(display::BLUE, &[], &session.deep_link(result))));
    }
    section_bot();
    Ok(())
}

fn inspect(bundle: &IndexBundle) {
    section_top("BUNDLE");
    row(&format!(" fingerprint  {:08x}", bundle.fingerprint()));
    let contexts: Vec<&str> = bundle.context_names().collect();
    row(&format!(
        " contexts     {}",
        if contexts.is_empty() {
            "(none)".to_string()
        } else {
            contexts.join(", ")
        }
    ));
    row(&format!(
        " dictionary   {}",
        bundle
            .dictionary()
            .map_or("(none)".to_string(), |d| format!("{} words", d.len()))
    ));
    display::section_mid("INDEXES");
    for stats in bundle.stats() {
        row(&format!(
            " {:<16} {} {:>8} docs {:>8} terms",
            stats.context.as_deref().unwrap_or("(global)"),
            kind_badge(stats.field),
            stats.documents,
            stats.terms
        ));
    }
    section_bot();
}
