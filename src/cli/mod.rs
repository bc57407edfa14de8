// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsift command-line interface.
//!
//! Two subcommands over a directory of published bundles: `search` runs a
//! query and shows highlighted results, `inspect` summarizes a bundle.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docsift",
    about = "Search and highlight prebuilt documentation indexes",
    version
)]
pub struct Cli {
    /// JSON search config (limit, excerptBudget, markers, ...)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Query a bundle and display ranked, highlighted results
    Search {
        /// Directory holding one subdirectory per documentation version
        root: PathBuf,

        /// Search query
        query: String,

        /// Documentation version (subdirectory of ROOT)
        #[arg(long, default_value = ".")]
        version: String,

        /// Restrict to one context (default: everywhere)
        #[arg(short, long)]
        context: Option<String>,

        /// Maximum number of results (overrides config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Excerpt budget in characters (overrides config)
        #[arg(long)]
        budget: Option<usize>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show per-index document and term counts
    Inspect {
        /// Directory holding one subdirectory per documentation version
        root: PathBuf,

        /// Documentation version (subdirectory of ROOT)
        #[arg(long, default_value = ".")]
        version: String,

        /// Which context artifact to open (default: everywhere)
        #[arg(short, long)]
        context: Option<String>,
    },
}
