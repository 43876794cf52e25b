//! Command-line interface for hand-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **score**: Score a nine-tile hand, resolving wildcards interactively
//! - **recognize**: Map raw recognized text to nine candidate tile names
//! - **catalog**: List tiles or rules, or export the catalog
//!
//! ## Usage
//!
//! ```text
//! # Score a comma-separated hand
//! hand-solver score "Anguirus,Anguirus,Anguirus,Hedorah,Hedorah,Hedorah,Minilla,Minilla,Minilla"
//!
//! # Pipe a hand from another tool
//! echo "..." | hand-solver score -
//!
//! # JSON output for scripting
//! hand-solver score "..." --format json
//!
//! # Reconcile OCR output against the catalog, then score it
//! hand-solver recognize captured.txt --score
//!
//! # Inspect the embedded data
//! hand-solver catalog tiles
//! hand-solver catalog rules
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::catalog::store::TileCatalog;
use crate::rules::table::RuleTable;

pub mod catalog;
pub mod recognize;
pub mod score;

#[derive(Parser)]
#[command(name = "hand-solver")]
#[command(version)]
#[command(about = "Score donjara tile hands against a configurable rule table")]
#[command(
    long_about = "hand-solver scores a nine-tile hand against a priority-ordered rule table.\n\nIt groups tiles by attribute into completed sets of three, selects the single highest-priority basic role the set composition satisfies, and stacks any number of independent bonus roles on top. Wildcard tiles are bound to unused catalog names before scoring, and noisy recognized text can be reconciled against the catalog first."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a nine-tile hand
    Score(score::ScoreArgs),

    /// Map recognized text to nine candidate tile names
    Recognize(recognize::RecognizeArgs),

    /// Inspect the tile catalog and rule tables
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Load a catalog from `--catalog` or fall back to the embedded one
pub(crate) fn load_catalog(path: Option<&Path>) -> anyhow::Result<TileCatalog> {
    match path {
        Some(path) => TileCatalog::load_from_file(path)
            .with_context(|| format!("failed to load catalog from {}", path.display())),
        None => TileCatalog::load_embedded().context("failed to load embedded catalog"),
    }
}

/// Load rule tables from overrides or fall back to the embedded ones.
///
/// Basic and bonus tables travel together: overriding only one side keeps
/// the other embedded.
pub(crate) fn load_rules(
    basic: Option<&PathBuf>,
    bonus: Option<&PathBuf>,
) -> anyhow::Result<RuleTable> {
    match (basic, bonus) {
        (None, None) => RuleTable::load_embedded().context("failed to load embedded rule table"),
        (basic, bonus) => {
            let basic_text = match basic {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => include_str!("../../data/basic_roles.tsv").to_string(),
            };
            let bonus_text = match bonus {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => include_str!("../../data/bonus_roles.tsv").to_string(),
            };
            RuleTable::from_tsv(&basic_text, &bonus_text).context("failed to load rule table")
        }
    }
}
