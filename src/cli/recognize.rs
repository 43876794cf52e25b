//! Recognize command - reconcile recognized text against the tile catalog.
//!
//! Consumes the text side of an external recognition step (this tool never
//! sees an image) and prints the nine candidate names, optionally scoring
//! them directly.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_catalog, load_rules, OutputFormat};
use crate::core::hand::Hand;
use crate::matching::name_matcher::match_tokens;
use crate::scoring::engine::ScoringEngine;

/// Arguments for the recognize command
#[derive(Args)]
pub struct RecognizeArgs {
    /// File containing recognized text, or '-' to read from stdin
    #[arg(required = true)]
    pub input: String,

    /// Tile catalog TSV (defaults to the embedded catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Basic-role rule TSV (defaults to the embedded table)
    #[arg(long)]
    pub basic_rules: Option<PathBuf>,

    /// Bonus-role rule TSV (defaults to the embedded table)
    #[arg(long)]
    pub bonus_rules: Option<PathBuf>,

    /// Score the matched hand immediately
    #[arg(long)]
    pub score: bool,
}

/// Execute the recognize command
///
/// # Errors
///
/// Returns an error if the input or data files cannot be read.
pub fn run(args: RecognizeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;

    let text = if args.input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(&args.input)?
    };

    if verbose {
        eprintln!("Input: {} tokens", text.split_whitespace().count());
    }

    let matched = match_tokens(&text, &catalog);

    if args.score {
        let rules = load_rules(args.basic_rules.as_ref(), args.bonus_rules.as_ref())?;
        let engine = ScoringEngine::new(&catalog, &rules);
        let result = engine.evaluate(&Hand::new(matched));
        match format {
            OutputFormat::Text => {
                println!("Matched hand:");
                print_hand(&result.hand, &catalog);
                println!();
                println!(
                    "{}: {} points",
                    result.basic_role_name.as_deref().unwrap_or("no basic role"),
                    result.final_score
                );
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        }
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_hand(&matched, &catalog),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&matched)?),
    }

    Ok(())
}

fn print_hand(names: &[String], catalog: &crate::catalog::store::TileCatalog) {
    for (i, name) in names.iter().enumerate() {
        let attribute = catalog
            .get(name)
            .map_or("unknown", |tile| tile.attribute.as_str());
        println!("  {}: {name} ({attribute})", i + 1);
    }
}
