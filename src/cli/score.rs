//! Score command - evaluate a nine-tile hand, resolving wildcards first.
//!
//! Wildcard occurrences are bound through the pull-based resolver: each
//! request is answered either interactively (numbered stdin prompt) or by
//! taking the first candidate with `--pick-first`.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::bail;
use clap::Args;

use crate::cli::{load_catalog, load_rules, OutputFormat};
use crate::core::hand::{Hand, HAND_SIZE};
use crate::scoring::engine::ScoringEngine;
use crate::scoring::result::ScoreResult;
use crate::wildcard::resolver::{ChoiceRequest, WildcardResolver};

/// Arguments for the score command
#[derive(Args)]
pub struct ScoreArgs {
    /// Comma-separated hand of 9 tile names, or '-' to read from stdin
    #[arg(required = true)]
    pub hand: String,

    /// Tile catalog TSV (defaults to the embedded catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Basic-role rule TSV (defaults to the embedded table)
    #[arg(long)]
    pub basic_rules: Option<PathBuf>,

    /// Bonus-role rule TSV (defaults to the embedded table)
    #[arg(long)]
    pub bonus_rules: Option<PathBuf>,

    /// Bind each wildcard to the first available candidate instead of
    /// prompting
    #[arg(long)]
    pub pick_first: bool,
}

/// Execute the score command
///
/// # Errors
///
/// Returns an error if inputs cannot be loaded, the hand is not nine
/// entries, or wildcard resolution is cancelled.
pub fn run(args: ScoreArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let rules = load_rules(args.basic_rules.as_ref(), args.bonus_rules.as_ref())?;

    let input = if args.hand == "-" {
        let mut buffer = String::new();
        std::io::stdin().lock().read_line(&mut buffer)?;
        buffer
    } else {
        args.hand.clone()
    };

    let hand = Hand::parse(&input);
    if !hand.is_complete() {
        bail!("expected {HAND_SIZE} tiles, got {}", hand.len());
    }

    if verbose {
        eprintln!("Catalog: {} tiles", catalog.len());
        eprintln!(
            "Rules: {} basic, {} bonus",
            rules.basic_roles().len(),
            rules.bonus_roles().len()
        );
    }

    // Resolve wildcards before scoring; unresolved occurrences (exhausted
    // pool) fall through to the engine as unresolvable tiles
    let hand = resolve_wildcards(&hand, &catalog, args.pick_first)?;

    let engine = ScoringEngine::new(&catalog, &rules);
    let result = engine.evaluate(&hand);

    match format {
        OutputFormat::Text => print_text(&result),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(())
}

fn resolve_wildcards(
    hand: &Hand,
    catalog: &crate::catalog::store::TileCatalog,
    pick_first: bool,
) -> anyhow::Result<Hand> {
    if !hand.has_wildcard() {
        return Ok(hand.clone());
    }

    let mut resolver = WildcardResolver::new(hand, catalog);
    while let Some(request) = resolver.next_request() {
        let choice = if pick_first {
            request.candidates[0].clone()
        } else {
            match prompt_choice(&request)? {
                Some(choice) => choice,
                None => bail!("wildcard resolution cancelled"),
            }
        };
        if let Err(err) = resolver.supply(&choice) {
            bail!("invalid wildcard choice: {err}");
        }
    }
    Ok(resolver.into_hand())
}

/// Interactive one-of-N prompt on stdin; empty input, EOF, or 'q' cancels.
/// Anything else that is neither a listed number nor a candidate name is
/// reported and the prompt repeats, so a typo never discards prior bindings.
fn prompt_choice(request: &ChoiceRequest) -> anyhow::Result<Option<String>> {
    eprintln!(
        "\nWildcard at position {} - choose a replacement:",
        request.position + 1
    );
    for (i, candidate) in request.candidates.iter().enumerate() {
        eprintln!("  {:>3}: {candidate}", i + 1);
    }

    loop {
        eprint!("Selection (1-{}, q to cancel): ", request.candidates.len());
        std::io::stderr().flush()?;

        let mut line = String::new();
        let bytes_read = std::io::stdin().lock().read_line(&mut line)?;
        let line = line.trim();

        if bytes_read == 0 || line.is_empty() || line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        if let Ok(n) = line.parse::<usize>() {
            if (1..=request.candidates.len()).contains(&n) {
                return Ok(Some(request.candidates[n - 1].clone()));
            }
        } else if let Some(choice) = request.candidates.iter().find(|c| *c == line) {
            // Accept a candidate typed out by name
            return Ok(Some(choice.clone()));
        }
        eprintln!("'{line}' is not an offered candidate");
    }
}

fn print_text(result: &ScoreResult) {
    println!("Final score: {} points", result.final_score);
    println!();

    match &result.basic_role_name {
        Some(name) => println!("Basic role: {name} (+{} points)", result.basic_role_score),
        None => println!("Basic role: none"),
    }

    if result.bonus_details.is_empty() {
        println!("Bonus roles: none");
    } else {
        println!("Bonus roles:");
        for detail in &result.bonus_details {
            println!("  {} (+{} points)", detail.role_name, detail.bonus_score);
            for tile in &detail.matched_tiles {
                println!("    - {tile}");
            }
        }
        println!("  Total bonus: {} points", result.bonus_score);
    }

    println!();
    println!("Hand:");
    for tile in &result.hand {
        println!("  - {tile}");
    }
}
