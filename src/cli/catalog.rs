//! Catalog command - inspect the tile catalog and rule tables.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::{load_catalog, load_rules, OutputFormat};

/// Arguments for the catalog command
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub action: CatalogAction,
}

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List all tiles
    Tiles {
        /// Tile catalog TSV (defaults to the embedded catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// List basic-role and bonus-role conditions
    Rules {
        /// Basic-role rule TSV (defaults to the embedded table)
        #[arg(long)]
        basic_rules: Option<PathBuf>,

        /// Bonus-role rule TSV (defaults to the embedded table)
        #[arg(long)]
        bonus_rules: Option<PathBuf>,
    },

    /// Export the catalog as JSON
    Export {
        /// Tile catalog TSV (defaults to the embedded catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

/// Execute the catalog command
///
/// # Errors
///
/// Returns an error if the data files cannot be loaded.
pub fn run(args: CatalogArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    match args.action {
        CatalogAction::Tiles { catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;
            match format {
                OutputFormat::Text => {
                    for tile in catalog.tiles() {
                        println!("{}\t{}\t{}", tile.name, tile.attribute, tile.era);
                    }
                    eprintln!("{} tiles", catalog.len());
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(catalog.tiles())?);
                }
            }
        }
        CatalogAction::Rules {
            basic_rules,
            bonus_rules,
        } => {
            let rules = load_rules(basic_rules.as_ref(), bonus_rules.as_ref())?;
            match format {
                OutputFormat::Text => {
                    println!("Basic roles (by priority):");
                    for role in rules.basic_roles() {
                        let marker = if role.special { " [special]" } else { "" };
                        println!(
                            "  {:>2}. {} ({} points){marker}",
                            role.priority, role.name, role.score
                        );
                    }
                    println!();
                    println!("Bonus roles:");
                    for role in rules.bonus_roles() {
                        println!(
                            "  {} ({} points): {} of {} targets",
                            role.name,
                            role.bonus_score,
                            role.required_count,
                            role.targets.len()
                        );
                    }
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&rules)?);
                }
            }
        }
        CatalogAction::Export { catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;
            println!("{}", catalog.to_json()?);
        }
    }

    Ok(())
}
