//! Parsers for the tabular catalog and rule-table inputs.
//!
//! This module provides parsers for:
//!
//! - **Tile lists**: TSV with columns `name`, `attribute`, `era`, `category`, `color`
//! - **Basic-role rules**: TSV with columns `name`, `allowed`, `disallowed`,
//!   `score`, `priority`, `special`
//! - **Bonus-role rules**: TSV with columns `name`, `condition`,
//!   `required_count`, `targets`, `bonus_score`
//!
//! All inputs require a header row; columns are located by name, so column
//! order does not matter. Multi-valued fields (`allowed`, `disallowed`,
//! `targets`) are `;`-separated. Missing or malformed data rows are skipped
//! with a warning rather than failing the whole load.
//!
//! ## Example
//!
//! ```rust
//! use hand_solver::parsing::tiles::parse_tiles_tsv;
//!
//! let tsv = "name\tattribute\tera\tcategory\tcolor\n\
//!            Anguirus\tShowa Kaiju\tShowa\tkaiju\tsepia\n";
//! let tiles = parse_tiles_tsv(tsv).unwrap();
//! assert_eq!(tiles.len(), 1);
//! ```

pub mod roles;
pub mod tiles;

use std::collections::HashMap;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("input has no header row")]
    MissingHeader,

    #[error("missing required column '{0}' in header")]
    MissingColumn(&'static str),
}

/// Column positions resolved from a TSV header row
pub(crate) struct HeaderIndex {
    columns: HashMap<String, usize>,
}

impl HeaderIndex {
    pub(crate) fn parse(line: &str) -> Self {
        let columns = line
            .split('\t')
            .enumerate()
            .map(|(i, name)| (name.trim().to_lowercase(), i))
            .collect();
        Self { columns }
    }

    /// Fail fast if a required column is absent from the header
    pub(crate) fn require(&self, name: &'static str) -> Result<usize, ParseError> {
        self.columns
            .get(name)
            .copied()
            .ok_or(ParseError::MissingColumn(name))
    }

    pub(crate) fn field<'a>(&self, fields: &[&'a str], index: usize) -> Option<&'a str> {
        fields.get(index).map(|s| s.trim())
    }
}

/// Split a `;`-separated list field into trimmed, non-empty entries
pub(crate) fn split_list(field: &str) -> Vec<String> {
    field
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Collect non-empty, non-comment data lines with 1-based line numbers,
/// resolving the first such line as the header.
pub(crate) fn data_lines(text: &str) -> Result<(HeaderIndex, Vec<(usize, Vec<&str>)>), ParseError> {
    let mut header: Option<HeaderIndex> = None;
    let mut rows = Vec::new();

    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        if header.is_none() {
            header = Some(HeaderIndex::parse(line));
            continue;
        }
        // Line numbers in diagnostics are 1-based for user friendliness
        rows.push((i + 1, line.split('\t').collect()));
    }

    let header = header.ok_or(ParseError::MissingHeader)?;
    Ok((header, rows))
}
