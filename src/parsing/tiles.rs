use std::path::Path;

use tracing::warn;

use crate::core::tile::Tile;
use crate::parsing::{data_lines, ParseError};

/// Parse a tile-list TSV file with columns: name, attribute, era, category, color
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `MissingHeader` /
/// `MissingColumn` if the header row is absent or incomplete. Malformed data
/// rows are skipped, not fatal.
pub fn parse_tiles_file(path: &Path) -> Result<Vec<Tile>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_tiles_tsv(&content)
}

/// Parse tile-list TSV text with columns: name, attribute, era, category, color
///
/// # Errors
///
/// Returns `ParseError::MissingHeader` or `ParseError::MissingColumn` if the
/// header row is unusable.
pub fn parse_tiles_tsv(text: &str) -> Result<Vec<Tile>, ParseError> {
    let (header, rows) = data_lines(text)?;

    let name_col = header.require("name")?;
    let attribute_col = header.require("attribute")?;
    let era_col = header.require("era")?;
    let category_col = header.require("category")?;
    let color_col = header.require("color")?;

    let mut tiles = Vec::new();
    for (line_num, fields) in rows {
        let name = match header.field(&fields, name_col) {
            Some(name) if !name.is_empty() => name,
            _ => {
                warn!(line = line_num, "skipping tile row without a name");
                continue;
            }
        };
        let attribute = match header.field(&fields, attribute_col) {
            Some(attr) if !attr.is_empty() => attr,
            _ => {
                warn!(line = line_num, name, "skipping tile row without an attribute");
                continue;
            }
        };
        let era = header.field(&fields, era_col).unwrap_or_default();
        let category = header.field(&fields, category_col).unwrap_or_default();
        let color = header.field(&fields, color_col).unwrap_or_default();

        tiles.push(Tile::new(name, attribute, era, category, color));
    }

    Ok(tiles)
}
