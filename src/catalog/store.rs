use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::tile::Tile;
use crate::parsing::tiles::parse_tiles_tsv;
use crate::parsing::ParseError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] ParseError),

    #[error("catalog contains no tiles")]
    Empty,

    #[error("duplicate tile name '{0}'")]
    DuplicateName(String),

    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog export format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub tiles: Vec<Tile>,
}

/// The immutable tile catalog.
///
/// Loaded once per process and never mutated afterward; concurrent reads
/// need no locking. Lookups go through a name index built at load time.
#[derive(Debug)]
pub struct TileCatalog {
    tiles: Vec<Tile>,

    /// Index: tile name -> index in `tiles`
    name_to_index: HashMap<String, usize>,
}

impl TileCatalog {
    /// Build a catalog from a list of tiles.
    ///
    /// # Errors
    ///
    /// Fails on an empty list or a repeated tile name.
    pub fn new(tiles: Vec<Tile>) -> Result<Self, CatalogError> {
        if tiles.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut name_to_index = HashMap::with_capacity(tiles.len());
        for (index, tile) in tiles.iter().enumerate() {
            if name_to_index.insert(tile.name.clone(), index).is_some() {
                return Err(CatalogError::DuplicateName(tile.name.clone()));
            }
        }

        Ok(Self {
            tiles,
            name_to_index,
        })
    }

    /// Load the default catalog compiled into the binary
    pub fn load_embedded() -> Result<Self, CatalogError> {
        const EMBEDDED_TILES: &str = include_str!("../../data/tiles.tsv");
        Self::from_tsv(EMBEDDED_TILES)
    }

    /// Load a catalog from a TSV file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_tsv(&content)
    }

    /// Parse a catalog from TSV text
    pub fn from_tsv(text: &str) -> Result<Self, CatalogError> {
        Self::new(parse_tiles_tsv(text)?)
    }

    /// Look up a tile by exact name
    pub fn get(&self, name: &str) -> Option<&Tile> {
        self.name_to_index.get(name).map(|&idx| &self.tiles[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_to_index.contains_key(name)
    }

    /// All tile names, in catalog order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tiles.iter().map(|t| t.name.as_str())
    }

    /// All tiles, in catalog order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Export the catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            tiles: self.tiles.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
