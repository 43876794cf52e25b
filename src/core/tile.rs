use serde::{Deserialize, Serialize};

/// A single tile definition from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Unique tile name, e.g. `Godzilla(1954)`
    pub name: String,

    /// Attribute used for set grouping, e.g. `Showa Godzilla`
    pub attribute: String,

    /// Era the tile belongs to, e.g. `Showa`, `Heisei`
    pub era: String,

    /// Broad category: `godzilla`, `kaiju`, `mecha`
    pub category: String,

    /// Display color of the tile face
    pub color: String,
}

impl Tile {
    pub fn new(
        name: impl Into<String>,
        attribute: impl Into<String>,
        era: impl Into<String>,
        category: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            attribute: attribute.into(),
            era: era.into(),
            category: category.into(),
            color: color.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_construction() {
        let tile = Tile::new("Anguirus", "Showa Kaiju", "Showa", "kaiju", "sepia");
        assert_eq!(tile.name, "Anguirus");
        assert_eq!(tile.attribute, "Showa Kaiju");
    }
}
