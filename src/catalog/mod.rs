//! Tile catalog storage and lookup.
//!
//! The catalog defines every known tile identity with its attribute, era,
//! category, and color. A default catalog is compiled into the binary, but
//! custom catalogs can be loaded from TSV files.
//!
//! ## Embedded catalog
//!
//! The default set covers eight attributes of Toho-themed tiles (Showa /
//! Heisei / Millennium / Shin Godzilla, Showa / Heisei / Millennium Kaiju,
//! Toho Mecha). The wildcard sentinel is deliberately not a catalog row: it
//! carries no attribute and must be bound to a real name before scoring.
//!
//! ## Example
//!
//! ```rust
//! use hand_solver::catalog::TileCatalog;
//!
//! let catalog = TileCatalog::load_embedded().unwrap();
//! for tile in catalog.tiles() {
//!     println!("{} ({})", tile.name, tile.attribute);
//! }
//!
//! let godzilla = catalog.get("Godzilla(1954)");
//! assert!(godzilla.is_some());
//! ```

pub mod store;

pub use store::{CatalogError, TileCatalog};
