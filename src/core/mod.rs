//! Core data types for tile hand scoring.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Tile`]: A single tile definition with name, attribute, era, category, and color
//! - [`Hand`]: An ordered sequence of tile names submitted for scoring
//!
//! ## Sentinels
//!
//! Two reserved tile names flow through the pipeline unchanged:
//!
//! | Sentinel | Meaning |
//! |----------|---------|
//! | [`UNKNOWN_TILE`] | Recognized text could not be mapped to a catalog tile |
//! | [`WILDCARD_TILE`] | Wildcard that must be bound to a concrete name before scoring |
//!
//! An unknown tile resolves to no catalog record and contributes to no
//! attribute group; the engine tolerates it and simply scores around it.

pub mod hand;
pub mod tile;

pub use hand::{Hand, HAND_SIZE, UNKNOWN_TILE, WILDCARD_TILE};
pub use tile::Tile;
