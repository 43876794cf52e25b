//! # hand-solver
//!
//! A library for scoring donjara tile hands against a configurable rule
//! table.
//!
//! A hand is nine named tiles. Scoring groups the hand's tiles by attribute
//! into completed sets of three, classifies the set composition against a
//! priority-ordered list of basic roles, and stacks independent bonus
//! awards on top. Two support components feed the engine: a name matcher
//! that reconciles noisy recognized text against the tile catalog, and a
//! wildcard resolver that binds wildcard tiles to concrete, unused catalog
//! names through an external one-of-N choice.
//!
//! ## Features
//!
//! - **Priority-ordered classification**: first satisfied basic role wins,
//!   with an ultimate-set short-circuit and a guaranteed catch-all
//! - **Stacking bonus roles**: independent conditions scored additively
//! - **Pull-based wildcard resolution**: one choice request at a time,
//!   mechanism-agnostic, no-repeat guarantee
//! - **Best-effort name matching**: character-overlap reconciliation of
//!   recognized text, unknown tiles tolerated end to end
//!
//! ## Example
//!
//! ```rust
//! use hand_solver::{Hand, RuleTable, ScoringEngine, TileCatalog};
//!
//! // Load the embedded catalog and rule tables
//! let catalog = TileCatalog::load_embedded().unwrap();
//! let rules = RuleTable::load_embedded().unwrap();
//!
//! // Score a hand of nine tile names
//! let hand = Hand::parse(
//!     "Anguirus,Anguirus,Anguirus,Hedorah,Hedorah,Hedorah,Minilla,Minilla,Minilla",
//! );
//! let engine = ScoringEngine::new(&catalog, &rules);
//! let result = engine.evaluate(&hand);
//!
//! println!(
//!     "{}: {} points",
//!     result.basic_role_name.as_deref().unwrap_or("no role"),
//!     result.final_score
//! );
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Tile catalog storage and lookup
//! - [`core`]: Core data types for tiles and hands
//! - [`rules`]: Rule table storage and load-time validation
//! - [`scoring`]: The scoring engine
//! - [`wildcard`]: Wildcard resolution protocol
//! - [`matching`]: Approximate name matching for recognized text
//! - [`parsing`]: Parsers for the tabular catalog and rule inputs
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod rules;
pub mod scoring;
pub mod wildcard;

// Re-export commonly used types for convenience
pub use catalog::store::TileCatalog;
pub use core::hand::{Hand, HAND_SIZE, UNKNOWN_TILE, WILDCARD_TILE};
pub use core::tile::Tile;
pub use rules::table::RuleTable;
pub use scoring::engine::ScoringEngine;
pub use scoring::result::{BonusRoleDetail, ScoreResult};
pub use wildcard::resolver::{ChoiceRequest, WildcardResolver};
