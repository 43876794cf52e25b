//! Wildcard resolution.
//!
//! A hand may carry the wildcard sentinel any number of times; each
//! occurrence must be bound to a concrete, not-yet-used catalog name before
//! scoring. The binding decision comes from outside, typically a person
//! picking from a list, so the resolver is the one suspension point in the
//! pipeline.
//!
//! Rather than calling back into an interaction layer, the resolver exposes
//! a pull-based protocol: it produces one [`ChoiceRequest`] at a time
//! ("need a selection for position *k* among these candidates") and resumes
//! when [`WildcardResolver::supply`] delivers the answer. That keeps the
//! algorithm independent of any interaction mechanism and makes it
//! trivially testable with a scripted chooser:
//!
//! ```rust
//! use hand_solver::catalog::TileCatalog;
//! use hand_solver::core::{Hand, WILDCARD_TILE};
//! use hand_solver::wildcard::resolve_with;
//!
//! let catalog = TileCatalog::load_embedded().unwrap();
//! let hand = Hand::new(vec!["Anguirus".to_string(), WILDCARD_TILE.to_string()]);
//!
//! // Script the external choice: always take the first candidate
//! let resolved = resolve_with(&hand, &catalog, |req| req.candidates.first().cloned());
//! assert!(!resolved.unwrap().has_wildcard());
//! ```

pub mod resolver;

pub use resolver::{resolve_with, ChoiceRequest, ResolveError, WildcardResolver};
