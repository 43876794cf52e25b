//! The hand scoring engine.
//!
//! Scoring is a pure function: resolved hand × catalog × rule table →
//! [`ScoreResult`]. The engine never fails; hands that resolve to nothing
//! score zero.
//!
//! ## Algorithm
//!
//! 1. **Ultimate-set short-circuit**: a hand holding at least 9 tiles from
//!    the fixed [`ULTIMATE_SET`](engine::ULTIMATE_SET) roster scores the
//!    special condition immediately; bonus roles are not evaluated.
//! 2. **Set formation**: resolved tiles group by attribute; every three
//!    tiles sharing an attribute complete one set.
//! 3. **Basic role**: with three completed sets, the non-special conditions
//!    are scanned in descending priority and the first satisfied one wins;
//!    the catch-all guarantees a match. Fewer than three sets means no basic
//!    role and a zero score.
//! 4. **Bonus roles**: every bonus condition is checked independently
//!    against the resolved tiles and matches stack additively.
//!
//! ## Example
//!
//! ```rust
//! use hand_solver::catalog::TileCatalog;
//! use hand_solver::core::Hand;
//! use hand_solver::rules::RuleTable;
//! use hand_solver::scoring::ScoringEngine;
//!
//! let catalog = TileCatalog::load_embedded().unwrap();
//! let rules = RuleTable::load_embedded().unwrap();
//! let engine = ScoringEngine::new(&catalog, &rules);
//!
//! let hand = Hand::parse(
//!     "Anguirus,Anguirus,Anguirus,Hedorah,Hedorah,Hedorah,Minilla,Minilla,Minilla",
//! );
//! let result = engine.evaluate(&hand);
//! println!("{}: {} points", result.basic_role_name.as_deref().unwrap_or("-"), result.final_score);
//! ```

pub mod engine;
pub mod result;

pub use engine::ScoringEngine;
pub use result::{BonusRoleDetail, ScoreResult};
