//! Rule table storage and load-time validation.
//!
//! A [`RuleTable`] holds two kinds of conditions:
//!
//! - **Basic roles** ([`BasicRoleCondition`]): a totally-ordered priority list
//!   classifying a hand's set composition. Exactly one carries the special
//!   flag (resolved by the engine's ultimate-set short-circuit, outside the
//!   normal ordering) and exactly one is an unconstrained catch-all at the
//!   lowest priority, guaranteeing every hand with three completed sets gets
//!   a classification.
//! - **Bonus roles** ([`BonusRoleCondition`]): independent, stackable awards
//!   for hands containing a minimum count of specific named tiles.
//!
//! The embedded default tables are compiled into the binary; custom tables
//! can be loaded from TSV files. Structural invariants (one special, one
//! lowest-priority catch-all, unique priorities) are validated at load time
//! and violations are fatal; the engine has no defined behavior without
//! them.
//!
//! ## Example
//!
//! ```rust
//! use hand_solver::rules::RuleTable;
//!
//! let table = RuleTable::load_embedded().unwrap();
//! for role in table.basic_roles() {
//!     println!("{} ({} points, priority {})", role.name, role.score, role.priority);
//! }
//! ```

pub mod table;

pub use table::{BasicRoleCondition, BonusRoleCondition, RuleTable, RuleTableError};
