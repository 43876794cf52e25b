use std::collections::{HashSet, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::parsing::roles::{parse_basic_roles_tsv, parse_bonus_roles_tsv};
use crate::parsing::ParseError;

#[derive(Error, Debug)]
pub enum RuleTableError {
    #[error("failed to parse rule table: {0}")]
    Parse(#[from] ParseError),

    #[error("rule table has no basic-role conditions")]
    Empty,

    #[error("rule table has no special-case condition")]
    MissingSpecial,

    #[error("rule table has more than one special-case condition ('{0}' and '{1}')")]
    MultipleSpecial(String, String),

    #[error("rule table has no catch-all condition (unconstrained, lowest priority)")]
    MissingCatchAll,

    #[error("rule table has more than one unconstrained condition ('{0}' and '{1}')")]
    MultipleCatchAll(String, String),

    #[error("catch-all condition '{0}' does not hold the lowest priority")]
    CatchAllNotLowest(String),

    #[error("duplicate priority {0} ('{1}' and '{2}')")]
    DuplicatePriority(u32, String, String),
}

/// A single basic-role condition from the rule table.
///
/// Basic roles classify the set-label composition of a hand. `allowed` is
/// `None` for "any attribute"; the checks operate strictly on the attribute
/// labels derived from completed sets, never on tile names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicRoleCondition {
    pub name: String,

    /// Every set label must belong to this set when present; `None` = any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<HashSet<String>>,

    /// No set label may belong to this set
    #[serde(default)]
    pub disallowed: HashSet<String>,

    pub score: i64,

    /// Unique ordering key; higher priorities are evaluated first
    pub priority: u32,

    /// Bypasses normal priority ordering via the ultimate-set short-circuit
    #[serde(default)]
    pub special: bool,
}

impl BasicRoleCondition {
    /// Unconstrained and guaranteed to match any set-label sequence
    pub fn is_catch_all(&self) -> bool {
        !self.special && self.allowed.is_none() && self.disallowed.is_empty()
    }
}

/// A single bonus-role condition from the rule table.
///
/// Bonus roles are independent of each other and of the basic role; any
/// number may match a hand simultaneously and their scores stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusRoleCondition {
    pub name: String,

    /// Human-readable description of the condition; documentation only
    #[serde(default)]
    pub condition: String,

    /// Minimum count of target tiles required in the hand
    pub required_count: usize,

    /// Tile names this condition counts
    pub targets: HashSet<String>,

    pub bonus_score: i64,
}

/// The immutable rule table: ordered basic-role conditions plus an unordered
/// list of bonus-role conditions.
///
/// Loaded once and validated at load time; passed into the scoring engine
/// explicitly, never held as ambient global state. Serializable for JSON
/// inspection, but deliberately not deserializable: every construction path
/// goes through [`RuleTable::new`] so the structural invariants (and the
/// `special_index` it derives) always hold.
#[derive(Debug, Clone, Serialize)]
pub struct RuleTable {
    /// Basic-role conditions, sorted by descending priority
    basic: Vec<BasicRoleCondition>,

    /// Bonus-role conditions, evaluated independently
    bonus: Vec<BonusRoleCondition>,

    /// Position of the special-case condition in `basic`
    #[serde(skip)]
    special_index: usize,
}

impl RuleTable {
    /// Build and validate a rule table.
    ///
    /// # Errors
    ///
    /// Fails if the basic conditions lack exactly one special-case entry,
    /// lack exactly one lowest-priority catch-all, or reuse a priority.
    /// A table without a catch-all has no defined behavior, so this is fatal.
    pub fn new(
        mut basic: Vec<BasicRoleCondition>,
        bonus: Vec<BonusRoleCondition>,
    ) -> Result<Self, RuleTableError> {
        if basic.is_empty() {
            return Err(RuleTableError::Empty);
        }

        let mut seen: HashMap<u32, &str> = HashMap::new();
        for condition in &basic {
            if let Some(previous) = seen.insert(condition.priority, &condition.name) {
                return Err(RuleTableError::DuplicatePriority(
                    condition.priority,
                    previous.to_string(),
                    condition.name.clone(),
                ));
            }
        }

        let mut special: Option<&BasicRoleCondition> = None;
        for condition in basic.iter().filter(|c| c.special) {
            if let Some(first) = special {
                return Err(RuleTableError::MultipleSpecial(
                    first.name.clone(),
                    condition.name.clone(),
                ));
            }
            special = Some(condition);
        }
        if special.is_none() {
            return Err(RuleTableError::MissingSpecial);
        }

        let mut catch_all: Option<&BasicRoleCondition> = None;
        for condition in basic.iter().filter(|c| c.is_catch_all()) {
            if let Some(first) = catch_all {
                return Err(RuleTableError::MultipleCatchAll(
                    first.name.clone(),
                    condition.name.clone(),
                ));
            }
            catch_all = Some(condition);
        }
        let catch_all = catch_all.ok_or(RuleTableError::MissingCatchAll)?;

        let lowest = basic
            .iter()
            .filter(|c| !c.special)
            .map(|c| c.priority)
            .min()
            .ok_or(RuleTableError::MissingCatchAll)?;
        if catch_all.priority != lowest {
            return Err(RuleTableError::CatchAllNotLowest(catch_all.name.clone()));
        }

        basic.sort_by(|a, b| b.priority.cmp(&a.priority));
        let special_index = basic
            .iter()
            .position(|c| c.special)
            .ok_or(RuleTableError::MissingSpecial)?;

        debug!(
            basic = basic.len(),
            bonus = bonus.len(),
            "rule table validated"
        );

        Ok(Self {
            basic,
            bonus,
            special_index,
        })
    }

    /// Load the default rule tables compiled into the binary
    pub fn load_embedded() -> Result<Self, RuleTableError> {
        const EMBEDDED_BASIC: &str = include_str!("../../data/basic_roles.tsv");
        const EMBEDDED_BONUS: &str = include_str!("../../data/bonus_roles.tsv");
        Self::from_tsv(EMBEDDED_BASIC, EMBEDDED_BONUS)
    }

    /// Load rule tables from TSV files
    pub fn load_from_files(basic: &Path, bonus: &Path) -> Result<Self, RuleTableError> {
        let basic_text = std::fs::read_to_string(basic).map_err(ParseError::Io)?;
        let bonus_text = std::fs::read_to_string(bonus).map_err(ParseError::Io)?;
        Self::from_tsv(&basic_text, &bonus_text)
    }

    /// Parse and validate rule tables from TSV text
    pub fn from_tsv(basic: &str, bonus: &str) -> Result<Self, RuleTableError> {
        let basic = parse_basic_roles_tsv(basic)?;
        let bonus = parse_bonus_roles_tsv(bonus)?;
        Self::new(basic, bonus)
    }

    /// Basic-role conditions in descending priority order
    pub fn basic_roles(&self) -> &[BasicRoleCondition] {
        &self.basic
    }

    pub fn bonus_roles(&self) -> &[BonusRoleCondition] {
        &self.bonus
    }

    /// The unique special-case condition
    pub fn special(&self) -> &BasicRoleCondition {
        &self.basic[self.special_index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condition(name: &str, priority: u32) -> BasicRoleCondition {
        BasicRoleCondition {
            name: name.to_string(),
            allowed: Some(["A".to_string()].into_iter().collect()),
            disallowed: ["B".to_string()].into_iter().collect(),
            score: 100,
            priority,
            special: false,
        }
    }

    fn catch_all(priority: u32) -> BasicRoleCondition {
        BasicRoleCondition {
            name: "Basic Set".to_string(),
            allowed: None,
            disallowed: HashSet::new(),
            score: 60_000,
            priority,
            special: false,
        }
    }

    fn special(priority: u32) -> BasicRoleCondition {
        BasicRoleCondition {
            name: "Final Wars Set".to_string(),
            allowed: None,
            disallowed: HashSet::new(),
            score: 500_000,
            priority,
            special: true,
        }
    }

    #[test]
    fn test_load_embedded() {
        let table = RuleTable::load_embedded().unwrap();
        assert_eq!(table.special().name, "Final Wars Set");
        assert_eq!(table.special().score, 500_000);
        assert!(!table.bonus_roles().is_empty());

        // Sorted by descending priority
        let priorities: Vec<u32> = table.basic_roles().iter().map(|c| c.priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(priorities, sorted);
    }

    #[test]
    fn test_missing_catch_all_is_fatal() {
        let result = RuleTable::new(vec![special(10), condition("Only", 5)], Vec::new());
        assert!(matches!(result, Err(RuleTableError::MissingCatchAll)));
    }

    #[test]
    fn test_missing_special_is_fatal() {
        let result = RuleTable::new(vec![condition("Only", 5), catch_all(2)], Vec::new());
        assert!(matches!(result, Err(RuleTableError::MissingSpecial)));
    }

    #[test]
    fn test_catch_all_must_be_lowest_priority() {
        let result = RuleTable::new(
            vec![special(10), catch_all(9), condition("Lower", 2)],
            Vec::new(),
        );
        assert!(matches!(result, Err(RuleTableError::CatchAllNotLowest(_))));
    }

    #[test]
    fn test_duplicate_priority_is_fatal() {
        let result = RuleTable::new(
            vec![special(10), condition("A", 5), condition("B", 5), catch_all(2)],
            Vec::new(),
        );
        assert!(matches!(result, Err(RuleTableError::DuplicatePriority(5, _, _))));
    }

    #[test]
    fn test_multiple_catch_all_is_fatal() {
        let mut second = catch_all(3);
        second.name = "Another".to_string();
        let result = RuleTable::new(vec![special(10), second, catch_all(2)], Vec::new());
        assert!(matches!(result, Err(RuleTableError::MultipleCatchAll(_, _))));
    }
}
