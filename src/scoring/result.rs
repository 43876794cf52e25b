use serde::{Deserialize, Serialize};

/// One matched bonus role with its contributing tiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusRoleDetail {
    pub role_name: String,
    pub bonus_score: i64,

    /// Names of the hand tiles that satisfied the condition, duplicates included
    pub matched_tiles: Vec<String>,
}

/// The complete score breakdown for one evaluated hand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Selected basic role, `None` when fewer than 3 sets were completed
    pub basic_role_name: Option<String>,
    pub basic_role_score: i64,

    /// Every matched bonus role with its contributing tiles
    pub bonus_details: Vec<BonusRoleDetail>,

    /// Sum over `bonus_details`
    pub bonus_score: i64,

    /// `basic_role_score + bonus_score`
    pub final_score: i64,

    /// The hand exactly as submitted, unresolved entries included
    pub hand: Vec<String>,
}

impl ScoreResult {
    /// Result for a hand with fewer than three completed sets
    pub(crate) fn no_basic_role(hand: Vec<String>) -> Self {
        Self {
            basic_role_name: None,
            basic_role_score: 0,
            bonus_details: Vec::new(),
            bonus_score: 0,
            final_score: 0,
            hand,
        }
    }

    /// Result for the ultimate-set short-circuit; bonus roles are never
    /// evaluated in this case
    pub(crate) fn special(name: String, score: i64, hand: Vec<String>) -> Self {
        Self {
            basic_role_name: Some(name),
            basic_role_score: score,
            bonus_details: Vec::new(),
            bonus_score: 0,
            final_score: score,
            hand,
        }
    }
}
