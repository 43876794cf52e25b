use tracing::debug;

use crate::catalog::store::TileCatalog;
use crate::core::hand::{Hand, HAND_SIZE};
use crate::core::tile::Tile;
use crate::rules::table::{BasicRoleCondition, RuleTable};
use crate::scoring::result::{BonusRoleDetail, ScoreResult};

/// Number of tiles that must share an attribute to complete one set
pub const SET_SIZE: usize = 3;

/// Number of completed sets a basic role requires
pub const REQUIRED_SETS: usize = 3;

/// The fixed ultimate-combination roster (the Final Wars cast). A hand with
/// at least [`HAND_SIZE`] of these resolves to the special condition without
/// any further evaluation.
pub const ULTIMATE_SET: [&str; 12] = [
    "Godzilla(2004)",
    "Mothra(2004)",
    "Kamacuras(2004)",
    "Kumonga(2004)",
    "King-Caesar(2004)",
    "Rodan(2004)",
    "Gigan(2004)",
    "Modified-Gigan",
    "Zilla",
    "Monster-X",
    "Keizer-Ghidorah",
    "New-Gotengo",
];

/// The scoring engine: a pure function over an immutable catalog and rule
/// table.
///
/// `evaluate` is deterministic, side-effect-free, and never fails; a hand
/// with no scorable content yields a zero-score result rather than an error.
/// The engine holds no mutable state, so a single instance is safe to share
/// across any number of concurrent evaluations.
pub struct ScoringEngine<'a> {
    catalog: &'a TileCatalog,
    rules: &'a RuleTable,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(catalog: &'a TileCatalog, rules: &'a RuleTable) -> Self {
        Self { catalog, rules }
    }

    /// Score a hand against the rule table.
    ///
    /// Entries that do not resolve to a catalog tile (unknown sentinels,
    /// unresolved wildcards, garbage) are excluded from grouping and bonus
    /// counting but retained verbatim in the result's hand snapshot.
    pub fn evaluate(&self, hand: &Hand) -> ScoreResult {
        debug!(hand = %hand, "evaluating hand");

        let resolved: Vec<&Tile> = hand
            .entries
            .iter()
            .filter_map(|name| self.catalog.get(name))
            .collect();
        debug!(resolved = resolved.len(), of = hand.len(), "resolved tiles");

        // Ultimate-set short-circuit: bonus roles are never evaluated here
        let ultimate_count = resolved
            .iter()
            .filter(|t| ULTIMATE_SET.contains(&t.name.as_str()))
            .count();
        if ultimate_count >= HAND_SIZE {
            let special = self.rules.special();
            debug!(count = ultimate_count, role = %special.name, "ultimate set matched");
            return ScoreResult::special(
                special.name.clone(),
                special.score,
                hand.entries.clone(),
            );
        }

        let labels = set_labels(&resolved);
        debug!(?labels, "completed sets");

        if labels.len() < REQUIRED_SETS {
            debug!(sets = labels.len(), "fewer than {REQUIRED_SETS} sets, no basic role");
            return ScoreResult::no_basic_role(hand.entries.clone());
        }

        // A validated rule table always contains a catch-all, so the scan
        // cannot come up empty; degrade to a zero result rather than panic.
        let Some(basic) = self.select_basic_role(&labels) else {
            return ScoreResult::no_basic_role(hand.entries.clone());
        };
        debug!(role = %basic.name, score = basic.score, "basic role selected");

        let (bonus_details, bonus_score) = self.evaluate_bonus_roles(&resolved);
        let final_score = basic.score + bonus_score;
        debug!(bonus_score, final_score, "evaluation complete");

        ScoreResult {
            basic_role_name: Some(basic.name.clone()),
            basic_role_score: basic.score,
            bonus_details,
            bonus_score,
            final_score,
            hand: hand.entries.clone(),
        }
    }

    /// Scan non-special conditions in descending priority; the first whose
    /// constraints hold wins. Constraints operate strictly on the derived
    /// attribute labels, never on tile names.
    fn select_basic_role(&self, labels: &[String]) -> Option<&BasicRoleCondition> {
        self.rules
            .basic_roles()
            .iter()
            .filter(|c| !c.special)
            .find(|c| {
                if let Some(allowed) = &c.allowed {
                    if !labels.iter().all(|l| allowed.contains(l)) {
                        return false;
                    }
                }
                !labels.iter().any(|l| c.disallowed.contains(l))
            })
    }

    /// Evaluate every bonus condition independently over the resolved tiles.
    /// Matches stack additively; duplicates count individually.
    fn evaluate_bonus_roles(&self, resolved: &[&Tile]) -> (Vec<BonusRoleDetail>, i64) {
        let mut details = Vec::new();
        let mut total = 0;

        for bonus in self.rules.bonus_roles() {
            let matched: Vec<String> = resolved
                .iter()
                .filter(|t| bonus.targets.contains(&t.name))
                .map(|t| t.name.clone())
                .collect();
            if matched.len() >= bonus.required_count {
                debug!(role = %bonus.name, count = matched.len(), "bonus role matched");
                details.push(BonusRoleDetail {
                    role_name: bonus.name.clone(),
                    bonus_score: bonus.bonus_score,
                    matched_tiles: matched,
                });
                total += bonus.bonus_score;
            }
        }

        (details, total)
    }
}

/// Group resolved tiles by attribute and emit one label per completed set of
/// [`SET_SIZE`], in first-seen attribute order. Nine tiles yield at most
/// three labels.
fn set_labels(tiles: &[&Tile]) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for tile in tiles {
        match counts.iter_mut().find(|(attr, _)| *attr == tile.attribute) {
            Some((_, count)) => *count += 1,
            None => counts.push((tile.attribute.as_str(), 1)),
        }
    }

    let mut labels = Vec::new();
    for (attribute, count) in counts {
        for _ in 0..count / SET_SIZE {
            labels.push(attribute.to_string());
        }
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hand::{UNKNOWN_TILE, WILDCARD_TILE};

    fn fixtures() -> (TileCatalog, RuleTable) {
        let catalog = TileCatalog::load_embedded().unwrap();
        let rules = RuleTable::load_embedded().unwrap();
        (catalog, rules)
    }

    fn hand(names: &[&str]) -> Hand {
        Hand::new(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_set_labels_counts_triples() {
        let (catalog, _) = fixtures();
        let tiles: Vec<&Tile> = ["Anguirus", "Hedorah", "Minilla", "Biollante", "Battra"]
            .iter()
            .map(|n| catalog.get(n).unwrap())
            .collect();

        // 3 Showa Kaiju -> one set, 2 Heisei Kaiju -> none
        assert_eq!(set_labels(&tiles), vec!["Showa Kaiju"]);
    }

    #[test]
    fn test_set_labels_duplicates_uncapped() {
        let (catalog, _) = fixtures();
        let anguirus = catalog.get("Anguirus").unwrap();
        let tiles = vec![anguirus; 9];

        // Nine copies of one tile form three sets of the same attribute
        assert_eq!(
            set_labels(&tiles),
            vec!["Showa Kaiju", "Showa Kaiju", "Showa Kaiju"]
        );
    }

    #[test]
    fn test_fewer_than_three_sets_scores_zero() {
        let (catalog, rules) = fixtures();
        let engine = ScoringEngine::new(&catalog, &rules);

        let result = engine.evaluate(&hand(&[
            "Anguirus",
            "Hedorah",
            "Minilla",
            "Biollante",
            "Battra",
            "Destoroyah",
            "Orga",
            "Megaguirus",
            UNKNOWN_TILE,
        ]));

        assert_eq!(result.basic_role_name, None);
        assert_eq!(result.final_score, 0);
        assert!(result.bonus_details.is_empty());
        assert_eq!(result.hand.len(), 9);
    }

    #[test]
    fn test_kaiju_set_selected_over_catch_all() {
        let (catalog, rules) = fixtures();
        let engine = ScoringEngine::new(&catalog, &rules);

        // One set per kaiju era: allowed by "Kaiju Set", rejected by every
        // higher-priority condition
        let result = engine.evaluate(&hand(&[
            "Anguirus", "Anguirus", "Anguirus", "Biollante", "Biollante", "Biollante", "Orga",
            "Orga", "Orga",
        ]));

        assert_eq!(result.basic_role_name.as_deref(), Some("Kaiju Set"));
        assert_eq!(result.basic_role_score, 120_000);
    }

    #[test]
    fn test_mixed_attributes_fall_through_to_catch_all() {
        let (catalog, rules) = fixtures();
        let engine = ScoringEngine::new(&catalog, &rules);

        // Kaiju + Godzilla + Mecha sets match no constrained condition
        let result = engine.evaluate(&hand(&[
            "Anguirus",
            "Hedorah",
            "Minilla",
            "Godzilla(1989)",
            "Godzilla(1991)",
            "Godzilla(1995)",
            "Gotengo",
            "Kiryu",
            "Moguera",
        ]));

        assert_eq!(result.basic_role_name.as_deref(), Some("Basic Set"));
        assert_eq!(result.basic_role_score, 60_000);
    }

    #[test]
    fn test_ultimate_set_short_circuits() {
        let (catalog, rules) = fixtures();
        let engine = ScoringEngine::new(&catalog, &rules);

        let result = engine.evaluate(&hand(&[
            "Godzilla(2004)",
            "Mothra(2004)",
            "Kamacuras(2004)",
            "Kumonga(2004)",
            "King-Caesar(2004)",
            "Rodan(2004)",
            "Gigan(2004)",
            "Zilla",
            "Monster-X",
        ]));

        assert_eq!(result.basic_role_name.as_deref(), Some("Final Wars Set"));
        assert_eq!(result.basic_role_score, 500_000);
        assert_eq!(result.final_score, 500_000);
        // Bonus roles are skipped entirely, even though Mothra(2004) is a
        // bonus target
        assert_eq!(result.bonus_score, 0);
        assert!(result.bonus_details.is_empty());
    }

    #[test]
    fn test_bonus_roles_stack() {
        let (catalog, rules) = fixtures();
        let engine = ScoringEngine::new(&catalog, &rules);

        // Basic Set (mixed) + Ghidorah Rivalry + Mechagodzilla Lineage
        let result = engine.evaluate(&hand(&[
            "King-Ghidorah(1964)",
            "King-Ghidorah(1964)",
            "King-Ghidorah(1964)",
            "Keizer-Ghidorah",
            "Keizer-Ghidorah",
            "Keizer-Ghidorah",
            "Mechagodzilla(1974)",
            "Mechagodzilla(1993)",
            "Kiryu",
        ]));

        assert_eq!(result.basic_role_name.as_deref(), Some("Basic Set"));
        let names: Vec<&str> = result
            .bonus_details
            .iter()
            .map(|d| d.role_name.as_str())
            .collect();
        assert!(names.contains(&"Ghidorah Rivalry"));
        assert!(names.contains(&"Mechagodzilla Lineage"));
        assert_eq!(result.bonus_score, 40_000);
        assert_eq!(result.final_score, 100_000);

        // Duplicates are recorded individually in the matched tiles
        let rivalry = result
            .bonus_details
            .iter()
            .find(|d| d.role_name == "Ghidorah Rivalry")
            .unwrap();
        assert_eq!(rivalry.matched_tiles.len(), 6);
    }

    #[test]
    fn test_unresolvable_entries_retained_in_snapshot() {
        let (catalog, rules) = fixtures();
        let engine = ScoringEngine::new(&catalog, &rules);

        let input = hand(&[
            UNKNOWN_TILE,
            WILDCARD_TILE,
            "not a tile",
            "Anguirus",
            "Anguirus",
            "Anguirus",
            "Hedorah",
            "Hedorah",
            "Hedorah",
        ]);
        let result = engine.evaluate(&input);

        // Only two sets resolve; unknowns keep their place in the snapshot
        assert_eq!(result.basic_role_name, None);
        assert_eq!(result.final_score, 0);
        assert_eq!(result.hand, input.entries);
    }

    #[test]
    fn test_zero_resolvable_tiles() {
        let (catalog, rules) = fixtures();
        let engine = ScoringEngine::new(&catalog, &rules);

        let result = engine.evaluate(&hand(&[UNKNOWN_TILE; 9]));
        assert_eq!(result.final_score, 0);
        assert_eq!(result.basic_role_name, None);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let (catalog, rules) = fixtures();
        let engine = ScoringEngine::new(&catalog, &rules);

        let input = hand(&[
            "Anguirus",
            "Hedorah",
            "Minilla",
            "Godzilla(1989)",
            "Godzilla(1991)",
            "Godzilla(1995)",
            "Mothra(1961)",
            "Kamacuras(1967)",
            "Kumonga(1967)",
        ]);
        let first = engine.evaluate(&input);
        assert_eq!(first.basic_role_name.as_deref(), Some("Basic Set"));
        assert_eq!(first.final_score, 70_000); // Basic Set + Mothra's Blessing
        for _ in 0..10 {
            assert_eq!(engine.evaluate(&input), first);
        }
    }
}
