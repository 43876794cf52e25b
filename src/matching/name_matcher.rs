use std::collections::HashSet;

use tracing::debug;

use crate::catalog::store::TileCatalog;
use crate::core::hand::{HAND_SIZE, UNKNOWN_TILE, WILDCARD_TILE};

/// A candidate is accepted only with strictly more shared distinct
/// characters than this
pub const SIMILARITY_THRESHOLD: usize = 3;

/// Reconcile raw recognized text against the catalog, producing exactly
/// [`HAND_SIZE`] candidate names.
///
/// Tokens are split on whitespace and line breaks. An exact (case-sensitive)
/// catalog name (or the wildcard sentinel) is accepted immediately; other
/// tokens fall back to the character-overlap heuristic and map to
/// [`UNKNOWN_TILE`] when nothing clears the threshold. The output is padded
/// with [`UNKNOWN_TILE`] or truncated to exactly [`HAND_SIZE`] entries.
pub fn match_tokens(text: &str, catalog: &TileCatalog) -> Vec<String> {
    let mut matched: Vec<String> = text
        .split_whitespace()
        .map(|token| match_token(token, catalog))
        .collect();

    while matched.len() < HAND_SIZE {
        matched.push(UNKNOWN_TILE.to_string());
    }
    matched.truncate(HAND_SIZE);
    matched
}

/// Map one recognized token to a catalog name or the unknown sentinel.
pub fn match_token(token: &str, catalog: &TileCatalog) -> String {
    // Exact matches skip similarity scoring entirely
    if catalog.contains(token) || token == WILDCARD_TILE {
        return token.to_string();
    }

    let lowered = token.to_lowercase();
    let mut best_name: Option<&str> = None;
    let mut best_score = 0;
    for name in catalog.names() {
        let score = common_char_count(&lowered, &name.to_lowercase());
        // Strict comparison: on ties the earlier catalog entry stands
        if score > best_score {
            best_score = score;
            best_name = Some(name);
        }
    }

    match best_name {
        Some(name) if best_score > SIMILARITY_THRESHOLD => {
            debug!(token, matched = name, score = best_score, "fuzzy match");
            name.to_string()
        }
        _ => {
            debug!(token, score = best_score, "no match above threshold");
            UNKNOWN_TILE.to_string()
        }
    }
}

/// Count distinct characters shared by two strings.
///
/// Order- and position-insensitive by design: this is the original
/// recognizer's coarse heuristic, not an edit distance, and its behavior is
/// load-bearing for which tokens map to which tiles.
fn common_char_count(a: &str, b: &str) -> usize {
    let set_a: HashSet<char> = a.chars().collect();
    let set_b: HashSet<char> = b.chars().collect();
    set_a.intersection(&set_b).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TileCatalog {
        TileCatalog::load_embedded().unwrap()
    }

    #[test]
    fn test_common_char_count() {
        assert_eq!(common_char_count("abc", "cba"), 3);
        assert_eq!(common_char_count("aabbcc", "abc"), 3);
        assert_eq!(common_char_count("abc", "xyz"), 0);
        assert_eq!(common_char_count("", "abc"), 0);
    }

    #[test]
    fn test_exact_match_accepted_immediately() {
        let catalog = catalog();
        assert_eq!(match_token("Anguirus", &catalog), "Anguirus");
        assert_eq!(match_token(WILDCARD_TILE, &catalog), WILDCARD_TILE);
    }

    #[test]
    fn test_fuzzy_match_above_threshold() {
        let catalog = catalog();
        // Dropped letter, still plenty of shared characters
        assert_eq!(match_token("Godzila(1954)", &catalog), "Godzilla(1954)");
        assert_eq!(match_token("biolante", &catalog), "Biollante");
    }

    #[test]
    fn test_weak_overlap_yields_unknown() {
        let catalog = catalog();
        assert_eq!(match_token("xyz", &catalog), UNKNOWN_TILE);
        assert_eq!(match_token("@@", &catalog), UNKNOWN_TILE);
    }

    #[test]
    fn test_threshold_is_strictly_greater_than_three() {
        let catalog = catalog();
        // "gdz" shares exactly {g, d, z} with the Godzilla tiles; three
        // distinct characters does not clear the strict threshold
        assert_eq!(match_token("gdz", &catalog), UNKNOWN_TILE);
        // One more shared character is enough
        assert_eq!(match_token("gdzi", &catalog), "Godzilla(1954)");
    }

    #[test]
    fn test_tie_break_keeps_earlier_catalog_entry() {
        let catalog = catalog();
        // "mothra" shares all six of its distinct characters with each of
        // the three Mothra tiles; the first catalog entry stands
        assert_eq!(match_token("mothra", &catalog), "Mothra(1961)");
    }

    #[test]
    fn test_idempotent_on_canonical_input() {
        let catalog = catalog();
        let names = [
            "Anguirus",
            "Hedorah",
            "Minilla",
            "Biollante",
            "Battra",
            "Orga",
            "Kiryu",
            "Gotengo",
            "Zilla",
        ];
        let text = names.join("\n");
        assert_eq!(match_tokens(&text, &catalog), names);
    }

    #[test]
    fn test_short_input_padded_with_unknown() {
        let catalog = catalog();
        let result = match_tokens("Anguirus Hedorah", &catalog);
        assert_eq!(result.len(), HAND_SIZE);
        assert_eq!(result[0], "Anguirus");
        assert_eq!(result[1], "Hedorah");
        assert!(result[2..].iter().all(|n| n == UNKNOWN_TILE));
    }

    #[test]
    fn test_long_input_truncated() {
        let catalog = catalog();
        let text = "Anguirus ".repeat(12);
        let result = match_tokens(&text, &catalog);
        assert_eq!(result.len(), HAND_SIZE);
        assert!(result.iter().all(|n| n == "Anguirus"));
    }

    #[test]
    fn test_empty_input_is_all_unknown() {
        let catalog = catalog();
        let result = match_tokens("", &catalog);
        assert_eq!(result, vec![UNKNOWN_TILE; HAND_SIZE]);
    }
}
