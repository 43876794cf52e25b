use serde::{Deserialize, Serialize};

/// Number of tiles in a complete hand
pub const HAND_SIZE: usize = 9;

/// Sentinel for a tile the recognizer could not map to the catalog
pub const UNKNOWN_TILE: &str = "unknown";

/// Sentinel for the wildcard tile that must be bound before scoring
pub const WILDCARD_TILE: &str = "Oxygen-Destroyer";

/// An ordered hand of tile names submitted for scoring.
///
/// A complete hand holds exactly [`HAND_SIZE`] entries, which may include
/// duplicates, [`UNKNOWN_TILE`] sentinels, or [`WILDCARD_TILE`] occurrences.
/// The length invariant is the caller's responsibility; the scoring engine
/// accepts hands of any length and simply scores what it is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub entries: Vec<String>,
}

impl Hand {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Parse a comma-separated list of tile names.
    ///
    /// Whitespace around each name is trimmed; empty segments are dropped.
    pub fn parse(input: &str) -> Self {
        let entries = input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.entries.len() == HAND_SIZE
    }

    /// Does any entry still carry the wildcard sentinel?
    pub fn has_wildcard(&self) -> bool {
        self.entries.iter().any(|n| n == WILDCARD_TILE)
    }

    /// Positions of wildcard occurrences, in hand order
    pub fn wildcard_positions(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, n)| n.as_str() == WILDCARD_TILE)
            .map(|(i, _)| i)
            .collect()
    }
}

impl From<Vec<String>> for Hand {
    fn from(entries: Vec<String>) -> Self {
        Self::new(entries)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.entries.join(","))
    }
}
