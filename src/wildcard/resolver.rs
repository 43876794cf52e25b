use thiserror::Error;
use tracing::debug;

use crate::catalog::store::TileCatalog;
use crate::core::hand::Hand;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no choice request is pending")]
    NoPendingRequest,

    #[error("'{0}' is not among the offered candidates")]
    InvalidChoice(String),
}

/// A pending one-of-N selection for a single wildcard occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceRequest {
    /// Hand position of the wildcard occurrence being bound
    pub position: usize,

    /// Catalog names not currently present anywhere in the hand
    pub candidates: Vec<String>,
}

/// Binds wildcard occurrences to concrete catalog names, one external choice
/// at a time.
///
/// The resolver is a pull-based state machine: [`next_request`] exposes at
/// most one outstanding [`ChoiceRequest`], and [`supply`] binds the answer
/// before the next request is produced. Occurrences are processed strictly
/// in hand-position order, and a name already present anywhere in the
/// (partially resolved) hand is never offered again, so two occurrences in
/// one pass can never bind to the same name.
///
/// An empty candidate pool ends resolution early: the remaining occurrences
/// stay as wildcards and surface to scoring as unresolvable tiles. That is a
/// terminal, acceptable outcome, not an error. Cancellation is the caller's
/// concern; dropping the resolver discards partial progress.
///
/// [`next_request`]: WildcardResolver::next_request
/// [`supply`]: WildcardResolver::supply
#[derive(Debug)]
pub struct WildcardResolver<'a> {
    entries: Vec<String>,
    catalog: &'a TileCatalog,

    /// Wildcard positions in hand order; `cursor` indexes the next unbound one
    positions: Vec<usize>,
    cursor: usize,
}

impl<'a> WildcardResolver<'a> {
    pub fn new(hand: &Hand, catalog: &'a TileCatalog) -> Self {
        let positions = hand.wildcard_positions();
        Self {
            entries: hand.entries.clone(),
            catalog,
            positions,
            cursor: 0,
        }
    }

    /// The next pending selection, or `None` when resolution is finished.
    ///
    /// Finished means every occurrence is bound or the candidate pool has
    /// run dry for the current occurrence (which also strands all later
    /// ones, since the pool only ever shrinks).
    pub fn next_request(&self) -> Option<ChoiceRequest> {
        let position = *self.positions.get(self.cursor)?;
        let candidates = self.candidate_pool();
        if candidates.is_empty() {
            debug!(position, "candidate pool exhausted, leaving wildcards unresolved");
            return None;
        }
        Some(ChoiceRequest {
            position,
            candidates,
        })
    }

    /// Bind `choice` to the pending occurrence.
    ///
    /// # Errors
    ///
    /// `NoPendingRequest` if resolution is already finished, or
    /// `InvalidChoice` if `choice` is not in the offered pool.
    pub fn supply(&mut self, choice: &str) -> Result<(), ResolveError> {
        let request = self.next_request().ok_or(ResolveError::NoPendingRequest)?;
        if !request.candidates.iter().any(|c| c == choice) {
            return Err(ResolveError::InvalidChoice(choice.to_string()));
        }

        debug!(position = request.position, choice, "wildcard bound");
        self.entries[request.position] = choice.to_string();
        self.cursor += 1;
        Ok(())
    }

    /// True once no further requests will be produced
    pub fn is_finished(&self) -> bool {
        self.next_request().is_none()
    }

    /// The hand with all bindings applied; unresolved occurrences keep the
    /// wildcard sentinel
    pub fn into_hand(self) -> Hand {
        Hand::new(self.entries)
    }

    /// Catalog names minus every name currently in the hand, in catalog order
    fn candidate_pool(&self) -> Vec<String> {
        self.catalog
            .names()
            .filter(|name| !self.entries.iter().any(|e| e == name))
            .map(String::from)
            .collect()
    }
}

/// Drive a full resolution pass with a chooser callback.
///
/// The chooser receives a non-empty candidate list and returns the selected
/// name, or `None` to cancel. Cancellation abandons the pass entirely: the
/// caller keeps its original hand and partial bindings are discarded, per
/// the resolution contract.
///
/// A hand without wildcards is returned unchanged and the chooser is never
/// invoked.
pub fn resolve_with<F>(hand: &Hand, catalog: &TileCatalog, mut chooser: F) -> Option<Hand>
where
    F: FnMut(&ChoiceRequest) -> Option<String>,
{
    let mut resolver = WildcardResolver::new(hand, catalog);
    while let Some(request) = resolver.next_request() {
        let choice = chooser(&request)?;
        // A chooser returning a name outside the pool is a caller bug; treat
        // it like a cancellation rather than binding garbage.
        if resolver.supply(&choice).is_err() {
            return None;
        }
    }
    Some(resolver.into_hand())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hand::WILDCARD_TILE;

    fn catalog() -> TileCatalog {
        TileCatalog::load_embedded().unwrap()
    }

    fn hand(names: &[&str]) -> Hand {
        Hand::new(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_no_wildcards_returns_hand_unchanged() {
        let catalog = catalog();
        let input = hand(&["Anguirus", "Hedorah", "Minilla"]);

        let mut calls = 0;
        let resolved = resolve_with(&input, &catalog, |_| {
            calls += 1;
            None
        })
        .unwrap();

        assert_eq!(resolved, input);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_single_wildcard_candidate_count() {
        let catalog = catalog();
        // 8 distinct resolvable names plus one wildcard
        let input = hand(&[
            "Anguirus",
            "Hedorah",
            "Minilla",
            "Biollante",
            "Battra",
            "Orga",
            "Kiryu",
            "Gotengo",
            WILDCARD_TILE,
        ]);

        let resolver = WildcardResolver::new(&input, &catalog);
        let request = resolver.next_request().unwrap();
        assert_eq!(request.position, 8);
        // The pool excludes exactly the 8 names already in the hand
        assert_eq!(request.candidates.len(), catalog.len() - 8);
        assert!(!request.candidates.iter().any(|c| c == "Anguirus"));
        assert!(!request.candidates.iter().any(|c| c == WILDCARD_TILE));
    }

    #[test]
    fn test_no_repeat_binding_across_occurrences() {
        let catalog = catalog();
        let input = hand(&[
            WILDCARD_TILE,
            WILDCARD_TILE,
            WILDCARD_TILE,
            "Anguirus",
            "Hedorah",
        ]);

        // Always pick the first candidate offered
        let resolved = resolve_with(&input, &catalog, |req| req.candidates.first().cloned())
            .unwrap();

        let mut seen = std::collections::HashSet::new();
        for name in &resolved.entries {
            assert_ne!(name, WILDCARD_TILE);
            assert!(seen.insert(name.clone()), "duplicate binding: {name}");
        }
    }

    #[test]
    fn test_occurrences_processed_in_hand_order() {
        let catalog = catalog();
        let input = hand(&["Anguirus", WILDCARD_TILE, "Hedorah", WILDCARD_TILE]);

        let mut resolver = WildcardResolver::new(&input, &catalog);
        let first = resolver.next_request().unwrap();
        assert_eq!(first.position, 1);
        resolver.supply(&first.candidates[0]).unwrap();

        let second = resolver.next_request().unwrap();
        assert_eq!(second.position, 3);
    }

    #[test]
    fn test_pool_exhaustion_is_terminal_not_error() {
        // A two-tile catalog with both names already in the hand
        let small = TileCatalog::from_tsv(
            "name\tattribute\tera\tcategory\tcolor\n\
             Anguirus\tShowa Kaiju\tShowa\tkaiju\tsepia\n\
             Hedorah\tShowa Kaiju\tShowa\tkaiju\tsepia\n",
        )
        .unwrap();
        let input = hand(&["Anguirus", "Hedorah", WILDCARD_TILE, WILDCARD_TILE]);

        let mut resolver = WildcardResolver::new(&input, &small);
        assert!(resolver.next_request().is_none());
        assert!(resolver.is_finished());
        assert_eq!(resolver.supply("Anguirus"), Err(ResolveError::NoPendingRequest));

        // Remaining occurrences stay as wildcards
        let resolved = resolver.into_hand();
        assert_eq!(resolved.entries[2], WILDCARD_TILE);
        assert_eq!(resolved.entries[3], WILDCARD_TILE);
    }

    #[test]
    fn test_invalid_choice_rejected() {
        let catalog = catalog();
        let input = hand(&["Anguirus", WILDCARD_TILE]);

        let mut resolver = WildcardResolver::new(&input, &catalog);
        assert!(resolver.next_request().is_some());
        // Already in the hand, so not in the pool
        assert_eq!(
            resolver.supply("Anguirus"),
            Err(ResolveError::InvalidChoice("Anguirus".to_string()))
        );
        // The request is still pending and can be answered correctly
        resolver.supply("Hedorah").unwrap();
        assert_eq!(resolver.into_hand().entries[1], "Hedorah");
    }

    #[test]
    fn test_cancellation_returns_none() {
        let catalog = catalog();
        let input = hand(&[WILDCARD_TILE, WILDCARD_TILE]);

        let mut calls = 0;
        let result = resolve_with(&input, &catalog, |req| {
            calls += 1;
            if calls == 1 {
                req.candidates.first().cloned()
            } else {
                None // cancel on the second request
            }
        });

        assert!(result.is_none());
    }
}
