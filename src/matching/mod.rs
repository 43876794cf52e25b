//! Approximate name matching for recognized text.
//!
//! Text recognition happens elsewhere (this crate never sees an image); what
//! arrives here is a noisy token stream that must be reconciled against the
//! canonical catalog. The matcher is explicitly best-effort:
//!
//! 1. Exact (case-sensitive) catalog names pass through untouched.
//! 2. Everything else is scored by the number of distinct characters shared
//!    with each catalog name, case-folded, and accepted only above a strict
//!    threshold.
//! 3. The output always has exactly 9 entries; shortfalls are padded with
//!    the unknown sentinel and extras are discarded.
//!
//! The character-overlap score is a deliberately weak heuristic; it ignores
//! ordering and positions and is not an edit distance. It is kept bit-for-bit
//! compatible with the original recognizer because changing it changes
//! which tokens map to which tiles; downstream components treat unknown
//! outputs as first-class values rather than failures.

pub mod name_matcher;

pub use name_matcher::{match_token, match_tokens, SIMILARITY_THRESHOLD};
