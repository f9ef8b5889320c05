//! Name-to-place resolution over the gazetteer.
//!
//! Matching order: exact case-insensitive name match, then token-overlap
//! partial match, then fallback to the table's first entry. Resolution
//! never fails; the confidence of the match travels with the result so
//! the host application can warn the user about a guessed place.

use log::warn;
use serde::Serialize;

use crate::gazetteer::{GAZETTEER, GeoPlace};

/// Minimum token length considered for partial matching.
const MIN_TOKEN_LEN: usize = 3;

/// How confidently a query was matched to a gazetteer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchConfidence {
    /// Case-insensitive full-name match.
    Exact,
    /// Token-overlap match; plausibly right, worth confirming.
    Partial,
    /// Nothing matched; the default place was substituted.
    Fallback,
}

/// A resolved place together with the confidence of the match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlaceResolution {
    pub place: GeoPlace,
    pub confidence: MatchConfidence,
}

/// Lookup handle over a place table.
///
/// Holds a borrowed table so tests can substitute a small fixture set;
/// production code uses [`Gazetteer::builtin`].
#[derive(Debug, Clone)]
pub struct Gazetteer {
    entries: &'static [GeoPlace],
}

impl Gazetteer {
    /// Gazetteer over the compiled-in city table.
    pub fn builtin() -> Self {
        Self { entries: GAZETTEER }
    }

    /// Gazetteer over a caller-supplied table. The first entry is the
    /// fallback place; the table must not be empty.
    pub fn with_entries(entries: &'static [GeoPlace]) -> Self {
        assert!(!entries.is_empty(), "gazetteer table must not be empty");
        Self { entries }
    }

    /// All entries, in table order.
    pub fn entries(&self) -> &[GeoPlace] {
        self.entries
    }

    /// Resolve a free-text place name.
    ///
    /// Always returns a place; an empty or unmatched query resolves to
    /// the table's first entry with [`MatchConfidence::Fallback`].
    pub fn resolve(&self, query: &str) -> PlaceResolution {
        let query = query.trim();
        if query.is_empty() {
            warn!("empty place query, using fallback place {}", self.entries[0].name);
            return self.fallback();
        }

        let query_lower = query.to_lowercase();
        for place in self.entries {
            if place.name.to_lowercase() == query_lower {
                return PlaceResolution {
                    place: *place,
                    confidence: MatchConfidence::Exact,
                };
            }
        }

        for place in self.entries {
            if tokens_overlap(&query_lower, &place.name.to_lowercase()) {
                return PlaceResolution {
                    place: *place,
                    confidence: MatchConfidence::Partial,
                };
            }
        }

        warn!("place query {query:?} unmatched, using fallback place {}", self.entries[0].name);
        self.fallback()
    }

    fn fallback(&self) -> PlaceResolution {
        PlaceResolution {
            place: self.entries[0],
            confidence: MatchConfidence::Fallback,
        }
    }
}

/// Token-overlap test between a query and a candidate name.
///
/// Both sides are split on commas and whitespace; a token of at least
/// [`MIN_TOKEN_LEN`] chars that is a substring of the other side (in
/// either direction) counts as a match.
fn tokens_overlap(query: &str, candidate: &str) -> bool {
    let query_tokens = split_tokens(query);
    let candidate_tokens = split_tokens(candidate);

    for q in &query_tokens {
        for c in &candidate_tokens {
            if q.contains(c.as_str()) || c.contains(q.as_str()) {
                return true;
            }
        }
    }
    false
}

fn split_tokens(s: &str) -> Vec<String> {
    s.split(|ch: char| ch == ',' || ch.is_whitespace())
        .map(str::trim)
        .filter(|t| t.len() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}
