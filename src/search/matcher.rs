//! Row-match predicate
//!
//! A record matches when the expanded query is a substring of the combined
//! field text, a substring of any single field, or within the similarity
//! cutoff of any whitespace-split token of a field. The per-field substring
//! clause is subsumed by the combined one but is kept and tested separately;
//! dropping it would silently change behavior if the field join ever changes.

use crate::catalog::MedicineRecord;
use strsim::normalized_levenshtein;
use unicode_normalization::UnicodeNormalization;

/// Cutoff used by the default configuration
pub const DEFAULT_SIMILARITY_CUTOFF: f64 = 0.6;

/// Matcher configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    /// Minimum similarity ratio for an approximate token match, in (0, 1]
    pub similarity_cutoff: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            similarity_cutoff: DEFAULT_SIMILARITY_CUTOFF,
        }
    }
}

impl MatchConfig {
    /// Configuration with a custom similarity cutoff
    pub fn with_cutoff(similarity_cutoff: f64) -> Self {
        Self { similarity_cutoff }
    }
}

/// Fold text for comparison: Unicode NFKC, then lowercase
pub fn fold(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase()
}

/// Test one record against an already normalized and expanded query.
///
/// Pure and side-effect-free; field values are null-safe because the loader
/// coalesces absent values to the empty string.
pub fn record_matches(record: &MedicineRecord, query: &str, config: &MatchConfig) -> bool {
    let fields: Vec<String> = record
        .searchable_fields()
        .iter()
        .map(|field| fold(field))
        .collect();
    let combined = fields.join(" ");

    if combined.contains(query) {
        return true;
    }

    if fields.iter().any(|field| field.contains(query)) {
        return true;
    }

    fields.iter().any(|field| {
        field
            .split_whitespace()
            .any(|token| normalized_levenshtein(query, token) >= config.similarity_cutoff)
    })
}
