//! Search pipeline
//!
//! Ties normalization, expansion, and the row predicate together. Every
//! submission re-runs the full scan; at a few hundred rows that is cheaper
//! than any index would be worth.

use super::expansion::ExpansionTables;
use super::matcher::{self, MatchConfig};
use crate::catalog::{Catalog, MedicineRecord};
use tracing::debug;

/// Result of one query submission. "No query entered" and "query entered,
/// zero results" are distinct states and must stay distinguishable at the
/// presentation boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Query was empty after trimming; no search was performed
    NoQuery,
    /// Search ran and nothing matched
    NoMatches,
    /// Matching records, in catalog order
    Matches(Vec<MedicineRecord>),
}

impl SearchOutcome {
    /// Number of matched records
    pub fn count(&self) -> usize {
        match self {
            SearchOutcome::Matches(records) => records.len(),
            _ => 0,
        }
    }
}

/// Query matcher over the in-memory catalog
pub struct SearchEngine {
    config: MatchConfig,
    tables: ExpansionTables,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine {
    /// Engine with the default cutoff and the built-in expansion tables
    pub fn new() -> Self {
        Self {
            config: MatchConfig::default(),
            tables: ExpansionTables::default(),
        }
    }

    /// Engine with a custom matcher configuration
    pub fn with_config(config: MatchConfig) -> Self {
        Self {
            config,
            tables: ExpansionTables::default(),
        }
    }

    /// Engine with custom configuration and expansion tables
    pub fn with_tables(config: MatchConfig, tables: ExpansionTables) -> Self {
        Self { config, tables }
    }

    /// Run one query against the catalog.
    ///
    /// The raw query is NFKC-folded, trimmed, and lower-cased, then expanded
    /// through the symptom and synonym tables (whole-query equality only).
    /// Matches come back in catalog order; there is no ranking and no cap.
    pub fn search(&self, catalog: &Catalog, raw_query: &str) -> SearchOutcome {
        let normalized = matcher::fold(raw_query);
        let normalized = normalized.trim();

        if normalized.is_empty() {
            return SearchOutcome::NoQuery;
        }

        let expanded = self.tables.expand(normalized);
        if expanded != normalized {
            debug!("expanded query {:?} -> {:?}", normalized, expanded);
        }

        let matches: Vec<MedicineRecord> = catalog
            .iter()
            .filter(|record| matcher::record_matches(record, expanded, &self.config))
            .cloned()
            .collect();

        debug!("query {:?}: {} of {} records", expanded, matches.len(), catalog.len());

        if matches.is_empty() {
            SearchOutcome::NoMatches
        } else {
            SearchOutcome::Matches(matches)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(brand: &str, diseases: &str, formulation: &str, dosage_form: &str) -> MedicineRecord {
        MedicineRecord {
            brand: brand.to_string(),
            diseases_treated: diseases.to_string(),
            formulation: formulation.to_string(),
            dosage_form: dosage_form.to_string(),
        }
    }

    fn sample_catalog() -> Catalog {
        vec![
            record(
                "Tylodox",
                "Chronic Respiratory Disease, E. coli",
                "Tylosin + Doxycycline",
                "Powder",
            ),
            record("Coxitreat", "Coccidiosis", "Amprolium", "Oral Solution"),
            record("Bronchovet", "Infectious Bronchitis", "Bromhexine", "Oral Solution"),
            record("Coccimax", "Coccidiosis, Salmonellosis", "Toltrazuril", "Tablet"),
        ]
    }

    #[test]
    fn test_empty_query_is_no_query() {
        let engine = SearchEngine::new();
        let catalog = sample_catalog();

        assert_eq!(engine.search(&catalog, ""), SearchOutcome::NoQuery);
        assert_eq!(engine.search(&catalog, "   "), SearchOutcome::NoQuery);
        assert_eq!(engine.search(&catalog, "\t\n"), SearchOutcome::NoQuery);
    }

    #[test]
    fn test_unmatched_query_is_no_matches() {
        let engine = SearchEngine::new();
        let catalog = sample_catalog();

        assert_eq!(engine.search(&catalog, "xyzzy"), SearchOutcome::NoMatches);
    }

    #[test]
    fn test_synonym_query_finds_expanded_disease() {
        let engine = SearchEngine::new();
        let catalog = sample_catalog();

        // "crd" expands to "chronic respiratory disease" and is found as a
        // substring of the Tylodox diseases field
        match engine.search(&catalog, "crd") {
            SearchOutcome::Matches(records) => {
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].brand, "Tylodox");
            }
            other => panic!("expected matches, got {:?}", other),
        }
    }

    #[test]
    fn test_symptom_query_finds_all_disease_records() {
        let engine = SearchEngine::new();
        let catalog = sample_catalog();

        match engine.search(&catalog, "bloody droppings") {
            SearchOutcome::Matches(records) => {
                let brands: Vec<&str> = records.iter().map(|r| r.brand.as_str()).collect();
                assert_eq!(brands, vec!["Coxitreat", "Coccimax"]);
            }
            other => panic!("expected matches, got {:?}", other),
        }
    }

    #[test]
    fn test_embedded_synonym_is_not_expanded() {
        let engine = SearchEngine::new();
        let catalog = sample_catalog();

        // "my crd case" is not a table key, is no substring of any field, and
        // no token is close enough to it
        assert_eq!(engine.search(&catalog, "my crd case"), SearchOutcome::NoMatches);
    }

    #[test]
    fn test_results_preserve_catalog_order() {
        let engine = SearchEngine::new();
        let catalog = sample_catalog();

        match engine.search(&catalog, "oral solution") {
            SearchOutcome::Matches(records) => {
                let brands: Vec<&str> = records.iter().map(|r| r.brand.as_str()).collect();
                assert_eq!(brands, vec!["Coxitreat", "Bronchovet"]);
            }
            other => panic!("expected matches, got {:?}", other),
        }
    }

    #[test]
    fn test_query_normalization() {
        let engine = SearchEngine::new();
        let catalog = sample_catalog();

        // Leading/trailing whitespace and casing are irrelevant
        let a = engine.search(&catalog, "  CRD  ");
        let b = engine.search(&catalog, "crd");
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_character_query_matches_broadly() {
        let engine = SearchEngine::new();
        let catalog = sample_catalog();

        match engine.search(&catalog, "o") {
            SearchOutcome::Matches(records) => assert_eq!(records.len(), catalog.len()),
            other => panic!("expected matches, got {:?}", other),
        }
    }

    #[test]
    fn test_every_match_is_explainable() {
        // Each returned record holds the expanded query as a substring of a
        // field, or a token within the similarity cutoff
        let engine = SearchEngine::new();
        let catalog = sample_catalog();

        for query in ["coccidiosis", "tablet", "tylosine", "bronch"] {
            if let SearchOutcome::Matches(records) = engine.search(&catalog, query) {
                let expanded = ExpansionTables::default().expand(query);
                for r in &records {
                    let substring = r
                        .searchable_fields()
                        .iter()
                        .any(|f| matcher::fold(f).contains(expanded));
                    let fuzzy = r.searchable_fields().iter().any(|f| {
                        matcher::fold(f)
                            .split_whitespace()
                            .any(|t| strsim::normalized_levenshtein(expanded, t) >= 0.6)
                    });
                    assert!(substring || fuzzy, "unexplained match for {:?}: {:?}", query, r);
                }
            }
        }
    }

    #[test]
    fn test_cutoff_parametrized_over_both_variants() {
        let catalog = sample_catalog();

        // "podr" is within 0.6 of the "powder" token but not within 0.8
        let lenient = SearchEngine::with_config(MatchConfig::with_cutoff(0.6));
        let strict = SearchEngine::with_config(MatchConfig::with_cutoff(0.8));

        assert!(matches!(lenient.search(&catalog, "podr"), SearchOutcome::Matches(_)));
        assert_eq!(strict.search(&catalog, "podr"), SearchOutcome::NoMatches);

        // An exact token stays matched under both cutoffs
        for engine in [&lenient, &strict] {
            assert!(matches!(
                engine.search(&catalog, "amprolium"),
                SearchOutcome::Matches(_)
            ));
        }
    }

    #[test]
    fn test_empty_catalog_yields_no_matches() {
        let engine = SearchEngine::new();
        let catalog: Catalog = Vec::new();

        assert_eq!(engine.search(&catalog, "coccidiosis"), SearchOutcome::NoMatches);
        assert_eq!(engine.search(&catalog, ""), SearchOutcome::NoQuery);
    }
}
