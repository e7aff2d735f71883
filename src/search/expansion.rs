//! Symptom and synonym expansion tables
//!
//! Both tables map onto canonical disease names and are fixed at build time.
//! Expansion fires only when the whole normalized query equals a key; a key
//! appearing inside a longer query is left alone.

/// Symptom phrase -> canonical disease name
pub const SYMPTOM_TABLE: &[(&str, &str)] = &[
    ("bloody droppings", "coccidiosis"),
    ("green droppings", "salmonellosis"),
    ("swollen head", "infectious coryza"),
    ("nasal discharge", "chronic respiratory disease"),
    ("watery eyes", "newcastle disease"),
    ("coughing", "chronic respiratory disease"),
    ("labored breathing", "infectious bronchitis"),
    ("ruffled feathers", "avian influenza"),
    ("weight loss", "colibacillosis"),
    ("paralysis", "marek's disease"),
];

/// Abbreviation / alternate name -> canonical disease name
pub const SYNONYM_TABLE: &[(&str, &str)] = &[
    ("e coli", "colibacillosis"),
    ("crd", "chronic respiratory disease"),
    ("ib", "infectious bronchitis"),
    ("ai", "avian influenza"),
    ("nd", "newcastle disease"),
    ("coccidia", "coccidiosis"),
    ("cocci", "coccidiosis"),
    ("flu", "avian influenza"),
];

/// Lookup tables consulted by the search engine. Symptoms are checked before
/// synonyms; at most one substitution is applied.
#[derive(Debug, Clone, Copy)]
pub struct ExpansionTables {
    symptoms: &'static [(&'static str, &'static str)],
    synonyms: &'static [(&'static str, &'static str)],
}

impl Default for ExpansionTables {
    fn default() -> Self {
        Self {
            symptoms: SYMPTOM_TABLE,
            synonyms: SYNONYM_TABLE,
        }
    }
}

impl ExpansionTables {
    /// Build tables from custom mappings
    pub fn new(
        symptoms: &'static [(&'static str, &'static str)],
        synonyms: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { symptoms, synonyms }
    }

    /// Expand a normalized query. First match wins: symptom table, then
    /// synonym table, then the query as typed.
    pub fn expand<'a>(&self, query: &'a str) -> &'a str {
        if let Some((_, disease)) = self.symptoms.iter().find(|(phrase, _)| *phrase == query) {
            return disease;
        }
        if let Some((_, disease)) = self.synonyms.iter().find(|(name, _)| *name == query) {
            return disease;
        }
        query
    }
}
