//! In-memory medicine catalog
//!
//! The catalog is an ordered, read-only sequence of rows loaded once per
//! session from a CSV source. Row position in source order is the only
//! identity a record has.

pub mod loader;
pub mod store;

pub use loader::{load_catalog, LoadError};
pub use store::CatalogStore;

use serde::Serialize;

/// One row of the medicine catalog
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MedicineRecord {
    /// Brand name ("Name of Brand" column)
    pub brand: String,
    /// Free text, may list several diseases ("Diseases Treated" column)
    pub diseases_treated: String,
    /// Active ingredient text ("Formulation" column)
    pub formulation: String,
    /// Tablet, powder, oral solution, ... ("Dosage Form" column)
    pub dosage_form: String,
}

/// Ordered sequence of records, load order preserved
pub type Catalog = Vec<MedicineRecord>;

impl MedicineRecord {
    /// Searchable field values in the order the matcher combines them:
    /// diseases treated, brand, formulation, dosage form.
    pub fn searchable_fields(&self) -> [&str; 4] {
        [
            &self.diseases_treated,
            &self.brand,
            &self.formulation,
            &self.dosage_form,
        ]
    }
}
