//! CSV loader for the medicine catalog
//!
//! The source is a comma-delimited UTF-8 table with a header row. Four
//! columns are required; anything else is ignored. A missing value inside a
//! row is coerced to the empty string, never an error.

use super::{Catalog, MedicineRecord};
use csv::ReaderBuilder;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Required header names, as they appear in the source file
pub const BRAND_COLUMN: &str = "Name of Brand";
pub const DISEASES_COLUMN: &str = "Diseases Treated";
pub const FORMULATION_COLUMN: &str = "Formulation";
pub const DOSAGE_FORM_COLUMN: &str = "Dosage Form";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read catalog source: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),
}

impl From<LoadError> for crate::error::AppError {
    fn from(err: LoadError) -> Self {
        crate::error::AppError::DataUnavailable(err.to_string())
    }
}

/// Read the catalog from a CSV file, preserving row order.
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    // flexible: ragged rows null-coalesce to "" instead of failing
    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers = reader.headers()?.clone();
    let column = |name: &'static str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(LoadError::MissingColumn(name))
    };

    let brand_idx = column(BRAND_COLUMN)?;
    let diseases_idx = column(DISEASES_COLUMN)?;
    let formulation_idx = column(FORMULATION_COLUMN)?;
    let dosage_form_idx = column(DOSAGE_FORM_COLUMN)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let field = |idx: usize| row.get(idx).unwrap_or("").trim().to_string();

        records.push(MedicineRecord {
            brand: field(brand_idx),
            diseases_treated: field(diseases_idx),
            formulation: field(formulation_idx),
            dosage_form: field(dosage_form_idx),
        });
    }

    debug!("loaded {} catalog rows from {}", records.len(), path.display());
    Ok(records)
}
