//! Exact-match filter path
//!
//! Independent of the query matcher: no expansion tables, no fuzziness.
//! Category narrows the base catalog by substring on the diseases field;
//! dosage form and brand then restrict the running subset by exact equality.
//! Filter results are presented separately from query results, never merged.

use crate::catalog::{Catalog, MedicineRecord};
use std::collections::BTreeSet;

/// Sentinel meaning "this dimension is not constrained"
pub const ALL_SENTINEL: &str = "All";

/// Fixed disease-category choices offered by the filter UI
pub const CATEGORY_OPTIONS: &[&str] =
    &["All", "Bacterial", "Viral", "Protozoal", "Nutritional", "Others"];

/// One filter interaction. `None` and the `"All"` sentinel both leave a
/// dimension unconstrained; active dimensions combine with logical AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    /// Disease-category keyword, matched as substring of diseases treated
    pub category: Option<String>,
    /// Exact dosage form value
    pub dosage_form: Option<String>,
    /// Exact brand value
    pub brand: Option<String>,
}

fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != ALL_SENTINEL)
}

impl FilterSelection {
    /// True when no dimension is constrained
    pub fn is_empty(&self) -> bool {
        active(&self.category).is_none()
            && active(&self.dosage_form).is_none()
            && active(&self.brand).is_none()
    }
}

/// Apply the selection to the catalog: category first, then dosage form,
/// then brand, each restricting the running subset.
pub fn filter_catalog(catalog: &Catalog, selection: &FilterSelection) -> Vec<MedicineRecord> {
    let mut subset: Vec<&MedicineRecord> = catalog.iter().collect();

    if let Some(category) = active(&selection.category) {
        let needle = category.to_lowercase();
        subset.retain(|r| r.diseases_treated.to_lowercase().contains(&needle));
    }

    if let Some(form) = active(&selection.dosage_form) {
        subset.retain(|r| r.dosage_form == form);
    }

    if let Some(brand) = active(&selection.brand) {
        subset.retain(|r| r.brand == brand);
    }

    subset.into_iter().cloned().collect()
}

/// Distinct non-empty dosage forms, sorted, with the "All" sentinel first
pub fn dosage_form_options(catalog: &Catalog) -> Vec<String> {
    facet_options(catalog, |r| &r.dosage_form)
}

/// Distinct non-empty brands, sorted, with the "All" sentinel first
pub fn brand_options(catalog: &Catalog) -> Vec<String> {
    facet_options(catalog, |r| &r.brand)
}

fn facet_options<F>(catalog: &Catalog, field: F) -> Vec<String>
where
    F: Fn(&MedicineRecord) -> &String,
{
    let distinct: BTreeSet<&String> = catalog
        .iter()
        .map(&field)
        .filter(|v| !v.is_empty())
        .collect();

    let mut options = vec![ALL_SENTINEL.to_string()];
    options.extend(distinct.into_iter().cloned());
    options
}
