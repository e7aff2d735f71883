//! Text and JSON rendering of search and filter outcomes
//!
//! The three search states (no query entered, zero results, results with a
//! count) stay distinguishable in both modes.

use crate::catalog::MedicineRecord;
use crate::error::AppError;
use crate::search::SearchOutcome;
use serde_json::json;

/// Neutral prompt shown when no query was entered
pub const NO_QUERY_PROMPT: &str = "Enter a disease, symptom, or ingredient to begin.";

/// Informational message for a search that found nothing
pub const NO_RESULTS_MESSAGE: &str = "No results found. Try a different spelling or symptom.";

/// Informational message for a filter selection that matched nothing
pub const NO_FILTER_RESULTS_MESSAGE: &str = "No products match your filter selections.";

/// Render a search outcome as plain text
pub fn render_search_text(outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::NoQuery => NO_QUERY_PROMPT.to_string(),
        SearchOutcome::NoMatches => NO_RESULTS_MESSAGE.to_string(),
        SearchOutcome::Matches(records) => {
            let mut out = format!(
                "Found {} product(s) matching your search.\n",
                records.len()
            );
            out.push_str(&render_records(records));
            out
        }
    }
}

/// Render a search outcome as a JSON envelope
pub fn render_search_json(outcome: &SearchOutcome) -> Result<String, AppError> {
    let value = match outcome {
        SearchOutcome::NoQuery => json!({ "state": "no_query" }),
        SearchOutcome::NoMatches => json!({
            "state": "no_matches",
            "count": 0,
            "results": [],
        }),
        SearchOutcome::Matches(records) => json!({
            "state": "matches",
            "count": records.len(),
            "results": records,
        }),
    };

    Ok(serde_json::to_string_pretty(&value)?)
}

/// Render filter results as plain text
pub fn render_filter_text(records: &[MedicineRecord]) -> String {
    if records.is_empty() {
        return NO_FILTER_RESULTS_MESSAGE.to_string();
    }

    let mut out = format!("Filtered results: {} product(s).\n", records.len());
    out.push_str(&render_records(records));
    out
}

/// Render filter results as a JSON envelope
pub fn render_filter_json(records: &[MedicineRecord]) -> Result<String, AppError> {
    let value = json!({
        "count": records.len(),
        "results": records,
    });

    Ok(serde_json::to_string_pretty(&value)?)
}

/// Render the available filter choices as plain text
pub fn render_options_text(categories: &[&str], forms: &[String], brands: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Disease categories: {}\n", categories.join(", ")));
    out.push_str(&format!("Dosage forms: {}\n", forms.join(", ")));
    out.push_str(&format!("Brands: {}", brands.join(", ")));
    out
}

/// Render the available filter choices as a JSON envelope
pub fn render_options_json(
    categories: &[&str],
    forms: &[String],
    brands: &[String],
) -> Result<String, AppError> {
    let value = json!({
        "categories": categories,
        "dosage_forms": forms,
        "brands": brands,
    });

    Ok(serde_json::to_string_pretty(&value)?)
}

fn render_records(records: &[MedicineRecord]) -> String {
    // Column-aligned rows: brand | diseases | formulation | dosage form
    let brand_width = records
        .iter()
        .map(|r| r.brand.chars().count())
        .max()
        .unwrap_or(0)
        .max("Brand".len());
    let form_width = records
        .iter()
        .map(|r| r.dosage_form.chars().count())
        .max()
        .unwrap_or(0)
        .max("Form".len());

    let mut out = String::new();
    for record in records {
        out.push_str(&format!(
            "  {:<brand_width$}  {:<form_width$}  {}  [{}]\n",
            record.brand,
            record.dosage_form,
            record.diseases_treated,
            record.formulation,
        ));
    }
    out
}
