//! Query matching over the medicine catalog
//!
//! One configurable pipeline: normalize the raw query, expand it through the
//! symptom and synonym tables, then test every record with a pure predicate.
//! A separate exact-match filter path lives in `filter` and never consults
//! the expansion tables.

pub mod engine;
pub mod expansion;
pub mod filter;
pub mod matcher;

pub use engine::{SearchEngine, SearchOutcome};
pub use expansion::ExpansionTables;
pub use filter::{filter_catalog, FilterSelection};
pub use matcher::MatchConfig;
