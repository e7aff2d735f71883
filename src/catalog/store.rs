//! Session-scoped catalog cache
//!
//! The source file is parsed at most once per store. The slot is guarded by a
//! mutex held across the initial read, so a cold start in a concurrent host
//! still performs a single load; every later call hands back the same `Arc`.

use super::{loader, Catalog};
use crate::error::AppError;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::info;

/// Lazily-initialized, owned cache around the catalog source file
pub struct CatalogStore {
    source: PathBuf,
    cache: Mutex<Option<Arc<Catalog>>>,
}

impl CatalogStore {
    /// Create a store for the given CSV source. Nothing is read until the
    /// first `load`.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            cache: Mutex::new(None),
        }
    }

    /// Path of the underlying source file
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Load the catalog, reading the source file on first call only.
    ///
    /// Repeated calls return the same in-memory instance; callers can rely on
    /// `Arc::ptr_eq` holding between two loads within a session.
    pub fn load(&self) -> Result<Arc<Catalog>, AppError> {
        let mut slot = self.cache.lock().expect("catalog cache mutex poisoned");

        if let Some(catalog) = &*slot {
            return Ok(Arc::clone(catalog));
        }

        let catalog = Arc::new(loader::load_catalog(&self.source)?);
        info!(
            "loaded catalog: {} records from {}",
            catalog.len(),
            self.source.display()
        );

        *slot = Some(Arc::clone(&catalog));
        Ok(catalog)
    }
}
