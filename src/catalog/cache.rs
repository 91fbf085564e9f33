//! Process-wide memoization of loaded catalogs.
//!
//! A catalog is immutable once built, so the first successful load of a
//! source is shared by every later caller. The lock is held for the whole
//! load so that concurrent first requests for the same source trigger a
//! single parse. Failed loads are never stored.
//!
//! Sources are keyed by the path exactly as the caller spells it, so a
//! loaded catalog stays reachable after its file is moved or removed.

use super::{load_catalog, CatalogIndex, DataSourceError};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

lazy_static! {
    static ref GLOBAL_CATALOG_CACHE: Arc<CatalogCache> = Arc::new(CatalogCache::new());
}

pub type GuardedCatalog = Arc<CatalogIndex>;

#[derive(Default)]
pub struct CatalogCache {
    loaded: Mutex<HashMap<PathBuf, GuardedCatalog>>,
}

impl CatalogCache {
    pub fn new() -> CatalogCache {
        CatalogCache::default()
    }

    /// The cache shared by the whole process.
    pub fn global() -> Arc<CatalogCache> {
        GLOBAL_CATALOG_CACHE.clone()
    }

    pub fn get_or_load(&self, path: &Path) -> Result<GuardedCatalog, DataSourceError> {
        let mut loaded = self.lock();
        if let Some(catalog) = loaded.get(path) {
            debug!("Catalog cache hit for {:?}", path);
            return Ok(catalog.clone());
        }

        let catalog = Arc::new(load_catalog(path)?);
        loaded.insert(path.to_owned(), catalog.clone());
        Ok(catalog)
    }

    pub fn is_loaded(&self, path: &Path) -> bool {
        self.lock().contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic while loading leaves the map untouched, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, HashMap<PathBuf, GuardedCatalog>> {
        self.loaded.lock().unwrap_or_else(|e| e.into_inner())
    }
}
