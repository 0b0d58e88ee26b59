//! Reloadable catalog handle.
//!
//! Readers take an `Arc` snapshot and query it without holding a lock.
//! A reload swaps the whole table in one step, so no reader can observe a
//! mix of old and new rows.

use std::fmt;
use std::sync::{Arc, RwLock};

use crate::catalog::CategoryCatalog;

#[derive(Clone)]
pub struct SharedCatalog {
    current: Arc<RwLock<Arc<CategoryCatalog>>>,
}

impl fmt::Debug for SharedCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot();
        f.debug_struct("SharedCatalog")
            .field("categories", &snapshot.categories().len())
            .field("mappings", &snapshot.mappings().len())
            .finish()
    }
}

impl Default for SharedCatalog {
    fn default() -> Self {
        Self::new(CategoryCatalog::builtin())
    }
}

impl SharedCatalog {
    pub fn new(catalog: CategoryCatalog) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    /// The table in effect right now. Later replacements do not affect it.
    pub fn snapshot(&self) -> Arc<CategoryCatalog> {
        let guard = self
            .current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Swap in a fully built replacement and return the previous table.
    pub fn replace(&self, catalog: CategoryCatalog) -> Arc<CategoryCatalog> {
        let next = Arc::new(catalog);
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        tracing::info!(
            categories = next.categories().len(),
            mappings = next.mappings().len(),
            "replacing skill catalog"
        );
        std::mem::replace(&mut *guard, next)
    }
}
