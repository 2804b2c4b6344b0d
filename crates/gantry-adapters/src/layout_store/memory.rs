//! In-memory layout store with built-in layouts.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use gantry_core::{
    application::{ApplicationError, ports::LayoutStore},
    domain::{Layout, LayoutId},
    error::GantryResult,
};

use crate::builtin_layouts;

/// Thread-safe in-memory layout store.
#[derive(Clone)]
pub struct InMemoryLayoutStore {
    inner: Arc<RwLock<HashMap<LayoutId, Layout>>>,
}

impl InMemoryLayoutStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store with built-in layouts loaded.
    pub fn with_builtin() -> GantryResult<Self> {
        let store = Self::new();
        for layout in builtin_layouts::all_layouts() {
            store.insert(layout)?;
        }
        Ok(store)
    }

    /// Get the number of layouts.
    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryLayoutStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutStore for InMemoryLayoutStore {
    fn get(&self, id: &LayoutId) -> GantryResult<Layout> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(id).cloned().ok_or_else(|| {
            ApplicationError::LayoutResolution {
                reason: format!("no layout named '{id}'"),
            }
            .into()
        })
    }

    fn list(&self) -> GantryResult<Vec<Layout>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.values().cloned().collect())
    }

    fn insert(&self, layout: Layout) -> GantryResult<()> {
        // Validate before insertion
        layout
            .validate()
            .map_err(gantry_core::error::GantryError::Domain)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.insert(layout.id.clone(), layout);
        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_store_is_populated() {
        let store = InMemoryLayoutStore::with_builtin().unwrap();
        assert!(!store.is_empty());
        for name in ["standard", "chi", "gin", "gorilla"] {
            let id = LayoutId::new(name).unwrap();
            assert!(store.get(&id).is_ok(), "missing builtin layout '{name}'");
        }
    }

    #[test]
    fn unknown_layout_is_a_resolution_error() {
        let store = InMemoryLayoutStore::with_builtin().unwrap();
        let id = LayoutId::new("fiber").unwrap();
        assert!(store.get(&id).is_err());
    }
}
