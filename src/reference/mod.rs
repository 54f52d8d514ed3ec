// ABOUTME: Reference data provider interface and the snapshot-based shared implementation
// ABOUTME: Generators read one immutable catalog snapshot per call; reloads swap the pointer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Reference Data
//!
//! The engine never mutates reference data. Each generation call takes an
//! `Arc` snapshot up front and reads only from it, so a concurrent
//! [`SharedReferenceData::replace`] is never observed mid-computation.

/// Catalog tables, YAML loading and lookups
pub mod catalog;

pub use catalog::{CatalogError, CatalogSummary, ReferenceCatalog};

use std::sync::{Arc, PoisonError, RwLock};

/// Source of reference-data snapshots
pub trait ReferenceDataProvider: Send + Sync {
    /// Current catalog; callers keep the `Arc` for the whole computation
    fn snapshot(&self) -> Arc<ReferenceCatalog>;
}

/// Reloadable catalog with copy-on-read snapshots
#[derive(Debug)]
pub struct SharedReferenceData {
    current: RwLock<Arc<ReferenceCatalog>>,
}

impl SharedReferenceData {
    /// Wrap a catalog
    #[must_use]
    pub fn new(catalog: ReferenceCatalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Shared data seeded with the built-in catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded catalog is corrupt
    pub fn builtin() -> Result<Self, CatalogError> {
        ReferenceCatalog::builtin().map(Self::new)
    }

    /// Swap in a new catalog after validating it
    ///
    /// Snapshots taken before the swap keep reading the old catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` and keeps the current catalog if validation fails
    pub fn replace(&self, catalog: ReferenceCatalog) -> Result<(), CatalogError> {
        catalog.validate()?;
        let recipes = catalog.recipes.len();
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(catalog);
        tracing::info!(recipes, "Reference catalog replaced");
        Ok(())
    }
}

impl ReferenceDataProvider for SharedReferenceData {
    fn snapshot(&self) -> Arc<ReferenceCatalog> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_survives_replace() {
        let shared = SharedReferenceData::builtin().unwrap();
        let before = shared.snapshot();
        assert!(!before.recipes.is_empty());

        shared.replace(ReferenceCatalog::default()).unwrap();

        assert!(!before.recipes.is_empty());
        assert!(shared.snapshot().recipes.is_empty());
    }
}
