//! In-memory product catalog: the seeded collection and the six operations
//! the HTTP layer exposes over it.

pub mod product;
pub mod seed;

use chrono::Utc;
use parking_lot::RwLock;
use serde::Serialize;
use tracing::info;

use crate::errors::StoreError;
use product::{NewProduct, Product, ProductPatch};

/// Listing windows start at this fixed record offset, not at 0. Existing
/// consumers of the emulated service depend on this exact window; any skip
/// the caller sends is ignored and reported back as 0.
pub const LIST_WINDOW_START: usize = 6;

/// Listing limit applied when the caller does not send one.
pub const DEFAULT_LIST_LIMIT: usize = 5;

/// Listing envelope: the windowed records plus collection-level counters.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: usize,
    pub skip: usize,
    pub limit: usize,
}

/// The shared product collection.
///
/// A single lock guards the collection and every operation holds it for its
/// full read-modify-write, so each operation appears atomic to concurrent
/// callers. Constructed once at startup and handed to the handler layer as
/// an `Arc` — never a module-level global.
pub struct CatalogStore {
    products: RwLock<Vec<Product>>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    /// Create a store holding the fixed seed records.
    pub fn new() -> Self {
        Self { products: RwLock::new(seed::seed_products()) }
    }

    /// Discard the collection and reinstall the seed set. Returns the
    /// resulting record count.
    pub fn reset(&self) -> usize {
        let mut products = self.products.write();
        *products = seed::seed_products();
        info!(event_name = "catalog.reset", total = products.len(), "catalog reset to seed set");
        products.len()
    }

    /// Number of records currently in the collection.
    pub fn len(&self) -> usize {
        self.products.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.read().is_empty()
    }

    /// Fixed-offset listing window over the collection.
    pub fn list(&self, limit: Option<usize>) -> ProductPage {
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
        let products = self.products.read();
        let start = LIST_WINDOW_START.min(products.len());
        let end = LIST_WINDOW_START.saturating_add(limit).min(products.len());

        ProductPage { products: products[start..end].to_vec(), total: products.len(), skip: 0, limit }
    }

    /// First record whose id matches.
    pub fn get(&self, id: u64) -> Result<Product, StoreError> {
        let products = self.products.read();
        products.iter().find(|record| record.id == id).cloned().ok_or(StoreError::NotFound { id })
    }

    /// Append a fully defaulted record built from the add payload. The new
    /// id is one past the current maximum, or 1 for an empty collection.
    pub fn add(&self, draft: NewProduct) -> Product {
        let mut products = self.products.write();
        let id = products.iter().map(|record| record.id).max().unwrap_or(0) + 1;
        let record = draft.into_product(id, Utc::now());
        products.push(record.clone());
        info!(
            event_name = "catalog.product.added",
            product_id = id,
            total = products.len(),
            "product added"
        );
        record
    }

    /// Shallow-merge the patch over the record with the given id, in place.
    pub fn update(&self, id: u64, patch: ProductPatch) -> Result<Product, StoreError> {
        let mut products = self.products.write();
        let record = products
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StoreError::NotFound { id })?;
        record.apply_patch(patch, Utc::now());
        info!(event_name = "catalog.product.updated", product_id = id, "product updated");
        Ok(record.clone())
    }

    /// Remove the record with the given id, preserving the relative order of
    /// the remaining records.
    pub fn remove(&self, id: u64) -> Result<(), StoreError> {
        let mut products = self.products.write();
        let index = products
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::NotFound { id })?;
        products.remove(index);
        info!(
            event_name = "catalog.product.removed",
            product_id = id,
            total = products.len(),
            "product removed"
        );
        Ok(())
    }
}
