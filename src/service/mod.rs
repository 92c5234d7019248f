//! Cached Product Service
//!
//! The coordination core of the crate: serves product reads with a per-id
//! read-through cache and keeps that cache consistent with every store
//! mutation.
//!
//! # Caching policy
//! - `get_by_id` is the hot path and the only cached read. Both outcomes of a
//!   lookup are cached: a found product and a confirmed absence, so repeated
//!   misses for the same id do not repeatedly hit the store.
//! - `list_all` and `get_by_category` always read through. Their result sets
//!   are broad and cheap targeted invalidation is impractical with a single
//!   flat cache, so mutations would otherwise leave them stale.
//! - Mutations evict proactively instead of patching derived entries, trading
//!   a later cache miss for correctness.
//!
//! # Concurrency
//! The cache sits behind an async RwLock and is safe for concurrent callers.
//! Read-through is deliberately not atomic: a miss releases the lock while
//! the store is consulted, so two concurrent misses may both read the store
//! and both populate the entry. Last writer wins.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::cache::{CacheStats, CachedLookup, ProductCache, AGGREGATE_KEY, CACHE_NAME};
use crate::error::Result;
use crate::models::{NewProduct, Product, ProductChanges};
use crate::store::ProductStore;

// == Cached Product Service ==
/// Product CRUD operations with read-through caching on point lookups.
pub struct CachedProductService {
    store: Arc<dyn ProductStore>,
    cache: Arc<RwLock<ProductCache>>,
}

impl CachedProductService {
    // == Constructor ==
    /// Creates a new service around a store with an empty cache.
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        info!("Initializing {} cache", CACHE_NAME);
        Self {
            store,
            cache: Arc::new(RwLock::new(ProductCache::new())),
        }
    }

    // == List All ==
    /// Returns every product, always reading through to the store.
    pub async fn list_all(&self) -> Result<Vec<Product>> {
        info!("Fetching all products from store");
        self.store.list_all().await
    }

    // == Get By Id ==
    /// Point lookup with read-through caching.
    ///
    /// A cache hit (including a cached absence) answers without touching the
    /// store. On a miss the store outcome, present or absent, is cached under
    /// the id. A store fault propagates and caches nothing: a fault must
    /// never be remembered as "absent" or real lookups would be suppressed
    /// until the next invalidation.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Product>> {
        if let Some(lookup) = self.cache.write().await.get(id) {
            return Ok(lookup.into_option());
        }

        info!("Fetching product with id {} from store", id);
        let outcome = self.store.find_by_id(id).await?;

        self.cache
            .write()
            .await
            .put(id.to_string(), CachedLookup::from(outcome.clone()));

        Ok(outcome)
    }

    // == Get By Category ==
    /// Returns all products in a category, always reading through.
    pub async fn get_by_category(&self, category: &str) -> Result<Vec<Product>> {
        info!("Fetching products with category {} from store", category);
        self.store.find_by_category(category).await
    }

    // == Create ==
    /// Persists a new product.
    ///
    /// The aggregate cache key is invalidated so an all-products view can
    /// never miss the addition; the per-id entry is not pre-populated.
    pub async fn create(&self, draft: NewProduct) -> Result<Product> {
        info!("Creating new product: {}", draft.name);
        self.cache.write().await.evict(AGGREGATE_KEY);
        self.store.insert(draft).await
    }

    // == Update ==
    /// Merges field changes into an existing product.
    ///
    /// Returns `None` (with the cache untouched) when no record exists for
    /// the id. Otherwise the aggregate key is evicted before the store write,
    /// and the merged result is written through to the per-id cache entry so
    /// the next point lookup is served without a store call.
    pub async fn update(&self, id: &str, changes: ProductChanges) -> Result<Option<Product>> {
        info!("Attempting to update product with id: {}", id);

        let Some(existing) = self.store.find_by_id(id).await? else {
            warn!("Product with id {} not found for update", id);
            return Ok(None);
        };

        self.cache.write().await.evict(AGGREGATE_KEY);

        let updated = self.store.save(existing.merged(changes)).await?;

        self.cache
            .write()
            .await
            .put(updated.id.clone(), CachedLookup::Found(updated.clone()));

        info!("Successfully updated product with id: {}", updated.id);
        Ok(Some(updated))
    }

    // == Delete ==
    /// Deletes a product by id.
    ///
    /// Returns `false` with no side effects when the record does not exist.
    /// Otherwise the aggregate key is evicted before the delete executes, and
    /// the per-id entry is evicted once the store delete completes.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        info!("Attempting to delete product with id: {}", id);

        if !self.store.exists_by_id(id).await? {
            warn!("Product with id {} not found for deletion", id);
            return Ok(false);
        }

        self.cache.write().await.evict(AGGREGATE_KEY);
        self.store.delete_by_id(id).await?;
        self.cache.write().await.evict(id);

        info!("Successfully deleted product with id: {}", id);
        Ok(true)
    }

    // == Cache Stats ==
    /// Returns a snapshot of cache statistics.
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    // == Clear Cache ==
    /// Drops every cache entry. Used by the stats surface and test setup.
    pub async fn clear_cache(&self) {
        self.cache.write().await.evict_all();
    }

    /// Current number of cache entries.
    pub async fn cache_len(&self) -> usize {
        self.cache.read().await.len()
    }

    #[cfg(test)]
    pub(crate) async fn cached_lookup(&self, id: &str) -> Option<CachedLookup> {
        self.cache.read().await.peek(id).cloned()
    }
}
