//! In-Memory Store Module
//!
//! HashMap-backed implementation of `ProductStore`, with per-operation call
//! counters so callers (and tests) can observe exactly which operations the
//! service layer invoked.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{Result, ServiceError};
use crate::models::{NewProduct, Product};
use crate::store::ProductStore;

// == Store Call Counters ==
/// Snapshot of how many times each store operation has been invoked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreCalls {
    pub list_all: u64,
    pub find_by_id: u64,
    pub find_by_category: u64,
    pub insert: u64,
    pub save: u64,
    pub exists_by_id: u64,
    pub delete_by_id: u64,
    pub delete_all: u64,
}

#[derive(Debug, Default)]
struct CallCounters {
    list_all: AtomicU64,
    find_by_id: AtomicU64,
    find_by_category: AtomicU64,
    insert: AtomicU64,
    save: AtomicU64,
    exists_by_id: AtomicU64,
    delete_by_id: AtomicU64,
    delete_all: AtomicU64,
}

impl CallCounters {
    fn snapshot(&self) -> StoreCalls {
        StoreCalls {
            list_all: self.list_all.load(Ordering::Relaxed),
            find_by_id: self.find_by_id.load(Ordering::Relaxed),
            find_by_category: self.find_by_category.load(Ordering::Relaxed),
            insert: self.insert.load(Ordering::Relaxed),
            save: self.save.load(Ordering::Relaxed),
            exists_by_id: self.exists_by_id.load(Ordering::Relaxed),
            delete_by_id: self.delete_by_id.load(Ordering::Relaxed),
            delete_all: self.delete_all.load(Ordering::Relaxed),
        }
    }
}

// == Memory Store ==
/// In-memory `ProductStore` backend.
///
/// Records live in a HashMap behind an async RwLock; identifiers are v4 UUIDs
/// assigned on insert.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, Product>>,
    calls: CallCounters,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates a new empty MemoryStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the per-operation call counters.
    pub fn calls(&self) -> StoreCalls {
        self.calls.snapshot()
    }

    /// Returns the current number of records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true when the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Product>> {
        self.calls.list_all.fetch_add(1, Ordering::Relaxed);
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>> {
        self.calls.find_by_id.fetch_add(1, Ordering::Relaxed);
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>> {
        self.calls.find_by_category.fetch_add(1, Ordering::Relaxed);
        Ok(self
            .records
            .read()
            .await
            .values()
            .filter(|product| product.category == category)
            .cloned()
            .collect())
    }

    async fn insert(&self, draft: NewProduct) -> Result<Product> {
        self.calls.insert.fetch_add(1, Ordering::Relaxed);
        let product = draft.with_id(Uuid::new_v4().to_string());
        self.records
            .write()
            .await
            .insert(product.id.clone(), product.clone());
        Ok(product)
    }

    async fn save(&self, product: Product) -> Result<Product> {
        self.calls.save.fetch_add(1, Ordering::Relaxed);
        let mut records = self.records.write().await;
        if !records.contains_key(&product.id) {
            return Err(ServiceError::Internal(format!(
                "No record to overwrite for id {}",
                product.id
            )));
        }
        records.insert(product.id.clone(), product.clone());
        Ok(product)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool> {
        self.calls.exists_by_id.fetch_add(1, Ordering::Relaxed);
        Ok(self.records.read().await.contains_key(id))
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.calls.delete_by_id.fetch_add(1, Ordering::Relaxed);
        self.records.write().await.remove(id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        self.calls.delete_all.fetch_add(1, Ordering::Relaxed);
        self.records.write().await.clear();
        Ok(())
    }
}
