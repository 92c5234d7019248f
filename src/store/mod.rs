//! Store Module
//!
//! The persistence collaborator behind the cached product service. The
//! service only ever talks to the `ProductStore` trait; `MemoryStore` is the
//! bundled backend.

mod memory;

pub use memory::{MemoryStore, StoreCalls};

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{NewProduct, Product};

// == Product Store Trait ==
/// Persistence operations over the product collection.
///
/// Each call is atomic on its own; no ordering or transaction guarantees are
/// made across calls. Failures surface as `ServiceError::StoreUnavailable`.
/// Missing records are `None`/`false`, never errors.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Returns every product in the collection.
    async fn list_all(&self) -> Result<Vec<Product>>;

    /// Point lookup by identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>>;

    /// Returns all products in a category, possibly empty.
    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>>;

    /// Persists a new product, assigning it a fresh identifier.
    async fn insert(&self, draft: NewProduct) -> Result<Product>;

    /// Overwrites the record matching the product's id.
    ///
    /// The record must already exist; callers confirm that with a prior
    /// lookup. A save for an unknown id is a store-level fault.
    async fn save(&self, product: Product) -> Result<Product>;

    /// Checks whether a record exists for the identifier.
    async fn exists_by_id(&self, id: &str) -> Result<bool>;

    /// Deletes the record for the identifier.
    ///
    /// Only safe to call after the caller has confirmed existence.
    async fn delete_by_id(&self, id: &str) -> Result<()>;

    /// Deletes every record in the collection.
    async fn delete_all(&self) -> Result<()>;
}
