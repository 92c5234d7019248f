//! Product Catalog - a CRUD service with read-through caching
//!
//! Serves Product reads with a per-id cache over a pluggable store, keeping
//! the cache consistent with every mutation.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use service::CachedProductService;
