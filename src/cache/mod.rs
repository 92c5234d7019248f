//! Cache Module
//!
//! Provides the in-memory cache of point-lookup outcomes used by the cached
//! product service: a flat map from id to product-or-absent, with statistics.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CachedLookup;
pub use stats::CacheStats;
pub use store::ProductCache;

// == Public Constants ==
/// Cache name, for namespacing if the cache infrastructure is ever shared
/// across entity types
pub const CACHE_NAME: &str = "products";

/// Reserved key for the aggregate (all-products) view; mutations evict it
pub const AGGREGATE_KEY: &str = "all";
