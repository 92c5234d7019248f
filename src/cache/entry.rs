//! Cache Entry Module
//!
//! Defines the tagged value stored under each cache key.

use crate::models::Product;

// == Cached Lookup ==
/// Outcome of a point lookup, as remembered by the cache.
///
/// `Absent` records that the store was consulted and had no record, so
/// repeated misses for the same id do not hit the store again. A key with no
/// entry at all means "not yet looked up", which is a different state.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedLookup {
    /// The store returned this product
    Found(Product),
    /// The store was consulted and had no record for the id
    Absent,
}

impl CachedLookup {
    /// Converts the cached outcome back into the service-level `Option`.
    pub fn into_option(self) -> Option<Product> {
        match self {
            CachedLookup::Found(product) => Some(product),
            CachedLookup::Absent => None,
        }
    }

    /// True when this entry records a successful lookup.
    pub fn is_found(&self) -> bool {
        matches!(self, CachedLookup::Found(_))
    }
}

impl From<Option<Product>> for CachedLookup {
    fn from(value: Option<Product>) -> Self {
        match value {
            Some(product) => CachedLookup::Found(product),
            None => CachedLookup::Absent,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewProduct;

    fn chair() -> Product {
        NewProduct::new("Chair", 80.0, "Furniture").with_id("p1")
    }

    #[test]
    fn test_found_roundtrip() {
        let lookup = CachedLookup::from(Some(chair()));
        assert!(lookup.is_found());
        assert_eq!(lookup.into_option(), Some(chair()));
    }

    #[test]
    fn test_absent_roundtrip() {
        let lookup = CachedLookup::from(None);
        assert!(!lookup.is_found());
        assert_eq!(lookup.into_option(), None);
    }

    #[test]
    fn test_absent_is_distinct_from_missing_entry() {
        // An Option<CachedLookup> has three states; Absent is not None.
        let cached: Option<CachedLookup> = Some(CachedLookup::Absent);
        let uncached: Option<CachedLookup> = None;
        assert_ne!(cached, uncached);
    }
}
