//! Product entity and its construction/mutation companions.
//!
//! A `Product` always carries a store-assigned identifier. A product that has
//! not been persisted yet is a `NewProduct` (no id field at all), and partial
//! updates travel as `ProductChanges`.

use serde::{Deserialize, Serialize};

// == Product ==
/// A persisted catalog entry.
///
/// The `id` is assigned by the store on insertion and never changes afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque, unique identifier assigned by the store
    pub id: String,
    /// Display name
    pub name: String,
    /// Non-negative price
    pub price: f64,
    /// Grouping category (not unique)
    pub category: String,
}

impl Product {
    /// Merges field changes into this product, leaving the id untouched.
    ///
    /// Fields absent from `changes` keep their current value.
    pub fn merged(mut self, changes: ProductChanges) -> Self {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        self
    }
}

// == New Product ==
/// A product under construction: all the fields of a `Product` except the id,
/// which only the store may assign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
        }
    }

    /// Promotes the draft to a persisted `Product` with the given id.
    pub fn with_id(self, id: impl Into<String>) -> Product {
        Product {
            id: id.into(),
            name: self.name,
            price: self.price,
            category: self.category,
        }
    }
}

// == Product Changes ==
/// Partial field changes for an update; `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

impl ProductChanges {
    /// True when no field is set; merging this changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.category.is_none()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn chair() -> Product {
        NewProduct::new("Chair", 80.0, "Furniture").with_id("p1")
    }

    #[test]
    fn test_with_id_assigns_identifier() {
        let product = chair();
        assert_eq!(product.id, "p1");
        assert_eq!(product.name, "Chair");
        assert_eq!(product.price, 80.0);
        assert_eq!(product.category, "Furniture");
    }

    #[test]
    fn test_merged_partial_changes() {
        let updated = chair().merged(ProductChanges {
            name: Some("Armchair".to_string()),
            ..Default::default()
        });

        assert_eq!(updated.id, "p1");
        assert_eq!(updated.name, "Armchair");
        assert_eq!(updated.price, 80.0);
        assert_eq!(updated.category, "Furniture");
    }

    #[test]
    fn test_merged_all_fields() {
        let updated = chair().merged(ProductChanges {
            name: Some("Desk".to_string()),
            price: Some(150.0),
            category: Some("Office".to_string()),
        });

        assert_eq!(updated.id, "p1");
        assert_eq!(updated.name, "Desk");
        assert_eq!(updated.price, 150.0);
        assert_eq!(updated.category, "Office");
    }

    #[test]
    fn test_merged_empty_changes_is_identity() {
        let product = chair();
        let updated = product.clone().merged(ProductChanges::default());
        assert_eq!(updated, product);
    }

    #[test]
    fn test_changes_is_empty() {
        assert!(ProductChanges::default().is_empty());
        assert!(!ProductChanges {
            price: Some(1.0),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn test_product_serde_roundtrip() {
        let product = chair();
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
