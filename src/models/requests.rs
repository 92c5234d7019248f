//! Request DTOs for the catalog API
//!
//! Defines the structure of incoming HTTP request bodies. Validation here is
//! purely a boundary concern; the service layer trusts what it receives.

use serde::Deserialize;

use super::product::{NewProduct, ProductChanges};

/// Request body for creating a product (POST /products)
///
/// # Fields
/// - `name`: display name, must be non-empty
/// - `price`: non-negative finite price
/// - `category`: grouping category, must be non-empty
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    /// Display name
    pub name: String,
    /// Price in the catalog currency
    pub price: f64,
    /// Grouping category
    pub category: String,
}

impl CreateProductRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Name cannot be empty".to_string());
        }
        if self.category.trim().is_empty() {
            return Some("Category cannot be empty".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Some("Price must be a non-negative number".to_string());
        }
        None
    }

    /// Converts the validated request into a product draft.
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name,
            price: self.price,
            category: self.category,
        }
    }
}

/// Request body for updating a product (PUT /products/:id)
///
/// All fields are optional; omitted fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductRequest {
    /// New display name, if changing
    #[serde(default)]
    pub name: Option<String>,
    /// New price, if changing
    #[serde(default)]
    pub price: Option<f64>,
    /// New category, if changing
    #[serde(default)]
    pub category: Option<String>,
}

impl UpdateProductRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Some("Name cannot be empty".to_string());
            }
        }
        if let Some(category) = &self.category {
            if category.trim().is_empty() {
                return Some("Category cannot be empty".to_string());
            }
        }
        if let Some(price) = self.price {
            if !price.is_finite() || price < 0.0 {
                return Some("Price must be a non-negative number".to_string());
            }
        }
        None
    }

    /// Converts the validated request into field changes.
    pub fn into_changes(self) -> ProductChanges {
        ProductChanges {
            name: self.name,
            price: self.price,
            category: self.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialize() {
        let json = r#"{"name": "Chair", "price": 80.0, "category": "Furniture"}"#;
        let req: CreateProductRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Chair");
        assert_eq!(req.price, 80.0);
        assert_eq!(req.category, "Furniture");
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_create_request_empty_name() {
        let req = CreateProductRequest {
            name: "  ".to_string(),
            price: 10.0,
            category: "Misc".to_string(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_create_request_negative_price() {
        let req = CreateProductRequest {
            name: "Chair".to_string(),
            price: -1.0,
            category: "Furniture".to_string(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_create_request_nan_price() {
        let req = CreateProductRequest {
            name: "Chair".to_string(),
            price: f64::NAN,
            category: "Furniture".to_string(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_update_request_partial_deserialize() {
        let json = r#"{"name": "Armchair"}"#;
        let req: UpdateProductRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name.as_deref(), Some("Armchair"));
        assert!(req.price.is_none());
        assert!(req.category.is_none());
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_update_request_rejects_empty_name() {
        let req = UpdateProductRequest {
            name: Some("".to_string()),
            ..Default::default()
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_update_request_into_changes() {
        let req = UpdateProductRequest {
            price: Some(99.0),
            ..Default::default()
        };
        let changes = req.into_changes();
        assert_eq!(changes.price, Some(99.0));
        assert!(changes.name.is_none());
    }
}
