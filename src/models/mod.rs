//! Entity and DTO models for the catalog service
//!
//! `product` holds the domain entity; `requests` and `responses` hold the
//! DTOs used for serializing/deserializing HTTP bodies.

pub mod product;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use product::{NewProduct, Product, ProductChanges};
pub use requests::{CreateProductRequest, UpdateProductRequest};
pub use responses::{DeleteResponse, ErrorResponse, HealthResponse, StatsResponse};
