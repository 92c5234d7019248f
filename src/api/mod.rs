//! API Module
//!
//! HTTP handlers and routing for the catalog REST API.
//!
//! # Endpoints
//! - `GET /products` - List all products
//! - `GET /products/:id` - Fetch a product by id (cached)
//! - `GET /products/category/:category` - Fetch products by category
//! - `POST /products` - Create a product
//! - `PUT /products/:id` - Update a product
//! - `DELETE /products/:id` - Delete a product
//! - `GET /cache/stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
