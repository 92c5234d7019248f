//! API Handlers
//!
//! HTTP request handlers for each catalog endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::{Result, ServiceError};
use crate::models::{
    CreateProductRequest, DeleteResponse, HealthResponse, Product, StatsResponse,
    UpdateProductRequest,
};
use crate::service::CachedProductService;
use crate::store::MemoryStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The cached product service; the cache inside it is thread-safe
    pub service: Arc<CachedProductService>,
}

impl AppState {
    /// Creates a new AppState around an existing service.
    pub fn new(service: CachedProductService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Creates a new AppState backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(CachedProductService::new(Arc::new(MemoryStore::new())))
    }
}

/// Handler for GET /products
///
/// Lists every product; never cached.
pub async fn list_products_handler(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = state.service.list_all().await?;
    Ok(Json(products))
}

/// Handler for GET /products/:id
///
/// Point lookup served through the cache; 404 when no record exists.
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    match state.service.get_by_id(&id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(ServiceError::NotFound(id)),
    }
}

/// Handler for GET /products/category/:category
///
/// Grouped lookup; an unknown category is an empty list, not a 404.
pub async fn get_by_category_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Product>>> {
    let products = state.service.get_by_category(&category).await?;
    Ok(Json(products))
}

/// Handler for POST /products
///
/// Creates a product and returns it with its assigned id.
pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    if let Some(error_msg) = req.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let product = state.service.create(req.into_new_product()).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Handler for PUT /products/:id
///
/// Merges the provided field changes into an existing product.
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<Json<Product>> {
    if let Some(error_msg) = req.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    match state.service.update(&id, req.into_changes()).await? {
        Some(product) => Ok(Json(product)),
        None => Err(ServiceError::NotFound(id)),
    }
}

/// Handler for DELETE /products/:id
///
/// Deletes a product; 404 when the id does not exist.
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    if state.service.delete(&id).await? {
        Ok(Json(DeleteResponse::new(id)))
    } else {
        Err(ServiceError::NotFound(id))
    }
}

/// Handler for GET /cache/stats
///
/// Returns current cache statistics.
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.service.cache_stats().await;

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.evictions,
        stats.total_entries,
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
