//! Product catalog operations.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use shop_store::{NewProduct, Product, ProductPatch};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/products
pub fn list(state: &AppState) -> Result<Response, AppError> {
    Ok(Json(state.products.list()).into_response())
}

/// GET /api/products/{id}
pub fn view(state: &AppState, id: &str) -> Result<Response, AppError> {
    let product = state.products.find_by_id(id).ok_or(AppError::NotFound)?;
    Ok(Json(product).into_response())
}

/// POST /api/products — admin-gated by the table.
pub fn create(state: &AppState, payload: NewProduct) -> Result<Response, AppError> {
    let product = state.products.insert(Product::create(payload)?);
    tracing::info!(product_id = %product.id, "added product");
    Ok((StatusCode::CREATED, Json(product)).into_response())
}

/// PUT /api/products/{id} — partial update; the stored document is only
/// replaced once the patched result validates.
pub fn update(state: &AppState, id: &str, patch: ProductPatch) -> Result<Response, AppError> {
    let current = state.products.find_by_id(id).ok_or(AppError::NotFound)?;
    let next = current.updated(patch)?;
    let stored = state.products.replace(id, next).ok_or(AppError::NotFound)?;
    Ok(Json(stored).into_response())
}

/// DELETE /api/products/{id} — remove and return the deleted product.
pub fn delete(state: &AppState, id: &str) -> Result<Response, AppError> {
    let removed = state.products.remove(id).ok_or(AppError::NotFound)?;
    Ok(Json(removed).into_response())
}
