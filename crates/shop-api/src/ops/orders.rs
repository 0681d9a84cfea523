//! Order operations, with the ownership filter.
//!
//! Visibility is a data filter, not a rejection: an order another
//! customer owns is indistinguishable from one that does not exist.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use shop_core::Principal;
use shop_store::{NewOrder, Order};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/orders — admins see every order, customers only their own.
pub fn list(state: &AppState, principal: &Principal) -> Result<Response, AppError> {
    let orders = if principal.is_admin() {
        state.orders.list()
    } else {
        state.orders.list_by_customer(&principal.id)
    };
    Ok(Json(orders).into_response())
}

/// GET /api/orders/{id}
pub fn view(state: &AppState, id: &str, principal: &Principal) -> Result<Response, AppError> {
    let order = state.orders.find_by_id(id).ok_or(AppError::NotFound)?;
    if !principal.is_admin() && order.customer_id != principal.id {
        return Err(AppError::NotFound);
    }
    Ok(Json(order).into_response())
}

/// POST /api/orders — customer-gated by the table; the caller is always
/// the owning customer.
pub fn create(
    state: &AppState,
    payload: NewOrder,
    principal: &Principal,
) -> Result<Response, AppError> {
    let order = state.orders.insert(Order::create(payload, &principal.id)?);
    tracing::info!(order_id = %order.id, customer_id = %order.customer_id, "placed order");
    Ok((StatusCode::CREATED, Json(order)).into_response())
}
