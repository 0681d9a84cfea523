//! User operations: listing, viewing, role updates, deletion, and
//! registration.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use shop_core::Role;
use shop_store::{Registration, User};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/users — all accounts (admin-gated by the table).
pub fn list(state: &AppState) -> Result<Response, AppError> {
    Ok(Json(state.users.list()).into_response())
}

/// GET /api/users/{id}
pub fn view(state: &AppState, id: &str) -> Result<Response, AppError> {
    let user = state.users.find_by_id(id).ok_or(AppError::NotFound)?;
    Ok(Json(user).into_response())
}

/// PUT /api/users/{id} body: only the role is mutable.
#[derive(Debug, Deserialize)]
pub struct RoleUpdate {
    #[serde(default)]
    pub role: Option<String>,
}

/// PUT /api/users/{id} — change an account's role.
pub fn update(state: &AppState, id: &str, payload: RoleUpdate) -> Result<Response, AppError> {
    if state.users.find_by_id(id).is_none() {
        return Err(AppError::NotFound);
    }
    let role = payload
        .role
        .as_deref()
        .and_then(Role::parse)
        .ok_or_else(|| AppError::BadRequest("role must be \"admin\" or \"customer\"".to_string()))?;
    let updated = state
        .users
        .update(id, |user| user.role = role)
        .ok_or(AppError::NotFound)?;
    Ok(Json(updated).into_response())
}

/// DELETE /api/users/{id} — remove and return the deleted account.
pub fn delete(state: &AppState, id: &str) -> Result<Response, AppError> {
    let removed = state.users.remove(id).ok_or(AppError::NotFound)?;
    Ok(Json(removed).into_response())
}

/// POST /api/register — the single anonymous operation. Always creates a
/// customer; duplicate emails are rejected by the store.
pub fn register(state: &AppState, payload: Registration) -> Result<Response, AppError> {
    let user = User::register(payload)?;
    let user = state.users.insert(user)?;
    tracing::info!(user_id = %user.id, "registered new customer");
    Ok((StatusCode::CREATED, Json(user)).into_response())
}
