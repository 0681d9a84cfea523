//! The dispatch fallback handler.
//!
//! Gathers one request's facts (route class, method, principal,
//! negotiation headers), runs the `shop-core` decision table, and executes
//! the resulting operation. The framework router is bypassed on purpose:
//! path and method legality belong to the table, which keeps the
//! 404-before-405 priority and the OPTIONS answers under one roof.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use shop_core::{decide, Operation, Principal, RequestFacts, Route};

use crate::auth;
use crate::error::AppError;
use crate::ops;
use crate::state::AppState;

/// Request bodies beyond this size are rejected as bad-request.
const BODY_LIMIT: usize = 1024 * 1024;

/// Handle one request: classify, authenticate, decide, execute.
pub async fn dispatch(State(state): State<AppState>, request: Request) -> Response {
    let method = request.method().clone();
    let route = Route::match_path(request.uri().path());

    // Static territory never authenticates; everything else resolves the
    // principal once, before the table runs.
    let principal = if matches!(route, Route::StaticAsset) {
        None
    } else {
        auth::authenticate(&state.users, request.headers())
    };

    let facts = RequestFacts {
        route: &route,
        method: &method,
        principal: principal.as_ref(),
        accepts_json: accepts_json(request.headers()),
        body_is_json: declares_json_body(request.headers()),
    };

    match decide(&facts) {
        Ok(operation) => run(operation, principal, &state, request)
            .await
            .unwrap_or_else(|err| err.into_response()),
        Err(rejection) => AppError::from(rejection).into_response(),
    }
}

/// Execute an operation the decision table admitted.
async fn run(
    operation: Operation,
    principal: Option<Principal>,
    state: &AppState,
    request: Request,
) -> Result<Response, AppError> {
    match operation {
        Operation::ServeStatic => Ok(serve_static(state, request).await),
        Operation::Preflight { allow } => Ok(preflight(allow)),

        Operation::ListUsers => ops::users::list(state),
        Operation::ViewUser { id } => ops::users::view(state, &id),
        Operation::UpdateUser { id } => {
            let payload = read_json(request).await?;
            ops::users::update(state, &id, payload)
        }
        Operation::DeleteUser { id } => ops::users::delete(state, &id),
        Operation::Register => {
            let payload = read_json(request).await?;
            ops::users::register(state, payload)
        }

        Operation::ListProducts => ops::products::list(state),
        Operation::ViewProduct { id } => ops::products::view(state, &id),
        Operation::CreateProduct => {
            let payload = read_json(request).await?;
            ops::products::create(state, payload)
        }
        Operation::UpdateProduct { id } => {
            let payload = read_json(request).await?;
            ops::products::update(state, &id, payload)
        }
        Operation::DeleteProduct { id } => ops::products::delete(state, &id),

        Operation::ListOrders => ops::orders::list(state, &require(principal)?),
        Operation::ViewOrder { id } => ops::orders::view(state, &id, &require(principal)?),
        Operation::CreateOrder => {
            let payload = read_json(request).await?;
            ops::orders::create(state, payload, &require(principal)?)
        }
    }
}

/// The table only admits principal-bound operations with a principal
/// present; a miss here is a table bug, reported as 500 — never a panic.
fn require(principal: Option<Principal>) -> Result<Principal, AppError> {
    principal.ok_or_else(|| {
        AppError::Internal("authorized operation reached without a principal".to_string())
    })
}

/// Hand the request to the static file service.
async fn serve_static(state: &AppState, request: Request) -> Response {
    match state.assets.clone().oneshot(request).await {
        Ok(response) => response.map(Body::new),
        Err(infallible) => match infallible {},
    }
}

/// Answer OPTIONS from the allowed-method table.
fn preflight(allow: &'static [Method]) -> Response {
    let methods = allow
        .iter()
        .map(Method::as_str)
        .collect::<Vec<_>>()
        .join(",");
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, methods),
            (
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                "Content-Type,Accept".to_string(),
            ),
            (header::ACCESS_CONTROL_MAX_AGE, "86400".to_string()),
            (
                header::ACCESS_CONTROL_EXPOSE_HEADERS,
                "Content-Type,Accept".to_string(),
            ),
        ],
    )
        .into_response()
}

/// Collect and decode a JSON request body. Oversized or malformed bodies
/// are bad-request; the table already verified the declared content type.
async fn read_json<T: DeserializeOwned>(request: Request) -> Result<T, AppError> {
    let bytes = axum::body::to_bytes(request.into_body(), BODY_LIMIT)
        .await
        .map_err(|err| AppError::BadRequest(format!("failed to read request body: {err}")))?;
    serde_json::from_slice(&bytes)
        .map_err(|err| AppError::BadRequest(format!("invalid JSON body: {err}")))
}

/// `Accept` admits JSON when it names `application/json` or `*/*`; a
/// missing header does not.
fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .map(|accept| accept.contains("application/json") || accept.contains("*/*"))
        .unwrap_or(false)
}

/// `Content-Type` declares a JSON body.
fn declares_json_body(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|content_type| content_type.contains("application/json"))
        .unwrap_or(false)
}
