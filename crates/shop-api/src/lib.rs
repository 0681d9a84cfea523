//! # shop-api — Axum Service for the Webshop Backend
//!
//! The HTTP surface over the `shop-core` decision table and the
//! `shop-store` collections.
//!
//! ## Request Flow
//!
//! ```text
//! TraceLayer → dispatch (fallback handler)
//!              ├─ Route::match_path        (shop-core)
//!              ├─ auth::authenticate       (Basic → Principal)
//!              ├─ policy::decide           (the decision table)
//!              └─ ops::* / static assets   (resource operations)
//! ```
//!
//! Every request goes through the single fallback handler: the decision
//! table — not the framework router — owns path and method legality, so
//! the 404/405/OPTIONS priorities stay under its control. Rejections map
//! to terminal responses in [`error::AppError`]; nothing propagates past
//! the dispatch boundary.

pub mod auth;
pub mod dispatch;
pub mod error;
pub mod ops;
pub mod state;

pub use error::AppError;
pub use state::{AppConfig, AppState};

use axum::Router;
use tower_http::trace::TraceLayer;

/// Assemble the application router.
///
/// One fallback handler and a trace layer; all routing happens inside
/// [`dispatch::dispatch`].
pub fn app(state: AppState) -> Router {
    Router::new()
        .fallback(dispatch::dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
