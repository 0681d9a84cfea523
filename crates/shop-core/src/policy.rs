//! The authorization/dispatch decision table.
//!
//! [`decide`] maps one request's facts to exactly one terminal action: an
//! [`Operation`] to run, or a [`Rejection`] to encode. Rules are evaluated
//! in a fixed priority order and short-circuit at the first applicable
//! rejection:
//!
//! 1. static asset (GET proceeds with no authentication, anything else is
//!    not-found)
//! 2. path legality — an unknown path is not-found before any method check
//! 3. OPTIONS, answered from the allowed-method table without credentials
//! 4. method legality against the allowed-method table
//! 5. authentication (registration is the single anonymous operation)
//! 6. role and ownership-of-account rules
//! 7. content negotiation (`Accept`)
//! 8. declared body type for writes (`Content-Type`)
//!
//! The self-account rule in step 6 compares the route identifier against
//! the principal's own id and fires for every role — an admin cannot
//! demote or delete their own account either.

use http::Method;
use thiserror::Error;

use crate::principal::{Principal, Role};
use crate::route::{ResourceKind, Route};

// ---------------------------------------------------------------------------
// Allowed-method table
// ---------------------------------------------------------------------------

static REGISTER_COLLECTION: [Method; 1] = [Method::POST];
static USERS_COLLECTION: [Method; 1] = [Method::GET];
static PRODUCTS_COLLECTION: [Method; 2] = [Method::GET, Method::POST];
static ORDERS_COLLECTION: [Method; 2] = [Method::GET, Method::POST];
static USER_ITEM: [Method; 3] = [Method::GET, Method::PUT, Method::DELETE];
static PRODUCT_ITEM: [Method; 3] = [Method::GET, Method::PUT, Method::DELETE];
static ORDER_ITEM: [Method; 1] = [Method::GET];

/// The configured method set for a route, or `None` when the route names
/// nothing. Drives both the 405 check and the OPTIONS response header.
pub fn allowed_methods(route: &Route) -> Option<&'static [Method]> {
    match route {
        Route::Collection(ResourceKind::Register) => Some(&REGISTER_COLLECTION),
        Route::Collection(ResourceKind::User) => Some(&USERS_COLLECTION),
        Route::Collection(ResourceKind::Product) => Some(&PRODUCTS_COLLECTION),
        Route::Collection(ResourceKind::Order) => Some(&ORDERS_COLLECTION),
        Route::Item {
            kind: ResourceKind::User,
            ..
        } => Some(&USER_ITEM),
        Route::Item {
            kind: ResourceKind::Product,
            ..
        } => Some(&PRODUCT_ITEM),
        Route::Item {
            kind: ResourceKind::Order,
            ..
        } => Some(&ORDER_ITEM),
        // The matcher never produces a register item route.
        Route::Item {
            kind: ResourceKind::Register,
            ..
        } => None,
        Route::StaticAsset | Route::Unknown => None,
    }
}

// ---------------------------------------------------------------------------
// Decision types
// ---------------------------------------------------------------------------

/// One resource operation the dispatcher runs once every check passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Hand the request to the static file server.
    ServeStatic,
    /// Answer OPTIONS with the route's configured methods.
    Preflight { allow: &'static [Method] },
    ListUsers,
    ViewUser { id: String },
    UpdateUser { id: String },
    DeleteUser { id: String },
    Register,
    ListProducts,
    ViewProduct { id: String },
    CreateProduct,
    UpdateProduct { id: String },
    DeleteProduct { id: String },
    ListOrders,
    ViewOrder { id: String },
    CreateOrder,
}

/// A terminal rejection. Each variant maps deterministically to one HTTP
/// response; none of them propagates as an error past the dispatch
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Missing or invalid credentials — the only rejection that invites a
    /// retry with different input (401 + `WWW-Authenticate: Basic`).
    #[error("authentication required")]
    Unauthenticated,
    /// Valid identity, insufficient role.
    #[error("forbidden")]
    Forbidden,
    /// Unknown route, or an instance invisible to the caller.
    #[error("not found")]
    NotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
    /// The caller does not accept a JSON response.
    #[error("not acceptable")]
    NotAcceptable,
    /// Malformed body, failed validation, or a disallowed self-modification.
    #[error("{0}")]
    BadRequest(String),
}

/// Facts about one request. Everything [`decide`] needs, nothing it could
/// use to reach outside the request.
#[derive(Debug, Clone, Copy)]
pub struct RequestFacts<'a> {
    pub route: &'a Route,
    pub method: &'a Method,
    pub principal: Option<&'a Principal>,
    /// `Accept` header admits `application/json` (or `*/*`).
    pub accepts_json: bool,
    /// `Content-Type` header declares `application/json`.
    pub body_is_json: bool,
}

// ---------------------------------------------------------------------------
// The table
// ---------------------------------------------------------------------------

/// Evaluate the decision table for one request.
pub fn decide(facts: &RequestFacts<'_>) -> Result<Operation, Rejection> {
    let route = facts.route;
    let method = facts.method;

    // Static assets are public; only GET ever reaches the file server.
    if matches!(route, Route::StaticAsset) {
        return if *method == Method::GET {
            Ok(Operation::ServeStatic)
        } else {
            Err(Rejection::NotFound)
        };
    }

    // Path legality before method legality.
    let Some(allow) = allowed_methods(route) else {
        return Err(Rejection::NotFound);
    };

    if *method == Method::OPTIONS {
        return Ok(Operation::Preflight { allow });
    }
    if !allow.contains(method) {
        return Err(Rejection::MethodNotAllowed);
    }

    if requires_authentication(route) {
        let principal = facts.principal.ok_or(Rejection::Unauthenticated)?;
        check_role(route, method, principal)?;
    }

    if !facts.accepts_json {
        return Err(Rejection::NotAcceptable);
    }
    if (*method == Method::POST || *method == Method::PUT) && !facts.body_is_json {
        return Err(Rejection::BadRequest(
            "Invalid Content-Type. Expected application/json".to_string(),
        ));
    }

    Ok(operation_for(route, method))
}

/// Registration is the single anonymous operation; every other API route
/// requires a principal.
fn requires_authentication(route: &Route) -> bool {
    !matches!(route, Route::Collection(ResourceKind::Register))
}

/// Role and own-account rules. Only called with a principal present.
fn check_role(route: &Route, method: &Method, principal: &Principal) -> Result<(), Rejection> {
    match route {
        Route::Item {
            kind: ResourceKind::User,
            id,
        } => {
            // Own-account modification is rejected for every role, and
            // before the admin gate below.
            if *method == Method::PUT && *id == principal.id {
                return Err(Rejection::BadRequest(
                    "Updating own data is not allowed".to_string(),
                ));
            }
            if *method == Method::DELETE && *id == principal.id {
                return Err(Rejection::BadRequest(
                    "Deleting own account is not allowed".to_string(),
                ));
            }
            if principal.role != Role::Admin {
                return Err(Rejection::Forbidden);
            }
        }
        Route::Item {
            kind: ResourceKind::Product,
            ..
        } => {
            if *method != Method::GET && principal.role != Role::Admin {
                return Err(Rejection::Forbidden);
            }
        }
        // Order items admit GET only; visibility is the operation's
        // ownership filter, never a role rejection here.
        Route::Item {
            kind: ResourceKind::Order,
            ..
        } => {}
        Route::Collection(ResourceKind::User) => {
            if principal.role != Role::Admin {
                return Err(Rejection::Forbidden);
            }
        }
        Route::Collection(ResourceKind::Product) => {
            if *method == Method::POST && principal.role != Role::Admin {
                return Err(Rejection::Forbidden);
            }
        }
        Route::Collection(ResourceKind::Order) => {
            // Orders always bind to their creator as the owning customer,
            // so admins may not create them.
            if *method == Method::POST && principal.role != Role::Customer {
                return Err(Rejection::Forbidden);
            }
        }
        Route::Collection(ResourceKind::Register) | Route::StaticAsset | Route::Unknown => {}
        Route::Item {
            kind: ResourceKind::Register,
            ..
        } => {}
    }
    Ok(())
}

/// Map a legal, authorized (route, method) pair to its operation. Only
/// reached for methods the allowed-method table admits.
fn operation_for(route: &Route, method: &Method) -> Operation {
    match route {
        Route::Collection(ResourceKind::Register) => Operation::Register,
        Route::Collection(ResourceKind::User) => Operation::ListUsers,
        Route::Collection(ResourceKind::Product) => {
            if *method == Method::POST {
                Operation::CreateProduct
            } else {
                Operation::ListProducts
            }
        }
        Route::Collection(ResourceKind::Order) => {
            if *method == Method::POST {
                Operation::CreateOrder
            } else {
                Operation::ListOrders
            }
        }
        Route::Item {
            kind: ResourceKind::User,
            id,
        } => {
            if *method == Method::PUT {
                Operation::UpdateUser { id: id.clone() }
            } else if *method == Method::DELETE {
                Operation::DeleteUser { id: id.clone() }
            } else {
                Operation::ViewUser { id: id.clone() }
            }
        }
        Route::Item {
            kind: ResourceKind::Product,
            id,
        } => {
            if *method == Method::PUT {
                Operation::UpdateProduct { id: id.clone() }
            } else if *method == Method::DELETE {
                Operation::DeleteProduct { id: id.clone() }
            } else {
                Operation::ViewProduct { id: id.clone() }
            }
        }
        Route::Item {
            kind: ResourceKind::Order,
            id,
        } => Operation::ViewOrder { id: id.clone() },
        // Guarded by the allowed-method table above.
        Route::Item {
            kind: ResourceKind::Register,
            ..
        }
        | Route::StaticAsset
        | Route::Unknown => unreachable!("route {route:?} has no operations"),
    }
}
