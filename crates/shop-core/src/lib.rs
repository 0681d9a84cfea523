//! # shop-core — Authorization/Dispatch Decision Logic
//!
//! The pure core of the webshop backend. Everything in this crate is a
//! function of one request's facts — no I/O, no shared state, no clock.
//!
//! ## Pipeline
//!
//! ```text
//! Authorization header ──► Credentials (credentials)
//! request path         ──► Route       (route)
//! (Route, Method, Principal?, negotiation facts)
//!                      ──► Operation | Rejection (policy::decide)
//! ```
//!
//! Authentication itself (resolving [`Credentials`] to a [`Principal`]
//! against the user store) lives in the API crate; this crate only defines
//! the shapes and the decision table.
//!
//! ## Design Principle
//!
//! The decision table is deliberately a single ordered pure function:
//! every authorization outcome is reproducible from the request facts
//! alone, so the whole table is unit-testable without a server or a store.

pub mod credentials;
pub mod policy;
pub mod principal;
pub mod route;

pub use credentials::Credentials;
pub use policy::{allowed_methods, decide, Operation, Rejection, RequestFacts};
pub use principal::{Principal, Role};
pub use route::{ResourceKind, Route};
