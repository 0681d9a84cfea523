//! Resource operations.
//!
//! Invoked only after the decision table proceeds. Role gates live in the
//! table; what remains here is existence (unknown id → 404), the order
//! ownership filter, and store validation (→ 400).

pub mod orders;
pub mod products;
pub mod users;
