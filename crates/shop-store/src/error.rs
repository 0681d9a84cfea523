//! Store-level error taxonomy.

use thiserror::Error;

/// Failure modes of record construction and store writes. Both surface to
/// clients as bad-request with the message as the `error` field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A document failed schema validation.
    #[error("{0}")]
    Validation(String),

    /// A registration reused an existing account email.
    #[error("email already in use")]
    DuplicateEmail,
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        StoreError::Validation(msg.into())
    }
}
