//! Record-level error model.

use thiserror::Error;

/// Result type used across the store and dispatch layers.
pub type RecordResult<T> = Result<T, RecordError>;

/// Failure classes surfaced by record operations.
///
/// Keep this focused on deterministic store failures. Transport concerns
/// (malformed request bodies and the like) are handled at the gateway.
/// Variants display the caller-facing message verbatim; constructors build
/// the message where the failure happens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The requested record does not exist in its collection.
    #[error("{0} not found")]
    NotFound(String),

    /// A parameter or field failed validation.
    #[error("{0}")]
    Validation(String),

    /// A record referenced a key absent from another collection.
    #[error("{0}")]
    Reference(String),

    /// The durable snapshot could not be read or written.
    #[error("{0}")]
    Persistence(String),

    /// Identifier generation gave up after the configured retry budget.
    #[error("identifier space exhausted after {0} attempts")]
    IdSpaceExhausted(u32),
}

impl RecordError {
    /// `what` names the record, e.g. `SKU SKU123` or `Order ORD1001`.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn reference(msg: impl Into<String>) -> Self {
        Self::Reference(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }
}
