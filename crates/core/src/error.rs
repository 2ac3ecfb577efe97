//! Domain error model.

use thiserror::Error;

use crate::id::ItemCode;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is locally recoverable: callers report it and carry on. Search
/// misses are not errors at all (they are `None`), and a stock level going
/// negative is not validated anywhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A consumption referenced a code that no inventory record carries.
    #[error("unknown product: {0}")]
    UnknownProduct(ItemCode),

    /// There is no unconsulted consumption left to show.
    #[error("no recent consumption to show")]
    EmptyConsultation,

    /// A stock adjustment targeted a record that does not exist.
    #[error("not found")]
    NotFound,

    /// A value failed validation (e.g. zero quantity, malformed seed entry).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An item code was malformed (e.g. empty).
    #[error("invalid item code: {0}")]
    InvalidCode(String),

    /// Two seed entries share the same code.
    #[error("duplicate item code: {0}")]
    DuplicateCode(ItemCode),

    /// Shared state could not be accessed (poisoned lock).
    #[error("inventory unavailable: {0}")]
    Unavailable(String),
}

impl DomainError {
    pub fn unknown_product(code: impl Into<ItemCode>) -> Self {
        Self::UnknownProduct(code.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_code(msg: impl Into<String>) -> Self {
        Self::InvalidCode(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// `true` for outcomes that are informational rather than failures.
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::EmptyConsultation)
    }
}
