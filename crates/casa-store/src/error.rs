//! Storage error types.

use casa_commerce::CommerceError;
use thiserror::Error;

/// Errors from the storage layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// No entity with the given identifier.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Slug already used by another entity of the same kind.
    #[error("Duplicate slug: {0}")]
    DuplicateSlug(String),

    /// Order number already persisted.
    #[error("Duplicate order number: {0}")]
    DuplicateOrderNumber(String),

    /// A domain rule failed during a storage operation, e.g. the
    /// stock re-check inside `save_order`.
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}
