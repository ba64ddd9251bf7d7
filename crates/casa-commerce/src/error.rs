//! Commerce error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in commerce operations.
///
/// All of these are recoverable by the caller; mapping them onto wire
/// status codes is the transport layer's job.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Price is zero or negative.
    #[error("Invalid price: {0} (must be positive)")]
    InvalidPrice(Decimal),

    /// Discount percentage outside the 0..=100 range.
    #[error("Invalid discount: {0} (must be between 0 and 100)")]
    InvalidDiscount(Decimal),

    /// A 100% discount leaves no base price to recover.
    #[error("Cannot recover a base price from a 100% discount")]
    FullDiscount,

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Requested quantity exceeds available stock.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: String,
        requested: u32,
        available: u32,
    },

    /// Quantity must be positive.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// An order must contain at least one line.
    #[error("Order contains no line items")]
    EmptyOrder,

    /// Order status transition not allowed by the lifecycle table.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    /// Page or page size outside the accepted range.
    #[error("Invalid pagination parameter: {0}")]
    InvalidPaginationParameter(String),

    /// Field constraint failed at construction.
    #[error("Validation error: {0}")]
    ValidationError(String),
}
