//! Order status lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CommerceError;

/// Order status. The lifecycle is linear with a cancellation exit:
///
/// ```text
/// PENDING -> PROCESSING -> SHIPPED -> DELIVERED
///    |            |
///    +-> CANCELLED <-+
/// ```
///
/// DELIVERED and CANCELLED are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order confirmed and being prepared.
    Processing,
    /// Order handed to the carrier.
    Shipped,
    /// Order received by the customer.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    /// Wire name, matching what the storage layer persists.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// Parse a wire name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Some(OrderStatus::Pending),
            "PROCESSING" => Some(OrderStatus::Processing),
            "SHIPPED" => Some(OrderStatus::Shipped),
            "DELIVERED" => Some(OrderStatus::Delivered),
            "CANCELLED" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Whether the lifecycle table allows moving to `to`.
    pub fn can_transition_to(&self, to: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, to),
            (Pending, Processing)
                | (Pending, Cancelled)
                | (Processing, Shipped)
                | (Processing, Cancelled)
                | (Shipped, Delivered)
        )
    }

    /// Move to `to`, or fail with
    /// [`CommerceError::InvalidStatusTransition`].
    pub fn transition(&self, to: OrderStatus) -> Result<OrderStatus, CommerceError> {
        if !self.can_transition_to(to) {
            return Err(CommerceError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: to.as_str().to_string(),
            });
        }
        Ok(to)
    }

    /// Cancellation is only open before shipping.
    pub fn can_be_cancelled(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Processing)
    }

    /// Whether no further transitions exist.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
