//! Order and order item entities.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::{OrderId, OrderItemId, ProductId, UserId};
use crate::orders::OrderStatus;

/// Shipping contact details captured at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingDetails {
    /// Recipient name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Delivery address, free-form.
    pub address: String,
    /// Optional delivery note.
    pub note: Option<String>,
}

impl ShippingDetails {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
            note: None,
        }
    }

    /// Attach a delivery note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// One line of an order.
///
/// `price` and `discount` are snapshots taken at assembly time: a
/// later repricing of the product must not change what this order
/// charged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Unique line identifier.
    pub id: OrderItemId,
    /// Owning order.
    pub order_id: OrderId,
    /// Product reference (by id, never embedded).
    pub product_id: ProductId,
    /// Quantity ordered. Always positive.
    pub quantity: u32,
    /// Unit base price at order time.
    pub price: Decimal,
    /// Discount percentage at order time.
    pub discount: Decimal,
    /// Discounted unit price times quantity.
    pub subtotal: Decimal,
}

/// A customer order together with its lines.
///
/// The order exclusively owns its items: they are assembled together
/// and the storage collaborator persists them as one unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-facing order number, assigned by the storage layer.
    pub order_number: String,
    /// Owning user.
    pub user_id: UserId,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Sum of base prices times quantities, before discounts.
    pub total_amount: Decimal,
    /// Shipping fee, supplied externally.
    pub shipping_fee: Decimal,
    /// Total discount across all lines.
    pub discount_amount: Decimal,
    /// Amount actually charged: discounted lines plus shipping.
    pub final_amount: Decimal,
    /// Shipping contact details.
    pub shipping: ShippingDetails,
    /// The order lines, in request order.
    pub items: Vec<OrderItem>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Whether the order is still in its cancellation window.
    pub fn can_be_cancelled(&self) -> bool {
        self.status.can_be_cancelled()
    }

    /// Move the order to a new status through the lifecycle table.
    pub fn set_status(&mut self, status: OrderStatus) -> Result<(), CommerceError> {
        self.status = self.status.transition(status)?;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Cancel the order if its status still allows it.
    pub fn cancel(&mut self) -> Result<(), CommerceError> {
        self.set_status(OrderStatus::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> Order {
        Order {
            id: OrderId::generate(),
            order_number: "ORD-2024-001".to_string(),
            user_id: UserId::new("user-1"),
            status: OrderStatus::Pending,
            total_amount: Decimal::from(1_000_000),
            shipping_fee: Decimal::from(30_000),
            discount_amount: Decimal::from(200_000),
            final_amount: Decimal::from(830_000),
            shipping: ShippingDetails::new("Linh", "0901234567", "12 Lê Lợi, Đà Nẵng"),
            items: vec![OrderItem {
                id: OrderItemId::generate(),
                order_id: OrderId::new("o"),
                product_id: ProductId::new("p"),
                quantity: 2,
                price: Decimal::from(500_000),
                discount: Decimal::from(20),
                subtotal: Decimal::from(800_000),
            }],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_cancel_respects_lifecycle() {
        let mut o = order();
        assert!(o.can_be_cancelled());
        o.cancel().unwrap();
        assert_eq!(o.status, OrderStatus::Cancelled);

        let mut shipped = order();
        shipped.status = OrderStatus::Shipped;
        assert!(!shipped.can_be_cancelled());
        assert!(shipped.cancel().is_err());
        assert_eq!(shipped.status, OrderStatus::Shipped);
    }

    #[test]
    fn test_set_status_rejects_skips() {
        let mut o = order();
        assert!(o.set_status(OrderStatus::Delivered).is_err());
        o.set_status(OrderStatus::Processing).unwrap();
        o.set_status(OrderStatus::Shipped).unwrap();
        o.set_status(OrderStatus::Delivered).unwrap();
    }

    #[test]
    fn test_item_count_sums_quantities() {
        assert_eq!(order().item_count(), 2);
    }
}
