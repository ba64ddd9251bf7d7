//! Order assembly: turn a cart into a consistent order value.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{OrderId, OrderItemId, ProductId, UserId};
use crate::money;
use crate::orders::{Order, OrderItem, OrderStatus, ShippingDetails};

/// Index over the catalog, supplied by the storage collaborator.
///
/// Both lookups are exact and case-sensitive; slugs were normalized at
/// creation time, so no re-normalization happens here. Implementations
/// are expected to be O(1) per lookup.
pub trait ProductLookup {
    /// Resolve a product by its identifier.
    fn product_by_id(&self, id: &ProductId) -> Option<Product>;

    /// Resolve a product by its slug.
    fn product_by_slug(&self, slug: &str) -> Option<Product>;
}

/// One requested line: a product reference and a quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// Assemble an order from cart lines.
///
/// Every line is resolved and validated before any order state is
/// built, so a failing line produces no partial order. Unit price and
/// discount are snapshotted from the product at this moment; the
/// aggregates satisfy
/// `final_amount == total_amount - discount_amount + shipping_fee`.
///
/// The order number comes from the storage collaborator, which owns
/// its format and uniqueness; the returned order is `PENDING` and not
/// yet persisted.
pub fn assemble_order(
    lookup: &dyn ProductLookup,
    user_id: UserId,
    lines: &[CartLine],
    shipping: ShippingDetails,
    shipping_fee: Decimal,
    order_number: impl Into<String>,
) -> Result<Order, CommerceError> {
    if lines.is_empty() {
        return Err(CommerceError::EmptyOrder);
    }
    if shipping_fee < Decimal::ZERO {
        return Err(CommerceError::ValidationError(format!(
            "shipping fee must not be negative, got {shipping_fee}"
        )));
    }

    // Resolve and validate everything before building any state.
    let mut resolved: Vec<(Product, u32)> = Vec::with_capacity(lines.len());
    for line in lines {
        if line.quantity == 0 {
            return Err(CommerceError::InvalidQuantity(line.quantity));
        }
        let product = lookup
            .product_by_id(&line.product_id)
            .ok_or_else(|| CommerceError::ProductNotFound(line.product_id.to_string()))?;
        if !product.can_fulfill(line.quantity) {
            return Err(CommerceError::InsufficientStock {
                product_id: product.id.to_string(),
                requested: line.quantity,
                available: product.stock,
            });
        }
        resolved.push((product, line.quantity));
    }

    let order_id = OrderId::generate();
    let mut items = Vec::with_capacity(resolved.len());
    let mut total_amount = Decimal::ZERO;
    let mut subtotal_sum = Decimal::ZERO;

    for (product, quantity) in resolved {
        let subtotal = money::line_subtotal(product.price, product.discount, quantity)?;
        total_amount += product.price * Decimal::from(quantity);
        subtotal_sum += subtotal;
        items.push(OrderItem {
            id: OrderItemId::generate(),
            order_id: order_id.clone(),
            product_id: product.id,
            quantity,
            price: product.price,
            discount: product.discount,
            subtotal,
        });
    }

    let now = Utc::now();
    Ok(Order {
        id: order_id,
        order_number: order_number.into(),
        user_id,
        status: OrderStatus::Pending,
        total_amount,
        shipping_fee,
        discount_amount: total_amount - subtotal_sum,
        final_amount: subtotal_sum + shipping_fee,
        shipping,
        items,
        created_at: now,
        updated_at: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::CategoryId;
    use std::collections::HashMap;

    struct MapLookup {
        products: HashMap<ProductId, Product>,
    }

    impl MapLookup {
        fn new(products: Vec<Product>) -> Self {
            Self {
                products: products.into_iter().map(|p| (p.id.clone(), p)).collect(),
            }
        }
    }

    impl ProductLookup for MapLookup {
        fn product_by_id(&self, id: &ProductId) -> Option<Product> {
            self.products.get(id).cloned()
        }

        fn product_by_slug(&self, slug: &str) -> Option<Product> {
            self.products.values().find(|p| p.slug == slug).cloned()
        }
    }

    fn product(name: &str, price: i64, discount: i64, stock: u32) -> Product {
        let mut p = Product::new(
            name,
            name,
            "",
            Decimal::from(price),
            Decimal::from(discount),
            CategoryId::new("cat-1"),
        )
        .unwrap();
        p.stock = stock;
        p
    }

    fn shipping() -> ShippingDetails {
        ShippingDetails::new("Linh", "0901234567", "12 Lê Lợi, Đà Nẵng")
    }

    #[test]
    fn test_single_line_totals() {
        let p = product("Ceramic Pan", 500_000, 20, 10);
        let id = p.id.clone();
        let lookup = MapLookup::new(vec![p]);

        let order = assemble_order(
            &lookup,
            UserId::new("user-1"),
            &[CartLine::new(id, 2)],
            shipping(),
            Decimal::ZERO,
            "ORD-2024-001",
        )
        .unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].subtotal, Decimal::from(800_000));
        assert_eq!(order.total_amount, Decimal::from(1_000_000));
        assert_eq!(order.discount_amount, Decimal::from(200_000));
        assert_eq!(order.final_amount, Decimal::from(800_000));
        assert_eq!(order.items[0].order_id, order.id);
    }

    #[test]
    fn test_shipping_fee_is_added_after_discounts() {
        let p = product("Pan", 100_000, 0, 5);
        let id = p.id.clone();
        let lookup = MapLookup::new(vec![p]);

        let order = assemble_order(
            &lookup,
            UserId::new("user-1"),
            &[CartLine::new(id, 1)],
            shipping(),
            Decimal::from(30_000),
            "ORD-2024-002",
        )
        .unwrap();
        assert_eq!(order.final_amount, Decimal::from(130_000));
        assert_eq!(order.shipping_fee, Decimal::from(30_000));
    }

    #[test]
    fn test_snapshot_survives_repricing() {
        let p = product("Pan", 200_000, 10, 5);
        let id = p.id.clone();
        let mut lookup = MapLookup::new(vec![p]);

        let order = assemble_order(
            &lookup,
            UserId::new("user-1"),
            &[CartLine::new(id.clone(), 1)],
            shipping(),
            Decimal::ZERO,
            "ORD-2024-003",
        )
        .unwrap();

        // Reprice after assembly; the order keeps its snapshot.
        lookup.products.get_mut(&id).unwrap().price = Decimal::from(999_999);
        assert_eq!(order.items[0].price, Decimal::from(200_000));
        assert_eq!(order.items[0].discount, Decimal::from(10));
    }

    #[test]
    fn test_unknown_product_fails_whole_order() {
        let p = product("Pan", 100_000, 0, 5);
        let known = p.id.clone();
        let lookup = MapLookup::new(vec![p]);

        let err = assemble_order(
            &lookup,
            UserId::new("user-1"),
            &[
                CartLine::new(known, 1),
                CartLine::new(ProductId::new("missing"), 1),
            ],
            shipping(),
            Decimal::ZERO,
            "ORD-2024-004",
        )
        .unwrap_err();
        assert_eq!(err, CommerceError::ProductNotFound("missing".to_string()));
    }

    #[test]
    fn test_insufficient_stock_fails_whole_order() {
        let a = product("Pan", 100_000, 0, 5);
        let b = product("Pot", 200_000, 0, 1);
        let (a_id, b_id) = (a.id.clone(), b.id.clone());
        let lookup = MapLookup::new(vec![a, b]);

        let err = assemble_order(
            &lookup,
            UserId::new("user-1"),
            &[CartLine::new(a_id, 2), CartLine::new(b_id.clone(), 3)],
            shipping(),
            Decimal::ZERO,
            "ORD-2024-005",
        )
        .unwrap_err();
        assert_eq!(
            err,
            CommerceError::InsufficientStock {
                product_id: b_id.to_string(),
                requested: 3,
                available: 1,
            }
        );
    }

    #[test]
    fn test_empty_and_zero_quantity_rejected() {
        let p = product("Pan", 100_000, 0, 5);
        let id = p.id.clone();
        let lookup = MapLookup::new(vec![p]);

        let err = assemble_order(
            &lookup,
            UserId::new("user-1"),
            &[],
            shipping(),
            Decimal::ZERO,
            "ORD-2024-006",
        )
        .unwrap_err();
        assert_eq!(err, CommerceError::EmptyOrder);

        let err = assemble_order(
            &lookup,
            UserId::new("user-1"),
            &[CartLine::new(id, 0)],
            shipping(),
            Decimal::ZERO,
            "ORD-2024-007",
        )
        .unwrap_err();
        assert_eq!(err, CommerceError::InvalidQuantity(0));
    }

    #[test]
    fn test_multi_line_aggregates_are_consistent() {
        let a = product("Pan", 500_000, 20, 10);
        let b = product("Pot", 300_000, 0, 10);
        let (a_id, b_id) = (a.id.clone(), b.id.clone());
        let lookup = MapLookup::new(vec![a, b]);

        let order = assemble_order(
            &lookup,
            UserId::new("user-1"),
            &[CartLine::new(a_id, 2), CartLine::new(b_id, 3)],
            shipping(),
            Decimal::from(50_000),
            "ORD-2024-008",
        )
        .unwrap();

        // 2x500000 + 3x300000 = 1900000 before discounts.
        assert_eq!(order.total_amount, Decimal::from(1_900_000));
        // Only the pan is discounted: 2 x 100000.
        assert_eq!(order.discount_amount, Decimal::from(200_000));
        assert_eq!(
            order.final_amount,
            order.total_amount - order.discount_amount + order.shipping_fee
        );
        assert_eq!(order.item_count(), 5);
    }
}
