//! Product entity.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::slugify;
use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::money;

/// A product offered for sale.
///
/// Prices are exact decimals; the discounted price is always derived
/// from `price` and `discount`, never stored. `rating` and `sold` are
/// externally maintained metrics — this crate only sorts by them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// URL-friendly slug (unique, normalized at creation).
    pub slug: String,
    /// Full description.
    pub description: String,
    /// Base (undiscounted) price. Always positive.
    pub price: Decimal,
    /// Discount percentage, `0..=100`.
    pub discount: Decimal,
    /// Units in stock.
    pub stock: u32,
    /// Category this product belongs to.
    pub category_id: CategoryId,
    /// Promotional placement flag.
    pub featured: bool,
    /// Primary image reference.
    pub image: Option<String>,
    /// Additional image references.
    pub images: Vec<String>,
    /// Average review rating (externally supplied).
    pub rating: f64,
    /// Units sold (externally supplied).
    pub sold: u64,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product, validating the price and discount
    /// constraints up front. The slug is normalized here; lookups later
    /// compare it verbatim.
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        discount: Decimal,
        category_id: CategoryId,
    ) -> Result<Self, CommerceError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CommerceError::ValidationError(
                "product name must not be empty".to_string(),
            ));
        }
        // Reuses the pricing validation so constructed products always
        // satisfy the final_price invariants.
        money::final_price(price, discount)?;

        let now = Utc::now();
        Ok(Self {
            id: ProductId::generate(),
            name,
            slug: slugify(&slug.into()),
            description: description.into(),
            price,
            discount,
            stock: 0,
            category_id,
            featured: false,
            image: None,
            images: Vec::new(),
            rating: 0.0,
            sold: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Price after the discount, truncated to the minor-unit scale.
    pub fn final_price(&self) -> Decimal {
        money::apply_discount(self.price, self.discount)
    }

    /// Whether any stock remains.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Whether the requested quantity can be satisfied from stock.
    pub fn can_fulfill(&self, quantity: u32) -> bool {
        quantity <= self.stock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category() -> CategoryId {
        CategoryId::new("cat-1")
    }

    #[test]
    fn test_product_creation() {
        let p = Product::new(
            "Ceramic Teapot",
            "Ceramic Teapot",
            "A teapot.",
            Decimal::from(350_000),
            Decimal::from(10),
            category(),
        )
        .unwrap();
        assert_eq!(p.slug, "ceramic-teapot");
        assert_eq!(p.final_price(), Decimal::from(315_000));
        assert!(!p.is_in_stock());
    }

    #[test]
    fn test_constructor_rejects_bad_fields() {
        let err = Product::new(
            "X",
            "x",
            "",
            Decimal::ZERO,
            Decimal::ZERO,
            category(),
        )
        .unwrap_err();
        assert_eq!(err, CommerceError::InvalidPrice(Decimal::ZERO));

        let err = Product::new(
            "X",
            "x",
            "",
            Decimal::from(100),
            Decimal::from(150),
            category(),
        )
        .unwrap_err();
        assert_eq!(err, CommerceError::InvalidDiscount(Decimal::from(150)));

        let err = Product::new(
            "  ",
            "x",
            "",
            Decimal::from(100),
            Decimal::ZERO,
            category(),
        )
        .unwrap_err();
        assert!(matches!(err, CommerceError::ValidationError(_)));
    }

    #[test]
    fn test_stock_helpers() {
        let mut p = Product::new(
            "Pan",
            "pan",
            "",
            Decimal::from(100),
            Decimal::ZERO,
            category(),
        )
        .unwrap();
        p.stock = 3;
        assert!(p.is_in_stock());
        assert!(p.can_fulfill(3));
        assert!(!p.can_fulfill(4));
    }
}
