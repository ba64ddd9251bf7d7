//! Catalog listing results.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::{CategoryId, ProductId};

/// One page of catalog results.
///
/// `total` counts all products surviving the filters, not just this
/// slice; `products.len() <= page_size` always holds, and the slices
/// for pages `1..=total_pages` partition the filtered set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPage {
    /// The page slice.
    pub products: Vec<ProductView>,
    /// Count of products after filtering.
    pub total: u64,
    /// 1-based page index this slice belongs to.
    pub page: u32,
    /// Requested page size.
    pub page_size: u32,
    /// `ceil(total / page_size)`.
    pub total_pages: u32,
}

impl CatalogPage {
    /// Whether this page carries no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of products on this page.
    pub fn len(&self) -> usize {
        self.products.len()
    }
}

/// Listing projection of a product: the stored fields plus the derived
/// final price and the resolved category name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Base price.
    pub price: Decimal,
    /// Discount percentage.
    pub discount: Decimal,
    /// Derived discounted price.
    pub final_price: Decimal,
    pub stock: u32,
    pub in_stock: bool,
    pub image: Option<String>,
    pub images: Vec<String>,
    pub featured: bool,
    pub category_id: CategoryId,
    /// Resolved category name, or `"Unknown"` when the reference
    /// dangles.
    pub category_name: String,
    pub rating: f64,
    pub sold: u64,
    pub created_at: DateTime<Utc>,
}

impl ProductView {
    /// Project a product with its resolved category name.
    pub fn from_product(product: &Product, category_name: impl Into<String>) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            slug: product.slug.clone(),
            description: product.description.clone(),
            price: product.price,
            discount: product.discount,
            final_price: product.final_price(),
            stock: product.stock,
            in_stock: product.is_in_stock(),
            image: product.image.clone(),
            images: product.images.clone(),
            featured: product.featured,
            category_id: product.category_id.clone(),
            category_name: category_name.into(),
            rating: product.rating,
            sold: product.sold,
            created_at: product.created_at,
        }
    }
}
