//! Repository traits, one per entity.
//!
//! All methods take `&self`: implementations manage their own interior
//! locking so the pure core can be driven from concurrent request
//! handlers. Returned entities are owned clones — callers never hold a
//! reference into the store.

use casa_commerce::catalog::{Banner, Category, Product};
use casa_commerce::ids::{BannerId, CategoryId, OrderId, ProductId, UserId};
use casa_commerce::orders::{Order, OrderStatus};

use crate::error::StoreError;

/// Product persistence.
pub trait ProductStore {
    /// Persist a new product. Fails on a duplicate slug.
    fn create_product(&self, product: Product) -> Result<Product, StoreError>;

    /// Fetch by identifier. Exact, case-sensitive.
    fn get_product(&self, id: &ProductId) -> Option<Product>;

    /// Fetch by slug. Exact, case-sensitive; slugs were normalized at
    /// creation time.
    fn get_product_by_slug(&self, slug: &str) -> Option<Product>;

    /// All products, in no particular order.
    fn list_products(&self) -> Vec<Product>;

    /// Replace an existing product. Fails if it does not exist or the
    /// new slug collides.
    fn update_product(&self, product: Product) -> Result<Product, StoreError>;

    /// Remove a product. Returns whether anything was removed.
    fn delete_product(&self, id: &ProductId) -> bool;

    /// Atomically take `quantity` units out of stock. Fails without
    /// mutating when stock is insufficient.
    fn decrement_stock(&self, id: &ProductId, quantity: u32) -> Result<(), StoreError>;
}

/// Category persistence.
pub trait CategoryStore {
    /// Persist a new category. Fails on a duplicate slug.
    fn create_category(&self, category: Category) -> Result<Category, StoreError>;

    fn get_category(&self, id: &CategoryId) -> Option<Category>;

    fn get_category_by_slug(&self, slug: &str) -> Option<Category>;

    fn list_categories(&self) -> Vec<Category>;

    fn update_category(&self, category: Category) -> Result<Category, StoreError>;

    fn delete_category(&self, id: &CategoryId) -> bool;
}

/// Banner persistence.
pub trait BannerStore {
    fn create_banner(&self, banner: Banner) -> Result<Banner, StoreError>;

    /// Active banners in display order.
    fn list_active_banners(&self) -> Vec<Banner>;

    fn update_banner(&self, banner: Banner) -> Result<Banner, StoreError>;

    fn delete_banner(&self, id: &BannerId) -> bool;
}

/// Order persistence.
pub trait OrderStore {
    /// Hand out the next order number. The store owns the format and
    /// guarantees uniqueness.
    fn next_order_number(&self) -> String;

    /// Persist an order and its items as one unit. Stock for every
    /// line is re-checked and decremented atomically with the insert;
    /// on any failure nothing is persisted and no stock moves.
    fn save_order(&self, order: Order) -> Result<Order, StoreError>;

    fn get_order(&self, id: &OrderId) -> Option<Order>;

    /// A user's orders, newest first.
    fn list_orders_for_user(&self, user_id: &UserId) -> Vec<Order>;

    /// Move an order through its lifecycle. Fails on transitions the
    /// lifecycle table forbids.
    fn update_order_status(&self, id: &OrderId, status: OrderStatus)
        -> Result<Order, StoreError>;
}
