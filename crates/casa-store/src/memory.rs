//! In-memory store.
//!
//! The development and test stand-in for a real database: plain maps
//! with slug indexes behind one `RwLock`. Writes that must be atomic
//! with respect to each other (stock checks and decrements, order
//! inserts) happen under a single write guard, which is the whole
//! concurrency story this backend needs.

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{Datelike, Utc};
use tracing::{debug, warn};

use casa_commerce::catalog::{Banner, Category, Product};
use casa_commerce::ids::{BannerId, CategoryId, OrderId, ProductId, UserId};
use casa_commerce::orders::{Order, OrderStatus, ProductLookup};
use casa_commerce::CommerceError;

use crate::error::StoreError;
use crate::store::{BannerStore, CategoryStore, OrderStore, ProductStore};

#[derive(Debug, Default)]
struct State {
    products: HashMap<ProductId, Product>,
    product_slugs: HashMap<String, ProductId>,
    categories: HashMap<CategoryId, Category>,
    category_slugs: HashMap<String, CategoryId>,
    banners: HashMap<BannerId, Banner>,
    orders: HashMap<OrderId, Order>,
    order_numbers: HashSet<String>,
    order_seq: u32,
}

/// Thread-safe in-memory store implementing every repository trait.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProductStore for MemoryStore {
    fn create_product(&self, product: Product) -> Result<Product, StoreError> {
        let mut state = self.write();
        if state.product_slugs.contains_key(&product.slug) {
            return Err(StoreError::DuplicateSlug(product.slug));
        }
        state
            .product_slugs
            .insert(product.slug.clone(), product.id.clone());
        state.products.insert(product.id.clone(), product.clone());
        debug!(product = %product.id, slug = %product.slug, "product created");
        Ok(product)
    }

    fn get_product(&self, id: &ProductId) -> Option<Product> {
        self.read().products.get(id).cloned()
    }

    fn get_product_by_slug(&self, slug: &str) -> Option<Product> {
        let state = self.read();
        let id = state.product_slugs.get(slug)?;
        state.products.get(id).cloned()
    }

    fn list_products(&self) -> Vec<Product> {
        self.read().products.values().cloned().collect()
    }

    fn update_product(&self, product: Product) -> Result<Product, StoreError> {
        let mut state = self.write();
        let existing = state
            .products
            .get(&product.id)
            .ok_or_else(|| StoreError::NotFound(product.id.to_string()))?;

        if existing.slug != product.slug {
            if state.product_slugs.contains_key(&product.slug) {
                return Err(StoreError::DuplicateSlug(product.slug));
            }
            let old_slug = existing.slug.clone();
            state.product_slugs.remove(&old_slug);
            state
                .product_slugs
                .insert(product.slug.clone(), product.id.clone());
        }
        state.products.insert(product.id.clone(), product.clone());
        Ok(product)
    }

    fn delete_product(&self, id: &ProductId) -> bool {
        let mut state = self.write();
        match state.products.remove(id) {
            Some(product) => {
                state.product_slugs.remove(&product.slug);
                true
            }
            None => false,
        }
    }

    fn decrement_stock(&self, id: &ProductId, quantity: u32) -> Result<(), StoreError> {
        let mut state = self.write();
        let product = state
            .products
            .get_mut(id)
            .ok_or_else(|| StoreError::Commerce(CommerceError::ProductNotFound(id.to_string())))?;
        if !product.can_fulfill(quantity) {
            warn!(
                product = %id,
                requested = quantity,
                available = product.stock,
                "stock decrement refused"
            );
            return Err(StoreError::Commerce(CommerceError::InsufficientStock {
                product_id: id.to_string(),
                requested: quantity,
                available: product.stock,
            }));
        }
        product.stock -= quantity;
        product.updated_at = Utc::now();
        Ok(())
    }
}

impl CategoryStore for MemoryStore {
    fn create_category(&self, category: Category) -> Result<Category, StoreError> {
        let mut state = self.write();
        if state.category_slugs.contains_key(&category.slug) {
            return Err(StoreError::DuplicateSlug(category.slug));
        }
        state
            .category_slugs
            .insert(category.slug.clone(), category.id.clone());
        state
            .categories
            .insert(category.id.clone(), category.clone());
        Ok(category)
    }

    fn get_category(&self, id: &CategoryId) -> Option<Category> {
        self.read().categories.get(id).cloned()
    }

    fn get_category_by_slug(&self, slug: &str) -> Option<Category> {
        let state = self.read();
        let id = state.category_slugs.get(slug)?;
        state.categories.get(id).cloned()
    }

    fn list_categories(&self) -> Vec<Category> {
        self.read().categories.values().cloned().collect()
    }

    fn update_category(&self, category: Category) -> Result<Category, StoreError> {
        let mut state = self.write();
        let existing = state
            .categories
            .get(&category.id)
            .ok_or_else(|| StoreError::NotFound(category.id.to_string()))?;

        if existing.slug != category.slug {
            if state.category_slugs.contains_key(&category.slug) {
                return Err(StoreError::DuplicateSlug(category.slug));
            }
            let old_slug = existing.slug.clone();
            state.category_slugs.remove(&old_slug);
            state
                .category_slugs
                .insert(category.slug.clone(), category.id.clone());
        }
        state
            .categories
            .insert(category.id.clone(), category.clone());
        Ok(category)
    }

    fn delete_category(&self, id: &CategoryId) -> bool {
        let mut state = self.write();
        match state.categories.remove(id) {
            Some(category) => {
                state.category_slugs.remove(&category.slug);
                true
            }
            None => false,
        }
    }
}

impl BannerStore for MemoryStore {
    fn create_banner(&self, banner: Banner) -> Result<Banner, StoreError> {
        let mut state = self.write();
        state.banners.insert(banner.id.clone(), banner.clone());
        Ok(banner)
    }

    fn list_active_banners(&self) -> Vec<Banner> {
        let state = self.read();
        let all: Vec<Banner> = state.banners.values().cloned().collect();
        Banner::display_order(&all)
    }

    fn update_banner(&self, banner: Banner) -> Result<Banner, StoreError> {
        let mut state = self.write();
        if !state.banners.contains_key(&banner.id) {
            return Err(StoreError::NotFound(banner.id.to_string()));
        }
        state.banners.insert(banner.id.clone(), banner.clone());
        Ok(banner)
    }

    fn delete_banner(&self, id: &BannerId) -> bool {
        self.write().banners.remove(id).is_some()
    }
}

impl OrderStore for MemoryStore {
    fn next_order_number(&self) -> String {
        let mut state = self.write();
        state.order_seq += 1;
        format!("ORD-{}-{:03}", Utc::now().year(), state.order_seq)
    }

    fn save_order(&self, order: Order) -> Result<Order, StoreError> {
        let mut state = self.write();

        if state.order_numbers.contains(&order.order_number) {
            return Err(StoreError::DuplicateOrderNumber(order.order_number));
        }

        // Validate every line before mutating anything: the assembly
        // read and this persist are distinct moments, so stock may
        // have moved in between.
        for item in &order.items {
            let product = state.products.get(&item.product_id).ok_or_else(|| {
                StoreError::Commerce(CommerceError::ProductNotFound(item.product_id.to_string()))
            })?;
            if !product.can_fulfill(item.quantity) {
                warn!(
                    order_number = %order.order_number,
                    product = %item.product_id,
                    requested = item.quantity,
                    available = product.stock,
                    "order rejected on stock re-check"
                );
                return Err(StoreError::Commerce(CommerceError::InsufficientStock {
                    product_id: item.product_id.to_string(),
                    requested: item.quantity,
                    available: product.stock,
                }));
            }
        }

        for item in &order.items {
            if let Some(product) = state.products.get_mut(&item.product_id) {
                product.stock -= item.quantity;
                product.updated_at = Utc::now();
            }
        }

        state.order_numbers.insert(order.order_number.clone());
        state.orders.insert(order.id.clone(), order.clone());
        debug!(
            order_number = %order.order_number,
            lines = order.items.len(),
            final_amount = %order.final_amount,
            "order persisted"
        );
        Ok(order)
    }

    fn get_order(&self, id: &OrderId) -> Option<Order> {
        self.read().orders.get(id).cloned()
    }

    fn list_orders_for_user(&self, user_id: &UserId) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .read()
            .orders
            .values()
            .filter(|o| &o.user_id == user_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, StoreError> {
        let mut state = self.write();
        let order = state
            .orders
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        order.set_status(status)?;
        Ok(order.clone())
    }
}

impl ProductLookup for MemoryStore {
    fn product_by_id(&self, id: &ProductId) -> Option<Product> {
        self.get_product(id)
    }

    fn product_by_slug(&self, slug: &str) -> Option<Product> {
        self.get_product_by_slug(slug)
    }
}
