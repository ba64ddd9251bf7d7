//! E-commerce domain types and logic for Casa.
//!
//! This crate is the pure core of the storefront: it owns the catalog
//! entities, the pricing rules, the product listing pipeline, and order
//! assembly. It performs no I/O — callers hand it materialized values
//! and receive freshly built values back, so it is safe to invoke from
//! any number of request handlers concurrently.
//!
//! - **Catalog**: products, categories, promotional banners
//! - **Money**: discount arithmetic over exact decimals
//! - **Search**: filter/sort/paginate over a product collection
//! - **Orders**: order assembly and the status lifecycle
//!
//! Persistence, authentication, and HTTP shaping live in collaborator
//! crates; see `casa-store` for the storage side.
//!
//! # Example
//!
//! ```rust,ignore
//! use casa_commerce::prelude::*;
//!
//! let query = CatalogQuery::default()
//!     .with_category("kitchen")
//!     .with_sort(SortKey::PriceAsc)
//!     .with_page(1, 20);
//!
//! let page = query.run(&products, &categories)?;
//! for view in &page.products {
//!     println!("{}: {}", view.name, view.final_price);
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;
pub mod orders;
pub mod search;

pub use error::CommerceError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;

    pub use crate::money::{final_price, line_subtotal, original_price, MINOR_UNIT_SCALE};

    pub use crate::catalog::{slugify, Banner, Category, Product, UNKNOWN_CATEGORY};

    pub use crate::search::{CatalogPage, CatalogQuery, ProductView, SortKey};

    pub use crate::orders::{
        assemble_order, CartLine, Order, OrderItem, OrderStatus, ProductLookup, ShippingDetails,
    };
}
