//! Storage collaborator for the Casa storefront.
//!
//! `casa-commerce` computes over values; this crate owns where those
//! values live. It defines per-entity repository traits and ships
//! [`MemoryStore`], a lock-guarded in-memory implementation used in
//! development and tests. A persistent backend implements the same
//! traits.
//!
//! The store is where the atomicity guarantees live: saving an order
//! re-checks and decrements stock under one write lock, so two
//! concurrent orders cannot both take the last unit.

mod error;
mod memory;
mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::{BannerStore, CategoryStore, OrderStore, ProductStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        BannerStore, CategoryStore, MemoryStore, OrderStore, ProductStore, StoreError,
    };
}
