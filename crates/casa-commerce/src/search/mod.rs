//! Catalog listing pipeline: filter, sort, paginate.
//!
//! The pipeline runs over products already materialized in memory, in
//! a fixed order: category filter, featured filter, name search, sort,
//! then pagination. See [`CatalogQuery::run`].

mod pipeline;
mod query;
mod results;

pub use query::{CatalogQuery, SortKey, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use results::{CatalogPage, ProductView};
