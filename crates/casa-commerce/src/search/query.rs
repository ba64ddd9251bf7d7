//! Catalog query configuration.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// Default number of products per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Sort keys for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Newest first (creation time descending). The default.
    #[default]
    Newest,
    /// Final (discounted) price, low to high.
    PriceAsc,
    /// Final (discounted) price, high to low.
    PriceDesc,
    /// Units sold, descending.
    BestSelling,
    /// Average rating, descending.
    Rating,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::BestSelling => "best_selling",
            SortKey::Rating => "rating",
        }
    }

    /// Parse a wire name. Unrecognized values fall back to `Newest` —
    /// deliberate policy so a stale or mistyped sort parameter degrades
    /// instead of failing the request.
    pub fn parse(s: &str) -> Self {
        match s {
            "price_asc" => SortKey::PriceAsc,
            "price_desc" => SortKey::PriceDesc,
            "best_selling" => SortKey::BestSelling,
            "rating" => SortKey::Rating,
            _ => SortKey::Newest,
        }
    }
}

/// Configuration for one catalog listing request.
///
/// Filters compose by intersection and always apply in the same order:
/// category, featured, search. Build with the `with_*` methods and run
/// with [`CatalogQuery::run`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Restrict to products whose category resolves to this slug.
    pub category_slug: Option<String>,
    /// Restrict to products whose featured flag matches.
    pub featured: Option<bool>,
    /// Case-insensitive substring match against the product name.
    pub search: Option<String>,
    /// Sort key.
    pub sort: SortKey,
    /// 1-based page index.
    pub page: u32,
    /// Products per page, `1..=MAX_PAGE_SIZE`.
    pub page_size: u32,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            category_slug: None,
            featured: None,
            search: None,
            sort: SortKey::Newest,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CatalogQuery {
    /// Restrict to a category slug.
    pub fn with_category(mut self, slug: impl Into<String>) -> Self {
        self.category_slug = Some(slug.into());
        self
    }

    /// Restrict to featured (or explicitly non-featured) products.
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    /// Search product names for a substring, case-insensitively.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Set the page index and size. Values are validated in
    /// [`CatalogQuery::validate`], not clamped.
    pub fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// Check the pagination parameters.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.page < 1 {
            return Err(CommerceError::InvalidPaginationParameter(format!(
                "page must be >= 1, got {}",
                self.page
            )));
        }
        if self.page_size < 1 || self.page_size > MAX_PAGE_SIZE {
            return Err(CommerceError::InvalidPaginationParameter(format!(
                "page_size must be in 1..={MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let q = CatalogQuery::default()
            .with_category("kitchen")
            .with_featured(true)
            .with_search("pan")
            .with_sort(SortKey::PriceAsc)
            .with_page(2, 10);
        assert_eq!(q.category_slug.as_deref(), Some("kitchen"));
        assert_eq!(q.featured, Some(true));
        assert_eq!(q.page, 2);
        assert_eq!(q.page_size, 10);
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_sort_key_parse_fallback() {
        assert_eq!(SortKey::parse("price_asc"), SortKey::PriceAsc);
        assert_eq!(SortKey::parse("best_selling"), SortKey::BestSelling);
        assert_eq!(SortKey::parse("oldest"), SortKey::Newest);
        assert_eq!(SortKey::parse(""), SortKey::Newest);
        assert_eq!(SortKey::parse("PRICE_ASC"), SortKey::Newest);
    }

    #[test]
    fn test_pagination_validation() {
        let q = CatalogQuery::default().with_page(0, 20);
        assert!(matches!(
            q.validate(),
            Err(CommerceError::InvalidPaginationParameter(_))
        ));

        let q = CatalogQuery::default().with_page(1, 0);
        assert!(q.validate().is_err());

        let q = CatalogQuery::default().with_page(1, MAX_PAGE_SIZE + 1);
        assert!(q.validate().is_err());

        let q = CatalogQuery::default().with_page(1, MAX_PAGE_SIZE);
        assert!(q.validate().is_ok());
    }
}
