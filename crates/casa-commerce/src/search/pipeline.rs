//! The listing pipeline itself.
//!
//! Stage order is fixed and significant: category, featured, search,
//! sort, paginate. Filtering before sorting keeps the sort at
//! O(n log n) over the survivors only; pagination last means `total`
//! always reflects the filtered count.

use std::collections::HashMap;

use crate::catalog::{Category, Product, UNKNOWN_CATEGORY};
use crate::error::CommerceError;
use crate::ids::CategoryId;
use crate::search::query::{CatalogQuery, SortKey};
use crate::search::results::{CatalogPage, ProductView};

impl CatalogQuery {
    /// Run the pipeline over a product collection.
    ///
    /// `categories` supplies slug resolution for the category filter
    /// and name resolution for the result views; a product whose
    /// category is absent from it is still listed, with the category
    /// name shown as `"Unknown"`. A page index past the last page
    /// yields an empty slice, not an error.
    pub fn run(
        &self,
        products: &[Product],
        categories: &[Category],
    ) -> Result<CatalogPage, CommerceError> {
        self.validate()?;

        let mut filtered: Vec<&Product> = products.iter().collect();

        if let Some(slug) = self.category_slug.as_deref() {
            match categories.iter().find(|c| c.slug == slug) {
                Some(cat) => filtered.retain(|p| p.category_id == cat.id),
                // An unresolvable slug matches no products.
                None => filtered.clear(),
            }
        }

        if let Some(featured) = self.featured {
            filtered.retain(|p| p.featured == featured);
        }

        if let Some(needle) = self.search.as_deref() {
            let needle = needle.to_lowercase();
            filtered.retain(|p| p.name.to_lowercase().contains(&needle));
        }

        sort_products(&mut filtered, self.sort);

        let total = filtered.len();
        let page_size = self.page_size as usize;
        let total_pages = total.div_ceil(page_size);
        let start = (self.page as usize - 1).saturating_mul(page_size);
        let slice = if start < total {
            &filtered[start..total.min(start + page_size)]
        } else {
            &[]
        };

        let names: HashMap<&CategoryId, &str> = categories
            .iter()
            .map(|c| (&c.id, c.name.as_str()))
            .collect();

        let products = slice
            .iter()
            .map(|p| {
                let name = names.get(&p.category_id).copied().unwrap_or(UNKNOWN_CATEGORY);
                ProductView::from_product(p, name)
            })
            .collect();

        Ok(CatalogPage {
            products,
            total: total as u64,
            page: self.page,
            page_size: self.page_size,
            total_pages: total_pages as u32,
        })
    }
}

/// Stable sort by the requested key. Price keys compare the final
/// (discounted) price, not the list price.
fn sort_products(products: &mut [&Product], sort: SortKey) {
    match sort {
        SortKey::Newest => products.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::PriceAsc => products.sort_by(|a, b| a.final_price().cmp(&b.final_price())),
        SortKey::PriceDesc => products.sort_by(|a, b| b.final_price().cmp(&a.final_price())),
        SortKey::BestSelling => products.sort_by(|a, b| b.sold.cmp(&a.sold)),
        SortKey::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
}
