//! Catalog entities: products, categories, promotional banners.

mod banner;
mod category;
mod product;

pub use banner::Banner;
pub use category::{Category, UNKNOWN_CATEGORY};
pub use product::Product;

/// Normalize a string into a URL-safe slug.
///
/// Lowercases, collapses runs of non-alphanumeric characters into
/// single hyphens, and strips leading/trailing hyphens. Normalization
/// happens once at creation time; lookups compare slugs verbatim.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;
    for ch in input.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basics() {
        assert_eq!(slugify("Kitchen Essentials"), "kitchen-essentials");
        assert_eq!(slugify("  Già & Sạch  "), "già-sạch");
        assert_eq!(slugify("A--B__C"), "a-b-c");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        let once = slugify("Home & Garden 2024");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn test_slugify_strips_edges() {
        assert_eq!(slugify("--hello--"), "hello");
        assert_eq!(slugify(""), "");
    }
}
