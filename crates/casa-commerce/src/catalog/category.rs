//! Category entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::slugify;
use crate::ids::CategoryId;

/// Name substituted when a product's category reference no longer
/// resolves. Catalog queries must keep working across a dangling
/// reference instead of failing the whole listing.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// A product category. Products reference exactly one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// URL-friendly slug (unique, normalized at creation).
    pub slug: String,
    /// Category description.
    pub description: Option<String>,
    /// Category image reference.
    pub image: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category with a normalized slug.
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::generate(),
            name: name.into(),
            slug: slugify(&slug.into()),
            description: None,
            image: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_slug_is_normalized() {
        let cat = Category::new("Nhà Bếp", "Nhà Bếp");
        assert_eq!(cat.name, "Nhà Bếp");
        assert_eq!(cat.slug, "nhà-bếp");
    }
}
