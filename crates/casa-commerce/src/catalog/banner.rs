//! Homepage promotional banners.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::BannerId;

/// A promotional banner for the storefront landing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Banner {
    /// Unique banner identifier.
    pub id: BannerId,
    /// Headline text.
    pub title: String,
    /// Secondary text.
    pub subtitle: Option<String>,
    /// Image reference.
    pub image: String,
    /// Optional click-through link.
    pub link: Option<String>,
    /// Display position, lowest first.
    pub position: i32,
    /// Whether the banner is currently shown.
    pub active: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

impl Banner {
    /// Create a new active banner.
    pub fn new(title: impl Into<String>, image: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: BannerId::generate(),
            title: title.into(),
            subtitle: None,
            image: image.into(),
            link: None,
            position: 0,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sort active banners for display: position, then age.
    pub fn display_order(banners: &[Banner]) -> Vec<Banner> {
        let mut active: Vec<Banner> = banners.iter().filter(|b| b.active).cloned().collect();
        active.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order_filters_and_sorts() {
        let mut first = Banner::new("First", "a.jpg");
        first.position = 1;
        let mut hidden = Banner::new("Hidden", "b.jpg");
        hidden.active = false;
        let second = Banner::new("Second", "c.jpg");
        // second keeps position 0, so it sorts before first.

        let ordered = Banner::display_order(&[first.clone(), hidden, second.clone()]);
        assert_eq!(ordered.len(), 2);
        assert_eq!(ordered[0].title, "Second");
        assert_eq!(ordered[1].title, "First");
    }
}
