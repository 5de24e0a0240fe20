//! Display data for the server-rendered templates.
//!
//! Views are plain structs built from resolved props. Templates never reach
//! into catalog records directly.

pub mod layout_card;
pub mod navigation;
pub mod product_card;

pub use layout_card::{Breakpoint, LayoutCardView, PictureSource};
pub use navigation::{
    CategoryLink, FilterGroupView, FilterOptionLink, FilterSidebar, MenuItem, SortLink, menu,
    sort_links, with_order,
};
pub use product_card::{ColourThumbnail, ProductCardView};

/// Browser title for a navigation page.
#[must_use]
pub fn page_title(navigation_title: &str, site_name: &str) -> String {
    if navigation_title.is_empty() {
        site_name.to_string()
    } else {
        format!("{navigation_title}. {site_name}")
    }
}

/// Product count shown next to the page heading.
#[must_use]
pub fn results_label(count: u64) -> String {
    if count == 1 {
        "1 Result".to_string()
    } else {
        format!("{count} Results")
    }
}
