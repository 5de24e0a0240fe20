//! View-layer catalog records as returned by the catalog backend.
//!
//! None of these are owned domain objects: each page request fetches a fresh
//! snapshot and nothing is mutated in place. Fields the backend may omit are
//! defaulted so downstream code never sees a missing list.

use serde::{Deserialize, Serialize};

use super::id::{CategoryUid, FilterOptionUid, NavigationUid, ProductUid};
use super::label::StockLabel;
use super::layout::LayoutCardDetail;
use super::price::ProductPrice;

// =============================================================================
// Navigation
// =============================================================================

/// A menu node with a canonical URL path and the filter ids that define it.
///
/// `url_path` is authoritative: any products URL that references this
/// navigation under another path segment must redirect to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub uid: NavigationUid,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub url_path: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub filter_id_list: Vec<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub children: Vec<Navigation>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub layout_cards: Vec<LayoutCardDetail>,
}

impl Navigation {
    /// The single route segment `url_path` stands for, if it has one.
    #[must_use]
    pub fn canonical_segment(&self) -> Option<&str> {
        route_segment(&self.url_path, self.uid.as_str())
    }

    /// Whether the backend gave this navigation a usable canonical path.
    #[must_use]
    pub fn has_canonical_path(&self) -> bool {
        self.canonical_segment().is_some()
    }
}

/// Reduce a backend `urlPath` to one route segment.
///
/// The backend spells it either as the bare segment or as `<segment>/<uid>`.
/// Anything else that still contains a `/` cannot round-trip through the
/// products route and has no segment.
fn route_segment<'a>(url_path: &'a str, uid: &str) -> Option<&'a str> {
    let path = url_path.trim().trim_matches('/');
    let segment = path
        .strip_suffix(uid)
        .and_then(|rest| rest.strip_suffix('/'))
        .unwrap_or(path);
    (!segment.is_empty() && !segment.contains('/')).then_some(segment)
}

// =============================================================================
// Category
// =============================================================================

/// A category entry shown in the filter sidebar, scoped to a navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub uid: CategoryUid,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(default)]
    pub navigation_uid: Option<NavigationUid>,
    #[serde(default)]
    pub url_path: Option<String>,
}

impl Category {
    /// Route segment of the navigation this category links to.
    #[must_use]
    pub fn canonical_segment(&self) -> Option<&str> {
        let uid = self.navigation_uid.as_ref()?;
        route_segment(self.url_path.as_deref()?, uid.as_str())
    }
}

// =============================================================================
// Filter options
// =============================================================================

/// Level of a filter-option entry.
///
/// Options hang exactly one level below filters; there is no deeper nesting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterLevel {
    #[default]
    Filter,
    Option,
    #[serde(other)]
    Unknown,
}

/// A filter or filter option, scoped to a navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOption {
    pub uid: FilterOptionUid,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub level: FilterLevel,
    /// Owning filter for `option`-level entries.
    #[serde(default)]
    pub parent_uid: Option<FilterOptionUid>,
    #[serde(default)]
    pub navigation_uid: Option<NavigationUid>,
}

// =============================================================================
// Products
// =============================================================================

/// Image URLs rendered for a product, one per orientation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImages {
    #[serde(rename = "squarishURL", default, deserialize_with = "super::null_as_default")]
    pub squarish_url: String,
    #[serde(rename = "portraitURL", default)]
    pub portrait_url: Option<String>,
    #[serde(rename = "landscapeURL", default)]
    pub landscape_url: Option<String>,
}

/// An alternate colourway of a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductColor {
    pub uid: ProductUid,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub images: ProductImages,
    #[serde(default)]
    pub color_description: Option<String>,
}

/// A product listed on a navigation page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub uid: ProductUid,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub sub_title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub price: ProductPrice,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub images: ProductImages,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub product_another_colors: Vec<ProductColor>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub label: StockLabel,
}

/// Number of products matching the current filter predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAggregate {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub count: u64,
}
