//! The `/products/<segment>/<navigation>[/<filters>]` route path.
//!
//! The first segment is cosmetic from the router's point of view, but the
//! navigation's `url_path` is the single authoritative spelling of it. A
//! request that spells it any other way is answered with a permanent redirect
//! to [`ProductsPath::canonical_for`].

use std::fmt;

use thiserror::Error;

use crate::filter::FilterIdList;
use crate::types::{Navigation, NavigationUid};

/// Mount point of the product listing pages.
pub const PRODUCTS_ROUTE: &str = "/products";

/// Error parsing a products path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("products path needs a segment and a navigation id, got {0:?}")]
    MissingSegments(String),
    #[error("products path has too many segments: {0:?}")]
    TooManySegments(String),
}

/// A decomposed products path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductsPath {
    pub segment: String,
    pub navigation_uid: NavigationUid,
    /// Raw comma-separated filter ids, exactly as requested.
    pub filter_string: Option<String>,
}

impl ProductsPath {
    /// Parse the part of the path after `/products/`.
    ///
    /// Leading and trailing slashes are ignored. A trailing slash therefore
    /// does not produce an empty filter string; `shoes/nav123/,` does.
    ///
    /// # Errors
    ///
    /// Returns `PathError` when the segment or navigation id is missing, or
    /// when there are more than three segments.
    pub fn parse(tail: &str) -> Result<Self, PathError> {
        let trimmed = tail.trim_matches('/');
        let mut parts = trimmed.split('/');

        let segment = parts.next().filter(|s| !s.is_empty());
        let navigation_uid = parts.next().filter(|s| !s.is_empty());
        let (Some(segment), Some(navigation_uid)) = (segment, navigation_uid) else {
            return Err(PathError::MissingSegments(tail.to_owned()));
        };
        let filter_string = parts.next().map(str::to_owned);
        if parts.next().is_some() {
            return Err(PathError::TooManySegments(tail.to_owned()));
        }

        Ok(Self {
            segment: segment.to_owned(),
            navigation_uid: NavigationUid::new(navigation_uid),
            filter_string,
        })
    }

    /// Canonical listing path for a navigation, with no filters selected.
    #[must_use]
    pub fn for_navigation(navigation: &Navigation) -> Self {
        Self {
            segment: canonical_segment(navigation),
            navigation_uid: navigation.uid.clone(),
            filter_string: None,
        }
    }

    /// The filter ids requested in the URL. An absent filter segment parses
    /// like an empty one.
    #[must_use]
    pub fn filter_ids(&self) -> FilterIdList {
        FilterIdList::parse(self.filter_string.as_deref().unwrap_or_default())
    }

    /// Whether the requested segment is the navigation's canonical path.
    #[must_use]
    pub fn is_canonical_for(&self, navigation: &Navigation) -> bool {
        navigation.canonical_segment() == Some(self.segment.as_str())
    }

    /// The same request re-spelled with the navigation's canonical path,
    /// keeping the original filter string.
    #[must_use]
    pub fn canonical_for(&self, navigation: &Navigation) -> Self {
        Self {
            segment: canonical_segment(navigation),
            navigation_uid: navigation.uid.clone(),
            filter_string: self.filter_string.clone(),
        }
    }

    /// The same page with a different filter selection.
    #[must_use]
    pub fn with_filters(&self, ids: &FilterIdList) -> Self {
        let segment = ids.to_segment();
        Self {
            segment: self.segment.clone(),
            navigation_uid: self.navigation_uid.clone(),
            filter_string: (!segment.is_empty()).then_some(segment),
        }
    }

    /// Render under an arbitrary mount point (e.g. `/api/products`).
    #[must_use]
    pub fn to_url_under(&self, base: &str) -> String {
        let mut url = format!(
            "{}/{}/{}",
            base.trim_end_matches('/'),
            urlencoding::encode(&self.segment),
            urlencoding::encode(self.navigation_uid.as_str()),
        );
        if let Some(filters) = self.filter_string.as_deref().filter(|f| !f.is_empty()) {
            url.push('/');
            let encoded: Vec<_> = filters.split(',').map(urlencoding::encode).collect();
            url.push_str(&encoded.join(","));
        }
        url
    }

    /// Render under [`PRODUCTS_ROUTE`].
    #[must_use]
    pub fn to_url(&self) -> String {
        self.to_url_under(PRODUCTS_ROUTE)
    }
}

/// Callers check [`Navigation::has_canonical_path`] first; a navigation
/// without one yields an empty segment that no request matches.
fn canonical_segment(navigation: &Navigation) -> String {
    navigation
        .canonical_segment()
        .unwrap_or_default()
        .to_string()
}

impl fmt::Display for ProductsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn nav(uid: &str, url_path: &str) -> Navigation {
        Navigation {
            uid: NavigationUid::new(uid),
            title: "Shoes".to_string(),
            url_path: url_path.to_string(),
            ..Navigation::default()
        }
    }

    #[test]
    fn test_parse_two_segments() {
        let path = ProductsPath::parse("shoes/nav123").unwrap();
        assert_eq!(path.segment, "shoes");
        assert_eq!(path.navigation_uid.as_str(), "nav123");
        assert_eq!(path.filter_string, None);
        assert_eq!(path.filter_ids().as_slice(), &[String::new()]);
    }

    #[test]
    fn test_parse_with_filters() {
        let path = ProductsPath::parse("/shoes/nav123/red,blue/").unwrap();
        assert_eq!(path.filter_string.as_deref(), Some("red,blue"));
        assert_eq!(path.filter_ids().as_slice(), &["red", "blue"]);
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!(matches!(
            ProductsPath::parse("shoes"),
            Err(PathError::MissingSegments(_))
        ));
        assert!(matches!(
            ProductsPath::parse("shoes//red"),
            Err(PathError::MissingSegments(_))
        ));
        assert!(matches!(
            ProductsPath::parse("a/b/c/d"),
            Err(PathError::TooManySegments(_))
        ));
    }

    #[test]
    fn test_canonical_check() {
        let navigation = nav("nav123", "shoes");
        assert!(ProductsPath::parse("shoes/nav123").unwrap().is_canonical_for(&navigation));
        assert!(!ProductsPath::parse("shoess/nav123").unwrap().is_canonical_for(&navigation));
    }

    #[test]
    fn test_redirect_target_from_mismatched_path() {
        let navigation = nav("nav123", "shoes");
        let requested = ProductsPath::parse("shoess/nav123").unwrap();
        assert_eq!(
            requested.canonical_for(&navigation).to_url(),
            "/products/shoes/nav123"
        );
    }

    #[test]
    fn test_redirect_target_keeps_filter_string() {
        let navigation = nav("nav123", "shoes");
        let requested = ProductsPath::parse("old-name/nav123/red,xl").unwrap();
        assert_eq!(
            requested.canonical_for(&navigation).to_url(),
            "/products/shoes/nav123/red,xl"
        );
    }

    #[test]
    fn test_url_path_with_uid_round_trips() {
        let navigation = nav("nav123", "shoes/nav123");
        let canonical = ProductsPath::parse("old/nav123/red")
            .unwrap()
            .canonical_for(&navigation);
        let url = canonical.to_url();
        assert_eq!(url, "/products/shoes/nav123/red");

        let reparsed = ProductsPath::parse(url.strip_prefix("/products/").unwrap()).unwrap();
        assert!(reparsed.is_canonical_for(&navigation));

        let menu_url = ProductsPath::for_navigation(&navigation).to_url();
        assert_eq!(menu_url, "/products/shoes/nav123");
        let reparsed = ProductsPath::parse(menu_url.strip_prefix("/products/").unwrap()).unwrap();
        assert!(reparsed.is_canonical_for(&navigation));
    }

    #[test]
    fn test_url_encoding_and_base() {
        let path = ProductsPath {
            segment: "men's shoes".to_string(),
            navigation_uid: NavigationUid::new("nav 1"),
            filter_string: Some("a b,c".to_string()),
        };
        assert_eq!(
            path.to_url_under("/api/products/"),
            "/api/products/men%27s%20shoes/nav%201/a%20b,c"
        );
    }

    #[test]
    fn test_with_filters_drops_empty_segment() {
        let path = ProductsPath::parse("shoes/nav123/red").unwrap();
        let cleared = path.with_filters(&FilterIdList::default());
        assert_eq!(cleared.to_url(), "/products/shoes/nav123");
    }
}
