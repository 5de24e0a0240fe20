//! Mapping from the `order` query parameter to the backend sort directive.

use serde::{Deserialize, Serialize};

/// Sort direction understood by the catalog backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    Desc,
}

/// Product ordering selected by the shopper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// No explicit ordering; the backend default applies.
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    Newest,
}

impl SortOrder {
    /// Map an `order` query value. Unrecognized or absent values fall back to
    /// [`SortOrder::Featured`].
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("price-asc") => Self::PriceAsc,
            Some("price-desc") => Self::PriceDesc,
            Some("newest") => Self::Newest,
            _ => Self::Featured,
        }
    }

    /// The query value that selects this ordering, if any.
    #[must_use]
    pub const fn as_query(self) -> Option<&'static str> {
        match self {
            Self::Featured => None,
            Self::PriceAsc => Some("price-asc"),
            Self::PriceDesc => Some("price-desc"),
            Self::Newest => Some("newest"),
        }
    }

    /// Shopper-facing label for the sort menu.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceAsc => "Price: Low-High",
            Self::PriceDesc => "Price: High-Low",
            Self::Newest => "Newest",
        }
    }

    /// Every ordering, in sort-menu order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Featured, Self::Newest, Self::PriceDesc, Self::PriceAsc]
    }

    /// The `order_by` variable sent with the product list query.
    #[must_use]
    pub const fn order_by(self) -> OrderBy {
        match self {
            Self::Featured => OrderBy {
                current_price: None,
                update_time: None,
            },
            Self::PriceAsc => OrderBy {
                current_price: Some(OrderDirection::Asc),
                update_time: None,
            },
            Self::PriceDesc => OrderBy {
                current_price: Some(OrderDirection::Desc),
                update_time: None,
            },
            Self::Newest => OrderBy {
                current_price: None,
                update_time: Some(OrderDirection::Desc),
            },
        }
    }
}

/// Sort directive keyed by product column. Unset keys are omitted, so the
/// featured ordering serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<OrderDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<OrderDirection>,
}

impl OrderBy {
    /// Whether no sort key is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.current_price.is_none() && self.update_time.is_none()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn emitted(order: Option<&str>) -> serde_json::Value {
        serde_json::to_value(SortOrder::from_query(order).order_by()).unwrap()
    }

    #[test]
    fn test_recognized_orders() {
        assert_eq!(emitted(Some("price-asc")), json!({"current_price": "asc"}));
        assert_eq!(emitted(Some("price-desc")), json!({"current_price": "desc"}));
        assert_eq!(emitted(Some("newest")), json!({"update_time": "desc"}));
    }

    #[test]
    fn test_unrecognized_or_absent_sets_no_key() {
        for value in [None, Some(""), Some("PRICE-ASC"), Some("oldest"), Some("price")] {
            assert_eq!(emitted(value), json!({}));
            assert!(SortOrder::from_query(value).order_by().is_empty());
        }
    }

    #[test]
    fn test_query_value_round_trip() {
        for order in SortOrder::all() {
            assert_eq!(SortOrder::from_query(order.as_query()), order);
        }
    }
}
