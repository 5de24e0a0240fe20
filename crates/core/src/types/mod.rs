//! Core types for Shoebox.
//!
//! This module provides the catalog records fetched per page request and
//! type-safe wrappers around their identifiers.

pub mod catalog;
pub mod id;
pub mod label;
pub mod layout;
pub mod price;

pub use catalog::{
    Category, FilterLevel, FilterOption, Navigation, Product, ProductAggregate, ProductColor,
    ProductImages,
};
pub use id::*;
pub use label::StockLabel;
pub use layout::{
    ImageHeight, LayoutCardDetail, Orientation, OrientationMap, PreferredOrientation,
};
pub use price::{CurrencyCode, ProductPrice};

use serde::{Deserialize, Deserializer};

/// Deserialize an explicit `null` as the type's default.
///
/// `#[serde(default)]` only covers missing keys; the catalog backend sends
/// `null` for unset scalars and empty relationships alike.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
