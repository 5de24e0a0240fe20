//! Editorial layout cards and their orientation-keyed image assets.

use serde::{Deserialize, Serialize};

use super::id::AssetId;

/// Image orientation an asset was cropped for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Squarish,
    Portrait,
    Landscape,
}

/// One value per orientation, any of which may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrientationMap<T> {
    #[serde(default)]
    pub squarish: Option<T>,
    #[serde(default)]
    pub portrait: Option<T>,
    #[serde(default)]
    pub landscape: Option<T>,
}

impl<T> OrientationMap<T> {
    /// Value for a specific orientation.
    #[must_use]
    pub const fn get(&self, orientation: Orientation) -> Option<&T> {
        match orientation {
            Orientation::Squarish => self.squarish.as_ref(),
            Orientation::Portrait => self.portrait.as_ref(),
            Orientation::Landscape => self.landscape.as_ref(),
        }
    }
}

/// Preferred orientation per screen-size class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferredOrientation {
    #[serde(default)]
    pub small: Option<Orientation>,
    #[serde(default)]
    pub medium: Option<Orientation>,
    #[serde(default)]
    pub large: Option<Orientation>,
}

/// How tall the card image renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageHeight {
    /// Height follows the asset's aspect ratio.
    #[default]
    Auto,
    /// Fixed medium height, image cropped to cover.
    Medium,
    /// Keep a minimum height, image cropped to cover.
    Maintain,
    #[serde(other)]
    Unknown,
}

/// An editorial card rendered in a page's banner area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutCardDetail {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(default)]
    pub sub_title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "landscapeURL", default, deserialize_with = "super::null_as_default")]
    pub landscape_url: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub preferred_orientation: PreferredOrientation,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub assets_ids: OrientationMap<AssetId>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub assets_aspect_ratios: OrientationMap<f64>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub image_height: ImageHeight,
}
