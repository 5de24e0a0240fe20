//! Orientation-aware layout card images.
//!
//! Each card carries one asset per orientation and a preferred orientation per
//! screen-size class. The server cannot know the viewport, so every
//! breakpoint's choice is rendered as a `<source>` of one `<picture>` and the
//! browser picks.

use shoebox_core::{ImageHeight, LayoutCardDetail, Orientation};

/// Nominal width used to turn an aspect ratio into `width`/`height`
/// attributes.
const NOMINAL_WIDTH: u32 = 1000;

/// Screen-size classes, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// `md`, 768px and up.
    Large,
    /// `sm`, 640px and up.
    Medium,
    /// Below `sm`.
    Small,
}

impl Breakpoint {
    /// Media query for `<source media>`, `None` for the fallback size.
    #[must_use]
    pub const fn media(self) -> Option<&'static str> {
        match self {
            Self::Large => Some("(min-width: 768px)"),
            Self::Medium => Some("(min-width: 640px)"),
            Self::Small => None,
        }
    }

    /// Breakpoint in effect at a viewport width.
    #[must_use]
    pub const fn for_width(width: u32) -> Self {
        if width >= 768 {
            Self::Large
        } else if width >= 640 {
            Self::Medium
        } else {
            Self::Small
        }
    }
}

/// Preferred orientation for a breakpoint.
#[must_use]
pub const fn orientation_for(card: &LayoutCardDetail, breakpoint: Breakpoint) -> Option<Orientation> {
    let preferred = card.preferred_orientation;
    match breakpoint {
        Breakpoint::Large => preferred.large,
        Breakpoint::Medium => preferred.medium,
        Breakpoint::Small => preferred.small,
    }
}

/// Aspect ratio for the image, or `None` when the image is cropped to a fixed
/// height.
///
/// Falls back to the first usable ratio in squarish, portrait, landscape
/// order when the selected orientation has none.
#[must_use]
pub fn aspect_ratio(card: &LayoutCardDetail, orientation: Option<Orientation>) -> Option<f64> {
    if matches!(card.image_height, ImageHeight::Maintain | ImageHeight::Medium) {
        return None;
    }

    let ratios = &card.assets_aspect_ratios;
    let usable = |ratio: Option<&f64>| ratio.copied().filter(|r| r.is_finite() && *r > 0.0);

    orientation
        .and_then(|o| usable(ratios.get(o)))
        .or_else(|| {
            [
                Orientation::Squarish,
                Orientation::Portrait,
                Orientation::Landscape,
            ]
            .into_iter()
            .find_map(|o| usable(ratios.get(o)))
        })
}

/// Image URL for an orientation: the CDN URL of its asset, or the card's
/// landscape URL when there is no asset or no CDN.
#[must_use]
pub fn image_src(
    card: &LayoutCardDetail,
    orientation: Option<Orientation>,
    image_base_url: Option<&str>,
) -> String {
    let asset = orientation
        .and_then(|o| card.assets_ids.get(o))
        .filter(|id| !id.is_empty());

    match (image_base_url, asset) {
        (Some(base), Some(asset)) => format!(
            "{}/{}",
            base.trim_end_matches('/'),
            urlencoding::encode(asset.as_str())
        ),
        _ => card.landscape_url.clone(),
    }
}

/// One `<source>` (or the fallback `<img>`) of a card's `<picture>`.
#[derive(Debug, Clone, PartialEq)]
pub struct PictureSource {
    pub media: Option<&'static str>,
    pub src: String,
    pub ratio: Option<f64>,
}

impl PictureSource {
    /// `(width, height)` attributes that reserve the image's aspect ratio.
    #[must_use]
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        let ratio = self.ratio?;
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "ratio is finite and positive, the result fits in u32"
        )]
        let height = (f64::from(NOMINAL_WIDTH) / ratio).round() as u32;
        Some((NOMINAL_WIDTH, height.max(1)))
    }
}

/// Layout card display data.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCardView {
    pub title: String,
    pub sub_title: Option<String>,
    pub url: Option<String>,
    /// `<source>` elements, largest breakpoint first.
    pub sources: Vec<PictureSource>,
    /// The small-screen image, used as the `<img>`.
    pub fallback: PictureSource,
    /// Extra image classes for fixed-height crops.
    pub image_class: &'static str,
}

impl LayoutCardView {
    #[must_use]
    pub fn new(card: &LayoutCardDetail, image_base_url: Option<&str>) -> Self {
        let source = |breakpoint: Breakpoint| {
            let orientation = orientation_for(card, breakpoint);
            PictureSource {
                media: breakpoint.media(),
                src: image_src(card, orientation, image_base_url),
                ratio: aspect_ratio(card, orientation),
            }
        };

        Self {
            title: card.title.clone(),
            sub_title: card.sub_title.clone(),
            url: card.url.clone(),
            sources: vec![source(Breakpoint::Large), source(Breakpoint::Medium)],
            fallback: source(Breakpoint::Small),
            image_class: match card.image_height {
                ImageHeight::Medium => "card-image--medium",
                ImageHeight::Maintain => "card-image--maintain",
                ImageHeight::Auto | ImageHeight::Unknown => "",
            },
        }
    }
}
