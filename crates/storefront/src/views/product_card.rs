//! Product card display data.

use shoebox_core::{Product, ProductColor};

/// Product display data for the listing grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub uid: String,
    pub title: String,
    pub sub_title: String,
    /// Default image, swapped for a thumbnail's image on hover.
    pub image_url: String,
    pub label: Option<String>,
    pub colours: String,
    pub price: String,
    /// Struck-through full price, only when discounted.
    pub full_price: Option<String>,
    pub percent_off: Option<u32>,
    pub thumbnails: Vec<ColourThumbnail>,
}

/// Hover thumbnail for an alternate colourway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourThumbnail {
    pub uid: String,
    pub image_url: String,
    pub description: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            uid: product.uid.to_string(),
            title: product.title.clone(),
            sub_title: product.sub_title.clone(),
            image_url: product.images.squarish_url.clone(),
            label: product.label.display_text().map(str::to_owned),
            colours: colours_label(colour_count(product)),
            price: product.price.display_current(),
            full_price: product.price.display_full(),
            percent_off: product.price.percent_off(),
            thumbnails: product
                .product_another_colors
                .iter()
                .map(ColourThumbnail::from)
                .collect(),
        }
    }
}

impl From<&ProductColor> for ColourThumbnail {
    fn from(colour: &ProductColor) -> Self {
        Self {
            uid: colour.uid.to_string(),
            image_url: colour.images.squarish_url.clone(),
            description: colour.color_description.clone().unwrap_or_default(),
        }
    }
}

/// Alternate colourways count, with a product that lists none counting as one.
fn colour_count(product: &Product) -> usize {
    product.product_another_colors.len().max(1)
}

fn colours_label(count: usize) -> String {
    if count == 1 {
        "1 Colour".to_string()
    } else {
        format!("{count} Colours")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shoebox_core::{CurrencyCode, ProductImages, ProductPrice, ProductUid, StockLabel};

    fn shoe() -> Product {
        Product {
            uid: ProductUid::new("p1"),
            title: "Air Runner".to_string(),
            sub_title: "Men's Road Running Shoes".to_string(),
            price: ProductPrice::new(Decimal::new(110, 0), CurrencyCode::USD),
            images: ProductImages {
                squarish_url: "https://img.test/p1.jpg".to_string(),
                ..ProductImages::default()
            },
            ..Product::default()
        }
    }

    fn colour(uid: &str) -> ProductColor {
        ProductColor {
            uid: ProductUid::new(uid),
            images: ProductImages {
                squarish_url: format!("https://img.test/{uid}.jpg"),
                ..ProductImages::default()
            },
            color_description: Some(format!("{uid} colourway")),
        }
    }

    #[test]
    fn test_in_stock_has_no_label() {
        let card = ProductCardView::from(&shoe());
        assert_eq!(card.label, None);
        assert_eq!(card.image_url, "https://img.test/p1.jpg");
        assert_eq!(card.price, "$110");
        assert_eq!(card.full_price, None);
    }

    #[test]
    fn test_labels() {
        let mut product = shoe();
        product.label = StockLabel::JustIn;
        assert_eq!(ProductCardView::from(&product).label.as_deref(), Some("Just In"));

        product.label = StockLabel::from("SOLD_OUT".to_string());
        assert_eq!(ProductCardView::from(&product).label.as_deref(), Some("SOLD_OUT"));
    }

    #[test]
    fn test_colour_count_defaults_to_one() {
        assert_eq!(ProductCardView::from(&shoe()).colours, "1 Colour");

        let mut product = shoe();
        product.product_another_colors = vec![colour("c1"), colour("c2"), colour("c3")];
        let card = ProductCardView::from(&product);
        assert_eq!(card.colours, "3 Colours");
        assert_eq!(card.thumbnails.len(), 3);
        assert_eq!(card.thumbnails[1].image_url, "https://img.test/c2.jpg");
        assert_eq!(card.thumbnails[1].description, "c2 colourway");
    }

    #[test]
    fn test_discounted_price() {
        let mut product = shoe();
        product.price = ProductPrice {
            current_price: Decimal::new(8997, 2),
            full_price: Some(Decimal::new(120, 0)),
            currency_code: CurrencyCode::USD,
        };
        let card = ProductCardView::from(&product);
        assert_eq!(card.price, "$89.97");
        assert_eq!(card.full_price.as_deref(), Some("$120"));
        assert_eq!(card.percent_off, Some(25));
    }
}
