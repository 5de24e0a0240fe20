//! Stock label attached to product records.

use serde::{Deserialize, Serialize};

/// Merchandising label the backend attaches to a product.
///
/// Known values map to variants; anything else is kept verbatim so new
/// backend labels still render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StockLabel {
    #[default]
    InStock,
    JustIn,
    Other(String),
}

impl StockLabel {
    /// Text shown on the product card. In-stock products show nothing.
    #[must_use]
    pub fn display_text(&self) -> Option<&str> {
        match self {
            Self::InStock => None,
            Self::JustIn => Some("Just In"),
            Self::Other(raw) if raw.is_empty() => None,
            Self::Other(raw) => Some(raw),
        }
    }

    /// Raw backend value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::InStock => "IN_STOCK",
            Self::JustIn => "JUST_IN",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for StockLabel {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "IN_STOCK" => Self::InStock,
            "JUST_IN" => Self::JustIn,
            _ => Self::Other(raw),
        }
    }
}

impl From<StockLabel> for String {
    fn from(label: StockLabel) -> Self {
        label.as_str().to_owned()
    }
}

impl std::fmt::Display for StockLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
