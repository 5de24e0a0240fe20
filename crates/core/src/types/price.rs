//! Type-safe price representation using decimal arithmetic.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// The price block attached to every product.
///
/// `current_price` is what the shopper pays and is the sort key used by the
/// `price-asc` / `price-desc` orderings. `full_price` is only present when
/// the product is marked down.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPrice {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub current_price: Decimal,
    #[serde(default)]
    pub full_price: Option<Decimal>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub currency_code: CurrencyCode,
}

impl ProductPrice {
    /// Create an undiscounted price.
    #[must_use]
    pub const fn new(current_price: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            current_price,
            full_price: None,
            currency_code,
        }
    }

    /// The full price, but only when it is strictly above the current price.
    #[must_use]
    pub fn markdown_from(&self) -> Option<Decimal> {
        self.full_price.filter(|full| *full > self.current_price)
    }

    /// Whole-number percentage off the full price, if discounted.
    #[must_use]
    pub fn percent_off(&self) -> Option<u32> {
        let full = self.markdown_from()?;
        if full.is_zero() {
            return None;
        }
        ((full - self.current_price) / full * Decimal::ONE_HUNDRED)
            .round()
            .to_u32()
    }

    /// Format the current price for display (e.g. `$110` or `$89.97`).
    #[must_use]
    pub fn display_current(&self) -> String {
        self.currency_code.format(self.current_price)
    }

    /// Format the marked-down-from price for display, if discounted.
    #[must_use]
    pub fn display_full(&self) -> Option<String> {
        self.markdown_from().map(|full| self.currency_code.format(full))
    }
}

/// ISO 4217 currency code.
///
/// Codes with a known symbol map to variants; any other code is kept
/// verbatim and prefixes the amount instead of a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
    Other(String),
}

impl CurrencyCode {
    /// The three-letter code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
            Self::Other(code) => code,
        }
    }

    /// Display symbol, if the code has one.
    #[must_use]
    pub const fn symbol(&self) -> Option<&'static str> {
        match self {
            Self::USD | Self::CAD | Self::AUD => Some("$"),
            Self::EUR => Some("€"),
            Self::GBP => Some("£"),
            Self::Other(_) => None,
        }
    }

    /// Format an amount, dropping the fraction for whole amounts.
    #[must_use]
    pub fn format(&self, amount: Decimal) -> String {
        let amount = amount.round_dp(2);
        let number = if amount.fract().is_zero() {
            amount.trunc().to_string()
        } else {
            format!("{amount:.2}")
        };
        match self.symbol() {
            Some(symbol) => format!("{symbol}{number}"),
            None if self.as_str().is_empty() => number,
            None => format!("{} {number}", self.as_str()),
        }
    }
}

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        match code.as_str() {
            "USD" => Self::USD,
            "EUR" => Self::EUR,
            "GBP" => Self::GBP,
            "CAD" => Self::CAD,
            "AUD" => Self::AUD,
            _ => Self::Other(code),
        }
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.as_str().to_owned()
    }
}
