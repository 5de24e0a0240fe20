//! Askama filters shared by the storefront layouts.

use std::fmt::Display;

use chrono::{DateTime, Datelike, Utc};

/// Year printed in the copyright line of the `base.html` footer.
///
/// The piped value is ignored: `{{ ""|current_year }}`.
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    Ok(copyright_year(Utc::now()))
}

fn copyright_year(now: DateTime<Utc>) -> i32 {
    now.year()
}
