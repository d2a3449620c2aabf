//! Turns the localized text of a listing page into plain numbers.
//!
//! Prices on the site come in two flavours: `"7.5万円"` (multiples of 10 000 yen)
//! and `"3000円"`. A lone `"-"` means the fee doesn't apply.

use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

/// Unsigned decimal, no exponent.
static RE_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+)?$").expect("invalid regex: amount"));

/// Placeholder the site uses for "no value".
pub const NO_VALUE: &str = "-";
const MAN_YEN_SUFFIX: &str = "万円";
const YEN_SUFFIX: &str = "円";
const MAN: f64 = 10_000.0;

/// Strips the whitespace and control characters the markup wraps every value in.
#[inline]
pub fn strip_decoration(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c.is_control())
}

/// Parses a fee into yen. Accepts `"-"`, `"<n>万円"` and `"<n>円"`.
pub fn parse_yen(raw: &str) -> Result<u64> {
    let value = strip_decoration(raw);
    if value == NO_VALUE {
        return Ok(0);
    }
    if value.ends_with(MAN_YEN_SUFFIX) {
        return parse_man_yen(value);
    }
    value
        .strip_suffix(YEN_SUFFIX)
        .map(|n| n.trim().replace(',', ""))
        .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|n| n.parse::<u64>().ok())
        .ok_or_else(|| Error::malformed("yen amount", raw))
}

/// Parses an amount written in 万円 into yen, rounding to the nearest yen.
/// Amounts that don't fit in a `u64` are malformed.
pub fn parse_man_yen(raw: &str) -> Result<u64> {
    strip_decoration(raw)
        .strip_suffix(MAN_YEN_SUFFIX)
        .map(str::trim)
        .filter(|n| RE_AMOUNT.is_match(n))
        .and_then(|n| n.parse::<f64>().ok())
        .map(|n| (n * MAN).round())
        .filter(|yen| yen.is_finite() && *yen < u64::MAX as f64)
        .map(|yen| yen as u64)
        .ok_or_else(|| Error::malformed("万円 amount", raw))
}

/// Parses a surface like `"25.3m2"` into square meters.
pub fn parse_surface(raw: &str) -> Result<f64> {
    let value = strip_decoration(raw);
    value
        .strip_suffix("m2")
        .or_else(|| value.strip_suffix("m²"))
        .and_then(|n| n.trim().parse::<f64>().ok())
        .ok_or_else(|| Error::malformed("surface", raw))
}
