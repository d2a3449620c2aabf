use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::parse_yen;
use crate::{Error, Result};

/// Either a 万円 amount or the "no value" dash.
static RE_FEE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?万円|-").expect("invalid regex: fee"));

/// The one-time payments due when signing, all in yen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneTimeFees {
    /// Reikin.
    pub key_money: u64,
    /// Shikikin.
    pub deposit: u64,
    pub insurance: u64,
    pub other: u64,
}

impl OneTimeFees {
    /// Sum of all fees. A sum that overflows can't come from a real listing.
    pub fn total(&self) -> Result<u64> {
        [self.deposit, self.insurance, self.other]
            .into_iter()
            .try_fold(self.key_money, u64::checked_add)
            .ok_or_else(|| Error::MalformedValue {
                field: "one-time fees total",
                raw: format!("{self:?}"),
            })
    }
}

/// The page shows key money and deposit in a single block, e.g. `"7.5万円/15万円"`.
/// Returns them in that order.
pub fn split_deposit_key_money(raw: &str) -> Result<(u64, u64)> {
    let mut fees = RE_FEE.find_iter(raw).map(|m| parse_yen(m.as_str()));
    match (fees.next(), fees.next()) {
        (Some(key_money), Some(deposit)) => Ok((key_money?, deposit?)),
        _ => Err(Error::malformed("key money / deposit", raw)),
    }
}

/// Expresses `total_yen` in months of `monthly_rent`.
/// A rent of zero means the rent hasn't been scraped yet.
pub fn fee_months(total_yen: u64, monthly_rent: u64) -> Result<f64> {
    if monthly_rent == 0 {
        return Err(Error::PreconditionViolated(
            "monthly rent must be scraped before fees can be expressed in months",
        ));
    }
    Ok(total_yen as f64 / monthly_rent as f64)
}
