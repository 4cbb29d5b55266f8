use serde::{Deserialize, Serialize};

/// Reference property used by the fractional widget until live listings land.
pub const REFERENCE_PROPERTY_PRICE: u32 = 200_000;
/// Largest stake a single investor may hold in one property.
pub const SHARE_CAP_PERCENT: f64 = 50.0;
pub const INVESTMENT_MIN: u32 = 200;
pub const INVESTMENT_MAX: u32 = 100_000;

const ANNUAL_YIELD_LOW: f64 = 0.10;
const ANNUAL_YIELD_HIGH: f64 = 0.20;
const MANAGEMENT_FEE_RATE: f64 = 0.10;

/// Projected stake and rental income for a fractional investor.
///
/// `share_percent` and `investment_amount` are kept mutually consistent:
/// whichever entry point produced the quote, the reported share is derived
/// from the final clamped amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractionalQuote {
    pub property_price: u32,
    pub share_percent: f64,
    pub investment_amount: u32,
    pub projected_income_low: u32,
    pub projected_income_high: u32,
}

/// Quote a stake expressed as a percentage of the property.
pub fn quote_by_share(property_price: u32, share_percent: f64) -> FractionalQuote {
    let share = sanitize_share(share_percent);
    let raw_amount = (f64::from(property_price) * share / 100.0).round() as u32;
    build_quote(property_price, raw_amount.clamp(INVESTMENT_MIN, INVESTMENT_MAX))
}

/// Quote a stake expressed as an absolute investment amount.
pub fn quote_by_amount(property_price: u32, amount: u32) -> FractionalQuote {
    build_quote(property_price, amount.clamp(INVESTMENT_MIN, INVESTMENT_MAX))
}

fn build_quote(property_price: u32, investment_amount: u32) -> FractionalQuote {
    let derived_share =
        f64::from(investment_amount) / f64::from(property_price.max(1)) * 100.0;
    let share_percent = derived_share.min(SHARE_CAP_PERCENT);
    let net_factor = 1.0 - MANAGEMENT_FEE_RATE;

    FractionalQuote {
        property_price,
        share_percent,
        investment_amount,
        projected_income_low: round_eur(f64::from(investment_amount) * ANNUAL_YIELD_LOW * net_factor),
        projected_income_high: round_eur(
            f64::from(investment_amount) * ANNUAL_YIELD_HIGH * net_factor,
        ),
    }
}

fn sanitize_share(share_percent: f64) -> f64 {
    if !share_percent.is_finite() || share_percent <= 0.0 {
        return 0.0;
    }
    share_percent.min(SHARE_CAP_PERCENT)
}

fn round_eur(value: f64) -> u32 {
    value.round() as u32
}
