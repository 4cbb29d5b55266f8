use serde::{Deserialize, Serialize};

pub const PRICE_MIN: u32 = 50_000;
pub const PRICE_MAX: u32 = 500_000;
pub const DOWN_PAYMENT_PCT_MIN: u8 = 15;
pub const DOWN_PAYMENT_PCT_MAX: u8 = 100;
pub const TERM_YEARS_MIN: u8 = 5;
pub const TERM_YEARS_MAX: u8 = 30;

const FIXED_ANNUAL_RATE: f64 = 0.14;
const VARIABLE_ANNUAL_RATE: f64 = 0.17;
const TRANSFER_TAX_RATE: f64 = 0.025;
const ACQUISITION_COST_RATE: f64 = 0.015;

/// Interest selection offered to buyers. The two products map to fixed
/// published rates rather than a market feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateKind {
    Fixed,
    Variable,
}

impl RateKind {
    pub const fn annual_rate(self) -> f64 {
        match self {
            RateKind::Fixed => FIXED_ANNUAL_RATE,
            RateKind::Variable => VARIABLE_ANNUAL_RATE,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RateKind::Fixed => "fixed",
            RateKind::Variable => "variable",
        }
    }
}

/// Buyer-adjustable inputs for a full-ownership financing quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancingRequest {
    pub property_price: u32,
    pub down_payment_percent: u8,
    pub term_years: u8,
    pub rate: RateKind,
}

/// Derived financing figures, all currency rounded to whole euros for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancingQuote {
    pub property_price: u32,
    pub down_payment_percent: u8,
    pub term_years: u8,
    pub rate: RateKind,
    pub down_payment: u32,
    pub loan_amount: u32,
    pub monthly_payment: u32,
    pub transfer_tax: u32,
    pub acquisition_costs: u32,
    pub total_upfront: u32,
}

/// Produce a financing quote, clamping inputs to the published bounds the
/// same way the site's sliders do.
pub fn quote(request: FinancingRequest) -> FinancingQuote {
    let property_price = request.property_price.clamp(PRICE_MIN, PRICE_MAX);
    let down_payment_percent = request
        .down_payment_percent
        .clamp(DOWN_PAYMENT_PCT_MIN, DOWN_PAYMENT_PCT_MAX);
    let term_years = request.term_years.clamp(TERM_YEARS_MIN, TERM_YEARS_MAX);

    let down_payment = round_eur(f64::from(property_price) * f64::from(down_payment_percent) / 100.0);
    let loan_amount = property_price - down_payment;

    let monthly_rate = request.rate.annual_rate() / 12.0;
    let periods = u32::from(term_years) * 12;
    let monthly_payment = if loan_amount > 0 {
        round_eur(annuity_payment(monthly_rate, periods, f64::from(loan_amount)))
    } else {
        0
    };

    let transfer_tax = round_eur(f64::from(property_price) * TRANSFER_TAX_RATE);
    let acquisition_costs = round_eur(f64::from(property_price) * ACQUISITION_COST_RATE);

    FinancingQuote {
        property_price,
        down_payment_percent,
        term_years,
        rate: request.rate,
        down_payment,
        loan_amount,
        monthly_payment,
        transfer_tax,
        acquisition_costs,
        total_upfront: down_payment + transfer_tax + acquisition_costs,
    }
}

/// Constant periodic payment for a fixed-rate, fixed-term loan.
fn annuity_payment(rate: f64, periods: u32, principal: f64) -> f64 {
    if periods == 0 {
        return 0.0;
    }
    if rate == 0.0 {
        return principal / f64::from(periods);
    }
    let growth = (1.0 + rate).powi(periods as i32);
    principal * (rate * growth) / (growth - 1.0)
}

fn round_eur(value: f64) -> u32 {
    value.round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_request() -> FinancingRequest {
        FinancingRequest {
            property_price: 200_000,
            down_payment_percent: 15,
            term_years: 15,
            rate: RateKind::Fixed,
        }
    }

    #[test]
    fn down_payment_and_loan_amount_partition_the_price() {
        for price in [50_000, 125_000, 200_000, 333_000, 500_000] {
            for pct in [15, 33, 50, 87, 100] {
                for years in [5, 15, 30] {
                    let result = quote(FinancingRequest {
                        property_price: price,
                        down_payment_percent: pct,
                        term_years: years,
                        rate: RateKind::Fixed,
                    });
                    assert_eq!(
                        result.down_payment + result.loan_amount,
                        price,
                        "price {price} pct {pct}"
                    );
                }
            }
        }
    }

    #[test]
    fn standard_fixed_quote_matches_annuity_formula() {
        let result = quote(standard_request());
        assert_eq!(result.down_payment, 30_000);
        assert_eq!(result.loan_amount, 170_000);
        // 170000 * r(1+r)^180 / ((1+r)^180 - 1) with r = 0.14/12 = 2263.96
        assert_eq!(result.monthly_payment, 2_264);
        assert_eq!(result.transfer_tax, 5_000);
        assert_eq!(result.acquisition_costs, 3_000);
        assert_eq!(result.total_upfront, 38_000);
    }

    #[test]
    fn variable_rate_raises_the_monthly_payment() {
        let fixed = quote(standard_request());
        let variable = quote(FinancingRequest {
            rate: RateKind::Variable,
            ..standard_request()
        });
        assert_eq!(variable.monthly_payment, 2_616);
        assert!(variable.monthly_payment > fixed.monthly_payment);
    }

    #[test]
    fn full_down_payment_needs_no_loan() {
        let result = quote(FinancingRequest {
            down_payment_percent: 100,
            ..standard_request()
        });
        assert_eq!(result.loan_amount, 0);
        assert_eq!(result.monthly_payment, 0);
        assert_eq!(result.total_upfront, 200_000 + 5_000 + 3_000);
    }

    #[test]
    fn out_of_range_inputs_are_clamped_to_published_bounds() {
        let result = quote(FinancingRequest {
            property_price: 10_000,
            down_payment_percent: 5,
            term_years: 45,
            rate: RateKind::Fixed,
        });
        assert_eq!(result.property_price, PRICE_MIN);
        assert_eq!(result.down_payment_percent, DOWN_PAYMENT_PCT_MIN);
        assert_eq!(result.term_years, TERM_YEARS_MAX);

        let result = quote(FinancingRequest {
            property_price: 2_000_000,
            down_payment_percent: 15,
            term_years: 1,
            rate: RateKind::Fixed,
        });
        assert_eq!(result.property_price, PRICE_MAX);
        assert_eq!(result.term_years, TERM_YEARS_MIN);
    }

    #[test]
    fn same_inputs_always_produce_the_same_quote() {
        assert_eq!(quote(standard_request()), quote(standard_request()));
    }

    #[test]
    fn zero_rate_annuity_degenerates_to_linear_amortization() {
        assert_eq!(annuity_payment(0.0, 120, 60_000.0), 500.0);
    }
}
