// src/domain/costs.rs

//! Listing-level monthly cost derivation.
//!
//! Every listing returned by the query path is annotated with an estimated
//! monthly cost of ownership: mortgage, property tax, insurance and commute.
//! The loan assumptions are fixed by [`CostPolicy`] and do not depend on the
//! visitor, so the same listing always shows the same figures.

use crate::domain::amortization::{monthly_payment, monthly_rate, payment_count};
use crate::domain::error::{ensure_finite, FinanceError, InvalidInput};
use crate::domain::listing::Listing;
use serde::Serialize;

/// Estimated monthly commute spend per county.
pub const COMMUTE_BY_COUNTY: &[(&str, f64)] = &[
    ("Manhattan", 150.0),
    ("Brooklyn", 200.0),
    ("Queens", 250.0),
    ("Bronx", 200.0),
    ("Staten Island", 300.0),
];

/// Commute estimate used when the county is missing or not in the table.
pub const DEFAULT_COMMUTE: f64 = 200.0;

/// Fixed assumptions behind the listing cost figures.
#[derive(Debug, Clone, PartialEq)]
pub struct CostPolicy {
    /// Share of the price paid up front. The rest is financed.
    pub down_payment_ratio: f64,
    pub annual_rate_pct: f64,
    pub term_years: u32,
    /// Annual property tax as a share of price.
    pub property_tax_rate: f64,
    /// Annual homeowner's insurance as a share of price.
    pub insurance_rate: f64,
    pub commute_by_county: &'static [(&'static str, f64)],
    pub default_commute: f64,
}

impl Default for CostPolicy {
    fn default() -> Self {
        Self {
            down_payment_ratio: 0.20,
            annual_rate_pct: 6.5,
            term_years: 30,
            property_tax_rate: 0.015,
            insurance_rate: 0.005,
            commute_by_county: COMMUTE_BY_COUNTY,
            default_commute: DEFAULT_COMMUTE,
        }
    }
}

/// Unrounded monthly figures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyCosts {
    pub mortgage: f64,
    pub property_tax: f64,
    pub insurance: f64,
    pub commute: f64,
}

impl MonthlyCosts {
    pub fn sum(&self) -> f64 {
        self.mortgage + self.property_tax + self.insurance + self.commute
    }
}

/// Display figures, each rounded to the nearest whole unit.
///
/// `total` is rounded from the unrounded sum, so it can differ from the sum
/// of the rounded fields by a unit or two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub mortgage: i64,
    pub property_tax: i64,
    pub insurance: i64,
    pub commute: i64,
    #[serde(skip)]
    pub total: i64,
}

impl From<MonthlyCosts> for CostBreakdown {
    fn from(c: MonthlyCosts) -> Self {
        Self {
            mortgage: round_units(c.mortgage),
            property_tax: round_units(c.property_tax),
            insurance: round_units(c.insurance),
            commute: round_units(c.commute),
            total: round_units(c.sum()),
        }
    }
}

// f64::round is half-away-from-zero.
fn round_units(v: f64) -> i64 {
    v.round() as i64
}

impl CostPolicy {
    pub fn commute_for(&self, county: Option<&str>) -> f64 {
        county
            .and_then(|c| {
                self.commute_by_county
                    .iter()
                    .find(|(name, _)| *name == c)
                    .map(|(_, cost)| *cost)
            })
            .unwrap_or(self.default_commute)
    }

    /// Unrounded monthly costs for a price and county.
    pub fn monthly_costs(&self, price: f64, county: Option<&str>) -> Result<MonthlyCosts, FinanceError> {
        let price = ensure_finite("price", price)?;
        if price <= 0.0 {
            return Err(InvalidInput::NonPositivePrice.into());
        }

        let principal = price * (1.0 - self.down_payment_ratio);
        let mortgage = monthly_payment(
            principal,
            monthly_rate(self.annual_rate_pct),
            payment_count(self.term_years),
        );

        Ok(MonthlyCosts {
            mortgage,
            property_tax: price * self.property_tax_rate / 12.0,
            insurance: price * self.insurance_rate / 12.0,
            commute: self.commute_for(county),
        })
    }

    pub fn derive(&self, listing: &Listing) -> Result<CostBreakdown, FinanceError> {
        self.monthly_costs(listing.price as f64, listing.county.as_deref())
            .map(CostBreakdown::from)
    }
}

/// Monthly cost breakdown for a listing under the default policy.
pub fn derive_costs(listing: &Listing) -> Result<CostBreakdown, FinanceError> {
    CostPolicy::default().derive(listing)
}
