// src/domain/affordability.rs

//! Household budget: how much house a financial profile supports.

use crate::domain::amortization::{max_principal, monthly_rate, payment_count};
use crate::domain::error::{ensure_finite, FinanceError, InvalidInput};
use serde::Serialize;

/// Longest loan term the solver accepts.
pub const MAX_TERM_YEARS: i64 = 50;

/// Underwriting rules applied to every profile.
#[derive(Debug, Clone, PartialEq)]
pub struct UnderwritingPolicy {
    /// Total debt-to-income ceiling. Housing gets whatever existing debts
    /// leave under it.
    pub dti_ceiling: f64,
    /// Bottom of the suggested range as a share of the top.
    // NOTE: a plain heuristic (half the ceiling), kept as-is.
    pub range_floor_ratio: f64,
}

impl Default for UnderwritingPolicy {
    fn default() -> Self {
        Self {
            dti_ceiling: 0.43,
            range_floor_ratio: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinancialProfile {
    pub annual_income: f64,
    pub monthly_debts: f64,
    pub down_payment: f64,
    pub annual_interest_rate_pct: f64,
    pub loan_term_years: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffordabilityResult {
    pub max_monthly_payment: f64,
    pub max_loan: f64,
    pub price_range: PriceRange,
    pub monthly_gross_income: f64,
    /// Percentage, two decimal places.
    pub debt_to_income_pct: f64,
}

impl FinancialProfile {
    fn validate(&self) -> Result<(), FinanceError> {
        ensure_finite("annual income", self.annual_income)?;
        ensure_finite("monthly debts", self.monthly_debts)?;
        ensure_finite("down payment", self.down_payment)?;
        ensure_finite("interest rate", self.annual_interest_rate_pct)?;

        if self.annual_income <= 0.0 {
            return Err(InvalidInput::NonPositiveIncome.into());
        }
        if self.monthly_debts < 0.0 {
            return Err(InvalidInput::NegativeDebts.into());
        }
        if self.down_payment < 0.0 {
            return Err(InvalidInput::NegativeDownPayment.into());
        }
        if self.annual_interest_rate_pct < 0.0 {
            return Err(InvalidInput::NegativeRate.into());
        }
        if self.loan_term_years <= 0 {
            return Err(InvalidInput::NonPositiveTerm.into());
        }
        if self.loan_term_years > MAX_TERM_YEARS {
            return Err(InvalidInput::TermTooLong {
                max_years: MAX_TERM_YEARS,
            }
            .into());
        }
        Ok(())
    }
}

impl UnderwritingPolicy {
    pub fn solve(&self, profile: &FinancialProfile) -> Result<AffordabilityResult, FinanceError> {
        profile.validate()?;

        let monthly_gross_income = profile.annual_income / 12.0;
        let max_monthly_payment = monthly_gross_income * self.dti_ceiling - profile.monthly_debts;
        if max_monthly_payment <= 0.0 {
            return Err(InvalidInput::DebtsExceedCeiling {
                ceiling_pct: self.dti_ceiling * 100.0,
            }
            .into());
        }

        // validate() bounds the term to 1..=MAX_TERM_YEARS
        let n = payment_count(profile.loan_term_years as u32);
        let r = monthly_rate(profile.annual_interest_rate_pct);
        let max_loan = max_principal(max_monthly_payment, r, n);

        let max_price = max_loan + profile.down_payment;
        let min_price = max_price * self.range_floor_ratio;

        let dti = profile.monthly_debts / monthly_gross_income * 100.0;

        let result = AffordabilityResult {
            max_monthly_payment,
            max_loan,
            price_range: PriceRange {
                min: min_price,
                max: max_price,
            },
            monthly_gross_income,
            debt_to_income_pct: (dti * 100.0).round() / 100.0,
        };

        // Extreme but finite inputs can still overflow.
        ensure_finite("max price", result.price_range.max)?;
        ensure_finite("max loan", result.max_loan)?;
        Ok(result)
    }
}

/// Affordable price range for a profile under the default underwriting rules.
pub fn solve_affordability(profile: &FinancialProfile) -> Result<AffordabilityResult, FinanceError> {
    UnderwritingPolicy::default().solve(profile)
}
