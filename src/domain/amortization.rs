// src/domain/amortization.rs

//! Level-payment amortization shared by the listing cost engine and the
//! affordability solver.
//!
//! Both directions use the standard fixed-rate formula
//! `M = P * r(1+r)^n / ((1+r)^n - 1)` with `r` the monthly rate and `n` the
//! number of monthly payments, evaluated through the annuity factor
//! `1 - (1+r)^-n` so tiny rates keep their precision and huge rates settle
//! at `payment / r` instead of overflowing. A zero rate degrades to the
//! straight-line limit so neither direction ever divides by zero.

/// Converts an annual percentage (e.g. `6.5`) into a monthly fraction.
pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / 12.0
}

/// Number of monthly payments for a term in years.
pub fn payment_count(term_years: u32) -> u32 {
    term_years * 12
}

/// `1 - (1+r)^-n`, computed without forming `(1+r)^n`.
fn annuity_factor(r: f64, n: u32) -> f64 {
    -(-f64::from(n) * r.ln_1p()).exp_m1()
}

/// Monthly payment that retires `principal` over `n` payments at rate `r`.
pub fn monthly_payment(principal: f64, r: f64, n: u32) -> f64 {
    if r == 0.0 {
        return principal / f64::from(n);
    }
    principal * r / annuity_factor(r, n)
}

/// Largest principal a monthly `payment` can retire over `n` payments at
/// rate `r`. Inverse of [`monthly_payment`].
pub fn max_principal(payment: f64, r: f64, n: u32) -> f64 {
    if r == 0.0 {
        return payment * f64::from(n);
    }
    payment * annuity_factor(r, n) / r
}
