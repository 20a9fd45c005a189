// src/domain/error.rs
use thiserror::Error;

/// Why a numeric input was rejected by the finance core.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidInput {
    #[error("price must be greater than zero")]
    NonPositivePrice,
    #[error("annual income must be greater than zero")]
    NonPositiveIncome,
    #[error("loan term must be at least one year")]
    NonPositiveTerm,
    #[error("loan term cannot exceed {max_years} years")]
    TermTooLong { max_years: i64 },
    #[error("interest rate cannot be negative")]
    NegativeRate,
    #[error("monthly debts cannot be negative")]
    NegativeDebts,
    #[error("down payment cannot be negative")]
    NegativeDownPayment,
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),
    /// Existing debts already use up the whole debt-to-income ceiling.
    #[error("monthly debts exceed the {ceiling_pct}% debt-to-income ceiling; no housing budget remains")]
    DebtsExceedCeiling { ceiling_pct: f64 },
}

/// The only failure the finance core raises. Always a caller contract
/// violation; the boundary translates it into a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FinanceError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Rejects NaN and infinities before any arithmetic touches them.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, FinanceError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidInput::NotFinite(field).into())
    }
}
