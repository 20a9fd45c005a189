// src/handlers/calculator.rs

//! Turns a loosely-typed budget request into a `FinancialProfile` and the
//! solver's answer into the whole-dollar shape clients see.

use crate::domain::{AffordabilityResult, FinancialProfile};
use crate::errors::ServerError;
use crate::handlers::params::Params;
use crate::templates::pages::CalculatorForm;
use serde::{Deserialize, Serialize};

/// Browsers and scripts send numbers either way.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRequest {
    #[serde(default)]
    pub annual_salary: Option<NumberOrText>,
    #[serde(default)]
    pub monthly_debts: Option<NumberOrText>,
    #[serde(default)]
    pub down_payment: Option<NumberOrText>,
    #[serde(default)]
    pub interest_rate: Option<NumberOrText>,
    #[serde(default)]
    pub loan_term: Option<NumberOrText>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WholeRange {
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetResponse {
    pub max_monthly_budget: i64,
    pub affordable_price_range: WholeRange,
    pub monthly_gross_income: i64,
    pub dti: f64,
}

impl From<&AffordabilityResult> for BudgetResponse {
    fn from(r: &AffordabilityResult) -> Self {
        Self {
            max_monthly_budget: r.max_monthly_payment.round() as i64,
            affordable_price_range: WholeRange {
                min: r.price_range.min.round() as i64,
                max: r.price_range.max.round() as i64,
            },
            monthly_gross_income: r.monthly_gross_income.round() as i64,
            dti: r.debt_to_income_pct,
        }
    }
}

fn number(field: &str, value: Option<&NumberOrText>) -> Result<f64, ServerError> {
    match value {
        Some(NumberOrText::Number(n)) => Ok(*n),
        Some(NumberOrText::Text(s)) if !s.trim().is_empty() => s
            .trim()
            .parse::<f64>()
            .map_err(|_| ServerError::BadRequest(format!("{field} must be a number"))),
        _ => Err(ServerError::BadRequest(format!("{field} is required"))),
    }
}

impl BudgetRequest {
    pub fn from_form(form: &Params) -> Self {
        let field = |key: &str| form.get(key).map(|v| NumberOrText::Text(v.clone()));
        Self {
            annual_salary: field("annualSalary"),
            monthly_debts: field("monthlyDebts"),
            down_payment: field("downPayment"),
            interest_rate: field("interestRate"),
            loan_term: field("loanTerm"),
        }
    }

    pub fn to_profile(&self) -> Result<FinancialProfile, ServerError> {
        let term = number("loanTerm", self.loan_term.as_ref())?;
        if term.fract() != 0.0 {
            return Err(ServerError::BadRequest(
                "loanTerm must be a whole number of years".into(),
            ));
        }

        Ok(FinancialProfile {
            annual_income: number("annualSalary", self.annual_salary.as_ref())?,
            monthly_debts: number("monthlyDebts", self.monthly_debts.as_ref())?,
            down_payment: number("downPayment", self.down_payment.as_ref())?,
            annual_interest_rate_pct: number("interestRate", self.interest_rate.as_ref())?,
            loan_term_years: term as i64,
        })
    }
}

/// Echo submitted values back into the page form.
pub fn echo_form(form: &Params) -> CalculatorForm {
    let defaults = CalculatorForm::default();
    let pick = |key: &str, fallback: String| form.get(key).cloned().unwrap_or(fallback);
    CalculatorForm {
        annual_salary: pick("annualSalary", defaults.annual_salary),
        monthly_debts: pick("monthlyDebts", defaults.monthly_debts),
        down_payment: pick("downPayment", defaults.down_payment),
        interest_rate: pick("interestRate", defaults.interest_rate),
        loan_term: pick("loanTerm", defaults.loan_term),
    }
}
