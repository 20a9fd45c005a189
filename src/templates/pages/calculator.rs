use crate::db::users::User;
use crate::domain::AffordabilityResult;
use crate::templates::{
    components::{card, dollars_f, form_error},
    desktop_layout,
};
use maud::{html, Markup};

/// Raw form values, echoed back into the inputs.
#[derive(Debug, Clone)]
pub struct CalculatorForm {
    pub annual_salary: String,
    pub monthly_debts: String,
    pub down_payment: String,
    pub interest_rate: String,
    pub loan_term: String,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self {
            annual_salary: String::new(),
            monthly_debts: "0".to_string(),
            down_payment: "0".to_string(),
            interest_rate: "6.5".to_string(),
            loan_term: "30".to_string(),
        }
    }
}

pub struct CalculatorVm<'a> {
    pub user: Option<&'a User>,
    pub form: CalculatorForm,
    pub result: Option<AffordabilityResult>,
    pub error: Option<String>,
}

pub fn calculator_page(vm: &CalculatorVm) -> Markup {
    let f = &vm.form;

    desktop_layout(
        "Budget Calculator",
        vm.user,
        html! {
            h1 { "Budget Calculator" }

            form method="post" action="/calculator" class="card" {
                label for="annualSalary" { "Annual Salary" }
                input type="number" id="annualSalary" name="annualSalary" min="0" step="any" value=(f.annual_salary) required;

                label for="monthlyDebts" { "Monthly Debts" }
                input type="number" id="monthlyDebts" name="monthlyDebts" min="0" step="any" value=(f.monthly_debts);

                label for="downPayment" { "Down Payment" }
                input type="number" id="downPayment" name="downPayment" min="0" step="any" value=(f.down_payment);

                label for="interestRate" { "Interest Rate (%)" }
                input type="number" id="interestRate" name="interestRate" min="0" step="0.01" value=(f.interest_rate);

                label for="loanTerm" { "Loan Term" }
                select id="loanTerm" name="loanTerm" {
                    option value="15" selected[f.loan_term == "15"] { "15 years" }
                    option value="30" selected[f.loan_term != "15"] { "30 years" }
                }

                button type="submit" class="primary" { "Calculate" }
            }

            (form_error(vm.error.as_deref()))

            @if let Some(r) = &vm.result {
                (card("Your Budget", html! {
                    dl class="result" {
                        dt { "Maximum Monthly Budget" }
                        dd id="max-monthly" { (dollars_f(r.max_monthly_payment)) }
                        dt { "Affordable Price Range" }
                        dd id="price-range" {
                            (dollars_f(r.price_range.min)) " – " (dollars_f(r.price_range.max))
                        }
                        dt { "Monthly Gross Income" }
                        dd { (dollars_f(r.monthly_gross_income)) }
                        dt { "Debt-to-Income Ratio" }
                        dd id="dti" { (format!("{:.2}%", r.debt_to_income_pct)) }
                    }
                    p class="muted" {
                        "Based on a 43% debt-to-income ceiling. The lower bound is half the maximum."
                    }
                    a href=(format!("/properties?maxPrice={}", r.price_range.max.round() as i64)) {
                        "See properties in your range →"
                    }
                }))
            }
        },
    )
}
