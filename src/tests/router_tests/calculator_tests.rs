use crate::tests::utils::{body_json, body_string, init_test_app, post_form, post_json};

const PROFILE: &str = r#"{"annualSalary":80000,"monthlyDebts":500,"downPayment":50000,"interestRate":6.5,"loanTerm":30}"#;

#[test]
fn budget_for_typical_profile() {
    let app = init_test_app();
    let resp = post_json(&app, "/api/calculator/budget", PROFILE, None);
    assert_eq!(resp.status(), 200);

    let body = body_json(resp);
    assert_eq!(body["maxMonthlyBudget"], 2367);
    assert_eq!(body["affordablePriceRange"]["min"], 212216);
    assert_eq!(body["affordablePriceRange"]["max"], 424432);
    assert_eq!(body["monthlyGrossIncome"], 6667);
    assert_eq!(body["dti"], 7.5);
}

#[test]
fn values_may_arrive_as_text() {
    let app = init_test_app();
    let resp = post_json(
        &app,
        "/api/calculator/budget",
        r#"{"annualSalary":"80000","monthlyDebts":"500","downPayment":"50000","interestRate":"6.5","loanTerm":"30"}"#,
        None,
    );
    assert_eq!(resp.status(), 200);
    assert_eq!(body_json(resp)["maxMonthlyBudget"], 2367);
}

#[test]
fn near_zero_rate_budget_is_straight_line() {
    let app = init_test_app();
    let resp = post_json(
        &app,
        "/api/calculator/budget",
        r#"{"annualSalary":80000,"monthlyDebts":500,"downPayment":50000,"interestRate":"0.00000000000001","loanTerm":30}"#,
        None,
    );
    assert_eq!(resp.status(), 200);

    let body = body_json(resp);
    assert_eq!(body["affordablePriceRange"]["max"], 902000);
    assert_eq!(body["affordablePriceRange"]["min"], 451000);
}

#[test]
fn debts_over_ceiling_are_rejected() {
    let app = init_test_app();
    let resp = post_json(
        &app,
        "/api/calculator/budget",
        r#"{"annualSalary":60000,"monthlyDebts":2500,"downPayment":0,"interestRate":6.5,"loanTerm":30}"#,
        None,
    );
    assert_eq!(resp.status(), 400);
    assert!(body_json(resp)["error"].as_str().unwrap().contains("43"));
}

#[test]
fn invalid_input_is_400_with_message() {
    let app = init_test_app();
    for body in [
        r#"{"annualSalary":0,"monthlyDebts":0,"downPayment":0,"interestRate":6.5,"loanTerm":30}"#,
        r#"{"annualSalary":80000,"monthlyDebts":0,"downPayment":0,"interestRate":-1,"loanTerm":30}"#,
        r#"{"annualSalary":80000,"monthlyDebts":0,"downPayment":0,"interestRate":6.5,"loanTerm":0}"#,
        r#"{"annualSalary":"eighty","monthlyDebts":0,"downPayment":0,"interestRate":6.5,"loanTerm":30}"#,
        "not json",
    ] {
        let resp = post_json(&app, "/api/calculator/budget", body, None);
        assert_eq!(resp.status(), 400, "body: {body}");
        assert!(body_json(resp)["error"].is_string());
    }
}

#[test]
fn calculator_page_shows_result() {
    let app = init_test_app();
    let resp = post_form(
        &app,
        "/calculator",
        "annualSalary=80000&monthlyDebts=500&downPayment=50000&interestRate=6.5&loanTerm=30",
        None,
    );
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("$2,367"));
    assert!(body.contains("$424,432"));
    assert!(body.contains("7.50%"));
}

#[test]
fn calculator_page_shows_errors_inline() {
    let app = init_test_app();
    let resp = post_form(
        &app,
        "/calculator",
        "annualSalary=0&monthlyDebts=0&downPayment=0&interestRate=6.5&loanTerm=30",
        None,
    );
    assert_eq!(resp.status(), 400);

    let body = body_string(resp);
    assert!(body.contains("annual income must be greater than zero"));
    assert!(body.contains("<form"));
}
