use crate::tests::utils::{body_string, get, header, init_test_app, post_form, session_from};

#[test]
fn dashboard_shows_stats_and_cheapest_listings() {
    let app = init_test_app();
    let resp = get(&app, "/", None);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("$431,600"));
    assert!(body.contains("$275,000"));
    assert!(body.contains("listing-23"));
    assert_eq!(body.matches("class=\"card listing\"").count(), 6);
}

#[test]
fn login_page_loads() {
    let app = init_test_app();
    let resp = get(&app, "/login", None);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Sign in"));
    assert!(body.contains("action=\"/register\""));
}

#[test]
fn register_and_login_forms_redirect_with_cookie() {
    let app = init_test_app();

    let reg = post_form(
        &app,
        "/register",
        "name=Form+User&email=form%40example.com&password=correct-horse",
        None,
    );
    assert_eq!(reg.status(), 302);
    assert_eq!(header(&reg, "Location").as_deref(), Some("/"));
    let token = session_from(&reg).unwrap();

    let home = body_string(get(&app, "/", Some(&token)));
    assert!(home.contains("Welcome back, Form User"));

    let login = post_form(&app, "/login", "email=form%40example.com&password=correct-horse", None);
    assert_eq!(login.status(), 302);
    assert!(session_from(&login).is_some());

    let out = post_form(&app, "/logout", "", Some(&token));
    assert_eq!(out.status(), 302);
    assert_eq!(header(&out, "Location").as_deref(), Some("/login"));
}

#[test]
fn bad_login_rerenders_form() {
    let app = init_test_app();
    let resp = post_form(&app, "/login", "email=nobody%40example.com&password=whatever1", None);
    assert_eq!(resp.status(), 401);

    let body = body_string(resp);
    assert!(body.contains("Invalid credentials"));
    assert!(body.contains("nobody@example.com"));
}

#[test]
fn search_page_filters_and_marks_best_value() {
    let app = init_test_app();
    let resp = get(&app, "/properties?county=Manhattan", None);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("4 properties found"));
    assert!(body.contains("Best value"));
    assert!(body.contains("Staten Island (4)"));
}

#[test]
fn search_page_rejects_garbage_filter() {
    let app = init_test_app();
    let resp = get(&app, "/properties?bedrooms=many", None);
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("bedrooms must be a whole number"));
}

#[test]
fn calculator_page_loads_with_defaults() {
    let app = init_test_app();
    let body = body_string(get(&app, "/calculator", None));
    assert!(body.contains("Budget Calculator"));
    assert!(body.contains("value=\"6.5\""));
}

#[test]
fn unknown_route_is_404_page() {
    let app = init_test_app();
    let resp = get(&app, "/nope", None);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}

#[test]
fn stylesheet_is_served() {
    let app = init_test_app();
    let resp = get(&app, "/static/main.css", None);
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").unwrap().starts_with("text/css"));
}
