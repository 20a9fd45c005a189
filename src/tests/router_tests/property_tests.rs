use crate::tests::utils::{body_json, get, init_test_app};

fn ids(rows: &serde_json::Value) -> Vec<i64> {
    rows.as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect()
}

#[test]
fn health_check() {
    let app = init_test_app();
    let resp = get(&app, "/api/health", None);
    assert_eq!(resp.status(), 200);
    assert_eq!(body_json(resp)["status"], "ok");
}

#[test]
fn listing_carries_cost_breakdown() {
    let app = init_test_app();
    let resp = get(&app, "/api/properties/1", None);
    assert_eq!(resp.status(), 200);

    let body = body_json(resp);
    assert_eq!(body["price"], 550000);
    assert_eq!(body["county"], "Manhattan");
    assert_eq!(body["total_monthly_cost"], 3848);
    assert_eq!(body["cost_breakdown"]["mortgage"], 2781);
    assert_eq!(body["cost_breakdown"]["property_tax"], 688);
    assert_eq!(body["cost_breakdown"]["insurance"], 229);
    assert_eq!(body["cost_breakdown"]["commute"], 150);
}

#[test]
fn unknown_listing_is_json_404() {
    let app = init_test_app();
    let resp = get(&app, "/api/properties/9999", None);
    assert_eq!(resp.status(), 404);
    assert_eq!(body_json(resp)["error"], "Not Found");
}

#[test]
fn county_filter_orders_by_price() {
    let app = init_test_app();
    let resp = get(&app, "/api/properties?county=Manhattan", None);
    assert_eq!(resp.status(), 200);
    assert_eq!(ids(&body_json(resp)), vec![3, 1, 4, 2]);
}

#[test]
fn price_bounds_are_inclusive() {
    let app = init_test_app();
    let rows = body_json(get(&app, "/api/properties?minPrice=405000&maxPrice=445000", None));
    let rows = rows.as_array().unwrap();

    assert_eq!(rows.len(), 5);
    for r in rows {
        let price = r["price"].as_i64().unwrap();
        assert!((405_000..=445_000).contains(&price));
    }
}

#[test]
fn decimal_price_bounds_are_accepted() {
    let app = init_test_app();
    let resp = get(&app, "/api/properties?minPrice=404999.5&maxPrice=445000.5", None);
    assert_eq!(resp.status(), 200);
    assert_eq!(body_json(resp).as_array().unwrap().len(), 5);
}

#[test]
fn bedrooms_and_limit() {
    let app = init_test_app();
    let three_beds = body_json(get(&app, "/api/properties?bedrooms=3", None));
    assert_eq!(three_beds.as_array().unwrap().len(), 4);

    let cheapest = body_json(get(&app, "/api/properties?limit=3", None));
    let cheapest = ids(&cheapest);
    assert_eq!(cheapest.len(), 3);
    assert_eq!(cheapest[0], 23);
}

#[test]
fn blank_filters_return_everything() {
    let app = init_test_app();
    let rows = body_json(get(&app, "/api/properties?minPrice=&maxPrice=&bedrooms=&county=", None));
    assert_eq!(rows.as_array().unwrap().len(), 25);
}

#[test]
fn bad_filter_is_400() {
    let app = init_test_app();
    let resp = get(&app, "/api/properties?minPrice=lots", None);
    assert_eq!(resp.status(), 400);
    assert_eq!(body_json(resp)["error"], "minPrice must be a number");
}

#[test]
fn stats_summarize_all_listings() {
    let app = init_test_app();
    let stats = body_json(get(&app, "/api/properties/stats", None));

    assert_eq!(stats["total"], 25);
    assert_eq!(stats["avgPrice"], 431600);
    assert_eq!(stats["minPrice"], 275000);
    assert_eq!(stats["maxPrice"], 675000);
    assert!((stats["avgBedrooms"].as_f64().unwrap() - 2.08).abs() < 1e-9);
}

#[test]
fn compare_picks_lowest_monthly_cost() {
    let app = init_test_app();
    let body = body_json(get(&app, "/api/properties/compare?ids=1,2,3", None));

    assert_eq!(ids(&body["properties"]), vec![1, 2, 3]);
    assert_eq!(body["bestValueId"], 3);
}

#[test]
fn compare_of_unknown_ids_has_no_winner() {
    let app = init_test_app();
    let body = body_json(get(&app, "/api/properties/compare?ids=9998,9999", None));

    assert!(body["properties"].as_array().unwrap().is_empty());
    assert!(body["bestValueId"].is_null());
}
