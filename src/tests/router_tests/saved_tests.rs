use crate::tests::utils::{
    body_json, body_string, delete, get, header, init_test_app, post_form, post_json, sign_up,
};

fn saved_ids(app: &crate::router::AppState, token: &str) -> Vec<i64> {
    body_json(get(app, "/api/saved", Some(token)))
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect()
}

#[test]
fn saved_requires_session() {
    let app = init_test_app();
    assert_eq!(get(&app, "/api/saved", None).status(), 401);
    assert_eq!(post_json(&app, "/api/saved/1", "", None).status(), 401);
    assert_eq!(delete(&app, "/api/saved/1", None).status(), 401);
}

#[test]
fn save_list_and_remove() {
    let app = init_test_app();
    let token = sign_up(&app, "saver@example.com");

    assert_eq!(post_json(&app, "/api/saved/5", "", Some(&token)).status(), 200);
    assert_eq!(post_json(&app, "/api/saved/5", "", Some(&token)).status(), 200);
    assert_eq!(saved_ids(&app, &token), vec![5]);

    let rows = body_json(get(&app, "/api/saved", Some(&token)));
    assert!(rows[0]["total_monthly_cost"].as_i64().unwrap() > 0);

    assert_eq!(delete(&app, "/api/saved/5", Some(&token)).status(), 200);
    assert_eq!(delete(&app, "/api/saved/5", Some(&token)).status(), 200);
    assert!(saved_ids(&app, &token).is_empty());
}

#[test]
fn saving_unknown_listing_is_404() {
    let app = init_test_app();
    let token = sign_up(&app, "ghost@example.com");
    assert_eq!(post_json(&app, "/api/saved/9999", "", Some(&token)).status(), 404);
}

#[test]
fn saved_lists_are_per_user() {
    let app = init_test_app();
    let a = sign_up(&app, "a@example.com");
    let b = sign_up(&app, "b@example.com");

    post_json(&app, "/api/saved/1", "", Some(&a));
    assert_eq!(saved_ids(&app, &a), vec![1]);
    assert!(saved_ids(&app, &b).is_empty());
}

#[test]
fn saved_page_flow() {
    let app = init_test_app();

    let anon = get(&app, "/saved", None);
    assert_eq!(anon.status(), 302);
    assert_eq!(header(&anon, "Location").as_deref(), Some("/login"));

    let token = sign_up(&app, "pages@example.com");
    let resp = post_form(&app, "/saved/2", "", Some(&token));
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location").as_deref(), Some("/saved"));

    let page = body_string(get(&app, "/saved", Some(&token)));
    assert!(page.contains("listing-2"));
    assert!(page.contains("/saved/2/remove"));

    post_form(&app, "/saved/2/remove", "", Some(&token));
    let page = body_string(get(&app, "/saved", Some(&token)));
    assert!(page.contains("No saved properties yet"));
}
