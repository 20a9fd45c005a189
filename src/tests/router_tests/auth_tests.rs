use crate::tests::utils::{
    body_json, get, header, init_test_app, post_json, session_from, sign_up,
};

#[test]
fn register_sets_session_and_me_knows_user() {
    let app = init_test_app();
    let token = sign_up(&app, "Reg@Example.com");

    let resp = get(&app, "/api/auth/me", Some(&token));
    assert_eq!(resp.status(), 200);
    let body = body_json(resp);
    assert_eq!(body["user"]["email"], "reg@example.com");
    assert_eq!(body["user"]["name"], "Test User");
    assert!(body["user"].get("password_hash").is_none());
}

#[test]
fn session_cookie_is_http_only() {
    let app = init_test_app();
    let resp = post_json(
        &app,
        "/api/auth/register",
        r#"{"name":"Cookie","email":"cookie@example.com","password":"correct-horse"}"#,
        None,
    );
    let cookie = header(&resp, "Set-Cookie").unwrap();
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(!cookie.contains("Secure"));
}

#[test]
fn duplicate_email_is_rejected() {
    let app = init_test_app();
    sign_up(&app, "dup@example.com");

    let resp = post_json(
        &app,
        "/api/auth/register",
        r#"{"name":"Again","email":"dup@example.com","password":"another-pass"}"#,
        None,
    );
    assert_eq!(resp.status(), 400);
    assert_eq!(body_json(resp)["error"], "User already exists");
}

#[test]
fn short_password_is_rejected() {
    let app = init_test_app();
    let resp = post_json(
        &app,
        "/api/auth/register",
        r#"{"name":"Short","email":"short@example.com","password":"1234"}"#,
        None,
    );
    assert_eq!(resp.status(), 400);
    assert!(session_from(&resp).is_none());
}

#[test]
fn login_with_good_and_bad_credentials() {
    let app = init_test_app();
    sign_up(&app, "login@example.com");

    let ok = post_json(
        &app,
        "/api/auth/login",
        r#"{"email":"login@example.com","password":"correct-horse"}"#,
        None,
    );
    assert_eq!(ok.status(), 200);
    assert!(session_from(&ok).is_some());

    let bad = post_json(
        &app,
        "/api/auth/login",
        r#"{"email":"login@example.com","password":"wrong-horse"}"#,
        None,
    );
    assert_eq!(bad.status(), 401);
    assert_eq!(body_json(bad)["error"], "Invalid credentials");
}

#[test]
fn logout_revokes_session() {
    let app = init_test_app();
    let token = sign_up(&app, "bye@example.com");

    let resp = post_json(&app, "/api/auth/logout", "", Some(&token));
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Set-Cookie").unwrap().contains("Max-Age=0"));

    assert_eq!(get(&app, "/api/auth/me", Some(&token)).status(), 401);
}

#[test]
fn me_without_session_is_401() {
    let app = init_test_app();
    assert_eq!(get(&app, "/api/auth/me", None).status(), 401);
    assert_eq!(get(&app, "/api/auth/me", Some("forged-token")).status(), 401);
}
