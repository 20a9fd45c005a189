use crate::db::{init_db, seed_if_empty, Database};
use crate::router::{handle, AppState};
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::ops::Deref;
use tempfile::TempDir;

/// App state over a throwaway database. The directory, and the SQLite file
/// inside it, is removed when this is dropped.
pub struct TestApp {
    app: AppState,
    _dir: TempDir,
}

impl Deref for TestApp {
    type Target = AppState;

    fn deref(&self) -> &AppState {
        &self.app
    }
}

/// Fresh SQLite file with the production schema and sample listings.
pub fn init_test_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("housing_test.sqlite3");
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db, "sql/schema.sql").unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    seed_if_empty(&db, "sql/seed.sql").unwrap_or_else(|e| panic!("Seeding failed: {e}"));

    TestApp {
        app: AppState::new(db, false),
        _dir: dir,
    }
}

fn build(method: Method, uri: &str, session: Option<&str>, content_type: Option<&str>, body: Body) -> Request {
    let mut builder = http::Request::builder().method(method).uri(uri);
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("session={token}"));
    }
    if let Some(ct) = content_type {
        builder = builder.header("Content-Type", ct);
    }
    builder.body(body).unwrap()
}

pub fn get(app: &AppState, uri: &str, session: Option<&str>) -> Response {
    handle(build(Method::GET, uri, session, None, Body::empty()), app)
}

pub fn delete(app: &AppState, uri: &str, session: Option<&str>) -> Response {
    handle(build(Method::DELETE, uri, session, None, Body::empty()), app)
}

pub fn post_json(app: &AppState, uri: &str, json: &str, session: Option<&str>) -> Response {
    let body = Body::from(json.as_bytes().to_vec());
    handle(build(Method::POST, uri, session, Some("application/json"), body), app)
}

pub fn post_form(app: &AppState, uri: &str, form: &str, session: Option<&str>) -> Response {
    let body = Body::from(form.as_bytes().to_vec());
    handle(
        build(Method::POST, uri, session, Some("application/x-www-form-urlencoded"), body),
        app,
    )
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn body_json(resp: Response) -> serde_json::Value {
    serde_json::from_str(&body_string(resp)).unwrap()
}

pub fn header(resp: &Response, name: &str) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Session token from a `Set-Cookie` response header.
pub fn session_from(resp: &Response) -> Option<String> {
    let cookie = header(resp, "Set-Cookie")?;
    let first = cookie.split(';').next()?;
    first
        .strip_prefix("session=")
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Register through the API and return the session token.
pub fn sign_up(app: &AppState, email: &str) -> String {
    let resp = post_json(
        app,
        "/api/auth/register",
        &format!(r#"{{"name":"Test User","email":"{email}","password":"correct-horse"}}"#),
        None,
    );
    assert_eq!(resp.status(), 200);
    session_from(&resp).expect("register sets a session cookie")
}

#[test]
fn test_database_is_removed_on_drop() {
    let app = init_test_app();
    let path = std::path::PathBuf::from(app.db.path());
    assert!(path.exists());

    drop(app);
    assert!(!path.exists());
}
