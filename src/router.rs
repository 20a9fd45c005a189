use crate::auth::{now_unix, RequestContext};
use crate::db::Database;
use crate::errors::ServerError;
use crate::handlers::params::path_id;
use crate::handlers::{api, pages};
use crate::responses::{html_error_response, json_error_response, stylesheet, ResultResp};
use astra::{Request, Response};
use std::time::Instant;

/// Everything a request handler may touch.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(db: Database, secure_cookies: bool) -> Self {
        Self { db, secure_cookies }
    }
}

/// Entry point for every request. API routes answer errors as JSON, pages
/// as an HTML error page.
pub fn handle(req: Request, app: &AppState) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let is_api = path == "/api" || path.starts_with("/api/");

    let resp = match route(req, app) {
        Ok(resp) => resp,
        Err(err) if is_api => json_error_response(err),
        Err(err) => html_error_response(err),
    };

    tracing::info!(
        method = %method,
        path = %path,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    resp
}

fn route(req: Request, app: &AppState) -> ResultResp {
    let ctx = RequestContext::from_request(&req, &app.db, now_unix())?;

    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", ["api", "health"]) => api::health(),

        ("POST", ["api", "auth", "register"]) => api::register(req, app),
        ("POST", ["api", "auth", "login"]) => api::login(req, app),
        ("POST", ["api", "auth", "logout"]) => api::logout(&ctx, app),
        ("GET", ["api", "auth", "me"]) => api::me(&ctx),

        ("GET", ["api", "properties"]) => api::list_properties(&req, app),
        ("GET", ["api", "properties", "stats"]) => api::stats(app),
        ("GET", ["api", "properties", "compare"]) => api::compare(&req, app),
        ("GET", ["api", "properties", id]) => api::property(app, path_id(id)?),

        ("POST", ["api", "calculator", "budget"]) => api::budget(req),

        ("GET", ["api", "saved"]) => api::saved(&ctx, app),
        ("POST", ["api", "saved", id]) => api::save(&ctx, app, path_id(id)?),
        ("DELETE", ["api", "saved", id]) => api::unsave(&ctx, app, path_id(id)?),

        ("GET", [""]) => pages::home(&ctx, app),
        ("GET", ["login"]) => pages::login_form(&ctx),
        ("POST", ["login"]) => pages::login_submit(req, app),
        ("POST", ["register"]) => pages::register_submit(req, app),
        ("POST", ["logout"]) => pages::logout_submit(&ctx, app),
        ("GET", ["properties"]) => pages::properties(&req, &ctx, app),
        ("GET", ["calculator"]) => pages::calculator_form(&ctx),
        ("POST", ["calculator"]) => pages::calculator_submit(req, &ctx),
        ("GET", ["saved"]) => pages::saved(&ctx, app),
        ("POST", ["saved", id]) => pages::save(&ctx, app, path_id(id)?),
        ("POST", ["saved", id, "remove"]) => pages::unsave(&ctx, app, path_id(id)?),

        ("GET", ["static", "main.css"]) => stylesheet(),

        _ => Err(ServerError::NotFound),
    }
}
