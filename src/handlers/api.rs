// src/handlers/api.rs

//! JSON endpoints under `/api`.

use crate::auth::accounts::{self, SignedIn};
use crate::auth::context::{session_clear_cookie, session_set_cookie};
use crate::auth::sessions::{revoke_session, SESSION_TTL_SECS};
use crate::auth::{now_unix, RequestContext};
use crate::db::listings::{get_listing, get_listings_by_ids, listing_stats, search_listings};
use crate::db::saved::{save_property, saved_listings, unsave_property};
use crate::db::users::User;
use crate::domain::{best_value, solve_affordability};
use crate::errors::ServerError;
use crate::handlers::calculator::{BudgetRequest, BudgetResponse};
use crate::handlers::params::{id_list, listing_filter, parse_query, read_json};
use crate::handlers::with_costs;
use crate::responses::{json_response, json_response_with_cookie, ResultResp};
use crate::router::AppState;
use astra::Request;
use serde::Deserialize;
use serde_json::json;

pub fn health() -> ResultResp {
    json_response(&json!({ "status": "ok" }))
}

// ---- listings ----

pub fn list_properties(req: &Request, app: &AppState) -> ResultResp {
    let filter = listing_filter(&parse_query(req))?;
    let rows = app.db.with_conn(|conn| search_listings(conn, &filter))?;
    json_response(&with_costs(rows)?)
}

pub fn property(app: &AppState, id: i64) -> ResultResp {
    let listing = app
        .db
        .with_conn(|conn| get_listing(conn, id))?
        .ok_or(ServerError::NotFound)?;
    let mut annotated = with_costs(vec![listing])?;
    json_response(&annotated.remove(0))
}

pub fn stats(app: &AppState) -> ResultResp {
    json_response(&app.db.with_conn(|conn| listing_stats(conn))?)
}

pub fn compare(req: &Request, app: &AppState) -> ResultResp {
    let ids = id_list(&parse_query(req))?;
    let rows = app.db.with_conn(|conn| get_listings_by_ids(conn, &ids))?;
    let properties = with_costs(rows)?;
    let best = best_value(&properties).map(|l| l.listing.id);
    json_response(&json!({ "properties": properties, "bestValueId": best }))
}

// ---- calculator ----

pub fn budget(req: Request) -> ResultResp {
    let body: BudgetRequest = read_json(req)?;
    let result = solve_affordability(&body.to_profile()?)?;
    json_response(&BudgetResponse::from(&result))
}

// ---- accounts ----

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RegisterBody {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LoginBody {
    email: String,
    password: String,
}

fn user_json(user: &User) -> serde_json::Value {
    json!({ "user": { "id": user.id, "name": user.name, "email": user.email } })
}

fn signed_in(app: &AppState, signed: &SignedIn) -> ResultResp {
    let cookie = session_set_cookie(&signed.session_token, SESSION_TTL_SECS, app.secure_cookies);
    json_response_with_cookie(&user_json(&signed.user), &cookie)
}

pub fn register(req: Request, app: &AppState) -> ResultResp {
    let body: RegisterBody = read_json(req)?;
    let now = now_unix();
    let signed = app
        .db
        .with_conn(|conn| accounts::register(conn, &body.name, &body.email, &body.password, now))?;
    signed_in(app, &signed)
}

pub fn login(req: Request, app: &AppState) -> ResultResp {
    let body: LoginBody = read_json(req)?;
    let now = now_unix();
    let signed = app
        .db
        .with_conn(|conn| accounts::login(conn, &body.email, &body.password, now))?;
    signed_in(app, &signed)
}

pub fn logout(ctx: &RequestContext, app: &AppState) -> ResultResp {
    if let Some(token) = &ctx.session_token {
        let now = now_unix();
        app.db.with_conn(|conn| revoke_session(conn, token, now))?;
    }
    json_response_with_cookie(
        &json!({ "message": "Logged out" }),
        &session_clear_cookie(app.secure_cookies),
    )
}

pub fn me(ctx: &RequestContext) -> ResultResp {
    json_response(&user_json(ctx.require_user()?))
}

// ---- saved ----

pub fn saved(ctx: &RequestContext, app: &AppState) -> ResultResp {
    let user = ctx.require_user()?;
    let rows = app.db.with_conn(|conn| saved_listings(conn, user.id))?;
    json_response(&with_costs(rows)?)
}

pub fn save(ctx: &RequestContext, app: &AppState, property_id: i64) -> ResultResp {
    let user = ctx.require_user()?;
    let now = now_unix();
    app.db
        .with_conn(|conn| save_property(conn, user.id, property_id, now))?;
    json_response(&json!({ "saved": true, "propertyId": property_id }))
}

pub fn unsave(ctx: &RequestContext, app: &AppState, property_id: i64) -> ResultResp {
    let user = ctx.require_user()?;
    app.db
        .with_conn(|conn| unsave_property(conn, user.id, property_id))?;
    json_response(&json!({ "saved": false, "propertyId": property_id }))
}
