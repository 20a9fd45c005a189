// src/handlers/pages.rs

//! Server-rendered pages and their form posts.

use crate::auth::accounts;
use crate::auth::context::{session_clear_cookie, session_set_cookie};
use crate::auth::sessions::{revoke_session, SESSION_TTL_SECS};
use crate::auth::{now_unix, RequestContext};
use crate::db::listings::{counties, listing_stats, search_listings, ListingFilter};
use crate::db::saved::{save_property, saved_listings, unsave_property};
use crate::domain::{best_value, solve_affordability};
use crate::errors::ServerError;
use crate::handlers::calculator::{echo_form, BudgetRequest};
use crate::handlers::params::{listing_filter, parse_query, read_form, text};
use crate::handlers::with_costs;
use crate::responses::{html_response, html_response_with_status, redirect, ResultResp};
use crate::router::AppState;
use crate::templates::pages::{
    calculator_page, home_page, login_page, properties_page, saved_page, CalculatorForm,
    CalculatorVm, HomeVm, SearchVm,
};
use astra::Request;

const FEATURED_COUNT: i64 = 6;

pub fn home(ctx: &RequestContext, app: &AppState) -> ResultResp {
    let cheapest = ListingFilter {
        limit: Some(FEATURED_COUNT),
        ..Default::default()
    };
    let (stats, rows) = app.db.with_conn(|conn| {
        Ok((listing_stats(conn)?, search_listings(conn, &cheapest)?))
    })?;

    html_response(home_page(&HomeVm {
        user: ctx.user.as_ref(),
        stats,
        featured: with_costs(rows)?,
    }))
}

// ---- sign in / sign up ----

pub fn login_form(ctx: &RequestContext) -> ResultResp {
    if ctx.user.is_some() {
        return redirect("/", None);
    }
    html_response(login_page(None, ""))
}

/// Client-side failures re-render the form; anything else is a real error.
fn form_failure(err: ServerError, email: &str) -> ResultResp {
    let status = err.status();
    match err {
        ServerError::BadRequest(msg) | ServerError::Unauthorized(msg) => {
            html_response_with_status(status, login_page(Some(&msg), email))
        }
        other => Err(other),
    }
}

pub fn login_submit(req: Request, app: &AppState) -> ResultResp {
    let form = read_form(req)?;
    let email = text(&form, "email").unwrap_or_default();
    let password = form.get("password").map(String::as_str).unwrap_or_default();
    let now = now_unix();

    match app
        .db
        .with_conn(|conn| accounts::login(conn, email, password, now))
    {
        Ok(signed) => {
            let cookie =
                session_set_cookie(&signed.session_token, SESSION_TTL_SECS, app.secure_cookies);
            redirect("/", Some(&cookie))
        }
        Err(err) => form_failure(err, email),
    }
}

pub fn register_submit(req: Request, app: &AppState) -> ResultResp {
    let form = read_form(req)?;
    let name = text(&form, "name").unwrap_or_default();
    let email = text(&form, "email").unwrap_or_default();
    let password = form.get("password").map(String::as_str).unwrap_or_default();
    let now = now_unix();

    match app
        .db
        .with_conn(|conn| accounts::register(conn, name, email, password, now))
    {
        Ok(signed) => {
            let cookie =
                session_set_cookie(&signed.session_token, SESSION_TTL_SECS, app.secure_cookies);
            redirect("/", Some(&cookie))
        }
        Err(err) => form_failure(err, email),
    }
}

pub fn logout_submit(ctx: &RequestContext, app: &AppState) -> ResultResp {
    if let Some(token) = &ctx.session_token {
        let now = now_unix();
        app.db.with_conn(|conn| revoke_session(conn, token, now))?;
    }
    redirect("/login", Some(&session_clear_cookie(app.secure_cookies)))
}

// ---- search ----

pub fn properties(req: &Request, ctx: &RequestContext, app: &AppState) -> ResultResp {
    let filter = listing_filter(&parse_query(req))?;
    let (county_counts, rows) = app
        .db
        .with_conn(|conn| Ok((counties(conn)?, search_listings(conn, &filter)?)))?;
    let results = with_costs(rows)?;
    let best_value_id = best_value(&results).map(|l| l.listing.id);

    html_response(properties_page(&SearchVm {
        user: ctx.user.as_ref(),
        filter,
        counties: county_counts,
        results,
        best_value_id,
    }))
}

// ---- calculator ----

pub fn calculator_form(ctx: &RequestContext) -> ResultResp {
    html_response(calculator_page(&CalculatorVm {
        user: ctx.user.as_ref(),
        form: CalculatorForm::default(),
        result: None,
        error: None,
    }))
}

pub fn calculator_submit(req: Request, ctx: &RequestContext) -> ResultResp {
    let form = read_form(req)?;
    let outcome = BudgetRequest::from_form(&form)
        .to_profile()
        .and_then(|profile| solve_affordability(&profile).map_err(ServerError::from));

    let (status, result, error) = match outcome {
        Ok(result) => (200, Some(result), None),
        Err(ServerError::BadRequest(msg)) => (400, None, Some(msg)),
        Err(other) => return Err(other),
    };

    html_response_with_status(
        status,
        calculator_page(&CalculatorVm {
            user: ctx.user.as_ref(),
            form: echo_form(&form),
            result,
            error,
        }),
    )
}

// ---- saved ----

pub fn saved(ctx: &RequestContext, app: &AppState) -> ResultResp {
    let Some(user) = ctx.user.as_ref() else {
        return redirect("/login", None);
    };
    let rows = app.db.with_conn(|conn| saved_listings(conn, user.id))?;
    html_response(saved_page(user, &with_costs(rows)?))
}

pub fn save(ctx: &RequestContext, app: &AppState, property_id: i64) -> ResultResp {
    let Some(user) = ctx.user.as_ref() else {
        return redirect("/login", None);
    };
    let now = now_unix();
    app.db
        .with_conn(|conn| save_property(conn, user.id, property_id, now))?;
    redirect("/saved", None)
}

pub fn unsave(ctx: &RequestContext, app: &AppState, property_id: i64) -> ResultResp {
    let Some(user) = ctx.user.as_ref() else {
        return redirect("/login", None);
    };
    app.db
        .with_conn(|conn| unsave_property(conn, user.id, property_id))?;
    redirect("/saved", None)
}
