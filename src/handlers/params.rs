// src/handlers/params.rs

//! Query-string, form and body parsing shared by the handlers.

use crate::db::listings::ListingFilter;
use crate::errors::ServerError;
use astra::Request;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::io::Read;

/// Request bodies larger than this are refused.
const MAX_BODY_BYTES: u64 = 64 * 1024;

pub type Params = HashMap<String, String>;

pub fn parse_query(req: &Request) -> Params {
    req.uri()
        .query()
        .map(|q| parse_pairs(q.as_bytes()))
        .unwrap_or_default()
}

fn parse_pairs(bytes: &[u8]) -> Params {
    url::form_urlencoded::parse(bytes).into_owned().collect()
}

pub fn read_body(req: Request) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("Could not read request body: {e}")))?;
    if buf.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::BadRequest("Request body too large".into()));
    }
    Ok(buf)
}

pub fn read_form(req: Request) -> Result<Params, ServerError> {
    Ok(parse_pairs(&read_body(req)?))
}

pub fn read_json<T: DeserializeOwned>(req: Request) -> Result<T, ServerError> {
    let body = read_body(req)?;
    serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "rejected json body");
        ServerError::BadRequest("Invalid JSON body".into())
    })
}

/// Trimmed value, with blank treated as absent.
pub fn text<'a>(params: &'a Params, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn whole_number(params: &Params, key: &str) -> Result<Option<i64>, ServerError> {
    text(params, key)
        .map(|v| {
            v.parse::<i64>()
                .map_err(|_| ServerError::BadRequest(format!("{key} must be a whole number")))
        })
        .transpose()
}

fn amount(params: &Params, key: &str) -> Result<Option<f64>, ServerError> {
    text(params, key)
        .map(|v| match v.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(ServerError::BadRequest(format!("{key} must be a number"))),
        })
        .transpose()
}

pub fn listing_filter(params: &Params) -> Result<ListingFilter, ServerError> {
    let limit = whole_number(params, "limit")?;
    if matches!(limit, Some(n) if n < 1) {
        return Err(ServerError::BadRequest("limit must be at least 1".into()));
    }

    Ok(ListingFilter {
        min_price: amount(params, "minPrice")?,
        max_price: amount(params, "maxPrice")?,
        bedrooms: whole_number(params, "bedrooms")?,
        county: text(params, "county").map(str::to_string),
        limit,
    })
}

/// `ids=3,1,2` -> `[3, 1, 2]`. Blank entries are skipped.
pub fn id_list(params: &Params) -> Result<Vec<i64>, ServerError> {
    let raw = text(params, "ids").ok_or_else(|| ServerError::BadRequest("ids is required".into()))?;
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| ServerError::BadRequest(format!("invalid listing id: {s}")))
        })
        .collect()
}

/// Numeric path segment. Anything else is simply an unknown route.
pub fn path_id(segment: &str) -> Result<i64, ServerError> {
    segment.parse().map_err(|_| ServerError::NotFound)
}
