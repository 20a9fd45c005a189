// responses/assets.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

const MAIN_CSS: &str = include_str!("../../static/main.css");

pub fn stylesheet() -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_CSS_UTF_8.as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(MAIN_CSS))
        .map_err(|_| ServerError::InternalError)
}
