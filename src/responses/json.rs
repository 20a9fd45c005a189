// responses/json.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde::Serialize;

pub fn json_response<T: Serialize>(value: &T) -> ResultResp {
    build(value, None)
}

/// JSON body plus a `Set-Cookie` header (sign-in / sign-out).
pub fn json_response_with_cookie<T: Serialize>(value: &T, cookie: &str) -> ResultResp {
    build(value, Some(cookie))
}

fn build<T: Serialize>(value: &T, cookie: Option<&str>) -> ResultResp {
    let body = serde_json::to_vec(value).map_err(|e| {
        tracing::error!(error = %e, "response serialization failed");
        ServerError::InternalError
    })?;

    let mut builder = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref());
    if let Some(cookie) = cookie {
        builder = builder.header("Set-Cookie", cookie);
    }
    builder
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
