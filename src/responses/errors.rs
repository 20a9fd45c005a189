use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};

/// Log the failure and render it as an HTML error page.
pub fn html_error_response(err: ServerError) -> Response {
    log_error(&err);
    let status = err.status();
    let body = error_page(status, &err.public_message()).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

/// Log the failure and render it as `{"error": "..."}`.
pub fn json_error_response(err: ServerError) -> Response {
    log_error(&err);
    let body = serde_json::json!({ "error": err.public_message() }).to_string();

    ResponseBuilder::new()
        .status(err.status())
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

fn log_error(err: &ServerError) {
    if err.status() >= 500 {
        tracing::error!(error = %err, "request failed");
    } else {
        tracing::debug!(error = %err, "request rejected");
    }
}
