pub mod assets;
pub mod errors;
pub mod html;
pub mod json;
pub mod redirect;

pub use crate::errors::ResultResp;
pub use assets::stylesheet;
pub use errors::{html_error_response, json_error_response};

pub use html::{html_response, html_response_with_status};
pub use json::{json_response, json_response_with_cookie};
pub use redirect::redirect;
