pub mod csv;
pub mod errors;
pub mod html;
pub mod json;

pub use crate::errors::ResultResp;
pub use errors::error_to_response;

// Normal HTML response
pub use html::html_response_with_status;

// Downloads and API-ish bodies
pub use csv::{csv_response, no_content_response};
pub use json::json_response;
