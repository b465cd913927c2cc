//! HTTP handlers for the analysis service.

mod analyze;
mod status;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub use analyze::analyze_handler;
pub use status::status_handler;

/// Builds a JSON response with the CORS header every endpoint carries.
///
/// The service is meant to be called from browser front ends on any
/// origin, so `Access-Control-Allow-Origin: *` goes on all responses,
/// success and error alike.
fn json_response(status: StatusCode, json: String) -> Response {
    (
        status,
        [
            ("content-type", "application/json"),
            ("access-control-allow-origin", "*"),
        ],
        json,
    )
        .into_response()
}

/// CORS preflight handler shared by all routes.
pub async fn preflight_handler() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            ("access-control-allow-origin", "*"),
            ("access-control-allow-methods", "GET, OPTIONS"),
            ("access-control-allow-headers", "content-type"),
        ],
    )
        .into_response()
}
