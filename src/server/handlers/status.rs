//! JSON status handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::sync::atomic::Ordering;

use super::json_response;
use crate::error_handling::{ErrorType, WarningType};
use crate::server::types::{AppState, ErrorCounts, StatusResponse, WarningCounts};

/// `GET /status` endpoint with uptime, request counters, and the
/// accumulated error/warning breakdown.
pub async fn status_handler(State(state): State<AppState>) -> Response {
    let response = StatusResponse {
        uptime_seconds: state.start_time.elapsed().as_secs_f64(),
        total_requests: state.total_requests.load(Ordering::SeqCst),
        completed_requests: state.completed_requests.load(Ordering::SeqCst),
        failed_requests: state.failed_requests.load(Ordering::SeqCst),
        errors: ErrorCounts {
            total: state.stats.total_errors(),
            request_validation: state.stats.get_error_count(ErrorType::RequestValidation),
            page_fetch: state.stats.get_error_count(ErrorType::PageFetch),
            crawl_control_probe: state.stats.get_error_count(ErrorType::CrawlControlProbe),
        },
        warnings: WarningCounts {
            total: state.stats.total_warnings(),
            missing_title: state.stats.get_warning_count(WarningType::MissingTitle),
            missing_meta_description: state
                .stats
                .get_warning_count(WarningType::MissingMetaDescription),
            missing_canonical: state.stats.get_warning_count(WarningType::MissingCanonical),
            missing_viewport: state.stats.get_warning_count(WarningType::MissingViewport),
        },
    };

    match serde_json::to_string_pretty(&response) {
        Ok(json) => json_response(StatusCode::OK, json),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to serialize status: {}", e),
        )
            .into_response(),
    }
}
