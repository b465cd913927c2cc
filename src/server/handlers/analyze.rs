//! Page analysis handler.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use std::sync::atomic::Ordering;

use super::json_response;
use crate::app::normalize_url;
use crate::error_handling::{AnalyzeError, ErrorType};
use crate::fetch::{check_crawl_control, fetch_page};
use crate::models::SeoReport;
use crate::parse::analyze_page;
use crate::server::types::{AppState, ErrorResponse};

/// Query parameters accepted by `/analyze`.
#[derive(Deserialize)]
pub struct AnalyzeParams {
    url: Option<String>,
}

/// `GET /analyze?url=...` endpoint.
///
/// Fetches the requested page, runs the extraction pipeline, and returns
/// the report as JSON. Failures map to a JSON error body with a status
/// code derived from the error kind.
pub async fn analyze_handler(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeParams>,
) -> Response {
    state.total_requests.fetch_add(1, Ordering::SeqCst);

    match run_analysis(&state, params.url.as_deref()).await {
        Ok(report) => {
            state.completed_requests.fetch_add(1, Ordering::SeqCst);
            match serde_json::to_string(&report) {
                Ok(json) => json_response(StatusCode::OK, json),
                Err(e) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to serialize report: {}", e),
                )
                    .into_response(),
            }
        }
        Err(e) => {
            state.failed_requests.fetch_add(1, Ordering::SeqCst);
            log::warn!("Analysis request failed: {e}");
            let body = ErrorResponse {
                error: e.to_string(),
            };
            match serde_json::to_string(&body) {
                Ok(json) => json_response(error_status(&e), json),
                Err(serialize_error) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to serialize error: {}", serialize_error),
                )
                    .into_response(),
            }
        }
    }
}

/// Runs the full pipeline for one request: validate, fetch, probe, parse.
async fn run_analysis(
    state: &AppState,
    raw_url: Option<&str>,
) -> Result<SeoReport, AnalyzeError> {
    let raw = match raw_url {
        Some(value) if !value.trim().is_empty() => value,
        _ => {
            state.stats.increment_error(ErrorType::RequestValidation);
            return Err(AnalyzeError::MissingUrl);
        }
    };

    let target = normalize_url(raw).map_err(|e| {
        state.stats.increment_error(ErrorType::RequestValidation);
        e
    })?;

    log::info!("Analyzing {target}");

    let body = fetch_page(&state.client, &target).await.map_err(|e| {
        state.stats.increment_error(ErrorType::PageFetch);
        e
    })?;

    let crawl = check_crawl_control(&state.client, &target, &state.stats).await;

    Ok(analyze_page(&body, &target, crawl, &state.stats))
}

/// Maps an analysis error to its HTTP status code.
///
/// Validation failures are the caller's fault (400); anything that went
/// wrong talking to the target site surfaces as a bad gateway (502).
fn error_status(error: &AnalyzeError) -> StatusCode {
    match error {
        AnalyzeError::MissingUrl | AnalyzeError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
        AnalyzeError::Transport(_) => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::fetch::init_client;

    fn test_state() -> AppState {
        let client = init_client(&Config::default()).expect("client should build");
        AppState::new(client)
    }

    #[test]
    fn test_error_status_missing_url_is_bad_request() {
        assert_eq!(
            error_status(&AnalyzeError::MissingUrl),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_status_invalid_url_is_bad_request() {
        let error = AnalyzeError::InvalidUrl("http://".to_string());
        assert_eq!(error_status(&error), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_run_analysis_without_url() {
        let state = test_state();
        let result = run_analysis(&state, None).await;
        assert!(matches!(result, Err(AnalyzeError::MissingUrl)));
        assert_eq!(
            state.stats.get_error_count(ErrorType::RequestValidation),
            1
        );
    }

    #[tokio::test]
    async fn test_run_analysis_with_blank_url() {
        let state = test_state();
        let result = run_analysis(&state, Some("   ")).await;
        assert!(matches!(result, Err(AnalyzeError::MissingUrl)));
    }

    #[tokio::test]
    async fn test_run_analysis_with_unparseable_url() {
        let state = test_state();
        let result = run_analysis(&state, Some("http://[not-a-host")).await;
        assert!(matches!(result, Err(AnalyzeError::InvalidUrl(_))));
        assert_eq!(
            state.stats.get_error_count(ErrorType::RequestValidation),
            1
        );
    }

    #[test]
    fn test_analyze_params_deserializes_missing_url() {
        let params: AnalyzeParams =
            serde_json::from_str("{}").expect("empty params should deserialize");
        assert!(params.url.is_none());
    }

    #[test]
    fn test_error_response_serialization() {
        let body = ErrorResponse {
            error: "URL is required".to_string(),
        };
        let json = serde_json::to_string(&body).expect("error body should serialize");
        assert_eq!(json, r#"{"error":"URL is required"}"#);
    }
}
