//! Service data structures and shared state.

use serde::Serialize;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use std::time::Instant;

use crate::error_handling::ProcessingStats;

/// Shared state for the analysis service.
///
/// Cloned per request; every field is behind an `Arc`, so concurrent
/// requests coordinate only through atomic counters.
#[derive(Clone)]
pub struct AppState {
    /// Shared HTTP client for page fetches and crawl-control probes
    pub client: Arc<reqwest::Client>,
    /// Error/warning counters across all requests
    pub stats: Arc<ProcessingStats>,
    /// Service start time, for uptime reporting
    pub start_time: Arc<Instant>,
    /// Total analysis requests received
    pub total_requests: Arc<AtomicUsize>,
    /// Requests that produced a report
    pub completed_requests: Arc<AtomicUsize>,
    /// Requests that ended in an error response
    pub failed_requests: Arc<AtomicUsize>,
}

impl AppState {
    /// Creates fresh state around an initialized HTTP client.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        AppState {
            client,
            stats: Arc::new(ProcessingStats::new()),
            start_time: Arc::new(Instant::now()),
            total_requests: Arc::new(AtomicUsize::new(0)),
            completed_requests: Arc::new(AtomicUsize::new(0)),
            failed_requests: Arc::new(AtomicUsize::new(0)),
        }
    }
}

/// JSON error body returned for every failed request.
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Human-readable message derived from the failure
    pub error: String,
}

/// JSON response for the `/status` endpoint.
#[derive(Serialize)]
pub struct StatusResponse {
    /// Seconds since the service started
    pub uptime_seconds: f64,
    /// Total analysis requests received
    pub total_requests: usize,
    /// Requests that produced a report
    pub completed_requests: usize,
    /// Requests that ended in an error response
    pub failed_requests: usize,
    /// Error counters by kind
    pub errors: ErrorCounts,
    /// Warning counters by kind
    pub warnings: WarningCounts,
}

/// Error counters reported by `/status`.
#[derive(Serialize)]
pub struct ErrorCounts {
    /// Sum of all error counters
    pub total: usize,
    /// Requests rejected for a missing or invalid `url` parameter
    pub request_validation: usize,
    /// Primary page fetches that failed
    pub page_fetch: usize,
    /// robots.txt / sitemap.xml probes that failed at the transport level
    pub crawl_control_probe: usize,
}

/// Warning counters reported by `/status`.
#[derive(Serialize)]
pub struct WarningCounts {
    /// Sum of all warning counters
    pub total: usize,
    /// Pages analyzed without a usable `<title>`
    pub missing_title: usize,
    /// Pages analyzed without a meta description
    pub missing_meta_description: usize,
    /// Pages analyzed without a canonical link
    pub missing_canonical: usize,
    /// Pages analyzed without a viewport meta tag
    pub missing_viewport: usize,
}
