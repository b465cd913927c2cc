//! Error type definitions.
//!
//! This module defines all error and warning types used throughout the
//! application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors that can abort an analysis request.
///
/// The boundary handler maps each kind to an HTTP status code
/// deterministically: validation failures are client errors, transport
/// failures are gateway errors. Malformed HTML is never an error; absent
/// tags simply yield default values in the report.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// The `url` query parameter was absent or empty. Rejected before any
    /// network activity.
    #[error("URL is required")]
    MissingUrl,

    /// The `url` parameter could not be normalized into a fetchable
    /// http/https URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The primary page fetch failed: timeout, DNS, TLS, connection error,
    /// or a non-2xx response for the main page.
    #[error("failed to fetch page: {0}")]
    Transport(#[from] ReqwestError),
}

/// Types of errors that can occur while serving analysis requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// Request rejected before fetching: missing or invalid `url` parameter.
    RequestValidation,
    /// The primary page fetch failed.
    PageFetch,
    /// A robots.txt / sitemap.xml probe failed at the transport level.
    /// The request still completes; the corresponding flag reads `false`.
    CrawlControlProbe,
}

/// Types of warnings that can occur during page analysis.
///
/// Warnings indicate missing optional page data that doesn't prevent a
/// report from being produced but is worth tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)] // All variants start with "Missing" by design
pub enum WarningType {
    /// Title tag is missing or empty
    MissingTitle,
    /// Meta description tag is missing
    MissingMetaDescription,
    /// Canonical link tag is missing
    MissingCanonical,
    /// Viewport meta tag is missing
    MissingViewport,
}
