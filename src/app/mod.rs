//! Request-level application utilities.
//!
//! This module provides URL normalization and origin handling shared by the
//! fetch layer and the link classifier.

pub mod url;

// Re-export public API
pub use url::{netloc, normalize_url};
