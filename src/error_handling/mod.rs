//! Error types and processing statistics.
//!
//! This module defines the typed error surface of the analysis pipeline and
//! the thread-safe counters used to track errors and warnings across
//! requests.

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{AnalyzeError, ErrorType, InitializationError, WarningType};
