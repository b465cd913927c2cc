//! Processing statistics tracking.
//!
//! This module provides thread-safe statistics tracking for errors and
//! warnings observed while serving analysis requests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{ErrorType, WarningType};

/// Thread-safe processing statistics tracker.
///
/// Tracks errors and warnings using atomic counters, allowing concurrent
/// access from multiple request handlers. All types are initialized to zero
/// on creation.
///
/// # Categories
///
/// - **Errors**: Failures that abort an analysis request
/// - **Warnings**: Missing optional page data observed during analysis
///
/// # Thread Safety
///
/// This struct is thread-safe and can be shared across tasks using `Arc`.
pub struct ProcessingStats {
    errors: HashMap<ErrorType, AtomicUsize>,
    warnings: HashMap<WarningType, AtomicUsize>,
}

impl ProcessingStats {
    /// Creates a tracker with every counter initialized to zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }

        let mut warnings = HashMap::new();
        for warning in WarningType::iter() {
            warnings.insert(warning, AtomicUsize::new(0));
        }

        ProcessingStats { errors, warnings }
    }

    /// Increment an error counter.
    ///
    /// Never panics: every variant is seeded in `new()`. A missing entry
    /// indicates a bug in initialization and is logged instead.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                error
            );
        }
    }

    /// Increment a warning counter.
    ///
    /// Never panics: every variant is seeded in `new()`. A missing entry
    /// indicates a bug in initialization and is logged instead.
    pub fn increment_warning(&self, warning: WarningType) {
        if let Some(counter) = self.warnings.get(&warning) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment warning counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                warning
            );
        }
    }

    /// Get the count for an error type.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get the count for a warning type.
    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings
            .get(&warning)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total errors across all types.
    pub fn total_errors(&self) -> usize {
        self.errors
            .values()
            .map(|c| c.load(Ordering::SeqCst))
            .sum()
    }

    /// Total warnings across all types.
    pub fn total_warnings(&self) -> usize {
        self.warnings
            .values()
            .map(|c| c.load(Ordering::SeqCst))
            .sum()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
