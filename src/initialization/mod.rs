//! Application initialization.
//!
//! Startup-time setup that has to happen before the service can run:
//! logger configuration with the selected level and output format. The
//! shared HTTP client is initialized by the fetch layer when the server
//! starts.

mod logger;

pub use logger::init_logger_with;
