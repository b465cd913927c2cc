//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and service configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration.
///
/// Doubles as the CLI surface (via `clap`) and as a plain struct that can be
/// constructed programmatically for library use.
///
/// # Examples
///
/// ```no_run
/// use page_audit::Config;
///
/// let config = Config {
///     port: 8080,
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Parser, Debug, Clone)]
#[command(
    name = "page_audit",
    about = "Fetches a single web page and serves a structured on-page SEO report over HTTP."
)]
pub struct Config {
    /// Address to bind the HTTP service to
    #[arg(long, default_value = DEFAULT_BIND_ADDR)]
    pub bind: String,

    /// Port for the HTTP service
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Per-request timeout for page fetches, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        // Test all LogLevel variants convert correctly to log::LevelFilter
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.bind, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.timeout_seconds, 10);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_config_parses_without_args() {
        // All options carry defaults, so an empty command line must parse
        let config = Config::try_parse_from(["page_audit"]).expect("defaults should parse");
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_config_parses_overrides() {
        let config = Config::try_parse_from([
            "page_audit",
            "--port",
            "8080",
            "--timeout-seconds",
            "3",
            "--log-level",
            "debug",
        ])
        .expect("overrides should parse");
        assert_eq!(config.port, 8080);
        assert_eq!(config.timeout_seconds, 3);
        assert!(matches!(config.log_level, LogLevel::Debug));
    }
}
