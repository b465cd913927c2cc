//! page_audit library: single-page SEO analysis.
//!
//! This library fetches a web page and extracts a structured bundle of
//! on-page SEO signals: metadata, heading structure, keyword frequency,
//! link classification, alt-text coverage, structured-data counts, and the
//! reachability of the crawl-control files (`robots.txt` / `sitemap.xml`).
//!
//! The analysis itself is a pure, single-pass function over a parsed
//! document ([`analyze_page`]); the HTTP service in [`serve`] is a thin
//! boundary around it.
//!
//! # Example
//!
//! ```no_run
//! use page_audit::{serve, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     port: 5000,
//!     ..Default::default()
//! };
//!
//! serve(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod models;
mod parse;
mod server;
mod utils;

// Re-export public API
pub use app::normalize_url;
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{AnalyzeError, ErrorType, ProcessingStats, WarningType};
pub use fetch::{check_crawl_control, fetch_page};
pub use models::{CrawlControl, SeoReport};
pub use parse::analyze_page;
pub use server::serve;
