//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the
//! application, including network defaults and analysis limits.

/// Default port for the analysis HTTP service.
pub const DEFAULT_PORT: u16 = 5000;

/// Default address the HTTP service binds to.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";

/// Per-request timeout for the primary page fetch, in seconds.
///
/// The crawl-control probes (`robots.txt` / `sitemap.xml`) share the same
/// client and therefore the same bound.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Maximum URL length (2048 characters) to prevent abuse via extremely long
/// URLs. This matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Maximum number of `(token, count)` pairs reported in the keyword table.
pub const KEYWORD_LIMIT: usize = 20;

/// Tokens must be strictly longer than this many characters to enter the
/// keyword frequency table. Short words still count toward `word_count`.
pub const KEYWORD_MIN_CHARS: usize = 3;

/// Fixed path of the robots exclusion file probed on the page's origin.
pub const ROBOTS_TXT_PATH: &str = "/robots.txt";

/// Fixed path of the sitemap file probed on the page's origin.
pub const SITEMAP_XML_PATH: &str = "/sitemap.xml";
