//! Structured-data counting.

use scraper::{Html, Selector};
use std::sync::LazyLock;

static SCRIPT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("script", "SCRIPT_SELECTOR"));

const JSON_LD_TYPE: &str = "application/ld+json";

/// Counts `<script type="application/ld+json">` tags.
///
/// The `type` value is compared byte-for-byte rather than through an
/// attribute selector, because the selector engine matches the legacy
/// `type` attribute ASCII-case-insensitively in HTML documents. Only an
/// exact lower-case `application/ld+json` counts; contents are not parsed
/// or validated.
pub fn count_json_ld(document: &Html) -> usize {
    document
        .select(&SCRIPT_SELECTOR)
        .filter(|script| script.value().attr("type") == Some(JSON_LD_TYPE))
        .count()
}
