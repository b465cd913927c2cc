//! Alt-text audit.

use scraper::{Html, Selector};
use std::sync::LazyLock;

static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("img", "IMG_SELECTOR"));

/// Counts `<img>` tags lacking a non-empty `alt` attribute.
///
/// An absent `alt` and an empty `alt=""` both count as missing. No other
/// attribute is considered.
pub fn count_missing_alt(document: &Html) -> usize {
    document
        .select(&IMG_SELECTOR)
        .filter(|img| img.value().attr("alt").map_or(true, str::is_empty))
        .count()
}
