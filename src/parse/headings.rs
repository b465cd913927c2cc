//! Heading structure collection.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("h1", "H1_SELECTOR"));
static H2_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("h2", "H2_SELECTOR"));
static H3_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("h3", "H3_SELECTOR"));

/// The page's heading structure, one sequence per level.
#[derive(Debug, Clone, Default)]
pub struct Headings {
    /// Trimmed text of each `<h1>`, document order
    pub h1: Vec<String>,
    /// Trimmed text of each `<h2>`, document order
    pub h2: Vec<String>,
    /// Trimmed text of each `<h3>`, document order
    pub h3: Vec<String>,
}

/// Collects all `<h1>`, `<h2>`, and `<h3>` headings, each level into its own
/// sequence in document order. Duplicates are kept and no case
/// normalization is applied; each heading's text has whitespace runs
/// collapsed to single spaces and is trimmed.
pub fn extract_headings(document: &Html) -> Headings {
    Headings {
        h1: collect(document, &H1_SELECTOR),
        h2: collect(document, &H2_SELECTOR),
        h3: collect(document, &H3_SELECTOR),
    }
}

fn collect(document: &Html, selector: &Selector) -> Vec<String> {
    document.select(selector).map(heading_text).collect()
}

fn heading_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
