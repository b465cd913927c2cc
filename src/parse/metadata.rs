//! Page metadata extraction.
//!
//! Extracts the title, canonical link, and everything carried by `<meta>`
//! tags: description, viewport, Open Graph properties, and Twitter Card
//! names.

use scraper::{Html, Selector};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error_handling::{ProcessingStats, WarningType};

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const META_SELECTOR_STR: &str = "meta";
const CANONICAL_SELECTOR_STR: &str = "link[rel='canonical']";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));

static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(META_SELECTOR_STR, "META_SELECTOR"));

static CANONICAL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(CANONICAL_SELECTOR_STR, "CANONICAL_SELECTOR")
});

/// Metadata extracted from the document head.
#[derive(Debug, Clone, Default)]
pub struct PageMetadata {
    /// First `<title>` text, trimmed; empty if absent
    pub title: String,
    /// Content of `<meta name="description">`; empty if absent
    pub description: String,
    /// `href` of the first `<link rel="canonical">`; empty if absent
    pub canonical: String,
    /// Content of `<meta name="viewport">`; empty if absent
    pub viewport: String,
    /// Open Graph properties, keys lower-cased, last tag wins
    pub og: HashMap<String, String>,
    /// Twitter Card names, keys lower-cased, last tag wins
    pub twitter: HashMap<String, String>,
}

/// Extracts page metadata from an HTML document.
///
/// Scans every `<meta>` tag exactly once. For each tag the `name` and
/// `property` attributes are read (missing attributes read as empty) and
/// lower-cased for comparison; a single tag may satisfy several rules and
/// all applicable ones fire:
/// - `name == "description"` / `name == "viewport"` set the respective field
/// - a `property` starting with `og:` lands in the `og` map under the
///   lower-cased property string
/// - a `name` starting with `twitter:` lands in the `twitter` map under the
///   lower-cased name
///
/// Later duplicate keys overwrite earlier ones (last tag wins). A missing
/// `content` attribute reads as the empty string.
///
/// # Arguments
///
/// * `document` - The parsed HTML document
/// * `stats` - Statistics tracker for recording missing-metadata warnings
pub fn extract_metadata(document: &Html, stats: &ProcessingStats) -> PageMetadata {
    let mut metadata = PageMetadata {
        title: extract_title(document),
        canonical: extract_canonical(document),
        ..Default::default()
    };

    for element in document.select(&META_SELECTOR) {
        let name = element.value().attr("name").unwrap_or("").to_lowercase();
        let property = element
            .value()
            .attr("property")
            .unwrap_or("")
            .to_lowercase();
        let content = element.value().attr("content").unwrap_or("");

        if name == "description" {
            metadata.description = content.to_string();
        }
        if name == "viewport" {
            metadata.viewport = content.to_string();
        }
        if property.starts_with("og:") {
            metadata.og.insert(property.clone(), content.to_string());
        }
        if name.starts_with("twitter:") {
            metadata.twitter.insert(name.clone(), content.to_string());
        }
    }

    if metadata.title.is_empty() {
        stats.increment_warning(WarningType::MissingTitle);
    }
    if metadata.description.is_empty() {
        stats.increment_warning(WarningType::MissingMetaDescription);
    }
    if metadata.canonical.is_empty() {
        stats.increment_warning(WarningType::MissingCanonical);
    }
    if metadata.viewport.is_empty() {
        stats.increment_warning(WarningType::MissingViewport);
    }

    metadata
}

/// Extracts the page title: text content of the first `<title>` element,
/// trimmed of whitespace. Returns an empty string if no title is found.
fn extract_title(document: &Html) -> String {
    match document.select(&TITLE_SELECTOR).next() {
        Some(element) => element.text().collect::<String>().trim().to_string(),
        None => String::new(),
    }
}

/// Extracts the canonical URL: `href` of the first `<link rel="canonical">`
/// element. Returns an empty string if the tag or the attribute is absent.
fn extract_canonical(document: &Html) -> String {
    document
        .select(&CANONICAL_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("href"))
        .unwrap_or("")
        .to_string()
}
