//! Internal/external link classification.

use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::app::netloc;

const ANCHOR_SELECTOR_STR: &str = "a[href]";

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(ANCHOR_SELECTOR_STR, "ANCHOR_SELECTOR"));

/// Anchor hrefs partitioned into same-site and other-site groups.
#[derive(Debug, Clone, Default)]
pub struct LinkClasses {
    /// Hrefs classified as same-site, document order, verbatim
    pub internal: Vec<String>,
    /// Hrefs classified as other-site, document order, verbatim
    pub external: Vec<String>,
}

/// Classifies every `<a>` tag carrying a non-empty `href`.
///
/// An href is internal when it starts with `/` (root-relative, which also
/// captures protocol-relative `//...` hrefs) or contains the origin's
/// network location (`host` or `host:port`) anywhere as a substring;
/// everything else is external. Hrefs are stored verbatim: no resolution
/// against the base URL, no deduplication, no normalization.
///
/// # Arguments
///
/// * `document` - The parsed HTML document
/// * `origin` - The normalized request URL supplying the netloc needle
pub fn classify_links(document: &Html, origin: &Url) -> LinkClasses {
    let needle = netloc(origin);
    let mut links = LinkClasses::default();

    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if href.is_empty() {
            continue;
        }

        if href.starts_with('/') || href.contains(&needle) {
            links.internal.push(href.to_string());
        } else {
            links.external.push(href.to_string());
        }
    }

    links
}
