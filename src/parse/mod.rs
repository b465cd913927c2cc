//! HTML parsing and SEO signal extraction.
//!
//! This module turns a fetched HTML document into a [`SeoReport`]:
//! - Metadata (title, description, canonical, viewport, Open Graph, Twitter Cards)
//! - Heading structure (h1/h2/h3)
//! - Visible-text word count and keyword frequency
//! - Internal/external link classification
//! - Alt-text audit and JSON-LD counting
//!
//! All tag scanning is done using CSS selectors via the `scraper` crate.
//! The whole analysis is a pure, single-pass function over one parsed
//! document; it allocates its own report and never blocks.

mod headings;
mod images;
mod links;
mod metadata;
mod structured;
mod text;

use scraper::Html;
use url::Url;

use crate::config::KEYWORD_LIMIT;
use crate::error_handling::ProcessingStats;
use crate::models::{CrawlControl, SeoReport};

pub use headings::extract_headings;
pub use images::count_missing_alt;
pub use links::classify_links;
pub use metadata::extract_metadata;
pub use structured::count_json_ld;
pub use text::{tokenize, top_keywords, visible_text};

/// Analyzes a fetched HTML document and produces the SEO report.
///
/// Parses the body once and runs every extraction stage against the same
/// document. The two crawl-control flags are supplied by the caller since
/// they come from the transport boundary, not from the document.
///
/// # Arguments
///
/// * `body` - The raw HTML of the fetched page
/// * `origin` - The normalized request URL, used for link classification
/// * `crawl` - Reachability of `/robots.txt` and `/sitemap.xml` on the origin
/// * `stats` - Statistics tracker for recording missing-metadata warnings
///
/// # Returns
///
/// A fully populated [`SeoReport`]. Malformed HTML is tolerated: absent
/// tags yield default/empty values, never errors.
pub fn analyze_page(
    body: &str,
    origin: &Url,
    crawl: CrawlControl,
    stats: &ProcessingStats,
) -> SeoReport {
    let document = Html::parse_document(body);

    let metadata = extract_metadata(&document, stats);
    let headings = extract_headings(&document);
    let links = classify_links(&document, origin);

    let text = visible_text(&document);
    let tokens = tokenize(&text);
    let keywords = top_keywords(&tokens, KEYWORD_LIMIT);

    SeoReport {
        title: metadata.title,
        description: metadata.description,
        canonical: metadata.canonical,
        viewport: metadata.viewport,
        h1: headings.h1,
        h2: headings.h2,
        h3: headings.h3,
        word_count: tokens.len(),
        missing_alt: count_missing_alt(&document),
        keywords,
        internal_links: links.internal,
        external_links: links.external,
        robots_txt: crawl.robots_txt,
        sitemap_xml: crawl.sitemap_xml,
        og: metadata.og,
        twitter: metadata.twitter,
        schema_count: count_json_ld(&document),
    }
}
