//! Report data structures.

use serde::Serialize;
use std::collections::HashMap;

/// Reachability of the fixed-path crawl-control files on a page's origin.
///
/// Each flag is `true` iff the corresponding file answered HTTP 200. Probe
/// failures at the transport level read as `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlControl {
    /// `/robots.txt` returned HTTP 200
    pub robots_txt: bool,
    /// `/sitemap.xml` returned HTTP 200
    pub sitemap_xml: bool,
}

/// The on-page SEO report for a single fetched page.
///
/// Produced fresh per request by [`crate::analyze_page`] and serialized as
/// the response body; it carries no mutable state after construction.
/// `keywords` serializes as JSON pairs (`["token", count]`), the `og` and
/// `twitter` maps as JSON objects with unspecified key order; all sequence
/// fields preserve document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoReport {
    /// Text of the first `<title>` tag, trimmed; empty if absent
    pub title: String,
    /// Content of `<meta name="description">`; empty if absent
    pub description: String,
    /// `href` of the first `<link rel="canonical">`; empty if absent
    pub canonical: String,
    /// Content of `<meta name="viewport">`; empty if absent
    pub viewport: String,
    /// Trimmed text of each `<h1>`, document order, duplicates kept
    pub h1: Vec<String>,
    /// Trimmed text of each `<h2>`, document order, duplicates kept
    pub h2: Vec<String>,
    /// Trimmed text of each `<h3>`, document order, duplicates kept
    pub h3: Vec<String>,
    /// Count of word tokens in the visible text, short tokens included
    pub word_count: usize,
    /// Count of `<img>` tags lacking a non-empty `alt` attribute
    pub missing_alt: usize,
    /// Top tokens by frequency, descending, ties by first occurrence
    pub keywords: Vec<(String, usize)>,
    /// Raw `href` values classified as same-site, document order
    pub internal_links: Vec<String>,
    /// Raw `href` values classified as other-site, document order
    pub external_links: Vec<String>,
    /// Whether `/robots.txt` on the origin returned HTTP 200
    pub robots_txt: bool,
    /// Whether `/sitemap.xml` on the origin returned HTTP 200
    pub sitemap_xml: bool,
    /// Open Graph meta properties, keys lower-cased, last tag wins
    pub og: HashMap<String, String>,
    /// Twitter-card meta names, keys lower-cased, last tag wins
    pub twitter: HashMap<String, String>,
    /// Count of `<script type="application/ld+json">` tags
    pub schema_count: usize,
}
