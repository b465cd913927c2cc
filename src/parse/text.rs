//! Visible-text extraction and keyword frequency analysis.

use regex::Regex;
use scraper::Html;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::config::KEYWORD_MIN_CHARS;

// Runs of alphanumeric/underscore characters, Unicode-aware.
const WORD_PATTERN: &str = r"\w+";

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(WORD_PATTERN).unwrap_or_else(|e| {
        panic!(
            "Failed to compile word pattern '{}': {}. This is a programming error.",
            WORD_PATTERN, e
        )
    })
});

/// Extracts the document's full visible text.
///
/// Concatenates all text nodes with tags stripped: each node's text is
/// trimmed, empty nodes are dropped, and the remainder is joined with
/// single spaces.
pub fn visible_text(document: &Html) -> String {
    document
        .root_element()
        .text()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tokenizes text into lower-cased word tokens (`\w+` runs).
///
/// The total token count is the page's word count; short tokens are kept
/// here and only filtered later for the keyword table.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Ranks tokens by frequency and truncates to the top `limit` entries.
///
/// Only tokens strictly longer than [`KEYWORD_MIN_CHARS`] characters enter
/// the frequency table. The fold records each token's first-occurrence
/// index, which serves as the deterministic secondary sort key: descending
/// by count, then ascending by first occurrence.
pub fn top_keywords(tokens: &[String], limit: usize) -> Vec<(String, usize)> {
    // token -> (count, first occurrence index)
    let frequencies: HashMap<&str, (usize, usize)> = tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.chars().count() > KEYWORD_MIN_CHARS)
        .fold(HashMap::new(), |mut acc, (index, token)| {
            let entry = acc.entry(token.as_str()).or_insert((0, index));
            entry.0 += 1;
            acc
        });

    let mut ranked: Vec<(&str, (usize, usize))> = frequencies.into_iter().collect();
    ranked.sort_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
        count_b.cmp(count_a).then(first_a.cmp(first_b))
    });
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(token, (count, _))| (token.to_string(), count))
        .collect()
}
