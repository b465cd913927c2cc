//! URL normalization behavior exercised through the public API.

use page_audit::{normalize_url, AnalyzeError};

#[test]
fn bare_hostname_gets_http_scheme() {
    let url = normalize_url("example.com").expect("bare hostname should normalize");
    assert_eq!(url.as_str(), "http://example.com/");
    assert_eq!(url.scheme(), "http");
}

#[test]
fn existing_scheme_is_preserved() {
    let url = normalize_url("https://example.com/page").expect("https URL should normalize");
    assert_eq!(url.scheme(), "https");
    assert_eq!(url.path(), "/page");
}

#[test]
fn prefix_check_is_literal_not_scheme_aware() {
    // Anything starting with "http" is passed through as-is, so a bare
    // "httpexample.com" reads as a scheme-less string that fails to parse
    let result = normalize_url("httpexample.com");
    assert!(matches!(result, Err(AnalyzeError::InvalidUrl(_))));
}

#[test]
fn query_and_fragment_survive() {
    let url = normalize_url("http://example.com/search?q=rust#top")
        .expect("URL with query should normalize");
    assert_eq!(url.query(), Some("q=rust"));
    assert_eq!(url.fragment(), Some("top"));
}

#[test]
fn non_http_scheme_is_rejected() {
    // "httpx" passes the literal prefix check but fails scheme validation
    let result = normalize_url("httpx://example.com/");
    assert!(matches!(result, Err(AnalyzeError::InvalidUrl(_))));
}

#[test]
fn garbage_is_rejected() {
    assert!(matches!(
        normalize_url("http://"),
        Err(AnalyzeError::InvalidUrl(_))
    ));
    assert!(matches!(
        normalize_url("http://[broken"),
        Err(AnalyzeError::InvalidUrl(_))
    ));
}

#[test]
fn overlong_url_is_rejected() {
    let long = format!("http://example.com/{}", "a".repeat(3000));
    assert!(matches!(
        normalize_url(&long),
        Err(AnalyzeError::InvalidUrl(_))
    ));
}

#[test]
fn host_with_port_normalizes() {
    let url = normalize_url("localhost:8080/path").expect("host:port should normalize");
    assert_eq!(url.as_str(), "http://localhost:8080/path");
}
