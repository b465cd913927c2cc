//! URL validation and normalization utilities.

use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::AnalyzeError;

/// Validates and normalizes a requested URL.
///
/// A URL that does not start with `http` gets an `http://` prefix, after
/// which it must parse as a syntactically valid `http` or `https` URL with a
/// host. URLs longer than [`MAX_URL_LENGTH`] are rejected outright.
///
/// # Arguments
///
/// * `raw` - The URL string from the request
///
/// # Returns
///
/// The parsed URL, or [`AnalyzeError::InvalidUrl`] describing why the input
/// was rejected.
pub fn normalize_url(raw: &str) -> Result<Url, AnalyzeError> {
    if raw.len() > MAX_URL_LENGTH {
        return Err(AnalyzeError::InvalidUrl(format!(
            "exceeds maximum length ({} > {})",
            raw.len(),
            MAX_URL_LENGTH
        )));
    }

    // Prefix bare hostnames; "https://..." already starts with "http"
    let normalized = if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("http://{raw}")
    };

    let parsed = Url::parse(&normalized)
        .map_err(|e| AnalyzeError::InvalidUrl(format!("{raw}: {e}")))?;

    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(parsed),
        _ => Err(AnalyzeError::InvalidUrl(format!(
            "{raw}: unsupported scheme or missing host"
        ))),
    }
}

/// Renders the network location (`host` or `host:port`) of a URL.
///
/// Used both as the substring needle for internal-link classification and to
/// construct the crawl-control probe URLs on the same origin.
pub fn netloc(url: &Url) -> String {
    let host = url.host_str().unwrap_or("");
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}
