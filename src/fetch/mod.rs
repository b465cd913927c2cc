//! Transport boundary: page fetching and crawl-control probes.
//!
//! Everything that touches the network lives here. The analyzer itself
//! never blocks; it receives the fetched body and the probe results as
//! plain values.

mod client;

use log::{debug, warn};
use url::Url;

use crate::app::netloc;
use crate::config::{ROBOTS_TXT_PATH, SITEMAP_XML_PATH};
use crate::error_handling::{AnalyzeError, ErrorType, ProcessingStats};
use crate::models::CrawlControl;

pub use client::init_client;

/// Fetches the page at `url` and returns its body text.
///
/// Sends a GET request advertising an HTML `Accept` header. A non-2xx
/// response for the main page is treated the same as any other transport
/// failure.
///
/// # Errors
///
/// Returns [`AnalyzeError::Transport`] on timeout, DNS, TLS, connection
/// failure, a non-2xx status, or a body decode failure.
pub async fn fetch_page(client: &reqwest::Client, url: &Url) -> Result<String, AnalyzeError> {
    debug!("Fetching page {url}");

    let response = client
        .get(url.clone())
        .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml")
        .send()
        .await?
        .error_for_status()?;

    let body = response.text().await?;
    debug!("Fetched {} bytes from {url}", body.len());
    Ok(body)
}

/// Probes the two fixed crawl-control paths on the page's origin.
///
/// Issues independent GETs to `{scheme}://{netloc}/robots.txt` and
/// `{scheme}://{netloc}/sitemap.xml`; each flag is `true` iff the response
/// status is exactly 200. A transport failure of a probe is logged,
/// counted, and degraded to `false` — it never aborts the surrounding
/// analysis request.
pub async fn check_crawl_control(
    client: &reqwest::Client,
    origin: &Url,
    stats: &ProcessingStats,
) -> CrawlControl {
    CrawlControl {
        robots_txt: probe(client, origin, ROBOTS_TXT_PATH, stats).await,
        sitemap_xml: probe(client, origin, SITEMAP_XML_PATH, stats).await,
    }
}

async fn probe(
    client: &reqwest::Client,
    origin: &Url,
    path: &str,
    stats: &ProcessingStats,
) -> bool {
    let target = format!("{}://{}{}", origin.scheme(), netloc(origin), path);

    match client.get(&target).send().await {
        Ok(response) => {
            let ok = response.status() == reqwest::StatusCode::OK;
            debug!("Probe {target} answered {}", response.status());
            ok
        }
        Err(e) => {
            warn!("Probe {target} failed, recording as absent: {e}");
            stats.increment_error(ErrorType::CrawlControlProbe);
            false
        }
    }
}
