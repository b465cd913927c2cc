//! Transport-layer behavior against a local mock server: crawl-control
//! probe status mapping, probe failure degradation, and primary page
//! fetch errors.

use page_audit::{
    analyze_page, check_crawl_control, fetch_page, normalize_url, AnalyzeError, ErrorType,
    ProcessingStats,
};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn origin_of(server: &MockServer) -> Url {
    normalize_url(&server.uri()).expect("mock server URI should normalize")
}

async fn mount_crawl_control(server: &MockServer, robots_status: u16, sitemap_status: u16) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(robots_status).set_body_string("User-agent: *"))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(sitemap_status).set_body_string("<urlset/>"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn probe_200_reads_true() {
    let server = MockServer::start().await;
    mount_crawl_control(&server, 200, 200).await;

    let client = reqwest::Client::new();
    let stats = ProcessingStats::new();
    let crawl = check_crawl_control(&client, &origin_of(&server), &stats).await;

    assert!(crawl.robots_txt);
    assert!(crawl.sitemap_xml);
    assert_eq!(stats.get_error_count(ErrorType::CrawlControlProbe), 0);
}

#[tokio::test]
async fn probe_404_reads_false_without_aborting() {
    let server = MockServer::start().await;
    mount_crawl_control(&server, 404, 404).await;

    let client = reqwest::Client::new();
    let stats = ProcessingStats::new();
    let crawl = check_crawl_control(&client, &origin_of(&server), &stats).await;

    assert!(!crawl.robots_txt);
    assert!(!crawl.sitemap_xml);
    // A 404 is an answered probe, not a transport failure
    assert_eq!(stats.get_error_count(ErrorType::CrawlControlProbe), 0);
}

#[tokio::test]
async fn probe_statuses_map_independently() {
    let server = MockServer::start().await;
    mount_crawl_control(&server, 200, 404).await;

    let client = reqwest::Client::new();
    let stats = ProcessingStats::new();
    let crawl = check_crawl_control(&client, &origin_of(&server), &stats).await;

    assert!(crawl.robots_txt);
    assert!(!crawl.sitemap_xml);
}

#[tokio::test]
async fn non_200_probe_success_is_not_reachable() {
    // Only an exact 200 counts; redirect-ish and server-error statuses read false
    let server = MockServer::start().await;
    mount_crawl_control(&server, 204, 500).await;

    let client = reqwest::Client::new();
    let stats = ProcessingStats::new();
    let crawl = check_crawl_control(&client, &origin_of(&server), &stats).await;

    assert!(!crawl.robots_txt);
    assert!(!crawl.sitemap_xml);
}

#[tokio::test]
async fn probe_transport_failure_degrades_to_false_and_is_counted() {
    // Grab a port the OS just released so the connection is refused
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);

    let origin =
        normalize_url(&format!("http://127.0.0.1:{port}")).expect("origin should normalize");
    let client = reqwest::Client::new();
    let stats = ProcessingStats::new();
    let crawl = check_crawl_control(&client, &origin, &stats).await;

    assert!(!crawl.robots_txt);
    assert!(!crawl.sitemap_xml);
    assert_eq!(stats.get_error_count(ErrorType::CrawlControlProbe), 2);
}

#[tokio::test]
async fn missing_crawl_control_still_yields_a_full_report() {
    let server = MockServer::start().await;
    mount_crawl_control(&server, 404, 404).await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string(
                    r#"<html><head><title>Landing</title></head>
                       <body><h1>Welcome</h1><a href="/next">Next</a></body></html>"#,
                ),
        )
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let stats = ProcessingStats::new();
    let origin = origin_of(&server);

    let body = fetch_page(&client, &origin).await.expect("page should fetch");
    let crawl = check_crawl_control(&client, &origin, &stats).await;
    let report = analyze_page(&body, &origin, crawl, &stats);

    assert_eq!(report.title, "Landing");
    assert_eq!(report.h1, vec!["Welcome".to_string()]);
    assert_eq!(report.internal_links, vec!["/next".to_string()]);
    assert!(!report.robots_txt);
    assert!(!report.sitemap_xml);
}

#[tokio::test]
async fn fetch_page_non_2xx_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let result = fetch_page(&client, &origin_of(&server)).await;

    match result {
        Err(AnalyzeError::Transport(e)) => {
            assert_eq!(e.status(), Some(reqwest::StatusCode::SERVICE_UNAVAILABLE));
        }
        other => panic!("expected a transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_page_connection_refused_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);

    let origin =
        normalize_url(&format!("http://127.0.0.1:{port}")).expect("origin should normalize");
    let client = reqwest::Client::new();

    let result = fetch_page(&client, &origin).await;
    assert!(matches!(result, Err(AnalyzeError::Transport(_))));
}

#[tokio::test]
async fn fetch_page_returns_body_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body>hello</body></html>"),
        )
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let body = fetch_page(&client, &origin_of(&server))
        .await
        .expect("page should fetch");
    assert!(body.contains("hello"));
}
