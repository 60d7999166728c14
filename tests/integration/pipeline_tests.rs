//! Integration tests for the extraction pipeline
//!
//! These tests use wiremock to serve company pages and run whole batches
//! through the coordinator end-to-end.

use company_profiler::config::{BatchConfig, Config, FetcherConfig, OutputConfig};
use company_profiler::output::{export_csv, CSV_HEADER};
use company_profiler::pipeline::Coordinator;
use company_profiler::{profile_urls, NOT_AVAILABLE};
use std::time::Duration;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPANY_PAGE: &str = r#"<html><head>
    <title>Globex Industries | Home</title>
    <meta name="description" content="Globex makes industrial widgets for the world.">
    <meta name="keywords" content="Manufacturing, widgets">
    </head><body>
    <h1>Globex Industries</h1>
    <p>Write to info@globex.com or call (555) 123-4567.</p>
    <p>Established in 1989, Globex employs over 500 employees.</p>
    <p>We are a top provider of widgets, unlike our competitors.</p>
    <address>42 Industrial Way, Springfield</address>
    <a href="https://www.linkedin.com/company/globex">LinkedIn</a>
    <a href="https://twitter.com/globex">Twitter</a>
    <a href="https://www.facebook.com/globex">Facebook</a>
    </body></html>"#;

/// Creates a test configuration with no request spacing
fn create_test_config(timeout_secs: u64) -> Config {
    Config {
        fetcher: FetcherConfig {
            timeout_secs,
            connect_timeout_secs: 1,
            max_redirects: 5,
            user_agents: vec!["ProfilerTest/1.0".to_string()],
        },
        batch: BatchConfig {
            request_delay_ms: 0,
            max_concurrent_fetches: 2,
        },
        output: OutputConfig::default(),
    }
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html")
}

#[tokio::test]
async fn test_full_extraction_single_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header_exists("user-agent"))
        .respond_with(html(COMPANY_PAGE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    let records = profile_urls(create_test_config(5), &[url.clone()])
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.url, url);
    assert_eq!(record.company_name, "Globex Industries");
    assert_eq!(record.email, "info@globex.com");
    assert!(record.phone.contains("123-4567"));
    assert_eq!(record.linkedin, "https://www.linkedin.com/company/globex");
    assert_eq!(record.twitter, "https://twitter.com/globex");
    assert_eq!(record.facebook, "https://www.facebook.com/globex");
    assert_eq!(record.instagram, NOT_AVAILABLE);
    assert_eq!(
        record.description,
        "Globex makes industrial widgets for the world."
    );
    assert_eq!(record.founded_year, "1989");
    assert_eq!(record.address, "42 Industrial Way, Springfield");
    assert_eq!(record.industry, "Manufacturing");
    assert_eq!(record.employee_count, "500");
    assert_eq!(record.competitors_mentioned, "Mentions competitors");
    assert_eq!(record.market_position, "Top");
    assert!(!record.is_degraded());

    for (name, value) in record.fields() {
        assert!(!value.is_empty(), "field {} is empty", name);
    }
}

#[tokio::test]
async fn test_order_preserved_and_invalid_urls_dropped() {
    let mock_server = MockServer::start().await;

    // The first page answers last; the batch must still come back in input order.
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            html("<html><head><title>Slow Co</title></head></html>")
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/fast"))
        .respond_with(html("<html><head><title>Fast Co</title></head></html>"))
        .mount(&mock_server)
        .await;

    let urls = vec![
        format!("{}/slow", mock_server.uri()),
        "not a url".to_string(),
        format!("{}/fast", mock_server.uri()),
        "mailto:someone@acme.com".to_string(),
    ];
    let records = profile_urls(create_test_config(5), &urls).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].url, urls[0]);
    assert_eq!(records[0].company_name, "Slow Co");
    assert_eq!(records[1].url, urls[2]);
    assert_eq!(records[1].company_name, "Fast Co");
}

#[tokio::test]
async fn test_unreachable_url_isolated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(COMPANY_PAGE))
        .mount(&mock_server)
        .await;

    let urls = vec![
        "http://127.0.0.1:1/".to_string(),
        format!("{}/", mock_server.uri()),
    ];
    let records = profile_urls(create_test_config(5), &urls).await.unwrap();

    assert_eq!(records.len(), 2);

    let failed = &records[0];
    assert_eq!(failed.url, "http://127.0.0.1:1/");
    assert!(failed.is_degraded());
    assert!(failed.company_name.starts_with("Error: "));
    assert_eq!(failed.email, NOT_AVAILABLE);
    assert_eq!(failed.youtube, NOT_AVAILABLE);
    assert_eq!(failed.market_position, NOT_AVAILABLE);

    assert_eq!(records[1].company_name, "Globex Industries");
}

#[tokio::test]
async fn test_timeout_yields_degraded_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(COMPANY_PAGE).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    let records = profile_urls(create_test_config(1), &[url.clone()])
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].url, url);
    assert!(records[0].is_degraded());
    assert!(records[0].company_name.contains("timeout"));
}

#[tokio::test]
async fn test_redirect_keeps_requested_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", "/en/home".to_string()),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/en/home"))
        .respond_with(html(
            r#"<html><head><title>Initech</title></head><body>
            <a href="//www.youtube.com/c/initech">Videos</a>
            <a href="../team">Team</a>
            </body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    let records = profile_urls(create_test_config(5), &[url.clone()])
        .await
        .unwrap();

    let record = &records[0];
    assert_eq!(record.url, url);
    assert_eq!(record.company_name, "Initech");
    assert_eq!(record.youtube, "http://www.youtube.com/c/initech");
}

#[tokio::test]
async fn test_error_status_body_still_extracted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_string("<html><head><title>Umbrella Corp</title></head></html>"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    let records = profile_urls(create_test_config(5), &[url]).await.unwrap();

    assert!(!records[0].is_degraded());
    assert_eq!(records[0].company_name, "Umbrella Corp");
}

#[tokio::test]
async fn test_requests_are_spaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html("<title>Spaced</title>"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(5);
    config.batch.request_delay_ms = 200;
    config.batch.max_concurrent_fetches = 3;

    let urls: Vec<String> = (0..3)
        .map(|i| format!("{}/page{}", mock_server.uri(), i))
        .collect();

    let start = std::time::Instant::now();
    let records = Coordinator::new(config).unwrap().run(&urls).await;

    assert_eq!(records.len(), 3);
    assert!(start.elapsed() >= Duration::from_millis(400));
}

#[tokio::test]
async fn test_batch_exported_to_csv() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(COMPANY_PAGE))
        .mount(&mock_server)
        .await;

    let urls = vec![
        format!("{}/", mock_server.uri()),
        "http://127.0.0.1:1/".to_string(),
    ];
    let records = profile_urls(create_test_config(5), &urls).await.unwrap();

    let temp_dir = tempfile::tempdir().unwrap();
    let csv_path = temp_dir.path().join("scraped_data.csv");
    export_csv(&records, &csv_path).unwrap();

    let mut reader = csv::Reader::from_path(&csv_path).unwrap();
    let header: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(header, CSV_HEADER);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], urls[0].as_str());
    assert_eq!(&rows[0][1], "Globex Industries");
    assert_eq!(&rows[1][0], "http://127.0.0.1:1/");
    assert!(rows[1][1].starts_with("Error: "));
}
