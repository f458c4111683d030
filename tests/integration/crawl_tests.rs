//! Integration tests for the crawler
//!
//! These tests use wiremock to serve listing pages and run the full
//! fetch, extract, and write pipeline end-to-end into a temporary file.

use manga_list::config::{Config, PacingConfig};
use manga_list::crawler::{Coordinator, HttpFetcher, JitterPacer};
use manga_list::output::{open_output, SinkWriter};
use manga_list::{PageRange, Record};
use std::path::Path;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USER_AGENT: &str = "TestBot/1.0";

/// Creates a configuration pointing at the mock server with no pacing delay
fn create_test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.site.name = "testsite".to_string();
    config.site.root_url = format!("{}/list/", base_url);
    config.site.referer = format!("{}/list/", base_url);
    config.site.user_agent = USER_AGENT.to_string();
    // [0, 1) seconds always draws 0
    config.pacing = PacingConfig {
        min_delay_secs: 0,
        max_delay_secs: 1,
    };
    config
}

fn listing(entries: &[(&str, &str)]) -> String {
    let items: String = entries
        .iter()
        .map(|(title, href)| {
            format!(
                r#"<li><p class="ell"><a href="{href}" title="{title}">{title}</a></p>
                   <span class="updateon">2020-02-20</span><span class="sl"></span></li>"#
            )
        })
        .collect();
    format!(
        r#"<html><head><title>List</title></head><body><ul id="contList">{}</ul></body></html>"#,
        items
    )
}

async fn mount_page(server: &MockServer, page_path: &str, status: u16, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(server)
        .await;
}

async fn crawl(config: &Config, range: &str, output: &Path) -> manga_list::output::CrawlStatistics {
    let fetcher = HttpFetcher::new(&config.site).expect("Failed to build fetcher");
    let pacer = JitterPacer::seeded(&config.pacing, 0);
    let coordinator =
        Coordinator::new(config, fetcher, pacer).expect("Failed to create coordinator");
    let sink = SinkWriter::new(open_output(output).expect("Failed to open output"));

    coordinator
        .run(range.parse::<PageRange>().expect("Invalid range"), sink)
        .await
        .expect("Crawl failed")
}

fn read_records(output: &Path) -> Vec<Record> {
    std::fs::read_to_string(output)
        .expect("Failed to read output")
        .lines()
        .map(|line| serde_json::from_str(line).expect("Invalid JSON line"))
        .collect()
}

#[tokio::test]
async fn test_only_first_page_has_entries() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/list/",
        200,
        listing(&[("Alpha", "/comic/1/"), ("Beta", "/comic/2/")]),
    )
    .await;
    mount_page(&mock_server, "/list/index_p2.html", 200, listing(&[])).await;
    mount_page(&mock_server, "/list/index_p3.html", 200, listing(&[])).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("manga.jsonl");
    let config = create_test_config(&base_url);

    let stats = crawl(&config, "1-3", &output).await;

    let records = read_records(&output);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Alpha");
    assert_eq!(records[1].title, "Beta");
    for record in &records {
        assert_eq!(record.source_page, format!("{}/list/", base_url));
        assert_eq!(record.site, "testsite");
        assert_eq!(record.status, "completed");
        assert_eq!(record.last_update, "2020-02-20");
    }

    assert_eq!(stats.pages_requested, 3);
    assert_eq!(stats.pages_succeeded, 3);
    assert_eq!(stats.records_written, 2);
}

#[tokio::test]
async fn test_sends_referer_and_user_agent() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/list/"))
        .and(header("referer", format!("{}/list/", base_url).as_str()))
        .and(header("user-agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing(&[("A", "/a/")])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("manga.jsonl");
    let config = create_test_config(&base_url);

    let stats = crawl(&config, "1-1", &output).await;

    // Without matching headers the mock would not answer with 200
    assert_eq!(stats.pages_succeeded, 1);
    assert_eq!(read_records(&output).len(), 1);
}

#[tokio::test]
async fn test_non_200_page_is_skipped() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/list/index_p2.html", 200, listing(&[("Two", "/2/")])).await;
    mount_page(
        &mock_server,
        "/list/index_p3.html",
        503,
        listing(&[("Hidden", "/hidden/")]),
    )
    .await;
    mount_page(&mock_server, "/list/index_p4.html", 200, listing(&[("Four", "/4/")])).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("manga.jsonl");
    let config = create_test_config(&base_url);

    let stats = crawl(&config, "2-4", &output).await;

    let titles: Vec<String> = read_records(&output).into_iter().map(|r| r.title).collect();
    assert_eq!(titles, vec!["Two", "Four"]);
    assert_eq!(stats.pages_failed, 1);
    assert_eq!(stats.pages_succeeded, 2);
}

#[tokio::test]
async fn test_output_is_appended_across_runs() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/list/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing(&[("Again", "/again/")])))
        .expect(2)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("manga.jsonl");
    let config = create_test_config(&base_url);

    crawl(&config, "1-1", &output).await;
    crawl(&config, "1-1", &output).await;

    // No deduplication: the same page twice yields the same record twice
    let records = read_records(&output);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], records[1]);
}

#[tokio::test]
async fn test_unreachable_server_writes_nothing() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("manga.jsonl");
    // Reserve a free port, then release it so nothing is listening there
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind")
        .local_addr()
        .expect("Failed to read address");
    let config = create_test_config(&format!("http://{}", addr));

    let stats = crawl(&config, "1-2", &output).await;

    assert_eq!(stats.pages_requested, 2);
    assert_eq!(stats.pages_failed, 2);
    assert_eq!(stats.records_written, 0);
    assert!(read_records(&output).is_empty());
}

#[tokio::test]
async fn test_redirected_page_is_skipped() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/list/index_p2.html"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("location", format!("{}/list/", base_url).as_str()),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    // The redirect target must never be requested
    Mock::given(method("GET"))
        .and(path("/list/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing(&[("A", "/a/")])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("manga.jsonl");
    let config = create_test_config(&base_url);

    let stats = crawl(&config, "2-2", &output).await;

    assert_eq!(stats.pages_requested, 1);
    assert_eq!(stats.pages_failed, 1);
    assert_eq!(stats.pages_succeeded, 0);
    assert_eq!(stats.records_written, 0);
    assert!(read_records(&output).is_empty());
}
