//! End-to-end scrape tests
//!
//! Each test starts a mock documentation site and runs the coordinator
//! against it with the direct HTTP backend.

use docscrape::config::{
    build_config, ConfigFile, FetchConfig, OutputConfig, ScrapeConfig, SelectorSection,
};
use docscrape::fetch::{build_fetcher, FetchError};
use docscrape::page_log::{PageLog, PageStatus, LOG_FILE_NAME};
use docscrape::{Coordinator, ScrapeError};
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a config that reads `<div class="doc">` regions
fn create_test_config(seed: &str, output_dir: &Path, file: ConfigFile, overwrite: bool) -> ScrapeConfig {
    let output = OutputConfig {
        output_dir: output_dir.to_path_buf(),
        save_html: false,
        overwrite,
    };
    let content = SelectorSection {
        class_name: Some("doc".to_string()),
        ..Default::default()
    };

    build_config(seed, output, file, SelectorSection::default(), content)
        .expect("Failed to build config")
}

fn create_coordinator(config: ScrapeConfig) -> Coordinator {
    let fetcher = build_fetcher(&config.fetch, false, None).expect("Failed to build fetcher");
    Coordinator::new(config, fetcher).expect("Failed to create coordinator")
}

async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Seed page linking to /docs/a (relative) and /docs/b (absolute)
fn seed_body(base_url: &str) -> String {
    format!(
        r##"<html><body>
        <nav class="sidebar">
            <a href="/docs/a">Page A</a>
            <a href="#intro">Intro</a>
            <a href="{}/docs/b">Page B</a>
            <a href="/docs/a#details">Page A again</a>
        </nav>
        <div class="doc">Seed text is not collected</div>
        </body></html>"##,
        base_url
    )
}

async fn mount_site(server: &MockServer) {
    let base_url = server.uri();
    mount_page(server, "/docs/start", seed_body(&base_url)).await;
    mount_page(
        server,
        "/docs/a",
        r#"<html><body><div class="doc">Alpha</div></body></html>"#.to_string(),
    )
    .await;
    mount_page(
        server,
        "/docs/b",
        r#"<html><body>
            <div class="doc">Beta one</div>
            <div class="footer">Ignored</div>
            <div class="doc">Beta   two</div>
        </body></html>"#
            .to_string(),
    )
    .await;
}

#[tokio::test]
async fn test_full_scrape_writes_content_in_nav_order() {
    let mock_server = MockServer::start().await;
    mount_site(&mock_server).await;

    let output_dir = TempDir::new().expect("Failed to create temp dir");
    let seed = format!("{}/docs/start", mock_server.uri());
    let config = create_test_config(&seed, output_dir.path(), ConfigFile::default(), false);

    let mut coordinator = create_coordinator(config);
    let summary = coordinator.run().await.expect("Scrape failed");

    assert_eq!(summary.links_found, 2);
    assert_eq!(summary.processed, 2);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.failed, 0);

    let output_path = coordinator.domain_dir().join("docs_start.txt");
    assert_eq!(summary.output_path.as_deref(), Some(output_path.as_path()));

    let content = std::fs::read_to_string(&output_path).expect("Failed to read output");
    assert_eq!(
        content,
        "SCRAPED CONTENT\n\n\
         <TITLE>docs_a</TITLE>\n\n\
         <CONTENT>Alpha</CONTENT>\n\
         <END_OF_CONTENT></END_OF_CONTENT>\n\n\
         <TITLE>docs_b</TITLE>\n\n\
         <CONTENT>Beta one</CONTENT>\n\
         <CONTENT>Beta two</CONTENT>\n\
         <END_OF_CONTENT></END_OF_CONTENT>\n\n"
    );

    let log = PageLog::load_or_create(&coordinator.domain_dir().join(LOG_FILE_NAME))
        .expect("Failed to load log");
    let urls: Vec<&str> = log.pages().iter().map(|p| p.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            seed.clone(),
            format!("{}/docs/a", mock_server.uri()),
            format!("{}/docs/b", mock_server.uri()),
        ]
    );
    assert!(log.pages().iter().all(|p| p.status == PageStatus::Success));
    assert!(log.pages().iter().all(|p| p.html_path.is_none()));
}

#[tokio::test]
async fn test_failed_link_does_not_abort_run() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/docs/start", seed_body(&base_url)).await;
    mount_page(
        &mock_server,
        "/docs/a",
        r#"<div class="doc">Alpha</div>"#.to_string(),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/docs/b"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let output_dir = TempDir::new().expect("Failed to create temp dir");
    let seed = format!("{}/docs/start", base_url);
    let config = create_test_config(&seed, output_dir.path(), ConfigFile::default(), false);

    let mut coordinator = create_coordinator(config);
    let summary = coordinator.run().await.expect("Scrape failed");

    assert_eq!(summary.processed, 1);
    assert_eq!(summary.failed, 1);

    let content = std::fs::read_to_string(summary.output_path.expect("output path"))
        .expect("Failed to read output");
    assert_eq!(content.matches("<TITLE>").count(), 1);
    assert!(content.contains("<TITLE>docs_a</TITLE>"));

    let failed_url = format!("{}/docs/b", base_url);
    let statuses: Vec<PageStatus> = coordinator
        .page_log()
        .entries_for(&failed_url)
        .map(|p| p.status)
        .collect();
    assert_eq!(statuses, vec![PageStatus::Failed]);
}

#[tokio::test]
async fn test_second_run_leaves_output_unchanged() {
    let mock_server = MockServer::start().await;
    mount_site(&mock_server).await;

    let output_dir = TempDir::new().expect("Failed to create temp dir");
    let seed = format!("{}/docs/start", mock_server.uri());

    let mut first = create_coordinator(create_test_config(
        &seed,
        output_dir.path(),
        ConfigFile::default(),
        false,
    ));
    let first_summary = first.run().await.expect("First scrape failed");
    let output_path = first_summary.output_path.expect("output path");
    let log_path = first.domain_dir().join(LOG_FILE_NAME);

    let output_before = std::fs::read_to_string(&output_path).expect("Failed to read output");
    let log_before = std::fs::read_to_string(&log_path).expect("Failed to read log");

    let mut second = create_coordinator(create_test_config(
        &seed,
        output_dir.path(),
        ConfigFile::default(),
        false,
    ));
    let second_summary = second.run().await.expect("Second scrape failed");

    assert!(second_summary.seed_skipped);
    assert_eq!(second_summary.processed, 0);
    assert_eq!(
        std::fs::read_to_string(&output_path).expect("Failed to read output"),
        output_before
    );
    assert_eq!(
        std::fs::read_to_string(&log_path).expect("Failed to read log"),
        log_before
    );
}

#[tokio::test]
async fn test_failed_seed_is_retried_only_with_overwrite() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // First request fails, later ones succeed
    Mock::given(method("GET"))
        .and(path("/docs/start"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    mount_site(&mock_server).await;

    let output_dir = TempDir::new().expect("Failed to create temp dir");
    let seed = format!("{}/docs/start", base_url);

    let mut first = create_coordinator(create_test_config(
        &seed,
        output_dir.path(),
        ConfigFile::default(),
        false,
    ));
    let result = first.run().await;
    match result {
        Err(ScrapeError::SeedFetch { url, source }) => {
            assert_eq!(url, seed);
            assert!(matches!(
                source,
                FetchError::Status {
                    status_code: 503,
                    ..
                }
            ));
        }
        other => panic!("Expected seed fetch failure, got {:?}", other.map(|_| ())),
    }

    let mut without_overwrite = create_coordinator(create_test_config(
        &seed,
        output_dir.path(),
        ConfigFile::default(),
        false,
    ));
    let summary = without_overwrite.run().await.expect("Scrape failed");
    assert!(summary.seed_skipped);

    let mut with_overwrite = create_coordinator(create_test_config(
        &seed,
        output_dir.path(),
        ConfigFile::default(),
        true,
    ));
    let summary = with_overwrite.run().await.expect("Scrape failed");
    assert!(!summary.seed_skipped);
    assert_eq!(summary.processed, 2);

    let statuses: Vec<PageStatus> = with_overwrite
        .page_log()
        .entries_for(&seed)
        .map(|p| p.status)
        .collect();
    assert_eq!(statuses, vec![PageStatus::Failed, PageStatus::Success]);
}

#[tokio::test]
async fn test_missing_nav_container_is_an_error() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/docs/start",
        r#"<html><body><div class="doc">No navigation here</div></body></html>"#.to_string(),
    )
    .await;

    let output_dir = TempDir::new().expect("Failed to create temp dir");
    let seed = format!("{}/docs/start", mock_server.uri());
    let config = create_test_config(&seed, output_dir.path(), ConfigFile::default(), false);

    let mut coordinator = create_coordinator(config);
    let result = coordinator.run().await;

    assert!(matches!(
        result,
        Err(ScrapeError::NoLinks {
            debug_path: None,
            ..
        })
    ));
}

#[tokio::test]
async fn test_configured_headers_are_sent() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/docs/start"))
        .and(header("x-docs-token", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<nav><a href="{}/docs/a">A</a></nav>"#,
            base_url
        )))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/docs/a"))
        .and(header("x-docs-token", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"<div class="doc">A</div>"#))
        .mount(&mock_server)
        .await;

    let mut fetch = FetchConfig::default();
    fetch
        .headers
        .insert("X-Docs-Token".to_string(), "secret".to_string());
    let file = ConfigFile {
        fetch,
        ..Default::default()
    };

    let output_dir = TempDir::new().expect("Failed to create temp dir");
    let seed = format!("{}/docs/start", base_url);
    let config = create_test_config(&seed, output_dir.path(), file, false);

    let mut coordinator = create_coordinator(config);
    let summary = coordinator.run().await.expect("Scrape failed");

    assert_eq!(summary.processed, 1);
    assert_eq!(summary.failed, 0);
}
