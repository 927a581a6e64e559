//! Integration tests for the analyzer
//!
//! These tests use wiremock to serve robots.txt files and exercise the
//! full analysis cycle end-to-end: normalize, fetch, extract, export, store.

use robots_audit::config::{load_config, AnalyzerConfig};
use robots_audit::output::{export_results, ExportFormat};
use robots_audit::storage::{SqliteStorage, Storage};
use robots_audit::{AnalysisStatus, Analyzer, DisallowRule};
use std::io::Write;
use std::time::Duration;
use tempfile::{NamedTempFile, TempDir};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Starts a mock server answering /robots.txt with the given status and body
async fn serve_robots(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;
    server
}

fn analyzer() -> Analyzer {
    Analyzer::new(&AnalyzerConfig::default()).unwrap()
}

fn rule(agent: &str, rule: &str) -> DisallowRule {
    DisallowRule {
        agent: agent.to_string(),
        rule: rule.to_string(),
    }
}

#[tokio::test]
async fn test_googlebot_disallowed_path() {
    let server = serve_robots(200, "User-agent: Googlebot\nDisallow: /private\n").await;

    let result = analyzer().analyze(&server.uri()).await;

    assert_eq!(result.status(), AnalysisStatus::Success);
    assert!(result.google_disallowed());
    assert_eq!(result.disallow_rules(), &[rule("Googlebot", "/private")]);
    assert_eq!(
        result.robots_url(),
        Some(format!("{}/robots.txt", server.uri()).as_str())
    );
}

#[tokio::test]
async fn test_root_disallow_flags_site_without_rules() {
    let server = serve_robots(200, "User-agent: Googlebot\nDisallow: /\n").await;

    let result = analyzer().analyze(&server.uri()).await;

    assert_eq!(result.status(), AnalysisStatus::Success);
    assert!(result.google_disallowed());
    assert!(result.disallow_rules().is_empty());
}

#[tokio::test]
async fn test_wildcard_only_rules_are_not_reported() {
    let server = serve_robots(200, "User-agent: *\nDisallow: /admin\n").await;

    let result = analyzer().analyze(&server.uri()).await;

    assert_eq!(result.status(), AnalysisStatus::Success);
    assert!(result.disallow_rules().is_empty());
}

#[tokio::test]
async fn test_empty_robots_allows_everything() {
    let server = serve_robots(200, "").await;

    let result = analyzer().analyze(&server.uri()).await;

    assert_eq!(result.status(), AnalysisStatus::Success);
    assert!(!result.google_disallowed());
    assert!(result.disallow_rules().is_empty());
    assert_eq!(result.robots_content(), Some(""));
}

#[tokio::test]
async fn test_not_found_is_error_result() {
    let server = serve_robots(404, "missing").await;

    let result = analyzer().analyze(&server.uri()).await;

    assert_eq!(result.status(), AnalysisStatus::Error);
    let message = result.error_message().unwrap();
    assert!(message.starts_with("Failed to fetch robots.txt: "), "got: {}", message);
    assert!(!result.google_disallowed());
    assert!(result.disallow_rules().is_empty());
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("User-agent: Googlebot\nDisallow: /x\n")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = AnalyzerConfig {
        timeout_secs: 1,
        ..AnalyzerConfig::default()
    };
    let result = Analyzer::new(&config).unwrap().analyze(&server.uri()).await;

    assert_eq!(result.status(), AnalysisStatus::Error);
    let message = result.error_message().unwrap();
    assert!(message.contains("1s limit"), "got: {}", message);
}

#[tokio::test]
async fn test_input_url_echoed_verbatim() {
    let server = serve_robots(200, "User-agent: Googlebot\nDisallow: /a\n").await;
    let input = format!("{}/some/deep/page?q=1", server.uri());

    let result = analyzer().analyze(&input).await;

    assert_eq!(result.url, input);
    assert_eq!(
        result.robots_url(),
        Some(format!("{}/robots.txt", server.uri()).as_str())
    );
}

#[tokio::test]
async fn test_batch_has_one_result_per_input() {
    let server = serve_robots(200, "User-agent: Googlebot\nDisallow: /private\n").await;
    let urls = vec![
        server.uri(),
        "http://".to_string(),
        server.uri(),
        "not a valid host".to_string(),
    ];

    let results = analyzer().analyze_batch_with_workers(&urls, 2).await.unwrap();

    assert_eq!(results.len(), urls.len());
    assert_eq!(results.iter().filter(|r| r.url == server.uri()).count(), 2);
    let failures: Vec<_> = results
        .iter()
        .filter(|r| r.status() == AnalysisStatus::Error)
        .collect();
    assert_eq!(failures.len(), 2);
    for failure in failures {
        assert!(failure
            .error_message()
            .unwrap()
            .starts_with("Failed to analyze robots.txt:"));
    }
}

#[tokio::test]
async fn test_repeat_runs_yield_identical_rules() {
    let body = "User-agent: Googlebot\nDisallow: /z\nDisallow: /a\n\n\
                User-agent: AdsBot-Google\nDisallow: /ads\n";
    let server = serve_robots(200, body).await;
    let analyzer = analyzer();

    let first = analyzer.analyze(&server.uri()).await;
    let second = analyzer.analyze(&server.uri()).await;

    assert_eq!(first.disallow_rules(), second.disallow_rules());
    assert_eq!(
        first.disallow_rules(),
        &[
            rule("Googlebot", "/z"),
            rule("Googlebot", "/a"),
            rule("Googlebot", "/ads"),
            rule("AdsBot-Google", "/ads"),
        ]
    );
}

#[tokio::test]
async fn test_config_agents_limit_reported_rules() {
    let server = serve_robots(
        200,
        "User-agent: Googlebot\nDisallow: /g\n\nUser-agent: Storebot-Google\nDisallow: /s\n",
    )
    .await;

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[analyzer]\ngoogle-agents = [\"Storebot-Google\"]").unwrap();
    file.flush().unwrap();
    let config = load_config(file.path()).unwrap();

    let result = Analyzer::new(&config.analyzer)
        .unwrap()
        .analyze(&server.uri())
        .await;

    assert_eq!(result.disallow_rules(), &[rule("Storebot-Google", "/s")]);
}

#[tokio::test]
async fn test_saved_batch_reloads_and_exports() {
    let server = serve_robots(200, "User-agent: Googlebot\nDisallow: /private\n").await;
    let urls = vec![server.uri(), "http://".to_string()];
    let results = analyzer().analyze_batch(&urls).await.unwrap();

    let dir = TempDir::new().unwrap();
    let mut storage = SqliteStorage::new(&dir.path().join("audit.db")).unwrap();
    let id = storage.create_analysis(Some("nightly"), "default").unwrap();
    storage.save_results(id, &results).unwrap();

    let loaded = storage.load_results(id).unwrap();
    assert_eq!(loaded, results);

    let csv = export_results(&loaded, ExportFormat::Csv).unwrap();
    assert!(csv.starts_with("URL,Status,Google Allowed"));
    assert!(csv.contains("Googlebot: /private"));

    storage.delete_analysis(id).unwrap();
    assert!(storage.list_analyses(10).unwrap().is_empty());
}
