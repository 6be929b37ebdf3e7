//! Checks that a failed fetch writes exactly one `error!` record.
//!
//! Installs its own `log::Log`, so it lives in a separate test binary from the
//! tests that initialise `env_logger`.

use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use log::{Level, LevelFilter, Log, Metadata, Record};
use octofit_business::{BusinessConfig, CollectionView, Resource, ViewConfig};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Clone)]
struct Captured {
    level: Level,
    target: String,
    message: String,
}

#[derive(Default)]
struct CaptureLogger {
    records: Mutex<Vec<Captured>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let captured = Captured {
            level: record.level(),
            target: record.target().to_owned(),
            message: record.args().to_string(),
        };
        if let Ok(mut records) = self.records.lock() {
            records.push(captured);
        }
    }

    fn flush(&self) {}
}

fn logger() -> &'static CaptureLogger {
    static LOGGER: OnceLock<CaptureLogger> = OnceLock::new();
    static INSTALLED: OnceLock<()> = OnceLock::new();

    let logger = LOGGER.get_or_init(CaptureLogger::default);
    INSTALLED.get_or_init(|| {
        log::set_logger(logger).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    logger
}

/// Records logged by the view titled `title`. Tests run in parallel, so each
/// one uses its own title.
fn records_for(title: &str) -> Vec<Captured> {
    let tag = format!("CollectionView[{title}]");
    logger()
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|r| r.target.starts_with("octofit_business") && r.message.contains(&tag))
        .cloned()
        .collect()
}

fn error_count(title: &str) -> usize {
    records_for(title)
        .iter()
        .filter(|r| r.level == Level::Error)
        .count()
}

fn teams_view(title: &str, base_url: &str) -> CollectionView {
    let config = BusinessConfig::new(base_url);
    let view_config = ViewConfig::new(
        title,
        config.endpoint("teams"),
        Resource::Teams.columns(),
    );
    CollectionView::http(view_config)
}

async fn mount_and_settle(view: &mut CollectionView) {
    view.on_mount();
    for _ in 0..250 {
        if view.sync() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("fetch did not resolve in time: {view:?}");
}

async fn teams_server(response: ResponseTemplate) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/teams/"))
        .respond_with(response)
        .expect(1)
        .mount(&mock_server)
        .await;
    mock_server
}

#[tokio::test]
async fn test_status_failure_logs_one_error() {
    logger();
    let mock_server = teams_server(ResponseTemplate::new(503)).await;

    let mut view = teams_view("Teams503", &mock_server.uri());
    mount_and_settle(&mut view).await;

    // Further frames must not repeat the diagnostic.
    for _ in 0..5 {
        assert!(!view.sync());
        let _ = view.render();
    }

    assert_eq!(error_count("Teams503"), 1);
    let errors: Vec<_> = records_for("Teams503")
        .into_iter()
        .filter(|r| r.level == Level::Error)
        .collect();
    assert!(errors[0].message.contains("503"), "{errors:?}");
}

#[tokio::test]
async fn test_network_failure_logs_one_error() {
    logger();

    // Nothing listens on the discard port.
    let mut view = teams_view("TeamsOffline", "http://127.0.0.1:9");
    mount_and_settle(&mut view).await;

    for _ in 0..5 {
        assert!(!view.sync());
    }

    assert_eq!(error_count("TeamsOffline"), 1);
}

#[tokio::test]
async fn test_success_logs_no_error() {
    logger();
    let mock_server =
        teams_server(ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "name": "Alpha"}])))
            .await;

    let mut view = teams_view("TeamsOk", &mock_server.uri());
    mount_and_settle(&mut view).await;

    assert_eq!(error_count("TeamsOk"), 0);
    assert!(
        records_for("TeamsOk")
            .iter()
            .any(|r| r.level == Level::Info && r.message.contains("loaded 1 records"))
    );
}
