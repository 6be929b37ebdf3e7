use std::time::Duration;

use egui_kittest::Harness;
use octofit_ui::OctofitApp;
use octofit_ui::state::State;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    /// Mock server must be retained to keep HTTP endpoints alive during tests.
    _mock_server: MockServer,
    harness: Harness<'a, OctofitApp>,
}

impl<'a> TestCtx<'a> {
    /// App wired against a mock API serving `routes` as `(path, response)`.
    pub async fn new_app(routes: Vec<(&str, ResponseTemplate)>) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        for (route, response) in routes {
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(response)
                .mount(&mock_server)
                .await;
        }

        let state = State::test(mock_server.uri());
        let app = OctofitApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, OctofitApp> {
        &mut self.harness
    }

    /// Steps frames while giving spawned fetches time to resolve.
    pub async fn settle(&mut self) {
        for _ in 0..20 {
            self.harness.step();
            tokio::time::sleep(Duration::from_millis(25)).await;
            if !self.harness.state().state().has_pending_fetch() {
                break;
            }
        }
        // One more frame so the applied result is drawn.
        self.harness.step();
        self.harness.step();
    }
}

pub fn json_ok(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}
