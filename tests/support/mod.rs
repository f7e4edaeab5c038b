//! Shared helpers for integration tests.

use std::fs;
use std::path::PathBuf;

use serde_json::json;
use tempfile::TempDir;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Temporary directory holding the event payload and the step output file.
pub struct ActionWorkspace {
    dir: TempDir,
}

impl ActionWorkspace {
    /// Creates an empty workspace.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap_or_else(|error| panic!("temp dir: {error}")),
        }
    }

    /// Writes a `pull_request` payload and returns its path.
    pub fn write_event(&self, action: &str, merged: bool) -> PathBuf {
        let merged_by = if merged {
            json!({ "login": "bob" })
        } else {
            json!(null)
        };
        let payload = json!({
            "action": action,
            "number": 17,
            "pull_request": {
                "number": 17,
                "title": "Tidy the widgets",
                "html_url": "https://github.com/octo/widgets/pull/17",
                "merged": merged,
                "user": { "login": "alice" },
                "merged_by": merged_by
            },
            "sender": { "login": "alice" }
        });
        let event_path = self.dir.path().join("event.json");
        fs::write(&event_path, payload.to_string())
            .unwrap_or_else(|error| panic!("write event: {error}"));
        event_path
    }

    /// Path the runner would export as `GITHUB_OUTPUT`.
    pub fn output_path(&self) -> PathBuf {
        self.dir.path().join("github_output")
    }

    /// Returns the output file contents, or an empty string if absent.
    pub fn read_output(&self) -> String {
        fs::read_to_string(self.output_path()).unwrap_or_default()
    }

    /// Directory usable as an isolated `HOME`.
    pub fn home(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }
}

/// Runtime plus mock Chatwork API.
pub struct MockChatwork {
    /// Runtime driving the mock server.
    pub runtime: Runtime,
    /// The mock server.
    pub server: MockServer,
}

impl MockChatwork {
    /// Starts a mock server that answers room 42 with `status` and `body`.
    pub fn start(status: u16, body: &str) -> Self {
        let runtime = Runtime::new().unwrap_or_else(|error| panic!("runtime: {error}"));
        let server = runtime.block_on(MockServer::start());
        runtime.block_on(
            Mock::given(method("POST"))
                .and(path("/v2/rooms/42/messages"))
                .respond_with(ResponseTemplate::new(status).set_body_string(body))
                .mount(&server),
        );
        Self { runtime, server }
    }

    /// API base URL to configure the client with.
    pub fn api_base_url(&self) -> String {
        format!("{}/v2", self.server.uri())
    }

    /// Number of requests the server has seen.
    pub fn request_count(&self) -> usize {
        self.runtime
            .block_on(self.server.received_requests())
            .map_or(0, |requests| requests.len())
    }

    /// `body` fields of every message posted so far, in arrival order.
    pub fn posted_messages(&self) -> Vec<String> {
        let requests = self
            .runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default();
        requests
            .iter()
            .filter_map(|request| {
                url::form_urlencoded::parse(&request.body)
                    .find(|(key, _)| key == "body")
                    .map(|(_, value)| value.into_owned())
            })
            .collect()
    }
}
