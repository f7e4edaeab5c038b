//! Workflow environment exported by the Actions runner.

use std::env;
use std::path::PathBuf;

use crate::error::NotifyError;
use crate::github::{PULL_REQUEST_EVENT, PullRequestEvent, read_pull_request_event};

/// Values the runner exposes about the triggering event and step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowContext {
    /// `GITHUB_EVENT_NAME`, e.g. `pull_request` or `push`.
    pub event_name: Option<String>,
    /// `GITHUB_EVENT_PATH`: file holding the webhook payload.
    pub event_path: Option<PathBuf>,
    /// `GITHUB_OUTPUT`: file step outputs are appended to.
    pub output_path: Option<PathBuf>,
}

impl WorkflowContext {
    /// Reads the context from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            event_name: non_empty_var("GITHUB_EVENT_NAME"),
            event_path: non_empty_var("GITHUB_EVENT_PATH").map(PathBuf::from),
            output_path: non_empty_var("GITHUB_OUTPUT").map(PathBuf::from),
        }
    }

    /// Whether the workflow was triggered by a `pull_request` event.
    #[must_use]
    pub fn is_pull_request(&self) -> bool {
        self.event_name.as_deref() == Some(PULL_REQUEST_EVENT)
    }

    /// Loads the pull request event from the payload file.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Event`] when `GITHUB_EVENT_PATH` is unset or the
    /// file cannot be decoded.
    pub fn load_pull_request_event(&self) -> Result<PullRequestEvent, NotifyError> {
        let path = self.event_path.as_deref().ok_or_else(|| NotifyError::Event {
            message: "GITHUB_EVENT_PATH is not set".to_owned(),
        })?;
        read_pull_request_event(path)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
