//! Reading the workflow event payload from disk.

use std::fs;
use std::path::Path;

use super::models::{ApiEventPayload, PullRequestEvent};
use crate::error::NotifyError;

/// Event name GitHub uses for pull request activity.
pub const PULL_REQUEST_EVENT: &str = "pull_request";

/// Decodes a `pull_request` webhook payload.
///
/// # Errors
///
/// Returns [`NotifyError::Event`] when the JSON cannot be decoded.
pub fn parse_pull_request_event(json: &str) -> Result<PullRequestEvent, NotifyError> {
    serde_json::from_str::<ApiEventPayload>(json)
        .map(PullRequestEvent::from)
        .map_err(|error| NotifyError::Event {
            message: format!("failed to decode payload: {error}"),
        })
}

/// Reads and decodes the payload file named by `GITHUB_EVENT_PATH`.
///
/// # Errors
///
/// Returns [`NotifyError::Event`] when the file cannot be read or decoded.
pub fn read_pull_request_event(path: &Path) -> Result<PullRequestEvent, NotifyError> {
    let contents = fs::read_to_string(path).map_err(|error| NotifyError::Event {
        message: format!("failed to read '{}': {error}", path.display()),
    })?;
    parse_pull_request_event(&contents)
}
