//! GitHub pull request event intake.
//!
//! The Actions runner writes the webhook payload that triggered a workflow to
//! the file named by `GITHUB_EVENT_PATH`. This module decodes the parts of a
//! `pull_request` payload the notifier needs into [`PullRequestEvent`].

pub mod event;
pub mod models;

pub use event::{PULL_REQUEST_EVENT, parse_pull_request_event, read_pull_request_event};
pub use models::{PullRequestAction, PullRequestEvent};
