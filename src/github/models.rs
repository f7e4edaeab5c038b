//! Data models for the pull request event that triggered the workflow.

use serde::Deserialize;

/// Lifecycle action carried by a `pull_request` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullRequestAction {
    /// A pull request was opened.
    Opened,
    /// A pull request was closed, merged or not.
    Closed,
    /// Any other action (`labeled`, `synchronize`, ...).
    Other(String),
}

impl PullRequestAction {
    /// Maps the payload's `action` string.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "opened" => Self::Opened,
            "closed" => Self::Closed,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Returns the action name as it appears in the payload.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Opened => "opened",
            Self::Closed => "closed",
            Self::Other(name) => name.as_str(),
        }
    }
}

/// Pull request details relevant to a notification.
///
/// `title` and `url` are `None` when the payload carries no `pull_request`
/// object; the composer substitutes placeholders for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestEvent {
    /// What happened to the pull request.
    pub action: PullRequestAction,
    /// Whether a closed pull request was merged.
    pub merged: bool,
    /// Pull request number.
    pub number: u64,
    /// Title of the pull request.
    pub title: Option<String>,
    /// HTML URL for displaying to a user.
    pub url: Option<String>,
    /// Login of the pull request author.
    pub author: Option<String>,
    /// Login of the user who merged; only set for merged pull requests.
    pub merged_by: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct ApiEventPayload {
    pub(super) action: Option<String>,
    pub(super) number: Option<u64>,
    pub(super) pull_request: Option<ApiPullRequest>,
    pub(super) sender: Option<ApiUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequest {
    pub(super) number: Option<u64>,
    pub(super) title: Option<String>,
    pub(super) html_url: Option<String>,
    pub(super) merged: Option<bool>,
    pub(super) user: Option<ApiUser>,
    pub(super) merged_by: Option<ApiUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUser {
    pub(super) login: Option<String>,
}

impl From<ApiEventPayload> for PullRequestEvent {
    fn from(value: ApiEventPayload) -> Self {
        let action = PullRequestAction::from_name(value.action.as_deref().unwrap_or_default());
        let sender = value.sender.and_then(|user| user.login);

        let Some(pull_request) = value.pull_request else {
            return Self {
                action,
                merged: false,
                number: value.number.unwrap_or_default(),
                title: None,
                url: None,
                author: sender,
                merged_by: None,
            };
        };

        let merged = pull_request.merged.unwrap_or(false);
        Self {
            action,
            merged,
            number: value
                .number
                .or(pull_request.number)
                .unwrap_or_default(),
            title: pull_request.title,
            url: pull_request.html_url,
            author: pull_request.user.and_then(|user| user.login).or(sender),
            merged_by: pull_request
                .merged_by
                .and_then(|user| user.login)
                .filter(|_| merged),
        }
    }
}
