//! Chatwork message composition for pull request events.
//!
//! Composition is pure: it turns a [`PullRequestEvent`] plus the mention
//! mapping into Chatwork markup. The output looks like:
//!
//! ```text
//! [To:1111]
//! [To:2222]
//! [info][title]Pull request #5 is OPENED[/title]Title: Add widgets
//! URL: https://github.com/octo/repo/pull/5
//! Created by: [To:1111]alice
//! [hr]Please review by Friday[/info]
//! ```

use std::fmt;

use crate::github::{PullRequestAction, PullRequestEvent};
use crate::inputs::MentionMapping;

/// Shown when the payload has no pull request title.
pub const EMPTY_TITLE: &str = "<Empty title>";
/// Shown when the payload has no pull request URL.
pub const EMPTY_URL: &str = "<Empty URL>";
/// Shown when the payload names no user for a role.
pub const UNKNOWN_USER: &str = "<Unknown user>";

/// Composed Chatwork message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage(String);

impl ChatMessage {
    /// Borrow the message text.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ChatMessage {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Notification status derived from the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullRequestStatus {
    /// The pull request was opened.
    Opened,
    /// The pull request was closed and merged.
    Merged,
    /// The pull request was closed without merging.
    Closed,
}

impl PullRequestStatus {
    /// Classifies an event; `None` for actions that are not announced.
    #[must_use]
    pub const fn of(event: &PullRequestEvent) -> Option<Self> {
        match event.action {
            PullRequestAction::Opened => Some(Self::Opened),
            PullRequestAction::Closed if event.merged => Some(Self::Merged),
            PullRequestAction::Closed => Some(Self::Closed),
            PullRequestAction::Other(_) => None,
        }
    }

    /// Upper-case label used in the message title.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Opened => "OPENED",
            Self::Merged => "MERGED",
            Self::Closed => "CLOSED",
        }
    }
}

/// Renders a login as a mention when it is mapped, or as plain text.
#[must_use]
pub fn mention(username: &str, mapping: &MentionMapping) -> String {
    mapping.account_id(username).map_or_else(
        || username.to_owned(),
        |account_id| format!("[To:{account_id}]{username}"),
    )
}

/// Composes the message for an event.
///
/// Returns `None` for actions other than `opened` and `closed`; nothing
/// should be delivered for those.
#[must_use]
pub fn compose(
    event: &PullRequestEvent,
    mapping: &MentionMapping,
    extra_body: &str,
) -> Option<ChatMessage> {
    let status = PullRequestStatus::of(event)?;

    let mut body = String::new();
    body.push_str(&notify_all_line(mapping));
    body.push('\n');
    body.push_str("[info][title]Pull request #");
    body.push_str(&event.number.to_string());
    body.push_str(" is ");
    body.push_str(status.label());
    body.push_str("[/title]");

    body.push_str("Title: ");
    body.push_str(event.title.as_deref().unwrap_or(EMPTY_TITLE));
    body.push('\n');
    body.push_str("URL: ");
    body.push_str(event.url.as_deref().unwrap_or(EMPTY_URL));
    body.push('\n');
    body.push_str("Created by: ");
    body.push_str(&mention_or_unknown(event.author.as_deref(), mapping));

    if status == PullRequestStatus::Merged {
        body.push('\n');
        body.push_str("Merged by: ");
        body.push_str(&mention_or_unknown(event.merged_by.as_deref(), mapping));
    }

    if !extra_body.is_empty() {
        body.push_str("\n[hr]");
        body.push_str(extra_body);
    }
    body.push_str("[/info]");

    Some(ChatMessage(body))
}

/// One `[To:<id>]` marker per mapped account, one per line.
fn notify_all_line(mapping: &MentionMapping) -> String {
    mapping
        .entries()
        .map(|entry| format!("[To:{}]", entry.account_id))
        .collect::<Vec<_>>()
        .join("\n")
}

fn mention_or_unknown(username: Option<&str>, mapping: &MentionMapping) -> String {
    username.map_or_else(|| UNKNOWN_USER.to_owned(), |name| mention(name, mapping))
}
