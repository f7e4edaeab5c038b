//! Chatwork notifications for GitHub pull request events.
//!
//! The library resolves the Action inputs, turns a `pull_request` event into
//! Chatwork markup, and posts it to a room with one blocking HTTP request.
//! Errors are mapped into [`NotifyError`] so the entry point can record a
//! single failure reason for the workflow step.

pub mod action;
pub mod chatwork;
pub mod config;
pub mod error;
pub mod github;
pub mod inputs;
pub mod message;

pub use action::{RunOutcome, SkipReason, WorkflowContext, execute};
pub use chatwork::{ChatworkClient, DeliveryResult, MessageSender};
pub use config::NotifierConfig;
pub use error::{DeliveryError, NotifyError};
pub use github::{PullRequestAction, PullRequestEvent};
pub use inputs::{ApiToken, MentionMapping, NotifierSettings, RoomId};
pub use message::{ChatMessage, compose};
