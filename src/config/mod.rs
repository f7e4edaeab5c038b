//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.chatwork-notify.toml` in current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `CHATWORK_NOTIFY_API_TOKEN`,
//!    `CHATWORK_NOTIFY_ROOM_ID`, and so on
//! 4. **Command-line arguments** – `--api-token`/`-t`, `--room-id`/`-r`, ...
//!
//! When a required value is still missing after merging, it is read from the
//! GitHub Action input variable the runner exports for the step (for example
//! `INPUT_CHATWORK-API-TOKEN`).
//!
//! # Configuration File
//!
//! ```toml
//! api_token = "chatwork-token"
//! room_id = "123456"
//! mapping = '{"octocat": "1111"}'
//! extra_message_body = "Please review"
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::NotifyError;

mod lenient;

/// Default Chatwork REST API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.chatwork.com/v2";

/// Named inputs declared by the GitHub Action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionInput {
    /// `chatwork-api-token`
    ApiToken,
    /// `chatwork-room-id`
    RoomId,
    /// `mapping`
    Mapping,
    /// `extra-message-body`
    ExtraMessageBody,
}

impl ActionInput {
    /// Input name as written in `action.yml` and in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ApiToken => "chatwork-api-token",
            Self::RoomId => "chatwork-room-id",
            Self::Mapping => "mapping",
            Self::ExtraMessageBody => "extra-message-body",
        }
    }

    /// Environment variable the Actions runner uses to pass the input.
    ///
    /// The runner upper-cases the name and keeps hyphens intact.
    #[must_use]
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::ApiToken => "INPUT_CHATWORK-API-TOKEN",
            Self::RoomId => "INPUT_CHATWORK-ROOM-ID",
            Self::Mapping => "INPUT_MAPPING",
            Self::ExtraMessageBody => "INPUT_EXTRA-MESSAGE-BODY",
        }
    }
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `CHATWORK_NOTIFY_API_TOKEN`, `INPUT_CHATWORK-API-TOKEN`, or `--api-token`
/// - `CHATWORK_NOTIFY_ROOM_ID`, `INPUT_CHATWORK-ROOM-ID`, or `--room-id`
/// - `CHATWORK_NOTIFY_MAPPING`, `INPUT_MAPPING`, or `--mapping`
/// - `CHATWORK_NOTIFY_EXTRA_MESSAGE_BODY`, `INPUT_EXTRA-MESSAGE-BODY`, or
///   `--extra-message-body`
/// - `CHATWORK_NOTIFY_API_BASE_URL` or `--api-base-url`
///
/// # Example
///
/// ```no_run
/// use chatwork_notify::NotifierConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = NotifierConfig::load().expect("failed to load configuration");
/// let token = config.resolve_api_token().expect("token required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "CHATWORK_NOTIFY",
    discovery(
        dotfile_name = ".chatwork-notify.toml",
        config_file_name = "chatwork-notify.toml",
        app_name = "chatwork-notify"
    )
)]
pub struct NotifierConfig {
    /// Chatwork API token sent in the `X-ChatWorkToken` header.
    ///
    /// Can be provided via:
    /// - CLI: `--api-token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `CHATWORK_NOTIFY_API_TOKEN` or `INPUT_CHATWORK-API-TOKEN`
    /// - Config file: `api_token = "..."`
    #[ortho_config(cli_short = 't')]
    #[serde(deserialize_with = "lenient::optional_text")]
    pub api_token: Option<String>,

    /// Numeric id of the Chatwork room that receives the message.
    #[ortho_config(cli_short = 'r')]
    #[serde(deserialize_with = "lenient::optional_text")]
    pub room_id: Option<String>,

    /// JSON object mapping GitHub logins to Chatwork account ids.
    ///
    /// Example: `{"octocat": "1111", "hubot": "2222"}`.
    #[ortho_config(cli_short = 'm')]
    #[serde(deserialize_with = "lenient::optional_text")]
    pub mapping: Option<String>,

    /// Free text appended below the pull request summary.
    #[ortho_config(cli_short = 'e')]
    #[serde(deserialize_with = "lenient::optional_text")]
    pub extra_message_body: Option<String>,

    /// Overrides the Chatwork API base URL.
    ///
    /// Defaults to [`DEFAULT_API_BASE_URL`]; mostly useful behind a proxy or
    /// against a local mock server.
    #[ortho_config()]
    pub api_base_url: Option<String>,
}

impl NotifierConfig {
    /// Resolves the Chatwork API token.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::InvalidConfig`] when no source provides a
    /// non-blank value.
    pub fn resolve_api_token(&self) -> Result<String, NotifyError> {
        require_input(self.api_token.as_deref(), ActionInput::ApiToken)
    }

    /// Resolves the raw room id string; parsing happens in
    /// [`crate::inputs::RoomId::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::InvalidConfig`] when the value is missing.
    pub fn resolve_room_id(&self) -> Result<String, NotifyError> {
        require_input(self.room_id.as_deref(), ActionInput::RoomId)
    }

    /// Resolves the raw mapping JSON.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::InvalidConfig`] when the value is missing.
    pub fn resolve_mapping(&self) -> Result<String, NotifyError> {
        require_input(self.mapping.as_deref(), ActionInput::Mapping)
    }

    /// Resolves the optional extra body, defaulting to an empty string.
    #[must_use]
    pub fn resolve_extra_message_body(&self) -> String {
        lookup_input(
            self.extra_message_body.as_deref(),
            ActionInput::ExtraMessageBody,
        )
        .unwrap_or_default()
    }

    /// Parses the configured API base URL or returns the default.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::InvalidConfig`] when the override is not an
    /// absolute URL.
    pub fn resolve_api_base_url(&self) -> Result<Url, NotifyError> {
        let raw = self
            .api_base_url
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);

        Url::parse(raw).map_err(|error| {
            NotifyError::invalid_config(format!("api-base-url is invalid: {error}"))
        })
    }
}

/// Returns the configured value, falling back to the Action input variable.
///
/// Blank values count as absent in both places, matching how the Actions
/// toolkit treats unset inputs.
fn lookup_input(configured: Option<&str>, input: ActionInput) -> Option<String> {
    configured
        .filter(|value| !value.trim().is_empty())
        .map(ToOwned::to_owned)
        .or_else(|| {
            env::var(input.env_var())
                .ok()
                .filter(|value| !value.trim().is_empty())
        })
}

fn require_input(configured: Option<&str>, input: ActionInput) -> Result<String, NotifyError> {
    lookup_input(configured, input)
        .ok_or_else(|| NotifyError::invalid_config(format!("{} is required", input.name())))
}

#[cfg(test)]
mod tests;
