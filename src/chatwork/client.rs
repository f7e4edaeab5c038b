//! Blocking HTTP client for the Chatwork "create message" endpoint.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::config::NotifierConfig;
use crate::error::{DeliveryError, NotifyError};
use crate::inputs::{ApiToken, RoomId};
use crate::message::ChatMessage;

const TOKEN_HEADER: &str = "X-ChatWorkToken";
const ERROR_BODY_LIMIT: usize = 160;

/// Message created by Chatwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryResult {
    /// Identifier Chatwork assigned to the posted message.
    pub message_id: String,
}

/// Something that can post a message to a Chatwork room.
#[cfg_attr(test, mockall::automock)]
pub trait MessageSender {
    /// Posts `message` to `room_id`, making exactly one attempt.
    ///
    /// # Errors
    ///
    /// Returns a [`DeliveryError`] describing why the message was not
    /// created.
    fn send(
        &self,
        token: &ApiToken,
        room_id: RoomId,
        message: &ChatMessage,
    ) -> Result<DeliveryResult, DeliveryError>;
}

/// Chatwork REST API client.
#[derive(Debug, Clone)]
pub struct ChatworkClient {
    api_base: Url,
    http: Client,
}

impl ChatworkClient {
    /// Creates a client for the API rooted at `api_base`
    /// (e.g. `https://api.chatwork.com/v2`).
    ///
    /// The HTTP client keeps reqwest's default timeout.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Transport`] when the HTTP client cannot be
    /// initialised.
    pub fn new(api_base: Url) -> Result<Self, DeliveryError> {
        let http = Client::builder()
            .build()
            .map_err(|error| DeliveryError::Transport {
                message: format!("failed to configure HTTP client: {error}"),
            })?;
        Ok(Self { api_base, http })
    }

    /// Creates a client for the configured (or default) API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::InvalidConfig`] when the base URL override is
    /// invalid, or [`NotifyError::Delivery`] when the HTTP client cannot be
    /// initialised.
    pub fn from_config(config: &NotifierConfig) -> Result<Self, NotifyError> {
        let api_base = config.resolve_api_base_url()?;
        Ok(Self::new(api_base)?)
    }

    fn messages_endpoint(&self, room_id: RoomId) -> String {
        format!(
            "{}/rooms/{room_id}/messages",
            self.api_base.as_str().trim_end_matches('/')
        )
    }
}

impl MessageSender for ChatworkClient {
    fn send(
        &self,
        token: &ApiToken,
        room_id: RoomId,
        message: &ChatMessage,
    ) -> Result<DeliveryResult, DeliveryError> {
        let endpoint = self.messages_endpoint(room_id);
        tracing::debug!(%room_id, "posting message to Chatwork");

        let response = self
            .http
            .post(endpoint)
            .header(TOKEN_HEADER, token.value())
            .form(&[("body", message.as_str())])
            .send()
            .map_err(|error| DeliveryError::Transport {
                message: error.without_url().to_string(),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().map_or_else(
                |_| "(failed to read error response body)".to_owned(),
                |content| error_excerpt(&content, ERROR_BODY_LIMIT),
            );
            return Err(DeliveryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().map_err(|error| DeliveryError::Transport {
            message: format!("failed to read response body: {}", error.without_url()),
        })?;
        let payload: CreateMessageResponse =
            serde_json::from_str(&text).map_err(|error| DeliveryError::Decode {
                message: error.to_string(),
            })?;

        let result = DeliveryResult {
            message_id: payload.message_id.into_string(),
        };
        tracing::info!(%room_id, message_id = %result.message_id, "Chatwork message created");
        Ok(result)
    }
}

#[derive(Debug, Deserialize)]
struct CreateMessageResponse {
    message_id: MessageIdValue,
}

/// Chatwork documents the id as a string; numbers are tolerated.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MessageIdValue {
    Text(String),
    Number(u64),
}

impl MessageIdValue {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

/// Trimmed error body, cut after `limit` characters with a `...` marker.
fn error_excerpt(body: &str, limit: usize) -> String {
    let body = body.trim();
    match body.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", body.get(..cut).unwrap_or(body)),
        None => body.to_owned(),
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
