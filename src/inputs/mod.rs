//! Validated notifier settings built from raw configuration values.
//!
//! [`NotifierSettings`] is constructed once per run and passed by reference
//! through the pipeline. Raw strings come from [`NotifierConfig`]; this module
//! owns the parsing rules for the token, the room id, and the mention mapping.

mod mapping;

pub use mapping::{ChatworkAccountId, MentionEntry, MentionMapping};

use std::fmt;

use crate::config::NotifierConfig;
use crate::error::NotifyError;

/// Chatwork API token. The value is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::InvalidConfig`] when the supplied string is
    /// blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, NotifyError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(NotifyError::invalid_config(
                "chatwork-api-token is required",
            ));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ApiToken(<redacted>)")
    }
}

/// Positive Chatwork room id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomId(u64);

impl RoomId {
    /// Parses a numeric room id.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::InvalidConfig`] when the value is not a number
    /// or is zero.
    pub fn parse(raw: &str) -> Result<Self, NotifyError> {
        raw.trim()
            .parse::<u64>()
            .ok()
            .filter(|value| *value != 0)
            .map(Self)
            .ok_or_else(|| NotifyError::invalid_config("chatwork-room-id must be a number"))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Everything a notification run needs besides the event itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierSettings {
    /// Token for the `X-ChatWorkToken` header.
    pub api_token: ApiToken,
    /// Destination room.
    pub room_id: RoomId,
    /// GitHub login to Chatwork account mapping; never empty.
    pub mapping: MentionMapping,
    /// Text appended to the message when non-empty.
    pub extra_body: String,
}

impl NotifierSettings {
    /// Validates raw input strings.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::InvalidConfig`] naming the first input that
    /// fails validation.
    pub fn parse(
        api_token: &str,
        room_id: &str,
        mapping: &str,
        extra_body: impl Into<String>,
    ) -> Result<Self, NotifyError> {
        let settings = Self {
            api_token: ApiToken::new(api_token)?,
            room_id: RoomId::parse(room_id)?,
            mapping: MentionMapping::parse(mapping)?,
            extra_body: extra_body.into(),
        };

        tracing::debug!(
            room_id = %settings.room_id,
            mapped_users = settings.mapping.len(),
            has_extra_body = !settings.extra_body.is_empty(),
            "resolved notifier settings"
        );
        Ok(settings)
    }

    /// Resolves and validates every input from the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::InvalidConfig`] when an input is missing or
    /// invalid.
    pub fn from_config(config: &NotifierConfig) -> Result<Self, NotifyError> {
        let api_token = config.resolve_api_token()?;
        let room_id = config.resolve_room_id()?;
        let mapping = config.resolve_mapping()?;

        Self::parse(
            &api_token,
            &room_id,
            &mapping,
            config.resolve_extra_message_body(),
        )
    }
}

#[cfg(test)]
mod tests;
