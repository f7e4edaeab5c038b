//! GitHub login to Chatwork account mapping.

use std::fmt;

use serde_json::Value;

use crate::error::NotifyError;

/// Numeric Chatwork account id used in `[To:<id>]` mentions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatworkAccountId(u64);

impl ChatworkAccountId {
    /// Wraps a non-zero account id.
    #[must_use]
    pub const fn new(value: u64) -> Option<Self> {
        if value == 0 { None } else { Some(Self(value)) }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Converts a mapping value, accepting numeric strings and JSON numbers.
    fn from_json(value: &Value) -> Option<Self> {
        let parsed = match value {
            Value::String(text) => text.trim().parse::<u64>().ok(),
            Value::Number(number) => number.as_u64(),
            _ => None,
        };
        parsed.and_then(Self::new)
    }
}

impl fmt::Display for ChatworkAccountId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// One login and the account it mentions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionEntry {
    /// GitHub login.
    pub username: String,
    /// Chatwork account to mention for that login.
    pub account_id: ChatworkAccountId,
}

/// Ordered, non-empty mapping from GitHub logins to Chatwork accounts.
///
/// Entries keep the order they had in the source JSON object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionMapping {
    entries: Vec<MentionEntry>,
}

impl MentionMapping {
    /// Parses the mapping JSON.
    ///
    /// Entries whose value is zero, negative, fractional, or not numeric are
    /// dropped. Dropped logins are reported through `tracing::warn!`.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::InvalidConfig`] when the input is not a JSON
    /// object or when no valid entry remains.
    pub fn parse(raw: &str) -> Result<Self, NotifyError> {
        let Ok(Value::Object(object)) = serde_json::from_str::<Value>(raw) else {
            return Err(NotifyError::invalid_config("mapping must be an object"));
        };

        let mut entries = Vec::with_capacity(object.len());
        let mut dropped = Vec::new();
        for (username, value) in object {
            match ChatworkAccountId::from_json(&value) {
                Some(account_id) => entries.push(MentionEntry {
                    username,
                    account_id,
                }),
                None => dropped.push(username),
            }
        }

        if !dropped.is_empty() {
            tracing::warn!(
                dropped = ?dropped,
                "ignoring mapping entries without a valid Chatwork account id"
            );
        }

        if entries.is_empty() {
            return Err(NotifyError::invalid_config(
                "mapping must contain at least one entry",
            ));
        }

        Ok(Self { entries })
    }

    /// Looks up the account mapped to a GitHub login.
    #[must_use]
    pub fn account_id(&self, username: &str) -> Option<ChatworkAccountId> {
        self.entries
            .iter()
            .find(|entry| entry.username == username)
            .map(|entry| entry.account_id)
    }

    /// Iterates over all entries in source order.
    pub fn entries(&self) -> impl Iterator<Item = &MentionEntry> {
        self.entries.iter()
    }

    /// Number of valid entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a parsed mapping; present for API symmetry.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
