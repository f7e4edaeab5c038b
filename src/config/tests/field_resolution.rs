//! Tests for field resolution methods and the Action input fallback.

use rstest::rstest;

use super::helpers::CLEARED_INPUTS;
use crate::config::{ActionInput, DEFAULT_API_BASE_URL};
use crate::{NotifierConfig, NotifyError};

#[rstest]
fn resolve_api_token_returns_value_when_present() {
    let config = NotifierConfig {
        api_token: Some("my-token".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.resolve_api_token().ok(),
        Some("my-token".to_owned()),
        "should return the token"
    );
}

#[rstest]
#[case::token(ActionInput::ApiToken, "chatwork-api-token is required")]
#[case::room(ActionInput::RoomId, "chatwork-room-id is required")]
#[case::mapping(ActionInput::Mapping, "mapping is required")]
fn missing_required_input_names_the_input(#[case] input: ActionInput, #[case] expected: &str) {
    let _guard = env_lock::lock_env(CLEARED_INPUTS);
    let config = NotifierConfig::default();

    let result = match input {
        ActionInput::ApiToken => config.resolve_api_token(),
        ActionInput::RoomId => config.resolve_room_id(),
        ActionInput::Mapping => config.resolve_mapping(),
        ActionInput::ExtraMessageBody => panic!("extra body is optional"),
    };

    assert_eq!(
        result,
        Err(NotifyError::InvalidConfig {
            message: expected.to_owned()
        })
    );
}

#[rstest]
fn blank_value_counts_as_missing() {
    let _guard = env_lock::lock_env(CLEARED_INPUTS);
    let config = NotifierConfig {
        api_token: Some("   ".to_owned()),
        ..Default::default()
    };

    assert!(
        matches!(
            config.resolve_api_token(),
            Err(NotifyError::InvalidConfig { .. })
        ),
        "blank token should be rejected"
    );
}

#[rstest]
fn action_inputs_fill_missing_values() {
    let _guard = env_lock::lock_env([
        ("INPUT_CHATWORK-API-TOKEN", Some("action-token")),
        ("INPUT_CHATWORK-ROOM-ID", Some("42")),
        ("INPUT_MAPPING", Some("{\"octocat\":\"1\"}")),
        ("INPUT_EXTRA-MESSAGE-BODY", Some("see you")),
    ]);
    let config = NotifierConfig::default();

    assert_eq!(config.resolve_api_token().ok().as_deref(), Some("action-token"));
    assert_eq!(config.resolve_room_id().ok().as_deref(), Some("42"));
    assert_eq!(
        config.resolve_mapping().ok().as_deref(),
        Some("{\"octocat\":\"1\"}")
    );
    assert_eq!(config.resolve_extra_message_body(), "see you");
}

#[rstest]
fn configured_value_wins_over_action_input() {
    let _guard = env_lock::lock_env([("INPUT_CHATWORK-ROOM-ID", Some("42"))]);
    let config = NotifierConfig {
        room_id: Some("7".to_owned()),
        ..Default::default()
    };

    assert_eq!(config.resolve_room_id().ok().as_deref(), Some("7"));
}

#[rstest]
fn extra_message_body_defaults_to_empty() {
    let _guard = env_lock::lock_env(CLEARED_INPUTS);
    let config = NotifierConfig::default();

    assert_eq!(config.resolve_extra_message_body(), "");
}

#[rstest]
fn api_base_url_defaults_to_chatwork() {
    let config = NotifierConfig::default();

    let url = config
        .resolve_api_base_url()
        .expect("default URL should parse");
    assert_eq!(url.as_str(), DEFAULT_API_BASE_URL);
}

#[rstest]
fn api_base_url_rejects_relative_override() {
    let config = NotifierConfig {
        api_base_url: Some("not a url".to_owned()),
        ..Default::default()
    };

    assert!(
        matches!(
            config.resolve_api_base_url(),
            Err(NotifyError::InvalidConfig { .. })
        ),
        "relative URL should be rejected"
    );
}
