//! Tests for input validation.

use rstest::rstest;

use super::{ApiToken, MentionMapping, NotifierSettings, RoomId};
use crate::{NotifierConfig, NotifyError};

fn invalid(message: &str) -> NotifyError {
    NotifyError::InvalidConfig {
        message: message.to_owned(),
    }
}

#[rstest]
#[case::plain("123", 123)]
#[case::padded(" 42 ", 42)]
fn room_id_accepts_positive_numbers(#[case] raw: &str, #[case] expected: u64) {
    let room_id = RoomId::parse(raw).expect("room id should parse");

    assert_eq!(room_id.get(), expected);
}

#[rstest]
#[case::zero("0")]
#[case::negative("-5")]
#[case::word("abc")]
#[case::empty("")]
#[case::fraction("1.5")]
fn room_id_rejects_zero_and_non_numbers(#[case] raw: &str) {
    assert_eq!(
        RoomId::parse(raw),
        Err(invalid("chatwork-room-id must be a number"))
    );
}

#[rstest]
fn token_is_trimmed() {
    let token = ApiToken::new("  secret \n").expect("token should be valid");

    assert_eq!(token.value(), "secret");
}

#[rstest]
fn token_debug_output_is_redacted() {
    let token = ApiToken::new("secret").expect("token should be valid");

    let rendered = format!("{token:?}");
    assert!(!rendered.contains("secret"), "token leaked: {rendered}");
}

#[rstest]
fn mapping_keeps_valid_entries_in_source_order() {
    let mapping = MentionMapping::parse(r#"{"zed": "3", "alice": "111", "bob": 222}"#)
        .expect("mapping should parse");

    let names: Vec<_> = mapping
        .entries()
        .map(|entry| entry.username.as_str())
        .collect();
    assert_eq!(names, vec!["zed", "alice", "bob"]);
    assert_eq!(mapping.account_id("bob").map(|id| id.get()), Some(222));
}

#[rstest]
#[case::zero_string(r#"{"alice": "111", "ghost": "0"}"#)]
#[case::zero_number(r#"{"alice": "111", "ghost": 0}"#)]
#[case::negative(r#"{"alice": "111", "ghost": "-4"}"#)]
#[case::word(r#"{"alice": "111", "ghost": "abc"}"#)]
#[case::empty(r#"{"alice": "111", "ghost": ""}"#)]
#[case::null(r#"{"alice": "111", "ghost": null}"#)]
#[case::nested(r#"{"alice": "111", "ghost": {"id": 1}}"#)]
fn mapping_drops_invalid_values(#[case] raw: &str) {
    let mapping = MentionMapping::parse(raw).expect("mapping should parse");

    assert_eq!(mapping.len(), 1);
    assert!(mapping.account_id("ghost").is_none(), "ghost should be dropped");
    assert_eq!(mapping.account_id("alice").map(|id| id.get()), Some(111));
}

#[rstest]
#[case::not_json("alice=111")]
#[case::array(r#"["111"]"#)]
#[case::string(r#""alice""#)]
fn mapping_rejects_non_objects(#[case] raw: &str) {
    assert_eq!(
        MentionMapping::parse(raw),
        Err(invalid("mapping must be an object"))
    );
}

#[rstest]
#[case::empty_object("{}")]
#[case::all_invalid(r#"{"alice": "0", "bob": "nope"}"#)]
fn mapping_requires_at_least_one_entry(#[case] raw: &str) {
    assert_eq!(
        MentionMapping::parse(raw),
        Err(invalid("mapping must contain at least one entry"))
    );
}

#[rstest]
fn settings_parse_valid_inputs() {
    let settings = NotifierSettings::parse("token", "99", r#"{"alice": "111"}"#, "hello")
        .expect("settings should parse");

    assert_eq!(settings.api_token.value(), "token");
    assert_eq!(settings.room_id.get(), 99);
    assert_eq!(settings.mapping.len(), 1);
    assert_eq!(settings.extra_body, "hello");
}

#[rstest]
fn settings_from_config_validates_room_id() {
    let config = NotifierConfig {
        api_token: Some("token".to_owned()),
        room_id: Some("0".to_owned()),
        mapping: Some(r#"{"alice": "111"}"#.to_owned()),
        ..Default::default()
    };

    assert_eq!(
        NotifierSettings::from_config(&config),
        Err(invalid("chatwork-room-id must be a number"))
    );
}
