//! Shared test helpers for configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::NotifierConfig;

/// A configuration source, in ascending precedence order.
#[derive(Debug, Clone, Copy)]
pub enum Source {
    Defaults,
    File,
    Environment,
    Cli,
}

/// Merges `(source, value)` layers in the given order into a [`NotifierConfig`].
pub fn merge_sources(layers: &[(Source, Value)]) -> NotifierConfig {
    let composer = layers
        .iter()
        .cloned()
        .fold(MergeComposer::new(), |mut composer, (source, value)| {
            match source {
                Source::Defaults => composer.push_defaults(value),
                Source::File => composer.push_file(value, None),
                Source::Environment => composer.push_environment(value),
                Source::Cli => composer.push_cli(value),
            }
            composer
        });

    NotifierConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}

/// Environment overrides clearing every Action input variable.
pub const CLEARED_INPUTS: [(&str, Option<&str>); 4] = [
    ("INPUT_CHATWORK-API-TOKEN", None),
    ("INPUT_CHATWORK-ROOM-ID", None),
    ("INPUT_MAPPING", None),
    ("INPUT_EXTRA-MESSAGE-BODY", None),
];
