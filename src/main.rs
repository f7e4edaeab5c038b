//! `chatwork-notify` entrypoint for GitHub Actions steps.

use std::io;
use std::process::ExitCode;

use chatwork_notify::action::write_failure;
use chatwork_notify::{ChatworkClient, NotifierConfig, NotifyError, WorkflowContext, execute};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ignored = write_failure(&mut io::stdout().lock(), &error);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), NotifyError> {
    let config = load_config()?;
    let context = WorkflowContext::from_env();

    execute(&context, &config, ChatworkClient::from_config)?;
    Ok(())
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`NotifyError::InvalidConfig`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<NotifierConfig, NotifyError> {
    NotifierConfig::load().map_err(|error| NotifyError::InvalidConfig {
        message: error.to_string(),
    })
}

/// Logs go to stderr so stdout only carries workflow commands.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
