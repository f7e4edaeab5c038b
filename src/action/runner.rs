//! The skip/run state machine for one workflow invocation.

use crate::chatwork::{DeliveryResult, MessageSender};
use crate::config::NotifierConfig;
use crate::error::NotifyError;
use crate::inputs::NotifierSettings;
use crate::message::compose;

use super::context::WorkflowContext;
use super::outputs::{MESSAGE_ID_OUTPUT, StepOutputs};

/// Why a run finished without sending anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The workflow was not triggered by a `pull_request` event.
    NotPullRequest {
        /// Event name reported by the runner, if any.
        event_name: Option<String>,
    },
    /// The pull request action is not one that gets announced.
    UnsupportedAction {
        /// Action name from the payload.
        action: String,
    },
}

/// Successful end states of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing was sent.
    Skipped(SkipReason),
    /// The message was created in Chatwork.
    Delivered(DeliveryResult),
}

/// Resolves inputs, composes the message, and delivers it.
///
/// `connect` builds the sender once there is a message to deliver, so
/// skipped runs never read inputs, resolve the API base URL, or open a
/// client.
///
/// # Errors
///
/// Returns [`NotifyError::InvalidConfig`] for bad inputs,
/// [`NotifyError::Event`] when the payload cannot be read, whatever
/// `connect` fails with, and [`NotifyError::Delivery`] when Chatwork rejects
/// the message.
pub fn run<S, C>(
    context: &WorkflowContext,
    config: &NotifierConfig,
    connect: C,
) -> Result<RunOutcome, NotifyError>
where
    S: MessageSender,
    C: FnOnce(&NotifierConfig) -> Result<S, NotifyError>,
{
    if !context.is_pull_request() {
        tracing::info!(
            event_name = context.event_name.as_deref().unwrap_or("<unset>"),
            "not a pull_request event; nothing to do"
        );
        return Ok(RunOutcome::Skipped(SkipReason::NotPullRequest {
            event_name: context.event_name.clone(),
        }));
    }

    let settings = NotifierSettings::from_config(config)?;
    let event = context.load_pull_request_event()?;

    let Some(message) = compose(&event, &settings.mapping, &settings.extra_body) else {
        tracing::info!(
            action = event.action.as_str(),
            number = event.number,
            "pull request action is not announced; nothing to do"
        );
        return Ok(RunOutcome::Skipped(SkipReason::UnsupportedAction {
            action: event.action.as_str().to_owned(),
        }));
    };

    let sender = connect(config)?;
    let result = sender.send(&settings.api_token, settings.room_id, &message)?;
    Ok(RunOutcome::Delivered(result))
}

/// Runs the pipeline and publishes `chatwork-message-id` on delivery.
///
/// # Errors
///
/// Propagates errors from [`run`], plus [`NotifyError::Io`] when the output
/// cannot be written.
pub fn execute<S, C>(
    context: &WorkflowContext,
    config: &NotifierConfig,
    connect: C,
) -> Result<RunOutcome, NotifyError>
where
    S: MessageSender,
    C: FnOnce(&NotifierConfig) -> Result<S, NotifyError>,
{
    let outcome = run(context, config, connect)?;

    if let RunOutcome::Delivered(result) = &outcome {
        StepOutputs::new(context.output_path.clone()).set(MESSAGE_ID_OUTPUT, &result.message_id)?;
    }

    Ok(outcome)
}
