//! GitHub Actions entry point orchestration.
//!
//! - [`context`]: Workflow environment (`GITHUB_EVENT_NAME`, ...)
//! - [`outputs`]: Step outputs and workflow commands
//! - [`runner`]: The skip/run state machine tying the pipeline together

pub mod context;
pub mod outputs;
pub mod runner;

pub use context::WorkflowContext;
pub use outputs::{MESSAGE_ID_OUTPUT, StepOutputs, write_failure};
pub use runner::{RunOutcome, SkipReason, execute, run};
