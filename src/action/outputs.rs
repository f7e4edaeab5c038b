//! Step outputs and workflow commands understood by the Actions runner.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::NotifyError;

/// Output carrying the id of the created Chatwork message.
pub const MESSAGE_ID_OUTPUT: &str = "chatwork-message-id";

const MULTILINE_DELIMITER: &str = "CHATWORK_NOTIFY_EOF";

/// Publishes step outputs.
///
/// Outputs are appended to the `GITHUB_OUTPUT` file when the runner provides
/// one; otherwise the legacy `::set-output` command is written to stdout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepOutputs {
    output_path: Option<PathBuf>,
}

impl StepOutputs {
    /// Creates a publisher for the given `GITHUB_OUTPUT` path.
    #[must_use]
    pub const fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    /// Sets output `name` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Io`] when the output cannot be written.
    pub fn set(&self, name: &str, value: &str) -> Result<(), NotifyError> {
        let written = match self.output_path.as_deref() {
            Some(path) => append_to_file(path, &file_command(name, value)),
            None => {
                let mut stdout = io::stdout().lock();
                writeln!(
                    stdout,
                    "::set-output name={}::{}",
                    escape_property(name),
                    escape_data(value)
                )
            }
        };

        written.map_err(|error| NotifyError::Io {
            message: format!("failed to set output '{name}': {error}"),
        })
    }
}

/// Writes the `::error::` command that marks the step as failed.
///
/// # Errors
///
/// Returns the underlying I/O error when the writer fails.
pub fn write_failure(writer: &mut impl Write, error: &NotifyError) -> io::Result<()> {
    writeln!(writer, "::error::{}", escape_data(&error.to_string()))
}

/// Formats one `GITHUB_OUTPUT` entry; multi-line values use a heredoc.
pub(super) fn file_command(name: &str, value: &str) -> String {
    if value.contains('\n') || value.contains('\r') {
        format!("{name}<<{MULTILINE_DELIMITER}\n{value}\n{MULTILINE_DELIMITER}\n")
    } else {
        format!("{name}={value}\n")
    }
}

fn append_to_file(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(contents.as_bytes())
}

/// Escapes command data (the part after `::`).
pub(super) fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escapes command property values.
fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
