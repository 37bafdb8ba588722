//! Status-tuple execution: operations that report success plus captured output
//!
//! Instead of failing, the wrapped operation hands back a [`StatusOutput`].
//! A `false` status is always logged at `error` with the concatenated output
//! as detail; captured stderr of a successful run is surfaced as a warning.

use clg_core::{default_handler, EmitOptions, EventHandler};
use std::process::{Command, Output};
use std::sync::Arc;

/// Outcome of a status-tuple operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl StatusOutput {
    pub fn new(success: bool, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            success,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }
}

impl<O: Into<String>, E: Into<String>> From<(bool, O, E)> for StatusOutput {
    fn from((success, stdout, stderr): (bool, O, E)) -> Self {
        Self::new(success, stdout, stderr)
    }
}

impl From<Output> for StatusOutput {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Runs a status-tuple operation and reports its outcome
#[derive(Clone)]
pub struct Execution {
    message: String,
    quit: bool,
    show_warnings: bool,
    handler: Arc<dyn EventHandler>,
    label: Option<String>,
}

impl Execution {
    /// An execution that terminates on failure and shows warnings
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            quit: true,
            show_warnings: true,
            handler: default_handler(),
            label: None,
        }
    }

    /// Terminate the process when the operation reports failure
    #[must_use]
    pub fn quit(mut self, quit: bool) -> Self {
        self.quit = quit;
        self
    }

    /// Emit stderr of a successful run at `warn`
    #[must_use]
    pub fn show_warnings(mut self, show_warnings: bool) -> Self {
        self.show_warnings = show_warnings;
        self
    }

    #[must_use]
    pub fn handler(mut self, handler: Arc<dyn EventHandler>) -> Self {
        self.handler = handler;
        self
    }

    /// Describe what the operation does; logged at `debug` on a single line
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Run `operation` and return its stdout.
    ///
    /// With `quit` set, a failed status terminates the process after the
    /// error is emitted; otherwise stdout is returned on every path.
    pub fn run<F, S>(&self, operation: F) -> String
    where
        F: FnOnce() -> S,
        S: Into<StatusOutput>,
    {
        let handler = self.handler.as_ref();
        handler.info(&self.message, EmitOptions::default());
        if let Some(label) = &self.label {
            handler.debug(&single_line(label), EmitOptions::default());
        }

        let StatusOutput {
            success,
            stdout,
            stderr,
        } = operation().into();

        handler.verbose(
            &format!(
                "\nstatus: {}\nstdout: {}\nstderr: {}",
                success,
                stdout.trim(),
                stderr.trim()
            ),
            EmitOptions::default(),
        );

        if !success {
            handler.error(
                &format!("{} failed: {}{}", self.message, stdout, stderr),
                EmitOptions::default().with_quit(self.quit),
            );
        } else if self.show_warnings && !stderr.is_empty() {
            handler.warn(&stderr, EmitOptions::default());
        }

        stdout
    }

    /// Spawn `command`, capture its output and run it through [`run`](Self::run).
    ///
    /// The command line, shell-quoted, serves as the label unless one was
    /// set. A command that cannot be started counts as a failed status with
    /// the spawn error as its stderr.
    pub fn run_command(&self, command: &mut Command) -> String {
        let rendered = render_command(command);
        let execution = match self.label {
            Some(_) => self.clone(),
            None => self.clone().label(rendered.clone()),
        };

        execution.run(|| match command.output() {
            Ok(output) => StatusOutput::from(output),
            Err(e) => {
                tracing::debug!(command = %rendered, error = %e, "failed to spawn command");
                StatusOutput::new(false, "", format!("cannot run '{rendered}': {e}"))
            }
        })
    }
}

/// Run `operation` under an [`Execution`] with default settings
pub fn execute<F, S>(message: &str, operation: F) -> String
where
    F: FnOnce() -> S,
    S: Into<StatusOutput>,
{
    Execution::new(message).run(operation)
}

/// Collapse every line break and the indentation after it into one space
fn single_line(text: &str) -> String {
    let mut lines = text.trim().lines();
    let mut out = lines.next().unwrap_or_default().to_string();
    for line in lines {
        let line = line.trim_start();
        if !line.is_empty() {
            out.push(' ');
            out.push_str(line);
        }
    }
    out
}

fn render_command(command: &Command) -> String {
    let parts = std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|part| part.to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    shell_words::join(parts)
}
