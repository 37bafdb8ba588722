//! Console handler for terminal output

use super::EventHandler;
use crate::severity::Severity;
use std::io::{self, Write};

/// Handler printing every message on the terminal, one line per message.
///
/// The console is never a persistent sink, so `confidential` has no effect
/// here.
pub struct ConsoleHandler {
    /// Use colored output
    use_colors: bool,
    /// Output writer
    writer: ConsoleWriter,
}

/// Console output destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleWriter {
    Stdout,
    Stderr,
}

impl ConsoleHandler {
    /// Create a handler printing to stdout, colored when stdout is a terminal
    pub fn new() -> Self {
        Self {
            use_colors: io::IsTerminal::is_terminal(&io::stdout()),
            writer: ConsoleWriter::Stdout,
        }
    }

    /// Create a handler printing to stderr, colored when stderr is a terminal
    pub fn stderr() -> Self {
        Self {
            use_colors: io::IsTerminal::is_terminal(&io::stderr()),
            writer: ConsoleWriter::Stderr,
        }
    }

    /// Create a console handler with custom settings
    pub fn with_config(use_colors: bool, writer: ConsoleWriter) -> Self {
        Self { use_colors, writer }
    }

    /// Format a message for console output
    fn format_line(&self, severity: Severity, message: &str) -> String {
        match ansi_code(severity) {
            Some(code) if self.use_colors => format!("{code}{message}{RESET}"),
            _ => message.to_string(),
        }
    }

    /// Write output to the configured destination
    fn write_output(&self, content: &str) -> io::Result<()> {
        match self.writer {
            ConsoleWriter::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{content}")?;
                out.flush()
            }
            ConsoleWriter::Stderr => {
                let mut out = io::stderr().lock();
                writeln!(out, "{content}")
            }
        }
    }
}

const RESET: &str = "\x1b[0m";

/// ANSI color for `severity`; info stays uncolored
fn ansi_code(severity: Severity) -> Option<&'static str> {
    match severity {
        Severity::Verbose => Some("\x1b[37m"),
        Severity::Debug => Some("\x1b[36m"),
        Severity::Info => None,
        Severity::Warn => Some("\x1b[33m"),
        Severity::Error => Some("\x1b[31m"),
    }
}

impl Default for ConsoleHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for ConsoleHandler {
    fn write(&self, severity: Severity, message: &str, _confidential: bool) {
        // A closed terminal must not turn an emission into a failure
        if let Err(e) = self.write_output(&self.format_line(severity, message)) {
            tracing::debug!(error = %e, "console write failed");
        }
    }
}
